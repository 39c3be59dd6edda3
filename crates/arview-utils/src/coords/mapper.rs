use super::{CameraSpan, CorrectedRotation, OutputFields, PixelSize, ScaledVideo, ScreenSpan};

/// Input to [`screen_to_camera`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraMapRequest {
    pub span: ScreenSpan,
    pub screen: PixelSize,
    /// Camera image resolution, landscape.
    pub camera: PixelSize,
    /// Display rotation in quarter turns (`0..=3`).
    pub display_rotation: i32,
    /// Camera sensor orientation in degrees.
    pub camera_rotation: i32,
    pub outputs: OutputFields,
}

impl CameraMapRequest {
    /// Request with no rotation that computes every output field.
    pub fn new(span: ScreenSpan, screen: PixelSize, camera: PixelSize) -> Self {
        Self {
            span,
            screen,
            camera,
            display_rotation: 0,
            camera_rotation: 0,
            outputs: OutputFields::ALL,
        }
    }

    pub fn rotations(mut self, display_rotation: i32, camera_rotation: i32) -> Self {
        self.display_rotation = display_rotation;
        self.camera_rotation = camera_rotation;
        self
    }

    pub fn outputs(mut self, outputs: OutputFields) -> Self {
        self.outputs = outputs;
        self
    }

    #[inline]
    pub fn corrected_rotation(&self) -> CorrectedRotation {
        CorrectedRotation::from_rotations(self.display_rotation, self.camera_rotation)
    }
}

/// Maps a screen pixel span onto the camera image.
///
/// Accounts for the relative display/camera rotation and for the cropping
/// introduced when the preview aspect-fills a screen of a different shape.
/// Results are truncated toward zero, never rounded. Degenerate sizes are not
/// rejected; non-finite intermediates truncate to 0 or saturate.
pub fn screen_to_camera(request: &CameraMapRequest) -> CameraSpan {
    let mut out = CameraSpan::default();
    if request.outputs.is_empty() {
        return out;
    }

    let (span, screen) = request.corrected_rotation().apply(request.span, request.screen);
    let scaled = ScaledVideo::fit(request.camera, screen);
    let (scaled_x, scaled_y) = scaled.scaled_point(span.x, span.y);

    let video_w = request.camera.width as f32;
    let video_h = request.camera.height as f32;
    let fields = request.outputs;

    if fields.x {
        out.x = Some(((scaled_x / scaled.width) * video_w) as i32);
    }
    if fields.y {
        out.y = Some(((scaled_y / scaled.height) * video_h) as i32);
    }
    if fields.dx {
        out.dx = Some(((span.dx as f32 / scaled.width) * video_w) as i32);
    }
    if fields.dy {
        out.dy = Some(((span.dy as f32 / scaled.height) * video_h) as i32);
    }

    out
}
