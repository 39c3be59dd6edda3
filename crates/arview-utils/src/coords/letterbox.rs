use super::PixelSize;

/// Screen axis that the camera image spans exactly after aspect-fill.
///
/// The other axis of the image overflows the screen and is cropped
/// symmetrically.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FitAxis {
    /// Image is relatively wider than the screen; left/right are cropped.
    Height,
    /// Image is relatively taller (or the same shape); top/bottom are cropped.
    Width,
}

/// The camera image scaled up so it covers the whole screen, in screen
/// pixels.
///
/// This is the normalization basis for screen-to-camera mapping: a screen
/// coordinate is shifted into this virtual rectangle, divided by its size
/// and multiplied by the real camera resolution.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScaledVideo {
    pub width: f32,
    pub height: f32,
    pub fit: FitAxis,
    /// Half the overflow along the cropped axis.
    pub centering: f32,
}

impl ScaledVideo {
    /// Aspect-fills `camera` over `screen`.
    ///
    /// `screen` must already be in the camera's orientation (see
    /// `CorrectedRotation::apply`).
    pub fn fit(camera: PixelSize, screen: PixelSize) -> Self {
        let video_aspect = camera.aspect();
        let screen_aspect = screen.aspect();
        let screen_w = screen.width as f32;
        let screen_h = screen.height as f32;

        if video_aspect < screen_aspect {
            let width = screen_h / video_aspect;
            Self {
                width,
                height: screen_h,
                fit: FitAxis::Height,
                centering: (width - screen_w) / 2.0,
            }
        } else {
            let height = screen_w * video_aspect;
            Self {
                width: screen_w,
                height,
                fit: FitAxis::Width,
                centering: (height - screen_h) / 2.0,
            }
        }
    }

    /// Moves a screen point into the scaled video rectangle.
    #[inline]
    pub fn scaled_point(&self, x: i32, y: i32) -> (f32, f32) {
        match self.fit {
            FitAxis::Height => (x as f32 + self.centering, y as f32),
            FitAxis::Width => (x as f32, y as f32 + self.centering),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_video_on_tall_screen_fits_height() {
        // 4:3 camera behind a portrait 9:16 screen.
        let camera = PixelSize::new(640, 480);
        let screen = PixelSize::new(1080, 1920);
        let v = ScaledVideo::fit(camera, screen);
        assert_eq!(v.fit, FitAxis::Height);
        assert_eq!(v.height, 1920.0);
        assert_eq!(v.width, 2560.0);
        assert!(v.width > screen.width as f32);
        assert_eq!(v.centering, 740.0);
    }

    #[test]
    fn tall_video_on_wide_screen_fits_width() {
        let camera = PixelSize::new(640, 480);
        let screen = PixelSize::new(1920, 1080);
        let v = ScaledVideo::fit(camera, screen);
        assert_eq!(v.fit, FitAxis::Width);
        assert_eq!(v.width, 1920.0);
        assert_eq!(v.height, 1440.0);
        assert!(v.height > screen.height as f32);
        assert_eq!(v.centering, 180.0);
    }

    #[test]
    fn matching_aspect_fits_width_without_crop() {
        let v = ScaledVideo::fit(PixelSize::new(640, 480), PixelSize::new(1280, 960));
        assert_eq!(v.fit, FitAxis::Width);
        assert_eq!((v.width, v.height), (1280.0, 960.0));
        assert_eq!(v.centering, 0.0);
    }

    #[test]
    fn scaled_point_offsets_only_the_cropped_axis() {
        let v = ScaledVideo::fit(PixelSize::new(640, 480), PixelSize::new(1920, 1080));
        assert_eq!(v.scaled_point(10, 20), (10.0, 200.0));

        let v = ScaledVideo::fit(PixelSize::new(640, 480), PixelSize::new(1080, 1920));
        assert_eq!(v.scaled_point(10, 20), (750.0, 20.0));
    }
}
