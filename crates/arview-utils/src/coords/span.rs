/// A screen point with an extent (`dx`, `dy`), in screen pixels.
///
/// The extent is mapped like a vector: it is rotated and scaled but not
/// offset by the letterbox centering.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ScreenSpan {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
}

impl ScreenSpan {
    #[inline]
    pub const fn new(x: i32, y: i32, dx: i32, dy: i32) -> Self {
        Self { x, y, dx, dy }
    }

    /// A span with zero extent.
    #[inline]
    pub const fn point(x: i32, y: i32) -> Self {
        Self { x, y, dx: 0, dy: 0 }
    }
}

/// Mapper output, in camera-image pixels.
///
/// Only the fields requested through [`OutputFields`] are `Some`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct CameraSpan {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub dx: Option<i32>,
    pub dy: Option<i32>,
}

/// Which [`CameraSpan`] fields to compute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct OutputFields {
    pub x: bool,
    pub y: bool,
    pub dx: bool,
    pub dy: bool,
}

impl OutputFields {
    pub const ALL: Self = Self { x: true, y: true, dx: true, dy: true };
    pub const NONE: Self = Self { x: false, y: false, dx: false, dy: false };
    pub const POSITION: Self = Self { x: true, y: true, dx: false, dy: false };
    pub const EXTENT: Self = Self { x: false, y: false, dx: true, dy: true };

    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.x || self.y || self.dx || self.dy)
    }
}

impl Default for OutputFields {
    fn default() -> Self {
        Self::ALL
    }
}
