/// Width/height pair in integer pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PixelSize {
    pub width: i32,
    pub height: i32,
}

impl PixelSize {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Same size with the axes exchanged.
    #[inline]
    pub const fn transposed(self) -> Self {
        Self { width: self.height, height: self.width }
    }

    /// Height over width, in `f32`.
    ///
    /// Zero width yields a non-finite ratio; callers rely on float semantics
    /// rather than a guard.
    #[inline]
    pub fn aspect(self) -> f32 {
        self.height as f32 / self.width as f32
    }

    #[inline]
    pub fn is_landscape(self) -> bool {
        self.width >= self.height
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}
