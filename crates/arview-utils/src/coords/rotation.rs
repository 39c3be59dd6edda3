use super::{PixelSize, ScreenSpan};

/// Clockwise rotation, in quarter turns, that brings the camera image into
/// the display's current orientation.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum CorrectedRotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl CorrectedRotation {
    /// Combines the display rotation (quarter turns, `0..=3` as reported by
    /// the window system) with the camera sensor orientation (degrees).
    ///
    /// Integer arithmetic wraps and the remainder is euclidean, so any input
    /// lands in one of the four cases.
    pub fn from_rotations(display_rotation: i32, camera_rotation: i32) -> Self {
        let degrees = display_rotation
            .wrapping_mul(90)
            .wrapping_sub(camera_rotation)
            .wrapping_add(360)
            .rem_euclid(360);
        Self::from_quarter_turns((degrees / 90) as u8)
    }

    /// `turns` is taken modulo 4.
    #[inline]
    pub const fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Self::Deg0,
            1 => Self::Deg90,
            2 => Self::Deg180,
            _ => Self::Deg270,
        }
    }

    #[inline]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }

    #[inline]
    pub const fn degrees(self) -> i32 {
        self.quarter_turns() as i32 * 90
    }

    /// The rotation that undoes this one.
    #[inline]
    pub const fn inverse(self) -> Self {
        Self::from_quarter_turns((4 - self.quarter_turns()) % 4)
    }

    /// Whether the rotation exchanges the screen axes.
    #[inline]
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }

    /// Re-expresses `span` on a `screen` of the given size in the camera's
    /// orientation. Returns the moved span and the (possibly transposed)
    /// screen size.
    ///
    /// The quarter-turn cases are not mirror images of each other: `Deg90`
    /// offsets against the screen height, `Deg270` against the screen width,
    /// both measured before the swap.
    pub fn apply(self, span: ScreenSpan, screen: PixelSize) -> (ScreenSpan, PixelSize) {
        match self {
            Self::Deg0 => (span, screen),
            Self::Deg90 => (
                ScreenSpan {
                    x: screen.height.wrapping_sub(span.y),
                    y: span.x,
                    dx: span.dy,
                    dy: span.dx,
                },
                screen.transposed(),
            ),
            Self::Deg180 => (
                ScreenSpan {
                    x: screen.width.wrapping_sub(span.x),
                    y: screen.height.wrapping_sub(span.y),
                    ..span
                },
                screen,
            ),
            Self::Deg270 => (
                ScreenSpan {
                    x: span.y,
                    y: screen.width.wrapping_sub(span.x),
                    dx: span.dy,
                    dy: span.dx,
                },
                screen.transposed(),
            ),
        }
    }
}
