use bytemuck::{Pod, Zeroable};

/// 4x4 matrix, column-major.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4(pub [f32; 16]);

impl Mat4 {
    pub const ZERO: Self = Self([0.0; 16]);

    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0, //
    ]);

    #[inline]
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.0
    }

    #[inline]
    pub const fn into_array(self) -> [f32; 16] {
        self.0
    }

    /// Column `i` (`0..4`). Panics on out-of-range `i`.
    #[inline]
    pub fn col(&self, i: usize) -> [f32; 4] {
        let c = &self.0[i * 4..i * 4 + 4];
        [c[0], c[1], c[2], c[3]]
    }

    /// Element at `row`, `col`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.0[col * 4 + row]
    }

    /// Diagonal entries (indices 0, 5, 10, 15).
    #[inline]
    pub fn diagonal(&self) -> [f32; 4] {
        [self.0[0], self.0[5], self.0[10], self.0[15]]
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    /// Raw bytes, for uniform buffer uploads.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(m: Mat4) -> Self {
        m.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_diagonal() {
        assert_eq!(Mat4::IDENTITY.diagonal(), [1.0; 4]);
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
    }

    #[test]
    fn column_major_indexing() {
        let mut m = Mat4::ZERO;
        m.0[12] = 7.0; // column 3, row 0
        assert_eq!(m.get(0, 3), 7.0);
        assert_eq!(m.col(3), [7.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn bytes_cover_sixteen_floats() {
        assert_eq!(Mat4::IDENTITY.as_bytes().len(), 64);
    }
}
