use super::Mat4;

/// Orthographic projection for the box `[left, right] x [bottom, top] x
/// [near, far]`, column-major.
///
/// Bounds are not validated. Equal bounds on an axis divide by zero and the
/// resulting infinities/NaNs are returned as-is.
pub fn ortho_matrix(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let mut m = [0.0f32; 16];

    m[0] = 2.0 / (right - left);
    m[5] = 2.0 / (top - bottom);
    m[10] = 2.0 / (near - far);
    m[12] = -(right + left) / (right - left);
    m[13] = -(top + bottom) / (top - bottom);
    m[14] = (far + near) / (far - near);
    m[15] = 1.0;

    Mat4(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── symmetric clip space ──────────────────────────────────────────────

    #[test]
    fn unit_cube_flips_z_only() {
        let m = ortho_matrix(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
        assert_eq!(m.diagonal(), [1.0, 1.0, -1.0, 1.0]);
        for (i, v) in m.as_array().iter().enumerate() {
            if ![0, 5, 10, 15].contains(&i) {
                assert_eq!(*v, 0.0, "index {i}");
            }
        }
    }

    // ── screen-space overlay ──────────────────────────────────────────────

    #[test]
    fn top_left_pixel_space() {
        // Typical 2D overlay: origin top-left, y down.
        let m = ortho_matrix(0.0, 640.0, 480.0, 0.0, -1.0, 1.0);
        assert_eq!(m.0[0], 2.0 / 640.0);
        assert_eq!(m.0[5], -2.0 / 480.0);
        assert_eq!(m.0[10], -1.0);
        assert_eq!(m.0[12], -1.0);
        assert_eq!(m.0[13], 1.0);
        assert_eq!(m.0[14], 0.0);
        assert_eq!(m.0[15], 1.0);
    }

    #[test]
    fn depth_translation_uses_far_plus_near() {
        let m = ortho_matrix(-1.0, 1.0, -1.0, 1.0, 1.0, 3.0);
        assert_eq!(m.0[10], -1.0);
        assert_eq!(m.0[14], 2.0);
    }

    // ── degenerate bounds ─────────────────────────────────────────────────

    #[test]
    fn equal_bounds_are_not_finite() {
        let m = ortho_matrix(1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
        assert!(m.0[0].is_infinite());
        assert!(!m.is_finite());
    }
}
