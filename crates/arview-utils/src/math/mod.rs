//! Projection math for overlay rendering.
//!
//! Matrices are column-major `[f32; 16]`, ready to pass to
//! `glUniformMatrix4fv` with `transpose = false` or to copy into a uniform
//! buffer via `bytemuck`.

mod mat4;
mod ortho;

pub use mat4::Mat4;
pub use ortho::ortho_matrix;
