//! Screen-to-camera coordinate mapping.
//!
//! Conventions:
//! - Integer pixels, origin top-left, +X right, +Y down (screen and camera).
//! - The camera image is always landscape (`width >= height`).
//! - The screen may be in any orientation; the display rotation and the
//!   camera sensor rotation decide how screen axes line up with image axes.
//!
//! Mapping happens in two steps: [`CorrectedRotation::apply`] brings the
//! screen span into the camera's orientation, then [`ScaledVideo`] undoes the
//! aspect-fill cropping of the preview.

mod letterbox;
mod mapper;
mod rotation;
mod size;
mod span;

pub use letterbox::{FitAxis, ScaledVideo};
pub use mapper::{screen_to_camera, CameraMapRequest};
pub use rotation::CorrectedRotation;
pub use size::PixelSize;
pub use span::{CameraSpan, OutputFields, ScreenSpan};
