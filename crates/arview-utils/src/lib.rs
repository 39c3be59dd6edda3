//! Helpers for AR camera-preview renderers.
//!
//! - [`gl`]: compile and link shader programs, drain GL errors.
//! - [`coords`]: map screen touches/rects onto the camera image.
//! - [`math`]: orthographic projection matrices.
//! - [`logging`]: one-shot `env_logger` setup for binaries and tests.
//!
//! Everything is stateless and synchronous. GL helpers expect the caller's
//! context to be current on the calling thread.

pub mod coords;
pub mod gl;
pub mod logging;
pub mod math;
