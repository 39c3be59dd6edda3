//! Shader program building on top of an OpenGL / GLES context.
//!
//! The context itself is owned by the caller and reached through the
//! [`GlApi`] trait. All calls assume the context is current on the calling
//! thread; nothing here checks that.
//!
//! Failures are reported twice: as a [`BuildError`] return value, and as a
//! [`Diagnostic`] pushed to the caller's [`DiagnosticSink`] (by default the
//! `log` facade via [`LogSink`]).

mod api;
mod builder;
mod diag;
mod error;
mod object;

#[cfg(feature = "glow")]
mod glow_backend;

pub use api::{GlApi, ShaderStage, NO_ERROR};
pub use builder::{build_program, compile_shader, ProgramBuilder};
pub use diag::{check_gl_error, Diagnostic, DiagnosticSink, LogSink, LOG_TARGET};
pub use error::BuildError;
pub use object::{Program, Shader};

#[cfg(feature = "glow")]
pub use glow_backend::GlowApi;
