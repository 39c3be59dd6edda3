use std::fmt;
use std::mem::ManuallyDrop;

use super::{GlApi, ShaderStage};

/// Owned shader object. Deleted on drop.
pub struct Shader<'gl, G: GlApi + ?Sized> {
    gl: &'gl G,
    raw: G::Shader,
    stage: ShaderStage,
}

impl<'gl, G: GlApi + ?Sized> Shader<'gl, G> {
    /// Takes ownership of an existing shader handle.
    pub fn from_raw(gl: &'gl G, raw: G::Shader, stage: ShaderStage) -> Self {
        Self { gl, raw, stage }
    }

    #[inline]
    pub fn raw(&self) -> G::Shader {
        self.raw
    }

    #[inline]
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    /// Releases ownership without deleting; the caller must call
    /// `delete_shader` eventually.
    pub fn into_raw(self) -> G::Shader {
        let this = ManuallyDrop::new(self);
        this.raw
    }
}

impl<G: GlApi + ?Sized> Drop for Shader<'_, G> {
    fn drop(&mut self) {
        self.gl.delete_shader(self.raw);
    }
}

impl<G: GlApi + ?Sized> fmt::Debug for Shader<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shader")
            .field("raw", &self.raw)
            .field("stage", &self.stage)
            .finish()
    }
}

/// Owned, linked program object. Deleted on drop.
pub struct Program<'gl, G: GlApi + ?Sized> {
    gl: &'gl G,
    raw: G::Program,
}

impl<'gl, G: GlApi + ?Sized> Program<'gl, G> {
    /// Takes ownership of an existing program handle.
    pub fn from_raw(gl: &'gl G, raw: G::Program) -> Self {
        Self { gl, raw }
    }

    #[inline]
    pub fn raw(&self) -> G::Program {
        self.raw
    }

    /// Releases ownership without deleting; the caller must call
    /// `delete_program` eventually.
    pub fn into_raw(self) -> G::Program {
        let this = ManuallyDrop::new(self);
        this.raw
    }
}

impl<G: GlApi + ?Sized> Drop for Program<'_, G> {
    fn drop(&mut self) {
        self.gl.delete_program(self.raw);
    }
}

impl<G: GlApi + ?Sized> fmt::Debug for Program<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Program").field("raw", &self.raw).finish()
    }
}
