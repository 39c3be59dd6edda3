use std::fmt;

/// Value returned by `glGetError` when nothing is pending.
pub const NO_ERROR: u32 = 0;

const GL_FRAGMENT_SHADER: u32 = 0x8B30;
const GL_VERTEX_SHADER: u32 = 0x8B31;

/// Programmable pipeline stage a shader object is compiled for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// The `GL_*_SHADER` enum passed to `glCreateShader`.
    #[inline]
    pub const fn gl_enum(self) -> u32 {
        match self {
            Self::Vertex => GL_VERTEX_SHADER,
            Self::Fragment => GL_FRAGMENT_SHADER,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        }
    }

    /// Short tag used in operation labels (`glAttachShader(vert)`).
    #[inline]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Vertex => "vert",
            Self::Fragment => "frag",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The subset of the GL entry points used to build programs.
///
/// Handles are backend-defined. A backend must never hand out its null
/// handle from `create_*`; it reports an `Err` instead.
///
/// Methods take `&self` because GL state lives in the driver, not in the
/// Rust value.
pub trait GlApi {
    type Shader: Copy + fmt::Debug;
    type Program: Copy + fmt::Debug;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn delete_program(&self, program: Self::Program);

    /// Pops one pending error code, or [`NO_ERROR`].
    fn get_error(&self) -> u32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_enums_match_gl() {
        assert_eq!(ShaderStage::Vertex.gl_enum(), 0x8B31);
        assert_eq!(ShaderStage::Fragment.gl_enum(), 0x8B30);
    }

    #[test]
    fn stage_display_is_lowercase_name() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }
}
