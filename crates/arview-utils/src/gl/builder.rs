use std::borrow::Cow;

use super::diag::{check_gl_error, Diagnostic, DiagnosticSink};
use super::{BuildError, GlApi, Program, Shader, ShaderStage};

/// Compiles `source` into a shader object for `stage`.
///
/// On failure the shader object is deleted, the compiler log is reported to
/// `sink`, and the log is returned in [`BuildError::Compile`].
pub fn compile_shader<'gl, G, S>(
    gl: &'gl G,
    stage: ShaderStage,
    source: &str,
    sink: &S,
) -> Result<Shader<'gl, G>, BuildError>
where
    G: GlApi + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let raw = gl.create_shader(stage).map_err(|reason| {
        sink.report(&Diagnostic::CreateShaderFailed { stage, reason: &reason });
        BuildError::CreateShader { stage, reason }
    })?;
    let shader = Shader::from_raw(gl, raw, stage);

    gl.shader_source(raw, source);
    gl.compile_shader(raw);

    if !gl.shader_compile_status(raw) {
        let log = gl.shader_info_log(raw);
        sink.report(&Diagnostic::CompileFailed { stage, log: &log });
        return Err(BuildError::Compile { stage, log });
    }

    log::debug!("compiled {stage} shader {raw:?}");
    Ok(shader)
}

/// Compiles and links a vertex + fragment program with default settings.
///
/// See [`ProgramBuilder::build`].
pub fn build_program<'gl, G, S>(
    gl: &'gl G,
    vertex_source: &str,
    fragment_source: &str,
    sink: &S,
) -> Result<Program<'gl, G>, BuildError>
where
    G: GlApi + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    ProgramBuilder::default().build(gl, vertex_source, fragment_source, sink)
}

/// Program build settings.
#[derive(Debug, Clone)]
pub struct ProgramBuilder {
    /// Line prepended to both sources, e.g. `#version 300 es`.
    pub version_header: Option<String>,

    /// Drain `glGetError` after each `glAttachShader`.
    pub check_attach_errors: bool,
}

impl Default for ProgramBuilder {
    fn default() -> Self {
        Self {
            version_header: None,
            check_attach_errors: true,
        }
    }
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version_header(mut self, header: impl Into<String>) -> Self {
        self.version_header = Some(header.into());
        self
    }

    pub fn check_attach_errors(mut self, enabled: bool) -> Self {
        self.check_attach_errors = enabled;
        self
    }

    /// Source text as handed to the compiler.
    pub fn prepare_source<'a>(&self, source: &'a str) -> Cow<'a, str> {
        match &self.version_header {
            Some(header) => Cow::Owned(format!("{header}\n{source}")),
            None => Cow::Borrowed(source),
        }
    }

    /// Compiles both stages and links them into a program.
    ///
    /// The vertex stage is compiled first; the first failure aborts the build
    /// before linking. Shader objects are always deleted before returning
    /// (GL keeps attached shaders alive for the linked program). On link
    /// failure the program object is deleted too.
    pub fn build<'gl, G, S>(
        &self,
        gl: &'gl G,
        vertex_source: &str,
        fragment_source: &str,
        sink: &S,
    ) -> Result<Program<'gl, G>, BuildError>
    where
        G: GlApi + ?Sized,
        S: DiagnosticSink + ?Sized,
    {
        let vert = compile_shader(gl, ShaderStage::Vertex, &self.prepare_source(vertex_source), sink)?;
        let frag =
            compile_shader(gl, ShaderStage::Fragment, &self.prepare_source(fragment_source), sink)?;

        let raw = gl.create_program().map_err(|reason| {
            sink.report(&Diagnostic::CreateProgramFailed { reason: &reason });
            BuildError::CreateProgram { reason }
        })?;
        let program = Program::from_raw(gl, raw);

        for shader in [&vert, &frag] {
            gl.attach_shader(raw, shader.raw());
            if self.check_attach_errors {
                let op = format!("glAttachShader({})", shader.stage().short_name());
                check_gl_error(gl, &op, sink);
            }
        }

        gl.link_program(raw);

        if !gl.program_link_status(raw) {
            let log = gl.program_info_log(raw);
            sink.report(&Diagnostic::LinkFailed { log: &log });
            return Err(BuildError::Link { log });
        }

        log::debug!("linked program {raw:?}");
        Ok(program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_builder_checks_attach_errors() {
        let b = ProgramBuilder::default();
        assert!(b.check_attach_errors);
        assert!(b.version_header.is_none());
    }

    #[test]
    fn prepare_source_without_header_borrows() {
        let b = ProgramBuilder::new();
        assert!(matches!(b.prepare_source("void main() {}"), Cow::Borrowed(_)));
    }

    #[test]
    fn prepare_source_prepends_header_line() {
        let b = ProgramBuilder::new().version_header("#version 300 es");
        assert_eq!(b.prepare_source("void main() {}"), "#version 300 es\nvoid main() {}");
    }
}
