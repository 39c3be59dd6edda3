use std::fmt;

use super::{GlApi, ShaderStage, NO_ERROR};

/// `log` target used by [`LogSink`].
pub const LOG_TARGET: &str = "arview::gl";

/// Upper bound on codes drained per [`check_gl_error`] call. A lost context
/// may keep reporting errors indefinitely.
const MAX_DRAINED_ERRORS: usize = 64;

/// A failure observed while talking to the GL context.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Diagnostic<'a> {
    CreateShaderFailed { stage: ShaderStage, reason: &'a str },
    CompileFailed { stage: ShaderStage, log: &'a str },
    CreateProgramFailed { reason: &'a str },
    LinkFailed { log: &'a str },
    GlError { op: &'a str, code: u32 },
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateShaderFailed { stage, reason } => {
                write!(f, "could not create {stage} shader: {reason}")
            }
            Self::CompileFailed { stage, log } => {
                write!(f, "could not compile {stage} shader: {log}")
            }
            Self::CreateProgramFailed { reason } => {
                write!(f, "could not create program: {reason}")
            }
            Self::LinkFailed { log } => write!(f, "could not link program: {log}"),
            Self::GlError { op, code } => {
                write!(f, "after operation {op} got glError 0x{code:x}")
            }
        }
    }
}

/// Receiver for GL diagnostics.
///
/// Implemented for [`LogSink`] and for any `Fn(&Diagnostic<'_>)` closure.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: &Diagnostic<'_>);
}

/// Forwards diagnostics to the `log` facade at `error` level.
#[derive(Debug, Copy, Clone, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: &Diagnostic<'_>) {
        log::error!(target: LOG_TARGET, "{diagnostic}");
    }
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic<'_>),
{
    fn report(&self, diagnostic: &Diagnostic<'_>) {
        self(diagnostic)
    }
}

/// Drains pending GL error codes, reporting each one against `op`.
///
/// Purely diagnostic: never fails and does not alter control flow.
pub fn check_gl_error<G, S>(gl: &G, op: &str, sink: &S)
where
    G: GlApi + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    for _ in 0..MAX_DRAINED_ERRORS {
        let code = gl.get_error();
        if code == NO_ERROR {
            return;
        }
        sink.report(&Diagnostic::GlError { op, code });
    }
    log::warn!(target: LOG_TARGET, "stopped draining GL errors after {MAX_DRAINED_ERRORS} codes ({op})");
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    /// Context whose only behavior is a queue of error codes.
    struct ErrorQueue {
        codes: RefCell<Vec<u32>>,
        repeat: Option<u32>,
        polls: Cell<usize>,
    }

    impl ErrorQueue {
        fn new(codes: &[u32]) -> Self {
            let mut codes = codes.to_vec();
            codes.reverse();
            Self { codes: RefCell::new(codes), repeat: None, polls: Cell::new(0) }
        }
    }

    impl GlApi for ErrorQueue {
        type Shader = u32;
        type Program = u32;

        fn create_shader(&self, _: ShaderStage) -> Result<u32, String> { Err("unused".into()) }
        fn shader_source(&self, _: u32, _: &str) {}
        fn compile_shader(&self, _: u32) {}
        fn shader_compile_status(&self, _: u32) -> bool { false }
        fn shader_info_log(&self, _: u32) -> String { String::new() }
        fn delete_shader(&self, _: u32) {}
        fn create_program(&self) -> Result<u32, String> { Err("unused".into()) }
        fn attach_shader(&self, _: u32, _: u32) {}
        fn link_program(&self, _: u32) {}
        fn program_link_status(&self, _: u32) -> bool { false }
        fn program_info_log(&self, _: u32) -> String { String::new() }
        fn delete_program(&self, _: u32) {}

        fn get_error(&self) -> u32 {
            self.polls.set(self.polls.get() + 1);
            if let Some(code) = self.repeat {
                return code;
            }
            self.codes.borrow_mut().pop().unwrap_or(NO_ERROR)
        }
    }

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl DiagnosticSink for Recorder {
        fn report(&self, diagnostic: &Diagnostic<'_>) {
            self.0.borrow_mut().push(diagnostic.to_string());
        }
    }

    fn closure_sink<F: Fn(&Diagnostic<'_>)>(f: F) -> F {
        f
    }

    #[test]
    fn drains_every_pending_code_in_order() {
        let gl = ErrorQueue::new(&[0x500, 0x502]);
        let rec = Recorder::default();
        check_gl_error(&gl, "glDrawArrays", &rec);
        assert_eq!(
            *rec.0.borrow(),
            vec![
                "after operation glDrawArrays got glError 0x500".to_string(),
                "after operation glDrawArrays got glError 0x502".to_string(),
            ]
        );
        assert_eq!(gl.get_error(), NO_ERROR);
    }

    #[test]
    fn silent_when_nothing_pending() {
        let gl = ErrorQueue::new(&[]);
        let rec = Recorder::default();
        check_gl_error(&gl, "noop", &rec);
        assert!(rec.0.borrow().is_empty());
        assert_eq!(gl.polls.get(), 1);
    }

    #[test]
    fn stops_on_endless_errors() {
        let mut gl = ErrorQueue::new(&[]);
        gl.repeat = Some(0x507);
        let count = Cell::new(0);
        let sink = closure_sink(|_| count.set(count.get() + 1));
        check_gl_error(&gl, "lost", &sink);
        assert_eq!(count.get(), MAX_DRAINED_ERRORS);
    }

    #[test]
    fn log_sink_accepts_diagnostics() {
        LogSink.report(&Diagnostic::LinkFailed { log: "boom" });
    }

    #[test]
    fn compile_diagnostic_mentions_stage() {
        let d = Diagnostic::CompileFailed { stage: ShaderStage::Vertex, log: "bad token" };
        assert!(d.to_string().contains("vertex"));
    }
}
