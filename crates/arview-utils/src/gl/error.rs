use super::ShaderStage;

/// Why a shader or program could not be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("could not create {stage} shader object: {reason}")]
    CreateShader { stage: ShaderStage, reason: String },

    #[error("could not compile {stage} shader: {log}")]
    Compile { stage: ShaderStage, log: String },

    #[error("could not create program object: {reason}")]
    CreateProgram { reason: String },

    #[error("could not link program: {log}")]
    Link { log: String },
}

impl BuildError {
    /// Stage that failed, for shader-level errors.
    pub fn stage(&self) -> Option<ShaderStage> {
        match self {
            Self::CreateShader { stage, .. } | Self::Compile { stage, .. } => Some(*stage),
            Self::CreateProgram { .. } | Self::Link { .. } => None,
        }
    }

    /// Compiler or linker output, when the failure came from the driver's
    /// info log.
    pub fn info_log(&self) -> Option<&str> {
        match self {
            Self::Compile { log, .. } | Self::Link { log } => Some(log.as_str()),
            Self::CreateShader { .. } | Self::CreateProgram { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_names_stage_and_log() {
        let e = BuildError::Compile {
            stage: ShaderStage::Fragment,
            log: "0:3: syntax error".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("fragment"));
        assert!(msg.contains("0:3: syntax error"));
        assert_eq!(e.stage(), Some(ShaderStage::Fragment));
    }

    #[test]
    fn link_error_has_no_stage() {
        let e = BuildError::Link { log: "varying mismatch".into() };
        assert_eq!(e.stage(), None);
        assert_eq!(e.info_log(), Some("varying mismatch"));
        assert!(e.to_string().contains("link"));
    }
}
