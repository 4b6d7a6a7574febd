use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Root cause of a failed asset build. Carried inside `anyhow::Error` so the
/// fatal handler and tests can recover it with `downcast_ref`.
#[derive(Debug)]
pub enum BuildError {
    MissingSourceFile {
        path: PathBuf,
    },
    OutputDirectoryCreationFailure {
        path: PathBuf,
        source: io::Error,
    },
    CompilerInvocationFailure {
        compiler: PathBuf,
        source: io::Error,
    },
    CompilationFailure {
        input: PathBuf,
        status: ExitStatus,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingSourceFile { path } => {
                write!(f, "File does not exist: {}", path.display())
            }
            BuildError::OutputDirectoryCreationFailure { path, .. } => {
                write!(f, "failed to create output directory {}", path.display())
            }
            BuildError::CompilerInvocationFailure { compiler, .. } => {
                write!(f, "failed to run shader compiler {}", compiler.display())
            }
            BuildError::CompilationFailure { input, status } => write!(
                f,
                "Shader failed to compile: {} ({})",
                input.display(),
                status
            ),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::OutputDirectoryCreationFailure { source, .. }
            | BuildError::CompilerInvocationFailure { source, .. } => Some(source),
            _ => None,
        }
    }
}
