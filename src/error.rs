use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use crate::config::{INVOCATION_FAILURE_EXIT_CODE, IO_FAILURE_EXIT_CODE, SIGNALED_EXIT_CODE};

pub type GenerateResult<T> = Result<T, GenerateError>;

#[derive(Debug)]
pub enum GenerateError {
    /// The temporary artifact file could not be allocated.
    TempFile(io::Error),
    /// The compiler process could not be started.
    Invocation { program: PathBuf, source: io::Error },
    /// The compiler ran and reported failure.
    Compilation { program: PathBuf, status: ExitStatus },
    ArtifactRead { path: PathBuf, source: io::Error },
    OutputWrite { path: PathBuf, source: io::Error },
}

impl GenerateError {
    /// Process exit code to report for this failure. Compilation failures
    /// forward the compiler's own code.
    pub fn exit_code(&self) -> i32 {
        match *self {
            GenerateError::Compilation { status, .. } => status.code().unwrap_or(SIGNALED_EXIT_CODE),
            GenerateError::Invocation { .. } => INVOCATION_FAILURE_EXIT_CODE,
            GenerateError::TempFile(_)
            | GenerateError::ArtifactRead { .. }
            | GenerateError::OutputWrite { .. } => IO_FAILURE_EXIT_CODE,
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GenerateError::TempFile(ref e) => {
                write!(f, "could not create temporary artifact file: {}", e)
            }
            GenerateError::Invocation { ref program, ref source } => {
                write!(f, "failed to launch `{}`: {}", program.display(), source)
            }
            GenerateError::Compilation { ref program, status } => {
                write!(f, "`{}` failed ({})", program.display(), status)
            }
            GenerateError::ArtifactRead { ref path, ref source } => {
                write!(f, "could not read compiled artifact {}: {}", path.display(), source)
            }
            GenerateError::OutputWrite { ref path, ref source } => {
                write!(f, "could not write header {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            GenerateError::TempFile(ref e) => Some(e),
            GenerateError::Invocation { ref source, .. } => Some(source),
            GenerateError::Compilation { .. } => None,
            GenerateError::ArtifactRead { ref source, .. } => Some(source),
            GenerateError::OutputWrite { ref source, .. } => Some(source),
        }
    }
}
