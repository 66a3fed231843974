use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, trace};
use tempfile::{Builder, NamedTempFile, TempPath};

use crate::config::{ARTIFACT_PREFIX, ARTIFACT_SUFFIX, COMPILER_OUTPUT_FLAG};
use crate::error::{GenerateError, GenerateResult};

/// Creates a uniquely named file in the system temp dir for the compiler to
/// write into. The handle is closed right away; the file stays on disk until
/// the returned path is dropped.
pub fn allocate_artifact_path() -> GenerateResult<TempPath> {
    Builder::new()
        .prefix(ARTIFACT_PREFIX)
        .suffix(ARTIFACT_SUFFIX)
        .tempfile()
        .map(NamedTempFile::into_temp_path)
        .map_err(GenerateError::TempFile)
}

#[derive(Debug, Clone)]
pub struct CompilerInvocation {
    compiler: PathBuf,
    source: PathBuf,
    output: PathBuf,
}

impl CompilerInvocation {
    pub fn new(
        compiler: impl Into<PathBuf>,
        source: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            compiler: compiler.into(),
            source: source.into(),
            output: output.into(),
        }
    }

    pub fn args(&self) -> [&OsStr; 3] {
        [
            self.source.as_os_str(),
            OsStr::new(COMPILER_OUTPUT_FLAG),
            self.output.as_os_str(),
        ]
    }

    /// Executed directly, never through a shell.
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.compiler);
        command.args(self.args());
        command
    }

    /// Blocks until the compiler exits. Stdio is inherited so diagnostics
    /// reach the caller's terminal.
    pub fn run(&self) -> GenerateResult<()> {
        debug!("Running {:?}", self.command());
        let status = self
            .command()
            .status()
            .map_err(|source| GenerateError::Invocation {
                program: self.compiler.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(GenerateError::Compilation {
                program: self.compiler.clone(),
                status,
            })
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CompiledArtifact {
    bytes: Vec<u8>,
}

impl CompiledArtifact {
    pub fn read(path: &Path) -> GenerateResult<Self> {
        let bytes = fs::read(path).map_err(|source| GenerateError::ArtifactRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes of SPIR-V from {}", bytes.len(), path.display());
        trace!("{:?}", bytes);
        Ok(Self { bytes })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for CompiledArtifact {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_are_source_flag_output() {
        let invocation = CompilerInvocation::new("glslc", "shader frag.glsl", "/tmp/out.spv");
        let command = invocation.command();

        assert_eq!(command.get_program(), "glslc");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, ["shader frag.glsl", "-o", "/tmp/out.spv"]);
    }

    #[test]
    fn temp_paths_are_unique_and_outlive_the_handle() {
        let a = allocate_artifact_path().unwrap();
        let b = allocate_artifact_path().unwrap();
        assert_ne!(a.to_path_buf(), b.to_path_buf());
        assert!(a.exists());
        assert!(a.to_string_lossy().ends_with(ARTIFACT_SUFFIX));

        let path = a.to_path_buf();
        drop(a);
        assert!(!path.exists());
    }

    #[test]
    fn missing_compiler_is_an_invocation_error() {
        let invocation = CompilerInvocation::new(
            "/definitely/not/a/compiler",
            "shader.vert",
            "out.spv",
        );
        match invocation.run() {
            Err(GenerateError::Invocation { program, .. }) => {
                assert_eq!(program, PathBuf::from("/definitely/not/a/compiler"))
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn reads_artifact_bytes() {
        let path = allocate_artifact_path().unwrap();
        fs::write(&path, [0x03, 0x02, 0x23, 0x07]).unwrap();

        let artifact = CompiledArtifact::read(&path).unwrap();
        assert_eq!(artifact.bytes(), &[0x03, 0x02, 0x23, 0x07]);
        assert_eq!(artifact.len(), 4);
    }

    #[test]
    fn unreadable_artifact_is_reported() {
        let err = CompiledArtifact::read(Path::new("/nonexistent/artifact.spv")).unwrap_err();
        assert!(matches!(err, GenerateError::ArtifactRead { .. }));
    }
}
