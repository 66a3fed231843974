use std::path::{Path, PathBuf};

use log::info;

use crate::artifact::{allocate_artifact_path, CompiledArtifact, CompilerInvocation};
use crate::error::GenerateResult;
use crate::header::HeaderOutput;

/// Compiles one shader source and writes its SPIR-V as a byte-literal list.
///
/// The header is only opened once the compiler has exited successfully, so a
/// failed compile leaves any previous header untouched.
#[derive(Debug, Clone)]
pub struct ShaderHeaderGenerator {
    compiler: PathBuf,
    source: PathBuf,
    header: HeaderOutput,
}

impl ShaderHeaderGenerator {
    pub fn new(
        compiler: impl Into<PathBuf>,
        source: impl Into<PathBuf>,
        header: impl Into<PathBuf>,
    ) -> Self {
        Self {
            compiler: compiler.into(),
            source: source.into(),
            header: HeaderOutput::new(header),
        }
    }

    #[profiling::function]
    pub fn generate(&self) -> GenerateResult<()> {
        info!(
            "{} {} -> {}",
            self.compiler.display(),
            self.source.display(),
            self.header.path().display()
        );

        // removed from disk when this goes out of scope
        let artifact_path = allocate_artifact_path()?;

        let artifact = {
            profiling::scope!("compile");
            CompilerInvocation::new(&self.compiler, &self.source, artifact_path.to_path_buf())
                .run()?;
            CompiledArtifact::read(&artifact_path)?
        };

        {
            profiling::scope!("emit header");
            self.header.emit(&artifact)?;
        }

        info!(
            "Wrote {} bytes to {}",
            artifact.len(),
            self.header.path().display()
        );
        Ok(())
    }
}

pub fn generate(compiler: &Path, source: &Path, header: &Path) -> GenerateResult<()> {
    ShaderHeaderGenerator::new(compiler, source, header).generate()
}
