use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::artifact::CompiledArtifact;
use crate::error::{GenerateError, GenerateResult};

/// Writes every byte as `0xNN, `, including after the last one. The caller's
/// build supplies the surrounding array declaration.
pub fn write_byte_literals<W: Write>(writer: &mut W, bytes: &[u8]) -> io::Result<()> {
    for byte in bytes {
        write!(writer, "{:#04x}, ", byte)?;
    }
    Ok(())
}

pub fn format_byte_literals(bytes: &[u8]) -> String {
    let mut out = Vec::with_capacity(bytes.len() * 6);
    // writing into a Vec cannot fail
    let _ = write_byte_literals(&mut out, bytes);
    String::from_utf8(out).unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct HeaderOutput {
    path: PathBuf,
}

impl HeaderOutput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces whatever is at the destination.
    pub fn emit(&self, artifact: &CompiledArtifact) -> GenerateResult<()> {
        self.write(artifact.bytes())
            .map_err(|source| GenerateError::OutputWrite {
                path: self.path.clone(),
                source,
            })
    }

    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        write_byte_literals(&mut writer, bytes)?;
        writer.flush()
    }
}
