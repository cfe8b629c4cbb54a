//! JSON artifact output

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A JSON artifact that has been written to disk
#[derive(Debug, Clone)]
pub struct WrittenArtifact {
    /// Where it was written
    pub path: PathBuf,
    /// Serialized size in bytes
    pub bytes: usize,
    /// SHA-256 of the serialized contents, hex encoded
    pub hash: String,
}

/// Render a value the way artifacts are stored: pretty JSON, two-space indent
pub fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Serialize `value` and write it to `path` in one go
pub fn write_artifact<T: Serialize + ?Sized>(
    path: impl AsRef<Path>,
    value: &T,
) -> Result<WrittenArtifact> {
    let path = path.as_ref();
    let contents = render(value)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &contents)?;

    let hash = hex::encode(Sha256::digest(contents.as_bytes()));
    tracing::debug!("Wrote {} ({} bytes)", path.display(), contents.len());

    Ok(WrittenArtifact {
        path: path.to_path_buf(),
        bytes: contents.len(),
        hash,
    })
}
