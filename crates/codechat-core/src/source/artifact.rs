use crate::error::CodechatError;
use std::path::Path;

/// Accepted archive suffix. Compared case-sensitively.
pub const ARCHIVE_SUFFIX: &str = ".zip";

/// An archive on its way to the backend. Lives for exactly one upload.
#[derive(Debug, Clone)]
pub struct UploadArtifact {
    filename: String,
    bytes: Vec<u8>,
}

impl UploadArtifact {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Read an archive from disk. The name is checked before the file is read.
    pub async fn from_path(path: &Path) -> Result<Self, CodechatError> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                CodechatError::validation(format!("Not a file path: {}", path.display()))
            })?
            .to_string();
        validate_archive_name(&filename)?;
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(filename, bytes))
    }

    pub fn filename(&self) -> &str {
        &self.filename
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

pub fn validate_archive_name(filename: &str) -> Result<(), CodechatError> {
    if filename.ends_with(ARCHIVE_SUFFIX) {
        Ok(())
    } else {
        Err(CodechatError::validation(format!(
            "Please upload a {ARCHIVE_SUFFIX} file (got '{filename}')"
        )))
    }
}
