//! Binary artifact encoding
//!
//! A user-selected file travels to the backend as one self-describing data
//! URI (`data:<mime>;base64,<payload>`). The file is read in a single shot
//! and nothing is sent unless the whole read succeeds.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::fmt;
use std::path::Path;
use thiserror::Error;
use tokio::fs;

/// Default upper bound on artifact size (10 MiB)
pub const DEFAULT_MAX_ARTIFACT_BYTES: u64 = 10 * 1024 * 1024;

/// Reasons an artifact never reaches a turn
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("No file selected")]
    NoArtifactSelected,
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("Not a file: {0}")]
    NotAFile(String),
    #[error("File too large: {size} bytes (max {max} bytes)")]
    TooLarge { size: u64, max: u64 },
    #[error("Cannot read file: {0}")]
    Read(#[from] std::io::Error),
}

/// An artifact re-encoded as a data URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri(String);

impl DataUri {
    pub fn from_bytes(media_type: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{media_type};base64,{}", BASE64.encode(bytes)))
    }

    /// MIME type declared in the URI header
    #[allow(dead_code)] // Inspection helper
    pub fn media_type(&self) -> &str {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(";base64,"))
            .map_or("", |(media_type, _)| media_type)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// MIME type guessed from the extension, octet-stream when unknown
fn media_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Read a selected file into a data URI.
///
/// `None` means the user triggered an upload without choosing a file.
pub async fn encode_file(path: Option<&Path>, max_bytes: u64) -> Result<DataUri, ArtifactError> {
    let Some(path) = path else {
        return Err(ArtifactError::NoArtifactSelected);
    };

    let metadata = match fs::metadata(path).await {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ArtifactError::NotFound(path.display().to_string()));
        }
        Err(e) => return Err(ArtifactError::Read(e)),
    };

    if !metadata.is_file() {
        return Err(ArtifactError::NotAFile(path.display().to_string()));
    }

    if metadata.len() > max_bytes {
        return Err(ArtifactError::TooLarge {
            size: metadata.len(),
            max: max_bytes,
        });
    }

    let bytes = fs::read(path).await?;
    let media_type = media_type_for(path);
    if !media_type.starts_with("image/") {
        tracing::debug!(path = %path.display(), media_type = %media_type, "Encoding non-image artifact");
    }

    Ok(DataUri::from_bytes(&media_type, &bytes))
}
