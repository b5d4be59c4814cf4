use crate::error::{IconError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Destination for downloaded icons ("save as file").
#[async_trait]
pub trait ImageSink: Send + Sync {
    async fn save(&self, filename: &str, bytes: Vec<u8>) -> Result<PathBuf>;
}

/// Writes each icon into one directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl ImageSink for DirectorySink {
    async fn save(&self, filename: &str, bytes: Vec<u8>) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            IconError::Download(format!("cannot create {}: {}", self.dir.display(), e))
        })?;

        let path = self.dir.join(filename);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| IconError::Download(format!("cannot write {}: {}", path.display(), e)))?;

        log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }
}
