//! Per-request spool for serialized documents awaiting download.

use crate::error::AppError;
use std::path::PathBuf;
use tokio::fs;
use uuid::Uuid;

#[derive(Clone)]
pub struct DocumentSpool {
    base_path: PathBuf,
}

impl DocumentSpool {
    pub async fn new(base_path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let base_path = base_path.into();
        if !base_path.exists() {
            fs::create_dir_all(&base_path).await?;
        }
        Ok(Self { base_path })
    }

    /// Write `data` under a unique per-request name and return an open read
    /// handle. The path is unlinked as soon as the handle is open: the bytes
    /// stay readable for the response body but the file never outlives the
    /// request, even when the client disconnects mid-stream.
    pub async fn spool(&self, filename: &str, data: &[u8]) -> Result<fs::File, AppError> {
        let path = self.base_path.join(format!("{}-{}", Uuid::new_v4(), filename));
        fs::write(&path, data).await?;
        let file = fs::File::open(&path).await?;
        fs::remove_file(&path).await?;
        Ok(file)
    }
}
