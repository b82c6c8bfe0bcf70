//! Create a new, empty question store

use crate::error::{QaError, Result};
use log::info;
use std::path::Path;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// Create `path` holding an empty JSON array.
///
/// Refuses to touch an existing file.
pub async fn init(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::AlreadyExists {
                QaError::AlreadyExists(path.to_path_buf())
            } else {
                QaError::Io(e)
            }
        })?;
    file.write_all(b"[]").await?;
    file.flush().await?;

    info!("event=store_init module=app path={}", path.display());
    Ok(())
}
