//! Local file page source
//!
//! Reads a page snapshot that a browser extension or "save page" keeps
//! rewriting on disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{PageSource, PageSourceError};

/// Page source backed by an HTML file
pub struct FilePageSource {
    path: PathBuf,
}

impl FilePageSource {
    /// Create a file source. Fails if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PageSourceError> {
        let path = path.into();
        if !path.is_file() {
            return Err(PageSourceError::NotFound(path.display().to_string()));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PageSource for FilePageSource {
    async fn snapshot(&self) -> Result<String, PageSourceError> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|e| PageSourceError::ReadFailed(e.to_string()))?;

        // Saved pages are not always valid UTF-8
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
