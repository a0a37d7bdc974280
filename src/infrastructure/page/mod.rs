//! Page source infrastructure module
//!
//! A page source is either a local HTML file or an HTTP(S) URL.

mod file;
mod http;

pub use file::FilePageSource;
pub use http::HttpPageSource;

use crate::application::ports::{PageSource, PageSourceError};

/// Check whether a source string names a remote page
pub fn is_remote_source(source: &str) -> bool {
    let lower = source.trim().to_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Create the page source for a path or URL
pub fn create_page_source(source: &str) -> Result<Box<dyn PageSource>, PageSourceError> {
    let source = source.trim();
    if is_remote_source(source) {
        Ok(Box::new(HttpPageSource::new(source)))
    } else {
        Ok(Box::new(FilePageSource::open(source)?))
    }
}
