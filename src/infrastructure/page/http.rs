//! HTTP page source using reqwest

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{PageSource, PageSourceError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Page source fetched over HTTP(S)
pub struct HttpPageSource {
    client: Client,
    url: String,
}

impl HttpPageSource {
    /// Create a new HTTP page source
    pub fn new(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn snapshot(&self) -> Result<String, PageSourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| PageSourceError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PageSourceError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| PageSourceError::ReadFailed(e.to_string()))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
