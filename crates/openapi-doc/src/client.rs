use std::time::Duration;

use crate::error::Error;
use crate::types::OpenApiDoc;

const DEFAULT_TIMEOUT_MS: u64 = 55_000;

#[derive(Clone)]
pub struct DocClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl Default for DocClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DocClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Single GET, then decode. YAML decoding also covers JSON bodies.
    pub async fn fetch(&self, url: &str) -> Result<OpenApiDoc, Error> {
        let resp = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| Error::Download {
                status: e.status().map(|s| s.as_u16()).unwrap_or(0),
            })?;

        if !resp.status().is_success() {
            return Err(Error::Download {
                status: resp.status().as_u16(),
            });
        }

        let body = resp.text().await.map_err(|e| Error::Download {
            status: e.status().map(|s| s.as_u16()).unwrap_or(0),
        })?;

        Ok(serde_yaml::from_str(&body)?)
    }
}
