use crate::foundation::error::{FramefillError, FramefillResult};

/// Asynchronous source of encoded image bytes.
///
/// Abstracted behind a trait so population logic can be tested without a
/// network; production uses [`HttpFetcher`].
#[async_trait::async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetch encoded image bytes from `url`.
    ///
    /// Non-success status, transport failure and zero-length bodies are all
    /// reported as [`FramefillError::Asset`].
    async fn fetch(&self, url: &str) -> FramefillResult<Vec<u8>>;
}

/// `reqwest`-backed fetcher used in production.
#[derive(Clone, Debug, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Construct a fetcher with a fresh HTTP client.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ImageFetcher for HttpFetcher {
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, url: &str) -> FramefillResult<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FramefillError::asset(format!("image request failed for '{url}': {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FramefillError::asset(format!(
                "image request for '{url}' returned {status}"
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FramefillError::asset(format!("image body read failed for '{url}': {e}")))?;
        if bytes.is_empty() {
            return Err(FramefillError::asset(format!(
                "image response for '{url}' was empty"
            )));
        }
        Ok(bytes.to_vec())
    }
}
