//! Page fetch with retry, exponential backoff, timeout and gzip.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reviewlens_core::config::ScraperConfig;
use reviewlens_core::errors::ScrapeError;
use tracing::debug;

/// Blocking HTTP client for product pages.
///
/// Create and drop outside async contexts; call from blocking threads.
#[derive(Debug)]
pub struct PageFetcher {
    client: Client,
    max_retries: u32,
    initial_backoff: Duration,
    max_backoff: Duration,
}

fn fetch_err(url: &str, reason: impl Into<String>) -> ScrapeError {
    ScrapeError::FetchFailed {
        url: url.to_string(),
        reason: reason.into(),
    }
}

impl PageFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        let mut headers = HeaderMap::new();
        let accept_language = HeaderValue::from_str(&config.accept_language)
            .map_err(|e| fetch_err("<client>", format!("invalid Accept-Language: {e}")))?;
        headers.insert(ACCEPT_LANGUAGE, accept_language);

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()
            .map_err(|e| fetch_err("<client>", e.to_string()))?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            initial_backoff: Duration::from_millis(config.initial_backoff_ms),
            max_backoff: Duration::from_millis(config.max_backoff_ms),
        })
    }

    /// GET `url` and return the body. 4xx fails immediately; 5xx and
    /// transport errors are retried.
    pub fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let mut backoff = self.initial_backoff;
        let mut last_err = String::new();

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                debug!(url, attempt, max_retries = self.max_retries, ?backoff, "retrying fetch");
                std::thread::sleep(backoff);
                backoff = (backoff * 2).min(self.max_backoff);
            }

            match self.client.get(url).send() {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return resp
                            .text()
                            .map_err(|e| fetch_err(url, format!("body read failed: {e}")));
                    }
                    if status.is_client_error() {
                        return Err(fetch_err(url, format!("HTTP {status}")));
                    }
                    last_err = format!("HTTP {status}");
                }
                Err(e) => {
                    if e.is_builder() {
                        return Err(fetch_err(url, e.to_string()));
                    }
                    last_err = e.to_string();
                }
            }
        }

        Err(fetch_err(
            url,
            format!("all {} retries exhausted: {last_err}", self.max_retries),
        ))
    }
}
