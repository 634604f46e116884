use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::HeaderMap;
use tracing::debug;

use crate::config::ClientConfig;
use crate::query;

use super::{query_headers, DATA_PATH};

/// Async counterpart of [`crate::client::XenaClient`] with the same
/// one-request-per-call contract.
#[derive(Debug)]
pub struct AsyncXenaClient {
    base_url: String,
    headers: HeaderMap,
    http_client: reqwest::Client,
}

impl AsyncXenaClient {
    pub fn new(base_url: String) -> Result<AsyncXenaClient> {
        AsyncXenaClient::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: String, timeout: Option<Duration>) -> Result<AsyncXenaClient> {
        // the async builder applies no timeout by default
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().context("failed to build the http client")?;
        Ok(AsyncXenaClient {
            base_url,
            headers: query_headers(),
            http_client,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<AsyncXenaClient> {
        AsyncXenaClient::with_timeout(
            config.base_url.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    /// POST a xena data query and return the raw response body.
    pub async fn post(&self, query: String) -> Result<String> {
        debug!("posting query to {}{}", self.base_url, DATA_PATH);

        let resp = self
            .http_client
            .post(format!("{}{}", self.base_url, DATA_PATH))
            .headers(self.headers.clone())
            .body(query)
            .send()
            .await
            .context("failed to send query to the xena server")?
            .error_for_status()
            .context("the xena server returned an error status")?;

        let body = resp
            .text()
            .await
            .context("failed to read the xena server response body")?;
        Ok(body)
    }

    pub async fn find_samples_by_field<S: AsRef<str>>(
        &self,
        cohort: &str,
        field: &str,
        values: &[S],
    ) -> Result<String> {
        self.post(query::find_sample_by_field_query(cohort, field, values))
            .await
    }

    pub async fn patients_to_samples<S: AsRef<str>>(
        &self,
        cohort: &str,
        patients: &[S],
    ) -> Result<String> {
        self.post(query::patient_to_sample_query(cohort, patients))
            .await
    }
}
