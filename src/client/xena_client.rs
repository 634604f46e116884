use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::HeaderMap;
use tracing::debug;

use crate::config::ClientConfig;
use crate::query;

use super::{query_headers, DATA_PATH};

/// Blocking client for a xena query server.
///
/// Holds only immutable state, so a single client can be shared across
/// threads. Each call to [`XenaClient::post`] issues exactly one request.
#[derive(Debug)]
pub struct XenaClient {
    base_url: String,
    headers: HeaderMap,
    http_client: reqwest::blocking::Client,
}

impl XenaClient {
    pub fn new(base_url: String) -> Result<XenaClient> {
        XenaClient::with_timeout(base_url, None)
    }

    /// Create a client with an optional request timeout. Without one a hung
    /// connection blocks indefinitely, matching the server's expectation
    /// that queries may run for a long time.
    pub fn with_timeout(base_url: String, timeout: Option<Duration>) -> Result<XenaClient> {
        let http_client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build the http client")?;
        Ok(XenaClient {
            base_url,
            headers: query_headers(),
            http_client,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<XenaClient> {
        XenaClient::with_timeout(
            config.base_url.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    /// POST a xena data query and return the raw response body. The server
    /// answers with json text; decoding it is the caller's job.
    pub fn post(&self, query: String) -> Result<String> {
        debug!("posting query to {}{}", self.base_url, DATA_PATH);

        let resp = self
            .http_client
            .post(format!("{}{}", self.base_url, DATA_PATH))
            .headers(self.headers.clone())
            .body(query)
            .send()
            .context("failed to send query to the xena server")?
            .error_for_status()
            .context("the xena server returned an error status")?;

        let body = resp
            .text()
            .context("failed to read the xena server response body")?;
        Ok(body)
    }

    /// Look up sample ids for the given field=values in a cohort.
    pub fn find_samples_by_field<S: AsRef<str>>(
        &self,
        cohort: &str,
        field: &str,
        values: &[S],
    ) -> Result<String> {
        self.post(query::find_sample_by_field_query(cohort, field, values))
    }

    /// Look up sample ids for the given patients in a cohort.
    pub fn patients_to_samples<S: AsRef<str>>(
        &self,
        cohort: &str,
        patients: &[S],
    ) -> Result<String> {
        self.post(query::patient_to_sample_query(cohort, patients))
    }
}
