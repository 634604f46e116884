mod async_xena_client;
mod xena_client;

pub use async_xena_client::AsyncXenaClient;
pub use xena_client::XenaClient;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

/// Every data query is posted to this sub path of the server's base url.
pub(crate) const DATA_PATH: &str = "/data/";

// the server expects the raw query text, not a json payload
pub(crate) fn query_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    headers
}
