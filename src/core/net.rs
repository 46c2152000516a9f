#[cfg(feature = "test-mode")]
use std::env;

use url::Url;

use crate::core::{SwClient, SwError};

/// Read the response body as text.
/// In `test-mode`, if `SW_RECORD=1`, the body is saved as a fixture via `core::fixtures`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _symbol: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("SW_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _symbol, _ext, &text)
        {
            eprintln!("SW_RECORD: failed to write fixture for {_symbol}: {e}");
        }
    }

    Ok(text)
}

/// Issue a single GET against a YQL URL and return the body of a 2xx response.
///
/// There is exactly one attempt; any non-success status is an error.
pub(crate) async fn get_yql(
    client: &SwClient,
    url: Url,
    endpoint: &str,
    symbol: &str,
) -> Result<String, SwError> {
    let resp = client
        .http()
        .get(url)
        .header("accept", "application/json")
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(SwError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }

    Ok(get_text(resp, endpoint, symbol, "json").await?)
}
