//! Related-Companies Fetcher: related ticker symbols scraped per symbol.

mod api;
mod wire;

use std::collections::BTreeMap;

use crate::core::{SwClient, SwError};

/// Fetch the related ticker symbols for every symbol, one request per symbol.
///
/// Symbols whose fetch fails are omitted; the map may be empty.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(client, symbols), fields(count = symbols.len()))
)]
pub async fn fetch_related_companies<S: AsRef<str>>(
    client: &SwClient,
    symbols: &[S],
) -> BTreeMap<String, Vec<String>> {
    api::fetch_related_companies(client, symbols).await
}

/// Fetch the related ticker symbols for one symbol.
///
/// # Errors
///
/// Returns an error if the request fails, the body is not JSON, or the page
/// yielded no related tickers.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fetch_symbol_related_companies(
    client: &SwClient,
    symbol: &str,
) -> Result<Vec<String>, SwError> {
    api::fetch_one(client, symbol).await
}
