//! Headline Fetcher: one scrape per symbol, failures omit that symbol only.

mod api;
mod model;
mod wire;

use std::collections::BTreeMap;

pub use model::Headlines;

use crate::core::{SwClient, SwError};

/// Fetch headlines for every symbol, one request per symbol.
///
/// A symbol whose request or response fails is left out of the map, so the
/// result is empty (never an error) when nothing succeeds.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(client, symbols), fields(count = symbols.len()))
)]
pub async fn fetch_headlines<S: AsRef<str>>(
    client: &SwClient,
    symbols: &[S],
) -> BTreeMap<String, Headlines> {
    api::fetch_headlines(client, symbols).await
}

/// Fetch headlines for a single symbol, surfacing the failure reason.
///
/// # Errors
///
/// Returns an error if the request fails, the body is not JSON, or no
/// complete anchor is found at `query.results.a`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fetch_symbol_headlines(client: &SwClient, symbol: &str) -> Result<Headlines, SwError> {
    api::fetch_one(client, symbol).await
}
