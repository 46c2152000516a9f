//! Financial Quote Fetcher: a single batched quote query for all symbols.

mod api;
mod model;
mod wire;

pub use model::FinancialRecord;

use crate::core::{SwClient, SwError};

/// Fetch quote fields for all `symbols` in one request.
///
/// String values have their HTML tags removed. A record lacking either of the
/// `symbol` / `Symbol` fields is dropped on its own; it does not fail the batch.
///
/// # Errors
///
/// Returns an error if `symbols` is empty, the request fails or returns a
/// non-success status, the body is not JSON, or `query.results.quote` is
/// absent or empty.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(client, symbols), err, fields(count = symbols.len()))
)]
pub async fn fetch_financials<S: AsRef<str>>(
    client: &SwClient,
    symbols: &[S],
) -> Result<Vec<FinancialRecord>, SwError> {
    api::fetch_financials(client, symbols).await
}
