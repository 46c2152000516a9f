//! Request/response adapter: turns a raw `symbols` parameter into the
//! single-field response callers of the service expect.
//!
//! Transport wiring (HTTP server, function host, CLI) is left to the caller.

use serde::Serialize;

use crate::{
    aggregate::{self, StockData},
    core::SwClient,
};

/// Name of the one field every response carries.
pub const OUTPUT_FIELD: &str = "stock_info";

/// Returned when no symbols were supplied.
pub const PROMPT_MESSAGE: &str = "Please enter at least 1 valid stock symbol.";

/// Returned when aggregation produced nothing.
pub const ERROR_MESSAGE: &str =
    "Oops! There was an error in retrieving and synthesizing the stock info. Please try again.";

/// Payload of [`StockInfoResponse`]: either the merged data or a fixed message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StockInfo {
    /// One of [`PROMPT_MESSAGE`] or [`ERROR_MESSAGE`].
    Message(&'static str),
    /// Merged records keyed by symbol.
    Data(StockData),
}

/// `{"stock_info": ...}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockInfoResponse {
    /// See [`OUTPUT_FIELD`].
    pub stock_info: StockInfo,
}

/// Split a comma-separated `symbols` parameter into trimmed symbols.
///
/// Returns `None` when the parameter is missing or blank. Individual entries
/// are not validated, so `"AAPL,,MSFT"` keeps its empty middle entry.
pub fn parse_symbols(param: Option<&str>) -> Option<Vec<String>> {
    let raw = param?;
    if raw.trim().is_empty() {
        return None;
    }
    Some(raw.split(',').map(|s| s.trim().to_string()).collect())
}

/// Handle one request given the raw `symbols` parameter.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client)))]
pub async fn respond(client: &SwClient, symbols_param: Option<&str>) -> StockInfoResponse {
    let Some(symbols) = parse_symbols(symbols_param) else {
        return StockInfoResponse {
            stock_info: StockInfo::Message(PROMPT_MESSAGE),
        };
    };

    let stock_info = match aggregate::get_current_data(client, &symbols).await {
        Some(data) if !data.is_empty() => StockInfo::Data(data),
        _ => StockInfo::Message(ERROR_MESSAGE),
    };
    StockInfoResponse { stock_info }
}
