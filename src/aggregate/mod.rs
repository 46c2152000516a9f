//! Aggregator: runs the three fetchers and merges their results per symbol.

mod merge;
mod model;

pub use merge::merge;
pub use model::{RESERVED_FIELDS, StockData, StockRecord};

use crate::{
    core::{SwClient, diag},
    financials, headlines, related,
};

/// Fetch headlines, related companies and quote fields for `symbols` and merge them.
///
/// Returns `None` for an empty symbol list without issuing any request.
/// Otherwise the result always has an entry for each symbol that made it into
/// the seed (see [`merge`]); fetch failures only leave fields out.
///
/// The three fetches run concurrently.
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() {
/// let client = stock_watcher::SwClient::default();
/// if let Some(data) = stock_watcher::get_current_data(&client, &["AAPL", "MSFT"]).await {
///     for (symbol, record) in &data {
///         println!("{symbol}: {:?}", record.related_companies);
///     }
/// }
/// # }
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(client, symbols), fields(count = symbols.len()))
)]
pub async fn get_current_data<S: AsRef<str>>(
    client: &SwClient,
    symbols: &[S],
) -> Option<StockData> {
    if symbols.is_empty() {
        return None;
    }

    let (headlines_res, related_res, financials_res) = tokio::join!(
        headlines::fetch_headlines(client, symbols),
        related::fetch_related_companies(client, symbols),
        financials::fetch_financials(client, symbols),
    );

    let financials = diag::log_err(financials_res, "financials", "<batch>");
    Some(merge(symbols, headlines_res, related_res, financials))
}

/// A builder for [`get_current_data`] calls.
pub struct CurrentDataBuilder {
    client: SwClient,
    symbols: Vec<String>,
}

impl CurrentDataBuilder {
    /// Creates a new builder with no symbols.
    pub fn new(client: &SwClient) -> Self {
        Self {
            client: client.clone(),
            symbols: Vec::new(),
        }
    }

    /// Set the symbols to query, replacing any set before.
    #[must_use]
    pub fn symbols<I, S>(mut self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = syms.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single symbol.
    #[must_use]
    pub fn add_symbol(mut self, sym: impl Into<String>) -> Self {
        self.symbols.push(sym.into());
        self
    }

    /// Executes the fetches and merges the results.
    pub async fn fetch(self) -> Option<StockData> {
        get_current_data(&self.client, &self.symbols).await
    }
}
