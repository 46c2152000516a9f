//! stock-watcher: per-symbol stock snapshots from Yahoo's YQL service.
//!
//! For each requested ticker the crate gathers three things and merges them
//! into one [`StockRecord`]:
//!
//! - headlines scraped from the security page ([`headlines`]),
//! - related ticker symbols scraped from the same page ([`related`]),
//! - quote fields from the `yahoo.finance.quotes` table ([`financials`]).
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() {
//! let client = stock_watcher::SwClient::default();
//! let data = stock_watcher::CurrentDataBuilder::new(&client)
//!     .symbols(["AAPL", "MSFT"])
//!     .fetch()
//!     .await;
//! println!("{}", serde_json::to_string_pretty(&data).unwrap());
//! # }
//! ```
//!
//! Fetch failures never surface from [`get_current_data`]; they only leave
//! fields out. Enable the `tracing` feature (or set `SW_DEBUG=1`) to see what
//! was dropped and why.

pub mod adapter;
pub mod aggregate;
pub mod core;
pub mod financials;
pub mod headlines;
pub mod related;

pub use aggregate::{CurrentDataBuilder, StockData, StockRecord, get_current_data};
pub use crate::core::{SwClient, SwClientBuilder, SwError, strip_tags};
pub use financials::FinancialRecord;
pub use headlines::Headlines;
