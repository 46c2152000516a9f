//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Public YQL endpoint that serves both the quotes table and the HTML scraper.
pub(crate) const DEFAULT_BASE_YQL: &str = "https://query.yahooapis.com/v1/public/yql";

/// Security page scraped for headlines and related tickers (`?s=<SYMBOL>` is appended).
pub(crate) const DEFAULT_BASE_PAGE: &str = "http://finance.yahoo.com/q";
