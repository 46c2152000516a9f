//! YQL statement construction and the response envelope shared by every fetcher.

use serde::Deserialize;
use url::Url;

pub(crate) const QUOTES_ENV: &str = "store://datatables.org/alltableswithkeys";

pub(crate) const HEADLINES_XPATH: &str = r#"//div[@id="yfi_headlines"]/div[2]/ul/li/a"#;
pub(crate) const RELATED_XPATH: &str = r#"//div[@id="yfi_related_tickers"]/p/span/a/strong"#;

/// `select * from yahoo.finance.quotes where symbol in ("A","B")`
pub(crate) fn quotes_statement<S: AsRef<str>>(symbols: &[S]) -> String {
    let list = symbols
        .iter()
        .map(|s| format!("\"{}\"", s.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    format!("select * from yahoo.finance.quotes where symbol in ({list})")
}

/// `select * from html where url='<page>?s=SYM' and xpath='...'`
pub(crate) fn scrape_statement(page: &Url, symbol: &str, xpath: &str) -> String {
    let mut page = page.clone();
    page.query_pairs_mut().append_pair("s", symbol);
    format!("select * from html where url='{page}' and xpath='{xpath}'")
}

pub(crate) fn quotes_url<S: AsRef<str>>(base: &Url, symbols: &[S]) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("q", &quotes_statement(symbols))
        .append_pair("format", "json")
        .append_pair("env", QUOTES_ENV)
        .append_pair("callback", "");
    url
}

pub(crate) fn scrape_url(base: &Url, page: &Url, symbol: &str, xpath: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("q", &scrape_statement(page, symbol, xpath))
        .append_pair("format", "json")
        .append_pair("callback", "");
    url
}

/* ---------------- envelope ---------------- */

#[derive(Deserialize)]
pub(crate) struct YqlEnvelope<R> {
    pub(crate) query: Option<YqlQuery<R>>,
}

#[derive(Deserialize)]
pub(crate) struct YqlQuery<R> {
    pub(crate) results: Option<R>,
}

impl<R> YqlEnvelope<R> {
    /// `query.results`, if both levels are present and non-null.
    pub(crate) fn into_results(self) -> Option<R> {
        self.query.and_then(|q| q.results)
    }
}

/// YQL collapses a single match into a lone object instead of a one-element array.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(v) => v,
            Self::One(t) => vec![t],
        }
    }
}
