#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use serde_json::{Value, json};
use stock_watcher::SwClient;
use url::Url;

pub const YQL_PATH: &str = "/v1/public/yql";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn client_for(server: &MockServer) -> SwClient {
    SwClient::builder()
        .base_yql(Url::parse(&server.url(YQL_PATH)).unwrap())
        .build()
        .unwrap()
}

/// A client whose YQL endpoint refuses connections.
pub fn unreachable_client() -> SwClient {
    SwClient::builder()
        .base_yql(Url::parse("http://127.0.0.1:9/v1/public/yql").unwrap())
        .build()
        .unwrap()
}

/* ---------------- query text the client is expected to send ---------------- */

pub fn quotes_q(symbols: &[&str]) -> String {
    let list = symbols
        .iter()
        .map(|s| format!("\"{s}\""))
        .collect::<Vec<_>>()
        .join(",");
    format!("select * from yahoo.finance.quotes where symbol in ({list})")
}

pub fn headlines_q(symbol: &str) -> String {
    format!(
        r#"select * from html where url='http://finance.yahoo.com/q?s={symbol}' and xpath='//div[@id="yfi_headlines"]/div[2]/ul/li/a'"#
    )
}

pub fn related_q(symbol: &str) -> String {
    format!(
        r#"select * from html where url='http://finance.yahoo.com/q?s={symbol}' and xpath='//div[@id="yfi_related_tickers"]/p/span/a/strong'"#
    )
}

/* ---------------- response bodies ---------------- */

pub fn envelope(results: Value) -> String {
    json!({ "query": { "count": 1, "lang": "en-US", "results": results } }).to_string()
}

pub fn empty_envelope() -> String {
    json!({ "query": { "count": 0, "lang": "en-US", "results": null } }).to_string()
}

/* ---------------- mocks ---------------- */

pub fn mock_yql<'a>(server: &'a MockServer, q: String, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(YQL_PATH)
            .query_param("q", q)
            .query_param("format", "json");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_headlines<'a>(server: &'a MockServer, symbol: &str, anchors: Value) -> Mock<'a> {
    mock_yql(server, headlines_q(symbol), envelope(json!({ "a": anchors })))
}

pub fn mock_related<'a>(server: &'a MockServer, symbol: &str, strong: Value) -> Mock<'a> {
    mock_yql(server, related_q(symbol), envelope(json!({ "strong": strong })))
}

pub fn mock_quotes<'a>(server: &'a MockServer, symbols: &[&str], quote: Value) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(YQL_PATH)
            .query_param("q", quotes_q(symbols))
            .query_param("format", "json")
            .query_param("env", "store://datatables.org/alltableswithkeys");
        then.status(200)
            .header("content-type", "application/json")
            .body(envelope(json!({ "quote": quote })));
    })
}
