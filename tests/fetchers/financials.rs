use crate::common::{YQL_PATH, client_for, mock_quotes, quotes_q, setup_server, unreachable_client};
use httpmock::Method::GET;
use serde_json::json;
use stock_watcher::{SwError, financials::fetch_financials};

#[tokio::test]
async fn batch_is_one_request_with_markup_stripped() {
    let server = setup_server();
    let mock = mock_quotes(
        &server,
        &["AAPL", "MSFT"],
        json!([
            { "symbol": "AAPL", "Symbol": "AAPL", "LastTradePriceOnly": "<b>150.00</b>", "Volume": "1000" },
            { "symbol": "MSFT", "Symbol": "MSFT", "LastTradePriceOnly": "<span>300.00</span>", "Volume": null }
        ]),
    );

    let client = client_for(&server);
    let recs = fetch_financials(&client, &["AAPL", "MSFT"]).await.unwrap();

    mock.assert();
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].symbol, "AAPL");
    assert_eq!(recs[0].fields["LastTradePriceOnly"], json!("150.00"));
    assert_eq!(recs[1].fields["LastTradePriceOnly"], json!("300.00"));
    assert_eq!(recs[1].fields["Volume"], serde_json::Value::Null);
    assert!(recs.iter().all(|r| !r.fields.contains_key("symbol") && !r.fields.contains_key("Symbol")));
}

#[tokio::test]
async fn single_symbol_lone_record_is_normalized() {
    let server = setup_server();
    let mock = mock_quotes(
        &server,
        &["AAPL"],
        json!({ "symbol": "AAPL", "Symbol": "AAPL", "Name": "Apple Inc." }),
    );

    let client = client_for(&server);
    let recs = fetch_financials(&client, &["AAPL"]).await.unwrap();

    mock.assert();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].fields["Name"], json!("Apple Inc."));
}

#[tokio::test]
async fn non_success_status_maps_to_status_error() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(YQL_PATH)
            .query_param("q", quotes_q(&["AAPL"]));
        then.status(503).body("unavailable");
    });

    let client = client_for(&server);
    let err = fetch_financials(&client, &["AAPL"]).await.unwrap_err();

    mock.assert();
    match err {
        SwError::Status { status, url } => {
            assert_eq!(status, 503);
            assert!(url.contains(YQL_PATH));
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_body_maps_to_json_error() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(YQL_PATH)
            .query_param("q", quotes_q(&["AAPL"]));
        then.status(200).body("<html>not json</html>");
    });

    let client = client_for(&server);
    let err = fetch_financials(&client, &["AAPL"]).await.unwrap_err();

    mock.assert();
    assert!(matches!(err, SwError::Json(_)), "got {err:?}");
}

#[tokio::test]
async fn empty_symbols_and_transport_failures_are_errors() {
    let client = unreachable_client();

    let empty: [&str; 0] = [];
    assert!(matches!(
        fetch_financials(&client, &empty).await,
        Err(SwError::Data(_))
    ));
    assert!(matches!(
        fetch_financials(&client, &["AAPL"]).await,
        Err(SwError::Http(_))
    ));
}
