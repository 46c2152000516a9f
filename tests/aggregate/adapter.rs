use crate::common::{client_for, mock_quotes, setup_server, unreachable_client};
use serde_json::json;
use stock_watcher::adapter::{ERROR_MESSAGE, OUTPUT_FIELD, PROMPT_MESSAGE, StockInfo, respond};

#[tokio::test]
async fn missing_parameter_prompts() {
    let client = unreachable_client();

    let resp = respond(&client, None).await;

    assert_eq!(resp.stock_info, StockInfo::Message(PROMPT_MESSAGE));
}

#[tokio::test]
async fn symbols_are_trimmed_before_fetching() {
    let server = setup_server();
    let q = mock_quotes(
        &server,
        &["AAPL", "MSFT"],
        json!([
            { "symbol": "AAPL", "Symbol": "AAPL", "Volume": "10" },
            { "symbol": "MSFT", "Symbol": "MSFT", "Volume": "20" }
        ]),
    );

    let client = client_for(&server);
    let resp = respond(&client, Some(" AAPL , MSFT ")).await;

    q.assert();
    assert_eq!(
        serde_json::to_value(&resp).unwrap(),
        json!({
            OUTPUT_FIELD: {
                "AAPL": { "Volume": "10" },
                "MSFT": { "Volume": "20" }
            }
        })
    );
}

#[test]
fn error_message_serializes_under_output_field() {
    let resp = stock_watcher::adapter::StockInfoResponse {
        stock_info: StockInfo::Message(ERROR_MESSAGE),
    };
    assert_eq!(
        serde_json::to_value(&resp).unwrap(),
        json!({ OUTPUT_FIELD: ERROR_MESSAGE })
    );
}
