use std::time::Duration;

use stock_watcher::{CurrentDataBuilder, SwClient, adapter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    // 1. A client with a 10-second overall timeout.
    let client = SwClient::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    // 2. Merged snapshot for a couple of symbols.
    let symbols = std::env::args().skip(1).collect::<Vec<_>>();
    let symbols = if symbols.is_empty() {
        vec!["AAPL".to_string(), "MSFT".to_string()]
    } else {
        symbols
    };

    match CurrentDataBuilder::new(&client).symbols(symbols.clone()).fetch().await {
        Some(data) => {
            for (symbol, record) in &data {
                println!("--- {symbol} ---");
                if let Some(h) = &record.headlines {
                    for (href, text) in h.iter().take(3) {
                        println!("  {text} <{href}>");
                    }
                }
                if let Some(rel) = &record.related_companies {
                    println!("  related: {}", rel.join(", "));
                }
                println!("  {} quote fields", record.financials.len());
            }
        }
        None => println!("no symbols given"),
    }
    println!();

    // 3. The same request through the adapter, as a service would answer it.
    let param = symbols.join(",");
    let resp = adapter::respond(&client, Some(&param)).await;
    println!("{}", serde_json::to_string_pretty(&resp)?);

    Ok(())
}
