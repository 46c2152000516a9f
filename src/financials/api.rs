use crate::{
    core::{
        SwClient, SwError, diag, net,
        yql::{self, OneOrMany, YqlEnvelope},
    },
    financials::{model::FinancialRecord, wire::QuoteResults},
};

pub(super) async fn fetch_financials<S: AsRef<str>>(
    client: &SwClient,
    symbols: &[S],
) -> Result<Vec<FinancialRecord>, SwError> {
    if symbols.is_empty() {
        return Err(SwError::Data(
            "quotes: at least one symbol required".into(),
        ));
    }

    let url = yql::quotes_url(client.base_yql(), symbols);
    let joined = symbols
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("-");
    let body = net::get_yql(client, url, "quotes", &joined).await?;
    parse_financials(&body)
}

pub(super) fn parse_financials(body: &str) -> Result<Vec<FinancialRecord>, SwError> {
    let env: YqlEnvelope<QuoteResults> = serde_json::from_str(body)?;
    let quotes = env
        .into_results()
        .and_then(|r| r.quote)
        .map(OneOrMany::into_vec)
        .unwrap_or_default();

    if quotes.is_empty() {
        return Err(SwError::Data("quotes: nothing at query.results.quote".into()));
    }

    Ok(quotes
        .into_iter()
        .filter_map(|raw| {
            let hint = raw
                .get("symbol")
                .or_else(|| raw.get("Symbol"))
                .and_then(|v| v.as_str())
                .unwrap_or("<unknown>")
                .to_string();
            diag::log_err(FinancialRecord::from_wire(raw), "quote record", &hint)
        })
        .collect())
}
