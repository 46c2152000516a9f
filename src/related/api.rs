use std::collections::BTreeMap;

use futures::future::join_all;

use crate::{
    core::{
        SwClient, SwError, diag, net,
        yql::{self, OneOrMany, RELATED_XPATH, YqlEnvelope},
    },
    related::wire::{StrongNode, StrongResults},
};

pub(super) async fn fetch_related_companies<S: AsRef<str>>(
    client: &SwClient,
    symbols: &[S],
) -> BTreeMap<String, Vec<String>> {
    let results = join_all(symbols.iter().map(|s| async move {
        let symbol = s.as_ref();
        (symbol, fetch_one(client, symbol).await)
    }))
    .await;

    results
        .into_iter()
        .filter_map(|(symbol, res)| {
            diag::log_err(res, "related_companies", symbol).map(|r| (symbol.to_string(), r))
        })
        .collect()
}

pub(super) async fn fetch_one(client: &SwClient, symbol: &str) -> Result<Vec<String>, SwError> {
    let url = yql::scrape_url(client.base_yql(), client.base_page(), symbol, RELATED_XPATH);
    let body = net::get_yql(client, url, "related", symbol).await?;
    parse_related(&body)
}

pub(super) fn parse_related(body: &str) -> Result<Vec<String>, SwError> {
    let env: YqlEnvelope<StrongResults> = serde_json::from_str(body)?;
    let related: Vec<String> = env
        .into_results()
        .and_then(|r| r.strong)
        .map(OneOrMany::into_vec)
        .unwrap_or_default()
        .into_iter()
        .map(StrongNode::into_text)
        .collect();

    if related.is_empty() {
        return Err(SwError::Data(
            "related companies: nothing at query.results.strong".into(),
        ));
    }
    Ok(related)
}
