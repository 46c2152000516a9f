use std::collections::BTreeMap;

use futures::future::join_all;

use crate::{
    core::{
        SwClient, SwError, diag, net,
        yql::{self, HEADLINES_XPATH, OneOrMany, YqlEnvelope},
    },
    headlines::{model::Headlines, wire::AnchorResults},
};

pub(super) async fn fetch_headlines<S: AsRef<str>>(
    client: &SwClient,
    symbols: &[S],
) -> BTreeMap<String, Headlines> {
    let results = join_all(symbols.iter().map(|s| async move {
        let symbol = s.as_ref();
        (symbol, fetch_one(client, symbol).await)
    }))
    .await;

    results
        .into_iter()
        .filter_map(|(symbol, res)| {
            diag::log_err(res, "headlines", symbol).map(|h| (symbol.to_string(), h))
        })
        .collect()
}

pub(super) async fn fetch_one(client: &SwClient, symbol: &str) -> Result<Headlines, SwError> {
    let url = yql::scrape_url(client.base_yql(), client.base_page(), symbol, HEADLINES_XPATH);
    let body = net::get_yql(client, url, "headlines", symbol).await?;
    parse_headlines(&body)
}

pub(super) fn parse_headlines(body: &str) -> Result<Headlines, SwError> {
    let env: YqlEnvelope<AnchorResults> = serde_json::from_str(body)?;
    let anchors = env
        .into_results()
        .and_then(|r| r.a)
        .map(OneOrMany::into_vec)
        .unwrap_or_default();

    if anchors.is_empty() {
        return Err(SwError::Data("headlines: no anchors in query.results.a".into()));
    }

    let mut out = Headlines {
        href: Vec::with_capacity(anchors.len()),
        content: Vec::with_capacity(anchors.len()),
    };
    for anchor in anchors {
        let (Some(href), Some(content)) = (anchor.href, anchor.content) else {
            return Err(SwError::Data(
                "headlines: anchor without href or content".into(),
            ));
        };
        out.href.push(href);
        out.content.push(content);
    }
    Ok(out)
}
