use serde::Deserialize;

use crate::core::yql::OneOrMany;

#[derive(Deserialize)]
pub(crate) struct StrongResults {
    pub(crate) strong: Option<OneOrMany<StrongNode>>,
}

/// A `<strong>` element: bare text, or an object when YQL kept attributes.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum StrongNode {
    Text(String),
    Node { content: String },
}

impl StrongNode {
    pub(crate) fn into_text(self) -> String {
        match self {
            Self::Text(t) | Self::Node { content: t } => t,
        }
    }
}
