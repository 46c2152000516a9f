use serde::Deserialize;

use crate::core::yql::OneOrMany;

#[derive(Deserialize)]
pub(crate) struct AnchorResults {
    pub(crate) a: Option<OneOrMany<AnchorNode>>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct AnchorNode {
    pub(crate) href: Option<String>,
    pub(crate) content: Option<String>,
}
