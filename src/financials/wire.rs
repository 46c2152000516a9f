use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::yql::OneOrMany;

#[derive(Deserialize)]
pub(crate) struct QuoteResults {
    pub(crate) quote: Option<OneOrMany<Map<String, Value>>>,
}
