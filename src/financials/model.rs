use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::{SwError, strip_tags};

/// Quote fields for one symbol, with HTML markup removed from string values.
///
/// The provider repeats the ticker under both `symbol` and `Symbol`; neither
/// appears in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialRecord {
    /// Ticker the record belongs to (from the `symbol` field).
    pub symbol: String,
    /// Remaining quote fields, e.g. `LastTradePriceOnly`, `Volume`.
    pub fields: BTreeMap<String, Value>,
}

impl FinancialRecord {
    pub(crate) fn from_wire(raw: Map<String, Value>) -> Result<Self, SwError> {
        let mut fields: BTreeMap<String, Value> = raw
            .into_iter()
            .map(|(k, v)| (k, strip_value(v)))
            .collect();

        let symbol = fields
            .remove("symbol")
            .ok_or(SwError::MissingSymbolField { field: "symbol" })?;
        fields
            .remove("Symbol")
            .ok_or(SwError::MissingSymbolField { field: "Symbol" })?;

        let Value::String(symbol) = symbol else {
            return Err(SwError::Data(format!(
                "quote record symbol is not a string: {symbol}"
            )));
        };

        Ok(Self { symbol, fields })
    }
}

fn strip_value(v: Value) -> Value {
    match v {
        Value::String(s) => Value::String(strip_tags(&s)),
        other => other,
    }
}
