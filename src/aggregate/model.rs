use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::headlines::Headlines;

/// Field names owned by the headline and related-companies parts of a record.
/// Quote fields with these names are discarded during the merge.
pub const RESERVED_FIELDS: [&str; 3] = ["headlines_href", "headlines_content", "related_companies"];

/// Everything known about one symbol after merging the three fetches.
///
/// Serializes as one flat object: `headlines_href`, `headlines_content`,
/// `related_companies` and the quote fields, each present only if the
/// corresponding fetch produced it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StockRecord {
    /// Headlines, when the headline fetch succeeded for this symbol.
    #[serde(flatten)]
    pub headlines: Option<Headlines>,
    /// Related ticker symbols, when that fetch succeeded for this symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_companies: Option<Vec<String>>,
    /// Quote fields with markup stripped; empty when the quote fetch failed.
    #[serde(flatten)]
    pub financials: BTreeMap<String, Value>,
}

impl StockRecord {
    /// `true` when no fetch contributed anything to this record.
    pub fn is_empty(&self) -> bool {
        self.headlines.is_none() && self.related_companies.is_none() && self.financials.is_empty()
    }
}

/// Merged records keyed by symbol.
pub type StockData = BTreeMap<String, StockRecord>;
