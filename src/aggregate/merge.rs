use std::collections::BTreeMap;

use crate::{
    aggregate::model::{RESERVED_FIELDS, StockData, StockRecord},
    core::diag,
    financials::FinancialRecord,
    headlines::Headlines,
};

/// Combine the three partial results into one record per symbol.
///
/// Precedence:
/// 1. The key set is seeded from `headlines`; if that is empty, every
///    requested symbol gets an empty record instead.
/// 2. Related companies are attached only to seeded symbols.
/// 3. Quote fields are merged only into seeded symbols, later records for the
///    same symbol overwriting earlier ones field by field. Names in
///    [`RESERVED_FIELDS`] are never taken from a quote.
///
/// Anything addressed to a symbol outside the seed is dropped (logged at debug level).
pub fn merge<S: AsRef<str>>(
    symbols: &[S],
    headlines: BTreeMap<String, Headlines>,
    related: BTreeMap<String, Vec<String>>,
    financials: Option<Vec<FinancialRecord>>,
) -> StockData {
    let mut data: StockData = if headlines.is_empty() {
        symbols
            .iter()
            .map(|s| (s.as_ref().to_string(), StockRecord::default()))
            .collect()
    } else {
        headlines
            .into_iter()
            .map(|(symbol, h)| {
                let rec = StockRecord {
                    headlines: Some(h),
                    ..StockRecord::default()
                };
                (symbol, rec)
            })
            .collect()
    };

    for (symbol, companies) in related {
        match data.get_mut(&symbol) {
            Some(rec) => rec.related_companies = Some(companies),
            None => diag::debug(format_args!(
                "merge: dropping related companies for {symbol} (not in seed)"
            )),
        }
    }

    for FinancialRecord { symbol, fields } in financials.into_iter().flatten() {
        let Some(rec) = data.get_mut(&symbol) else {
            diag::debug(format_args!(
                "merge: dropping quote fields for {symbol} (not in seed)"
            ));
            continue;
        };
        for (name, value) in fields {
            if RESERVED_FIELDS.contains(&name.as_str()) {
                diag::debug(format_args!("merge: ignoring quote field `{name}` for {symbol}"));
                continue;
            }
            rec.financials.insert(name, value);
        }
    }

    data
}
