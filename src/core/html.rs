use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new("<[^>]*>").expect("static tag regex"));

/// Remove every `<...>` run from `s`.
///
/// Stripping is idempotent: the output never contains a complete tag.
pub fn strip_tags(s: &str) -> String {
    TAG.replace_all(s, "").into_owned()
}
