use serde::{Deserialize, Serialize};

/// Headlines scraped from a symbol's security page.
///
/// `href[i]` is the link of the headline whose text is `content[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headlines {
    /// Hyperlinks, in page order.
    #[serde(rename = "headlines_href")]
    pub href: Vec<String>,
    /// Headline texts, index-aligned with `href`.
    #[serde(rename = "headlines_content")]
    pub content: Vec<String>,
}

impl Headlines {
    /// Number of headlines.
    pub fn len(&self) -> usize {
        self.href.len()
    }

    /// `true` if there are no headlines.
    pub fn is_empty(&self) -> bool {
        self.href.is_empty()
    }

    /// Iterate `(href, content)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.href
            .iter()
            .map(String::as_str)
            .zip(self.content.iter().map(String::as_str))
    }
}
