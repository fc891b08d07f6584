use serde::{Deserialize, Serialize};

pub const UNTITLED: &str = "Untitled";

/// A normalized headline from either a web page or a feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    /// Heading tag (`h1`..`h6`) for web headings; absent for feed items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub text: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl Headline {
    pub fn new(text: impl Into<String>, link: Option<String>) -> Self {
        Self {
            label: None,
            text: text.into(),
            link,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// One article from the stream-contents endpoint. Only the fields we use are
/// modeled; the rest of the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub canonical: Vec<CanonicalLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CanonicalLink {
    #[serde(default)]
    pub href: Option<String>,
}

impl FeedItem {
    pub fn headline(&self) -> Headline {
        let text = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(UNTITLED);
        let link = self
            .canonical
            .first()
            .and_then(|c| c.href.clone())
            .filter(|h| !h.is_empty());
        Headline::new(text, link)
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StreamContents {
    #[serde(default)]
    pub items: Vec<FeedItem>,
}
