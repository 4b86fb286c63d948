//! Annotated web pages (`/web_pages/lookup`).

use serde::{Deserialize, Serialize};

/// External page that carries Genius annotations
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WebPage {
    /// API path (e.g., "/web_pages/10347")
    pub api_path: Option<String>,
    /// Host name
    pub domain: Option<String>,
    /// Genius web page ID
    pub id: Option<u64>,
    /// URL without scheme, used as the lookup key
    pub normalized_url: Option<String>,
    /// genius.it proxy URL
    pub share_url: Option<String>,
    /// Page title
    pub title: Option<String>,
    /// Canonical URL
    pub url: Option<String>,
    /// Annotations on the page
    pub annotation_count: Option<u64>,
}
