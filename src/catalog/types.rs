//! Catalog wire types.
//!
//! Mirrors the Google Books volume shape. Every field is optional on the
//! wire, so everything defaults rather than failing the whole response.

use html2text::render::text_renderer::TrivialDecorator;
use serde::{Deserialize, Serialize};

/// Search response envelope. `items` is omitted by the API when nothing matched.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

/// A single book record from the catalog.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    #[serde(default)]
    pub volume_info: VolumeInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_info: Option<SaleInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_info: Option<SearchInfo>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub description: String,
    pub page_count: Option<u32>,
    #[serde(default)]
    pub published_date: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub image_links: ImageLinks,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    #[serde(default)]
    pub small_thumbnail: String,
    #[serde(default)]
    pub thumbnail: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaleInfo {
    pub retail_price: Option<RetailPrice>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RetailPrice {
    pub amount_in_micros: f64,
    pub currency_code: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchInfo {
    #[serde(default)]
    pub text_snippet: String,
}

impl CatalogItem {
    pub fn title(&self) -> &str {
        &self.volume_info.title
    }

    /// Authors joined for display, e.g. `"Ursula K. Le Guin, Tove Jansson"`.
    pub fn authors(&self) -> String {
        self.volume_info.authors.join(", ")
    }

    pub fn categories(&self) -> String {
        self.volume_info.categories.join(", ")
    }

    pub fn thumbnail(&self) -> &str {
        &self.volume_info.image_links.small_thumbnail
    }

    /// Description with markup removed, ready for a terminal.
    pub fn plain_description(&self) -> String {
        strip_html(&self.volume_info.description)
    }

    /// Retail price formatted as `"12.99 USD"`, if the catalog lists one.
    pub fn price(&self) -> Option<String> {
        let price = self.sale_info.as_ref()?.retail_price.as_ref()?;
        Some(format!(
            "{:.2} {}",
            price.amount_in_micros / 1_000_000.0,
            price.currency_code
        ))
    }
}

/// Wide enough that html2text never wraps; the detail screen wraps to
/// its own width.
const UNWRAPPED_WIDTH: usize = 10_000;

/// Render catalog HTML as plain text. Entities are decoded, block tags
/// become line breaks and inline emphasis is dropped.
pub fn strip_html(html: &str) -> String {
    let text = html2text::from_read_with_decorator(
        html.as_bytes(),
        UNWRAPPED_WIDTH,
        TrivialDecorator::new(),
    );
    text.trim().to_string()
}
