//! Read-only views of the product and brand fields that can serve as a click
//! destination.
//!
//! Every link field is optional. Blank strings are treated exactly like
//! missing ones, so records can be deserialised straight from database rows
//! that store `""` instead of `NULL`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub name: String,
    /// Message template for a product-specific WhatsApp inquiry. May contain
    /// `{product_name}` and `{brand_name}` placeholders.
    pub whatsapp_message_template: Option<String>,
    pub tokopedia_url: Option<String>,
    pub shopee_url: Option<String>,
    pub instagram_url: Option<String>,
    /// The product page on the brand's own site.
    pub brand_product_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub name: String,
    pub whatsapp_number: Option<String>,
    pub tokopedia_url: Option<String>,
    pub shopee_url: Option<String>,
    pub instagram_url: Option<String>,
    pub website_url: Option<String>,
}

/// The trimmed value of `field`, or `None` when it is missing or blank.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
