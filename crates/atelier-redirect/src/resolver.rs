//! Picks exactly one outbound destination for a product click.
//!
//! Candidates are evaluated in a fixed order and the first one with a usable
//! value wins:
//!
//! | Rank | Source                                                      |
//! |------|-------------------------------------------------------------|
//! | 1    | product WhatsApp (product template **and** brand number)    |
//! | 2–4  | product Tokopedia, Shopee, Instagram                        |
//! | 5    | brand WhatsApp with [`DEFAULT_MESSAGE_TEMPLATE`]            |
//! | 6–8  | brand Tokopedia, Shopee, Instagram                          |
//! | 9    | product page on the brand's site                            |
//! | 10   | brand website                                               |
//! | 11   | platform homepage                                           |
//!
//! Resolution never fails: with no data at all the homepage is returned.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::{
    catalog::{Brand, Product, present},
    whatsapp::{self, DEFAULT_MESSAGE_TEMPLATE},
};

pub const DEFAULT_HOMEPAGE_URL: &str = "https://atelier.id";

/// Which candidate produced the destination, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectSource {
    ProductWhatsapp,
    ProductTokopedia,
    ProductShopee,
    ProductInstagram,
    BrandWhatsapp,
    BrandTokopedia,
    BrandShopee,
    BrandInstagram,
    BrandProductPage,
    BrandWebsite,
    Homepage,
}

impl RedirectSource {
    /// 1-based priority rank; lower wins.
    pub fn rank(self) -> u8 {
        self as u8 + 1
    }
}

impl fmt::Display for RedirectSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RedirectSource::ProductWhatsapp => "product_whatsapp",
            RedirectSource::ProductTokopedia => "product_tokopedia",
            RedirectSource::ProductShopee => "product_shopee",
            RedirectSource::ProductInstagram => "product_instagram",
            RedirectSource::BrandWhatsapp => "brand_whatsapp",
            RedirectSource::BrandTokopedia => "brand_tokopedia",
            RedirectSource::BrandShopee => "brand_shopee",
            RedirectSource::BrandInstagram => "brand_instagram",
            RedirectSource::BrandProductPage => "brand_product_page",
            RedirectSource::BrandWebsite => "brand_website",
            RedirectSource::Homepage => "homepage",
        };
        f.write_str(name)
    }
}

/// The chosen destination and the candidate it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub url: String,
    pub source: RedirectSource,
}

#[derive(Debug, Clone)]
pub struct RedirectResolver {
    homepage_url: String,
}

impl Default for RedirectResolver {
    fn default() -> Self {
        Self::new(DEFAULT_HOMEPAGE_URL)
    }
}

impl RedirectResolver {
    /// A resolver falling back to `homepage_url`. A blank value falls back to
    /// [`DEFAULT_HOMEPAGE_URL`] so the result is never empty.
    pub fn new(homepage_url: impl Into<String>) -> Self {
        let homepage_url = homepage_url.into();
        let homepage_url = match homepage_url.trim() {
            "" => DEFAULT_HOMEPAGE_URL.to_owned(),
            trimmed => trimmed.to_owned(),
        };
        Self { homepage_url }
    }

    pub fn homepage_url(&self) -> &str {
        &self.homepage_url
    }

    pub fn resolve(&self, product: &Product, brand: &Brand) -> Resolution {
        let resolution = first_candidate(product, brand).unwrap_or_else(|| Resolution {
            url: self.homepage_url.clone(),
            source: RedirectSource::Homepage,
        });

        debug!(
            product = %product.name,
            brand = %brand.name,
            source = %resolution.source,
            "resolved click redirect"
        );
        resolution
    }

    /// Destination URL only.
    pub fn resolve_url(&self, product: &Product, brand: &Brand) -> String {
        self.resolve(product, brand).url
    }
}

/// Ranks 1–10, evaluated lazily in order.
fn first_candidate(product: &Product, brand: &Brand) -> Option<Resolution> {
    let link = |source: RedirectSource, field: &Option<String>| {
        present(field).map(|url| Resolution {
            url: url.to_owned(),
            source,
        })
    };

    product_whatsapp(product, brand)
        .or_else(|| link(RedirectSource::ProductTokopedia, &product.tokopedia_url))
        .or_else(|| link(RedirectSource::ProductShopee, &product.shopee_url))
        .or_else(|| link(RedirectSource::ProductInstagram, &product.instagram_url))
        .or_else(|| brand_whatsapp(product, brand))
        .or_else(|| link(RedirectSource::BrandTokopedia, &brand.tokopedia_url))
        .or_else(|| link(RedirectSource::BrandShopee, &brand.shopee_url))
        .or_else(|| link(RedirectSource::BrandInstagram, &brand.instagram_url))
        .or_else(|| link(RedirectSource::BrandProductPage, &product.brand_product_url))
        .or_else(|| link(RedirectSource::BrandWebsite, &brand.website_url))
}

fn product_whatsapp(product: &Product, brand: &Brand) -> Option<Resolution> {
    let template = present(&product.whatsapp_message_template)?;
    let number = present(&brand.whatsapp_number)?;
    let message = whatsapp::render_message(template, &product.name, &brand.name);

    Some(Resolution {
        url: whatsapp::build_link(number, &message)?,
        source: RedirectSource::ProductWhatsapp,
    })
}

fn brand_whatsapp(product: &Product, brand: &Brand) -> Option<Resolution> {
    let number = present(&brand.whatsapp_number)?;
    let message = whatsapp::render_message(DEFAULT_MESSAGE_TEMPLATE, &product.name, &brand.name);

    Some(Resolution {
        url: whatsapp::build_link(number, &message)?,
        source: RedirectSource::BrandWhatsapp,
    })
}
