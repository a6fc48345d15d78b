//! Outbound redirect resolution for product clicks.
//!
//! ```rust
//! use atelier_redirect::{Brand, Product, RedirectResolver, RedirectSource};
//!
//! let product = Product { name: "Linen Tee".into(), ..Product::default() };
//! let brand = Brand {
//!     name: "Brand X".into(),
//!     website_url: Some("https://brandx.com".into()),
//!     ..Brand::default()
//! };
//!
//! let resolution = RedirectResolver::default().resolve(&product, &brand);
//! assert_eq!(resolution.url, "https://brandx.com");
//! assert_eq!(resolution.source, RedirectSource::BrandWebsite);
//! ```
pub mod catalog;
pub mod resolver;
pub mod whatsapp;

pub use catalog::{Brand, Product};
pub use resolver::{DEFAULT_HOMEPAGE_URL, RedirectResolver, RedirectSource, Resolution};
