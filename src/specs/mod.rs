// src/specs/mod.rs
//! # Scraping "specs"
//!
//! Page-specific knowledge of the emico shop markup: *where the ground truth
//! lives in the HTML* and how to pull it out.
//!
//! ## What lives here
//! - **Selectors and patterns** for the product detail page (info column,
//!   article paragraph, description, spec groups `group-2/3/6`).
//! - **Per-locale article-number regexes** (`article`).
//! - **CDN image harvesting and classification** (`images`).
//! - Shaping the result into a [`ProductRecord`](crate::record::ProductRecord).
//!
//! ## What does **not** live here
//! - PDF layout and labels (`pdf`).
//! - Output folder policy, progress reporting (`runner`, front ends).
//!
//! ## Conventions
//! - A selector that finds nothing yields an absent field, never an error.
//!   The only hard failure is an unsupported locale, because the article
//!   patterns cannot be chosen without it.
//! - `product::extract` is pure (URL + HTML in, record out) so it is testable
//!   offline against saved pages; `product::fetch` adds the HTTP GET.
pub mod article;
pub mod images;
pub mod product;
