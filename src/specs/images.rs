// src/specs/images.rs
//! CDN image URLs.
//!
//! Images are collected from the raw response body rather than the DOM: the
//! shop puts most of them into inline JSON / `data-*` attributes. Matches carry
//! resize parameters after the extension, so each URL is cut right after
//! `.jpg` (or `.png`) before deduplication.
//!
//! Drawing images are told apart from product photos by their `_zg` suffix
//! (`…_zg.jpg`, `…_zg_2.png`).

use crate::config::consts::{CDN_IMAGE_PATTERN, DRAWING_SUFFIX_PATTERN, MAX_PRODUCT_IMAGES};

/// Cut `url` after the first `.jpg`, or else the first `.png` (case-insensitive).
pub fn truncate_at_extension(url: &str) -> &str {
    let lc = url.to_ascii_lowercase();
    for ext in [".jpg", ".png"] {
        if let Some(i) = lc.find(ext) {
            return &url[..i + ext.len()];
        }
    }
    url
}

/// All CDN image URLs in `body`, truncated and deduplicated, in page order.
pub fn collect_image_urls(body: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for m in lazy_regex!(CDN_IMAGE_PATTERN).find_iter(body) {
        let url = truncate_at_extension(m.as_str());
        if !out.iter().any(|u| u == url) {
            out.push(s!(url));
        }
    }
    out
}

pub fn is_drawing_image(url: &str) -> bool {
    lazy_regex!(DRAWING_SUFFIX_PATTERN).is_match(url)
}

/// Up to three product photos, in order.
pub fn product_images(urls: &[String]) -> Vec<&str> {
    urls.iter()
        .map(String::as_str)
        .filter(|u| !is_drawing_image(u))
        .take(MAX_PRODUCT_IMAGES)
        .collect()
}

/// The canonical drawing, if any.
pub fn drawing_image(urls: &[String]) -> Option<&str> {
    urls.iter().map(String::as_str).find(|u| is_drawing_image(u))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_prefers_jpg() {
        assert_eq!(
            truncate_at_extension("https://x/a.png.JPG?w=10"),
            "https://x/a.png.JPG"
        );
        assert_eq!(truncate_at_extension("https://x/b.png?h=2"), "https://x/b.png");
        assert_eq!(truncate_at_extension("https://x/c.webp"), "https://x/c.webp");
    }

    #[test]
    fn numbered_drawing_suffix() {
        assert!(is_drawing_image("https://intellishop.sirv.com/p/100_zg_2.PNG"));
        assert!(!is_drawing_image("https://intellishop.sirv.com/p/100_zgx.jpg"));
    }
}
