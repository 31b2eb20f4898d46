// src/core/html.rs
use scraper::{ElementRef, Node, Selector};

use crate::error::{Error, Result};

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| Error::Selector(s!(css)))
}

/// Text like BeautifulSoup's `get_text(strip=True)`: every text node trimmed,
/// empty ones dropped, joined without separator.
pub fn stripped_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

/// First descendant matching `sel`.
pub fn select_first<'a>(root: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    root.select(sel).next()
}

/// Flatten an HTML fragment into plain text, keeping `<br>` and block
/// boundaries as line breaks.
pub fn fragment_to_text(fragment: &str) -> String {
    let doc = scraper::Html::parse_fragment(fragment);
    let mut out = String::with_capacity(fragment.len());

    for node in doc.root_element().descendants() {
        match node.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) if e.name() == "br" => out.push('\n'),
            Node::Element(e) if matches!(e.name(), "p" | "div" | "li") && !out.is_empty() => {
                out.push('\n')
            }
            _ => {}
        }
    }

    out.lines()
        .map(super::sanitize::normalize_ws)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn stripped_text_concatenates_trimmed_nodes() {
        let doc = Html::parse_fragment("<p>  Artikel-Nr. <b> 12345 </b>\n</p>");
        let p = doc.select(&selector("p").unwrap()).next().unwrap();
        assert_eq!(stripped_text(p), "Artikel-Nr.12345");
    }

    #[test]
    fn fragment_breaks_on_br() {
        let txt = fragment_to_text("<p>Erste   Zeile<br>zweite &amp; letzte</p>");
        assert_eq!(txt, "Erste Zeile\nzweite & letzte");
    }

    #[test]
    fn inline_emphasis_is_kept_as_plain_text() {
        let txt = fragment_to_text("<p>Material: <b>Stahl</b> <em>verzinkt</em></p><ul><li>M6</li><li>M8</li></ul>");
        assert_eq!(txt, "Material: Stahl verzinkt\nM6\nM8");
    }
}
