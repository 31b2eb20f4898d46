// src/specs/product.rs
//! Product detail page.
//!
//! Layout the extractor relies on:
//! ```text
//! div.col-lg-6.col-xl-8.ps-lg-4.ps-xl-5      info column
//!   h1                                         product name
//!   p  "Artikel-Nr. 12345 …"                  article paragraph (first <p> matching a keyword)
//!   div.is-detail-page__description p          description (kept as HTML)
//! div.container.my-3
//!   div#group-2 / #group-3 / #group-6          base / technical / drawing specs
//!     div.row.is-flex-table__row > div, div    key, value
//! ```

use scraper::{ElementRef, Html};

use crate::config::consts::*;
use crate::config::options::FetchOptions;
use crate::core::{html, net::Fetcher, sanitize};
use crate::error::{Error, Result};
use crate::lang::{self, Language};
use crate::record::{ProductRecord, SpecTable};

use super::{article, images};

/// GET the page and extract it.
pub fn fetch(url: &str, opts: &FetchOptions) -> Result<ProductRecord> {
    let fetcher = Fetcher::new(opts)?;
    fetch_with(&fetcher, url)
}

pub fn fetch_with(fetcher: &Fetcher, url: &str) -> Result<ProductRecord> {
    logf!("Product: GET {}", url);
    let body = fetcher.get_text(url)?;
    logd!("Product: fetched {} bytes", body.len());
    extract(url, &body)
}

/// Locale from the URL, strictly validated.
pub fn language_for(url: &str) -> Result<Language> {
    let code = lang::detect_language(url);
    code.as_deref()
        .and_then(Language::from_code)
        .ok_or(Error::UnsupportedLanguage(code))
}

/// Build a record from an already fetched page.
pub fn extract(url: &str, body: &str) -> Result<ProductRecord> {
    let language = language_for(url)?;
    let image_urls = images::collect_image_urls(body);
    logd!("Product: {} image url(s)", image_urls.len());

    let doc = Html::parse_document(body);
    let mut record = ProductRecord { language, image_urls, ..ProductRecord::default() };

    extract_basic_info(&doc, &mut record)?;

    record.base_specs = extract_spec_group(&doc, GROUP_BASE)?;
    record.technical_specs = extract_spec_group(&doc, GROUP_TECHNICAL)?;
    record.drawing_specs = extract_spec_group(&doc, GROUP_DRAWING)?;

    logf!(
        "Product: name={:?} article={:?} old={:?} specs={}/{}/{} lang={}",
        record.product_name,
        record.article_number,
        record.old_article_number,
        record.base_specs.len(),
        record.technical_specs.len(),
        record.drawing_specs.len(),
        record.language
    );
    Ok(record)
}

fn extract_basic_info(doc: &Html, record: &mut ProductRecord) -> Result<()> {
    let info_sel = html::selector(SEL_INFO_SECTION)?;
    let Some(info) = doc.select(&info_sel).next() else {
        logw!("Product: info section not found");
        return Ok(());
    };

    let name_sel = html::selector(SEL_PRODUCT_NAME)?;
    record.product_name = html::select_first(info, &name_sel).map(html::stripped_text);

    if let Some(text) = article_paragraph_text(info)? {
        let (nr, old) = article::parse_article_numbers(record.language, &text);
        record.article_number = nr;
        record.old_article_number = old;
    }

    let desc_sel = html::selector(SEL_DESCRIPTION)?;
    record.description_html = html::select_first(info, &desc_sel).map(|p| p.html());

    Ok(())
}

/// Text of the first `<p>` mentioning an article number in any locale.
fn article_paragraph_text(info: ElementRef<'_>) -> Result<Option<String>> {
    let p_sel = html::selector(SEL_PARAGRAPH)?;
    let keywords = lazy_regex!(ARTICLE_KEYWORDS);
    Ok(info
        .select(&p_sel)
        .map(html::stripped_text)
        .find(|text| keywords.is_match(text)))
}

fn extract_spec_group(doc: &Html, group_id: &str) -> Result<SpecTable> {
    let mut specs = SpecTable::new();

    let container_sel = html::selector(SEL_SPECS_CONTAINER)?;
    let Some(container) = doc.select(&container_sel).next() else {
        return Ok(specs);
    };

    let group_sel = html::selector(&format!("div#{group_id}"))?;
    let Some(group) = html::select_first(container, &group_sel) else {
        logd!("Product: spec group {} missing", group_id);
        return Ok(specs);
    };

    let row_sel = html::selector(SEL_SPEC_ROW)?;
    let cell_sel = html::selector(SEL_SPEC_CELL)?;
    for row in group.select(&row_sel) {
        let cols: Vec<ElementRef<'_>> = row.select(&cell_sel).collect();
        if cols.len() < 2 {
            continue;
        }
        let key = sanitize::capitalize_first(&html::stripped_text(cols[0]));
        let value = html::stripped_text(cols[1]);
        specs.insert(key, value);
    }
    Ok(specs)
}
