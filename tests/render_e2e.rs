// tests/render_e2e.rs
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use regex::bytes::Regex;

use emico_datasheet::config::options::{AppOptions, DisclaimerPlacement, LogoPlacement};
use emico_datasheet::lang::Language;
use emico_datasheet::pdf::{self, Labels};
use emico_datasheet::record::ProductRecord;
use emico_datasheet::specs::product;

const URL_DE: &str = "https://www.emico.com/de-DE/emico/produkte/nutenstein-m6/10045";
const PAGE: &str = include_str!("fixtures/product_de.html");

/// Offline options: local assets, short timeout.
fn offline_opts() -> AppOptions {
    let mut opts = AppOptions::default();
    opts.fetch.timeout = Some(Duration::from_secs(2));
    opts.render.resource_root = Some(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"));
    opts
}

/// Fixture record whose images all point at a closed local port.
fn record_with_dead_images() -> ProductRecord {
    let mut rec = product::extract(URL_DE, PAGE).unwrap();
    rec.image_urls = vec![
        "http://127.0.0.1:9/emico/10045_01.jpg".into(),
        "http://127.0.0.1:9/emico/10045_zg.jpg".into(),
    ];
    rec
}

fn assert_pdf(path: &std::path::Path) {
    let bytes = fs::read(path).unwrap();
    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(b"%PDF"));
}

fn page_count(bytes: &[u8]) -> usize {
    Regex::new(r"/Type\s*/Page\b").unwrap().find_iter(bytes).count()
}

#[test]
fn renders_even_when_every_image_download_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let rec = record_with_dead_images();

    let path = pdf::render(&rec, "de", tmp.path(), &offline_opts()).unwrap();

    assert_eq!(path, tmp.path().join("12345_Datenblatt_de.pdf"));
    assert_pdf(&path);
}

#[test]
fn unknown_language_code_renders_german() {
    let tmp = tempfile::tempdir().unwrap();
    let rec = record_with_dead_images();

    let path = pdf::render(&rec, "xx", tmp.path(), &offline_opts()).unwrap();

    assert!(path.to_string_lossy().ends_with("_Datenblatt_de.pdf"));
    assert_pdf(&path);

    // the render path picks its labels through `Labels::for_code`
    let labels = Labels::for_code("xx");
    assert_eq!(labels, Labels::for_language(Language::De));
    assert_eq!(labels.datasheet, "DATENBLATT");
    assert_eq!(labels.page_of(1, 2), "Seite 1 von 2");
}

#[test]
fn multi_page_sheet_stays_small() {
    let tmp = tempfile::tempdir().unwrap();
    let mut rec = record_with_dead_images();
    for i in 0..120 {
        rec.technical_specs.insert(format!("Merkmal {i:03}"), format!("Wert {i}"));
    }

    let path = pdf::render(&rec, "de", tmp.path(), &offline_opts()).unwrap();
    let bytes = fs::read(&path).unwrap();

    let pages = page_count(&bytes);
    assert!(pages >= 3, "expected a long table to spill, got {pages} page(s)");
    // the logo is on every page as a JPEG
    let jpegs = Regex::new(r"/DCTDecode").unwrap().find_iter(&bytes).count();
    assert!(jpegs >= pages, "{jpegs} JPEG image(s) on {pages} page(s)");
    // a raw RGB logo alone would be ~500 KB per page
    assert!(bytes.len() < 60_000 * pages, "{} bytes for {pages} page(s)", bytes.len());
}

#[test]
fn bare_record_uses_fallback_name_and_footer_layout() {
    let tmp = tempfile::tempdir().unwrap();
    let mut opts = offline_opts();
    opts.render.layout.logo = LogoPlacement::Left;
    opts.render.layout.disclaimer = DisclaimerPlacement::Footer;

    let path = pdf::render(&ProductRecord::default(), "en", tmp.path(), &opts).unwrap();

    assert_eq!(path, tmp.path().join("emico_product_Productsheet_en.pdf"));
    assert_pdf(&path);
}

#[test]
fn render_record_uses_the_record_language() {
    let tmp = tempfile::tempdir().unwrap();
    let page = r#"<div class="col-lg-6 col-xl-8 ps-lg-4 ps-xl-5">
        <h1>Profilo 30x30</h1><p>Articolo n. 777</p></div>"#;
    let mut rec = product::extract("https://www.emico.com/it-DE/emico/p/777", page).unwrap();
    rec.image_urls.clear();

    let path = pdf::render_record(&rec, tmp.path(), &offline_opts()).unwrap();

    assert_eq!(path, tmp.path().join("777_SchedaDati_it.pdf"));
    assert_pdf(&path);
}
