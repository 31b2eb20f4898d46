// tests/extract.rs
use emico_datasheet::Error;
use emico_datasheet::lang::Language;
use emico_datasheet::specs::product;

const URL_DE: &str = "https://www.emico.com/de-DE/emico/produkte/nutenstein-m6/10045";
const PAGE: &str = include_str!("fixtures/product_de.html");

#[test]
fn fixture_page_fills_every_field() {
    let rec = product::extract(URL_DE, PAGE).unwrap();

    assert_eq!(rec.language, Language::De);
    assert_eq!(rec.product_name.as_deref(), Some("Nutenstein M6 Nut 8 (10 Stück)"));
    assert_eq!(rec.article_number.as_deref(), Some("12345"));
    assert_eq!(rec.old_article_number.as_deref(), Some("999"));

    let desc = rec.description_html.as_deref().unwrap();
    assert!(desc.starts_with("<p>"));
    assert!(desc.contains("nachträglichen"));

    assert_eq!(rec.base_specs.get("Farbe"), Some("rot"));
    assert_eq!(rec.base_specs.get("Werkstoff"), Some("Stahl, verzinkt"));
    assert_eq!(rec.technical_specs.get("Gewicht"), Some("12 g"));
    assert_eq!(rec.drawing_specs.get("A"), Some("16 mm"));
    assert_eq!(rec.drawing_specs.get("B"), Some("6 mm"));
}

#[test]
fn technical_data_merges_base_then_technical() {
    let rec = product::extract(URL_DE, PAGE).unwrap();
    let merged = rec.technical_data();
    let pairs: Vec<_> = merged.iter().collect();
    assert_eq!(
        pairs,
        vec![("Farbe", "blau"), ("Werkstoff", "Stahl, verzinkt"), ("Gewicht", "12 g")]
    );
}

#[test]
fn article_numbers_follow_the_url_locale() {
    let page = r#"<div class="col-lg-6 col-xl-8 ps-lg-4 ps-xl-5">
        <h1>Slot nut</h1>
        <p>Part no. 4711 Old part number: 815</p>
    </div>"#;
    let rec = product::extract("https://www.emico.com/en-DE/emico/products/4711", page).unwrap();
    assert_eq!(rec.language, Language::En);
    assert_eq!(rec.article_number.as_deref(), Some("4711"));
    assert_eq!(rec.old_article_number.as_deref(), Some("815"));
}

#[test]
fn unsupported_locale_is_an_error_even_for_empty_pages() {
    let err = product::extract("https://www.emico.com/nl-DE/emico/p/1", "").unwrap_err();
    match err {
        Error::UnsupportedLanguage(code) => assert_eq!(code.as_deref(), Some("nl")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_info_column_leaves_fields_empty() {
    let page = "<html><body><h1>Stray heading</h1><p>Artikel-Nr. 1</p></body></html>";
    let rec = product::extract(URL_DE, page).unwrap();
    assert_eq!(rec.product_name, None);
    assert_eq!(rec.article_number, None);
    assert_eq!(rec.description_html, None);
}
