// tests/language.rs
use emico_datasheet::lang::{Language, detect_language};
use emico_datasheet::specs::{article, product};

#[test]
fn detects_code_from_locale_segment() {
    assert_eq!(detect_language("https://www.emico.com/fr-DE/emico/x").as_deref(), Some("fr"));
    assert_eq!(detect_language("https://www.emico.com/emico/x"), None);
    // not validated here
    assert_eq!(detect_language("https://www.emico.com/xx-DE/emico/x").as_deref(), Some("xx"));
}

#[test]
fn the_five_supported_codes_are_accepted() {
    for code in ["de", "en", "es", "fr", "it"] {
        let url = format!("https://www.emico.com/{code}-DE/emico/p/1");
        let lang = product::language_for(&url).unwrap();
        assert_eq!(lang.code(), code);
        // every locale has its own pattern pair
        let pats = article::patterns_for(lang);
        assert_ne!(pats.article.as_str(), pats.old_article.as_str());
    }
}

#[test]
fn other_codes_are_rejected_by_extraction() {
    for code in ["nl", "pl", "DE", "xx"] {
        let url = format!("https://www.emico.com/{code}-DE/emico/p/1");
        assert!(product::language_for(&url).is_err(), "{code} should be rejected");
    }
}

#[test]
fn rendering_falls_back_to_german() {
    assert_eq!(Language::from_code_or_default("xx"), Language::De);
    assert_eq!(Language::from_code_or_default("it"), Language::It);
    assert_eq!(Language::from_code("xx"), None);
}
