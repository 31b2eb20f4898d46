// src/lang.rs
//! Locale handling.
//!
//! The product URL carries the shop locale as a path segment, e.g.
//! `https://www.emico.com/en-DE/emico/...`. [`detect_language`] only finds that
//! segment; whether the code is one we support is decided by the caller:
//! - the extractor needs the per-language regexes and uses the strict
//!   [`Language::from_code`];
//! - the renderer only picks labels and uses [`Language::from_code_or_default`]
//!   (German).

use std::fmt;

use crate::config::consts::LANGUAGE_PATTERN;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    De,
    En,
    Es,
    Fr,
    It,
}

impl Language {
    pub const ALL: [Language; 5] = [Language::De, Language::En, Language::Es, Language::Fr, Language::It];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "de" => Some(Language::De),
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "fr" => Some(Language::Fr),
            "it" => Some(Language::It),
            _ => None,
        }
    }

    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_else(|| {
            logw!("Lang: unknown code {:?}, using German labels", code);
            Language::De
        })
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::It => "it",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Two-character locale from a `/<cc>-DE/emico` path segment, unvalidated.
pub fn detect_language(url: &str) -> Option<String> {
    lazy_regex!(LANGUAGE_PATTERN)
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| s!(m.as_str()))
}
