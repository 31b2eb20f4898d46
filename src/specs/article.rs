// src/specs/article.rs
//! Article-number patterns per shop locale.
//!
//! Each locale has a pair: current article number and the legacy ("old")
//! number. Some legacy patterns carry alternation groups in front of the
//! digits, so the value is always the **last** capture group of the match.

use regex::Regex;

use crate::lang::Language;

pub struct ArticlePatterns {
    pub article: &'static Regex,
    pub old_article: &'static Regex,
}

pub fn patterns_for(lang: Language) -> ArticlePatterns {
    match lang {
        Language::De => ArticlePatterns {
            article: lazy_regex!(r"Artikel[-\s]?Nr\.\s*([0-9]+)"),
            old_article: lazy_regex!(r"Alte\s+Artikelnummer:\s*([0-9]+)"),
        },
        Language::En => ArticlePatterns {
            article: lazy_regex!(r"Part\s*no\.?\s*([0-9]+)"),
            old_article: lazy_regex!(r"Old\s*(item|part)\s*(number|no\.?):\s*([0-9]+)"),
        },
        Language::Es => ArticlePatterns {
            article: lazy_regex!(r"N[º°]?\s*de\s*pieza\s*([0-9]+)"),
            old_article: lazy_regex!(r"N[úu]mero\s+de\s+art[ií]culo\s+antiguo:\s*([0-9]+)"),
        },
        Language::Fr => ArticlePatterns {
            article: lazy_regex!(r"No\.\s*d['’]article\s*([0-9]+)"),
            old_article: lazy_regex!(r"ancien\s+num[ée]ro\s+d['’]article:\s*([0-9]+)"),
        },
        Language::It => ArticlePatterns {
            article: lazy_regex!(r"Articolo\s*n\.?\s*([0-9]+)"),
            old_article: lazy_regex!(r"vecchio\s+numero\s+d['’]articolo:\s*([0-9]+)"),
        },
    }
}

/// Last capture group of the first match (`None` if that group did not take part).
pub fn last_group(re: &Regex, text: &str) -> Option<String> {
    let caps = re.captures(text)?;
    caps.get(caps.len() - 1).map(|m| s!(m.as_str()))
}

/// `(article_number, old_article_number)` from the article paragraph text.
pub fn parse_article_numbers(lang: Language, text: &str) -> (Option<String>, Option<String>) {
    let pats = patterns_for(lang);
    (last_group(pats.article, text), last_group(pats.old_article, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_old_number_takes_last_group() {
        let (nr, old) = parse_article_numbers(Language::En, "Part no. 4711 Old item number: 815");
        assert_eq!(nr.as_deref(), Some("4711"));
        assert_eq!(old.as_deref(), Some("815"));
    }

    #[test]
    fn french_accepts_typographic_apostrophe() {
        let (nr, old) = parse_article_numbers(Language::Fr, "No. d’article 1200 ancien numéro d'article: 77");
        assert_eq!(nr.as_deref(), Some("1200"));
        assert_eq!(old.as_deref(), Some("77"));
    }

    #[test]
    fn no_match_is_none() {
        assert_eq!(parse_article_numbers(Language::It, "nulla"), (None, None));
    }
}
