// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => s!(),
    }
}

/// Product name as shown in the page header line: no parenthesised notes,
/// no dimensions or bare numbers, no punctuation.
pub fn clean_product_name(name: &str) -> String {
    if name.is_empty() {
        return s!();
    }
    let name = lazy_regex!(r"\([^)]*\)").replace_all(name, "");
    let name = lazy_regex!(r"\b\d+\s*[xX]\s*\d+\b").replace_all(&name, "");
    let name = lazy_regex!(r"(?i)\b\d+\s*(mm|cm|inch|in)\b").replace_all(&name, "");
    let name = lazy_regex!(r"\b\d+\b").replace_all(&name, "");
    let name = lazy_regex!(r"[^\w\s]").replace_all(&name, " ");
    normalize_ws(&name)
}

/// Keep a file stem safe on every platform we ship to.
pub fn sanitize_file_stem(stem: &str) -> String {
    let out: String = stem
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_unicode_first_letter() {
        assert_eq!(capitalize_first("öffnung"), "Öffnung");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn cleans_dimensions_and_notes() {
        assert_eq!(
            clean_product_name("Profil 40x40 leicht (Nut 8), 6 m"),
            "Profil leicht m"
        );
        assert_eq!(clean_product_name("Winkel 20 mm, verzinkt"), "Winkel verzinkt");
    }

    #[test]
    fn file_stem_drops_path_separators() {
        assert_eq!(sanitize_file_stem("12/34"), "12_34");
    }
}
