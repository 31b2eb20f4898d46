// src/record.rs
use crate::lang::Language;

/// Insertion-ordered string map. Re-inserting a key replaces the value but
/// keeps the key's first position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpecTable {
    entries: Vec<(String, String)>,
}

impl SpecTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `first` then `second`; `second` wins on duplicate keys.
    pub fn merged(first: &SpecTable, second: &SpecTable) -> SpecTable {
        let mut out = first.clone();
        for (k, v) in second.iter() {
            out.insert(k, v);
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SpecTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = SpecTable::new();
        for (k, v) in iter {
            table.insert(k, v);
        }
        table
    }
}

/// Everything scraped from one product page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductRecord {
    pub product_name: Option<String>,
    pub article_number: Option<String>,
    pub old_article_number: Option<String>,
    /// Outer HTML of the description paragraph.
    pub description_html: Option<String>,
    pub base_specs: SpecTable,
    pub technical_specs: SpecTable,
    pub drawing_specs: SpecTable,
    /// Deduplicated CDN image URLs in page order.
    pub image_urls: Vec<String>,
    pub language: Language,
}

impl ProductRecord {
    /// Base specs followed by technical specs; technical values win.
    pub fn technical_data(&self) -> SpecTable {
        SpecTable::merged(&self.base_specs, &self.technical_specs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reinsert_keeps_position() {
        let mut t = SpecTable::new();
        t.insert("A", "1");
        t.insert("B", "2");
        t.insert("A", "3");
        let pairs: Vec<_> = t.iter().collect();
        assert_eq!(pairs, vec![("A", "3"), ("B", "2")]);
    }
}
