// src/pdf/metrics.rs
//! Approximate text metrics for the PDF base-14 Helvetica faces.
//!
//! Built-in fonts carry no metrics in the document, so centring and wrapping
//! use the Helvetica AFM advance widths (1/1000 em) for printable ASCII.
//! Anything else is measured as a digit.

pub const PT_TO_MM: f32 = 25.4 / 72.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
    Oblique,
}

// ' ' (32) ..= '~' (126)
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

const DEFAULT_WIDTH: u16 = 556;
const BOLD_FACTOR: f32 = 1.06;

fn char_width(ch: char) -> u16 {
    match ch {
        ' '..='~' => HELVETICA[ch as usize - 32],
        '•' => 350,
        '–' => 556,
        '’' | '‘' => 222,
        'ı' | 'í' | 'ì' | 'î' | 'ï' => 278,
        _ => DEFAULT_WIDTH,
    }
}

/// Width of `text` in millimetres at `size_pt`.
pub fn text_width_mm(text: &str, size_pt: f32, face: Face) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(c) as u32).sum();
    let w = units as f32 / 1000.0 * size_pt * PT_TO_MM;
    match face {
        Face::Bold => w * BOLD_FACTOR,
        Face::Regular | Face::Oblique => w,
    }
}

/// Greedy word wrap. Explicit `\n` starts a new line; empty input lines are
/// kept so paragraph gaps survive. Words wider than `max_mm` are split.
pub fn wrap(text: &str, max_mm: f32, size_pt: f32, face: Face) -> Vec<String> {
    let mut lines = Vec::new();

    for para in text.split('\n') {
        let mut line = String::new();
        for word in para.split_whitespace() {
            let candidate = if line.is_empty() { s!(word) } else { join!(&line, " ", word) };
            if text_width_mm(&candidate, size_pt, face) <= max_mm {
                line = candidate;
                continue;
            }
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if text_width_mm(word, size_pt, face) <= max_mm {
                line = s!(word);
            } else {
                let mut pieces = split_word(word, max_mm, size_pt, face);
                line = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            }
        }
        lines.push(line);
    }
    lines
}

fn split_word(word: &str, max_mm: f32, size_pt: f32, face: Face) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    for ch in word.chars() {
        cur.push(ch);
        if text_width_mm(&cur, size_pt, face) > max_mm && cur.chars().count() > 1 {
            cur.pop();
            out.push(std::mem::take(&mut cur));
            cur.push(ch);
        }
    }
    out.push(cur);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_with_size() {
        let a = text_width_mm("emico", 10.0, Face::Regular);
        let b = text_width_mm("emico", 20.0, Face::Regular);
        assert!((b - 2.0 * a).abs() < 1e-4);
    }

    #[test]
    fn wrap_respects_width_and_newlines() {
        let lines = wrap("eins zwei drei\nvier", 12.0, 10.0, Face::Regular);
        assert!(lines.len() >= 3);
        assert_eq!(lines.last().map(String::as_str), Some("vier"));
        for l in &lines {
            assert!(text_width_mm(l, 10.0, Face::Regular) <= 12.0);
        }
    }

    #[test]
    fn long_word_is_split() {
        let lines = wrap("Aluminiumstrangpressprofil", 10.0, 10.0, Face::Regular);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), "Aluminiumstrangpressprofil");
    }
}
