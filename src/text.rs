//! String Transformations

use crate::error::{DemoError, DemoResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextReport {
    pub original: String,
    pub upper: String,
    pub lower: String,
    pub capitalized: String,
    pub reversed: String,
    pub word_count: usize,
}

pub fn format_text(raw: &str) -> DemoResult<TextReport> {
    let original = raw.trim();
    if original.is_empty() {
        return Err(DemoError::EmptyText);
    }

    Ok(TextReport {
        original: original.to_string(),
        upper: original.to_uppercase(),
        lower: original.to_lowercase(),
        capitalized: capitalize_words(original),
        reversed: reverse(original),
        word_count: count_words(original),
    })
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Uppercase every ASCII word character that starts a word.
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_word = false;
    for c in text.chars() {
        let word = is_word_char(c);
        if word && !prev_is_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = word;
    }
    out
}

pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_world() {
        let r = format_text("hello world").unwrap();
        assert_eq!(r.upper, "HELLO WORLD");
        assert_eq!(r.lower, "hello world");
        assert_eq!(r.capitalized, "Hello World");
        assert_eq!(r.reversed, "dlrow olleh");
        assert_eq!(r.word_count, 2);
    }

    #[test]
    fn test_trims_input() {
        let r = format_text("   Rust  is   fun  ").unwrap();
        assert_eq!(r.original, "Rust  is   fun");
        assert_eq!(r.word_count, 3);
    }

    #[test]
    fn test_empty_is_error() {
        assert!(matches!(format_text(""), Err(DemoError::EmptyText)));
        assert!(matches!(format_text(" \t\n"), Err(DemoError::EmptyText)));
    }

    #[test]
    fn test_capitalize_word_boundaries() {
        assert_eq!(capitalize_words("don't stop"), "Don'T Stop");
        assert_eq!(capitalize_words("snake_case-word"), "Snake_case-Word");
        assert_eq!(capitalize_words("2nd place"), "2nd Place");
        assert_eq!(capitalize_words("émile zola"), "éMile Zola");
    }

    #[test]
    fn test_reverse_unicode() {
        assert_eq!(reverse("añb"), "bña");
    }
}
