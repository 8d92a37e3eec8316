//! Surface-form helpers shared by the rules

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

static NON_WORD: OnceLock<Regex> = OnceLock::new();
static ONLY_NON_WORD: OnceLock<Regex> = OnceLock::new();
static DIGITS: OnceLock<Regex> = OnceLock::new();

/// A single non-word character: anything but a letter or a number
///
/// Combining marks, connector punctuation and underscore are all non-word.
fn non_word() -> &'static Regex {
    NON_WORD.get_or_init(|| Regex::new(r"[^\p{L}\p{N}]").expect("non-word pattern is valid"))
}

fn only_non_word() -> &'static Regex {
    ONLY_NON_WORD
        .get_or_init(|| Regex::new(r"^[^\p{L}\p{N}]+$").expect("non-word pattern is valid"))
}

/// Decimal digits (`Nd`) only; `Ⅻ` and `½` are numbers but not digits
fn digits() -> &'static Regex {
    DIGITS.get_or_init(|| Regex::new(r"^\d+$").expect("digit pattern is valid"))
}

/// Title-case every whitespace-separated word: first character upper, rest lower
///
/// `"hELLo wORLD"` becomes `"Hello World"`. Whitespace is preserved as is.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch.is_whitespace() {
            result.push(ch);
            at_word_start = true;
        } else if at_word_start {
            result.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            result.extend(ch.to_lowercase());
        }
    }

    result
}

/// Remove every character outside the ASCII range
pub fn strip_non_ascii(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(char::is_ascii).collect())
    }
}

/// Remove punctuation, symbols, whitespace and underscores
pub fn strip_non_word(text: &str) -> Cow<'_, str> {
    non_word().replace_all(text, "")
}

/// True when the text is one or more characters, none of them alphanumeric
pub fn is_all_non_word(text: &str) -> bool {
    only_non_word().is_match(text)
}

/// True when the text is one or more decimal digits in any script
pub fn is_all_digits(text: &str) -> bool {
    digits().is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_single_word() {
        assert_eq!(title_case("london"), "London");
        assert_eq!(title_case("LONDON"), "London");
        assert_eq!(title_case("lOnDoN"), "London");
    }

    #[test]
    fn test_title_case_per_whitespace_word() {
        assert_eq!(title_case("new  DELHI"), "New  Delhi");
        assert_eq!(title_case("a\tb"), "A\tB");
    }

    #[test]
    fn test_title_case_first_character_only() {
        // Only whitespace starts a new word
        assert_eq!(title_case("don't"), "Don't");
        assert_eq!(title_case("'hello"), "'hello");
        assert_eq!(title_case("x-RAY"), "X-ray");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_strip_non_ascii() {
        assert_eq!(strip_non_ascii("okay"), "okay");
        assert!(matches!(strip_non_ascii("okay"), Cow::Borrowed(_)));
        assert_eq!(strip_non_ascii("yaar😂"), "yaar");
        assert_eq!(strip_non_ascii("“hello”"), "hello");
        assert_eq!(strip_non_ascii("प्यार"), "");
    }

    #[test]
    fn test_strip_non_word() {
        assert_eq!(strip_non_word("12:34"), "1234");
        assert_eq!(strip_non_word("1,000_000"), "1000000");
        assert_eq!(strip_non_word("..."), "");
        assert_eq!(strip_non_word("½-Ⅻ"), "½Ⅻ");
        // Devanagari vowel signs are marks, not letters
        assert_eq!(strip_non_word("है"), "ह");
    }

    #[test]
    fn test_is_all_digits() {
        assert!(is_all_digits("2024"));
        assert!(is_all_digits("१२३"));
        assert!(!is_all_digits("Ⅻ"));
        assert!(!is_all_digits("½"));
        assert!(!is_all_digits("12a"));
        assert!(!is_all_digits(""));
    }

    #[test]
    fn test_is_all_non_word() {
        assert!(is_all_non_word("..."));
        assert!(is_all_non_word("!?"));
        assert!(is_all_non_word("_"));
        assert!(is_all_non_word("😂"));
        assert!(!is_all_non_word(""));
        assert!(!is_all_non_word("a."));
        assert!(!is_all_non_word("5"));
        assert!(!is_all_non_word("½"));
        assert!(!is_all_non_word("Ⅻ"));
    }
}
