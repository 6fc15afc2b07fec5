// tokenize.rs - Word splitting for word-level comparison

use regex::Regex;

/// Split `text` into words on `delimiter`, dropping empty pieces so that
/// leading, trailing and repeated delimiters produce no empty words.
pub fn split_words(text: &str, delimiter: &Regex) -> Vec<String> {
    delimiter
        .split(text)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_split() {
        let ws = Regex::new(r"\s+").unwrap();
        assert_eq!(split_words("the quick  brown\tfox", &ws), vec!["the", "quick", "brown", "fox"]);
        assert_eq!(split_words("  padded  ", &ws), vec!["padded"]);
        assert!(split_words("", &ws).is_empty());
        assert!(split_words("   ", &ws).is_empty());
    }

    #[test]
    fn test_custom_delimiter() {
        let punct = Regex::new(r"[\s,.;]+").unwrap();
        assert_eq!(split_words("one, two; three.", &punct), vec!["one", "two", "three"]);
    }
}
