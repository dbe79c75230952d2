//! Text analysis for Calyx.
//!
//! The engine uses a single, deliberately simple analysis step: lowercase
//! the input and split it into maximal runs of word characters. Product
//! names are short; anything heavier (stemming, language-aware
//! segmentation) is out of scope.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOKEN: Regex = Regex::new(r"\w+").unwrap();
}

/// Split `text` into lowercase tokens.
///
/// A token is a maximal run of word characters; punctuation and whitespace
/// are boundaries and never appear in the output.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        assert_eq!(tokenize("Electric Toothbrush"), vec!["electric", "toothbrush"]);
    }

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(tokenize("ORAL-B"), vec!["oral", "b"]);
    }

    #[test]
    fn test_tokenize_splits_on_punctuation_runs() {
        assert_eq!(
            tokenize("sonic... toothbrush, (2-pack)!"),
            vec!["sonic", "toothbrush", "2", "pack"]
        );
    }

    #[test]
    fn test_tokenize_empty_and_punctuation_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("--- !!! ---").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_digits() {
        assert_eq!(tokenize("Model X1"), vec!["model", "x1"]);
    }
}
