//! Query and document tokenization.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Maximal runs of ASCII letters and digits; everything else separates tokens.
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9]+").expect("token pattern is valid"));

/// English function words excluded from indexing and queries.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "the", "a", "an", "is", "are", "was", "were", "be", "been", "being", "have", "has",
        "had", "do", "does", "did", "will", "would", "shall", "should", "may", "might", "must",
        "can", "could", "of", "in", "to", "for", "with", "on", "at", "from", "by", "about",
        "as", "into", "through", "during", "before", "after", "above", "below", "between",
        "and", "but", "or", "nor", "not", "so", "yet", "both", "either", "neither", "each",
        "every", "all", "any", "few", "more", "most", "other", "some", "such", "no", "only",
        "own", "same", "than", "too", "very", "just", "because", "if", "when", "while", "this",
        "that", "these", "those", "it", "its", "i", "me", "my", "we", "our", "you", "your",
        "he", "him", "his", "she", "her", "they", "them", "their",
    ])
});

/// Split text into normalized tokens: lowercased alphanumeric runs with
/// stopwords and single-character tokens removed. Order and repetitions
/// follow the input.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|token| token.as_str())
        .filter(|token| token.len() > 1 && !STOPWORDS.contains(*token))
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lowercases_and_splits_on_non_alphanumeric() {
        assert_eq!(
            tokenize("Prior-Authorization: REQUIRED (CPT 27447)"),
            vec!["prior", "authorization", "required", "cpt", "27447"]
        );
    }

    #[test]
    fn drops_stopwords_and_single_characters() {
        assert_eq!(
            tokenize("the knee is a joint, I think"),
            vec!["knee", "joint", "think"]
        );
        assert_eq!(tokenize("x r 7 q"), Vec::<String>::new());
    }

    #[test]
    fn keeps_repetitions_in_input_order() {
        assert_eq!(
            tokenize("MRI brain MRI spine"),
            vec!["mri", "brain", "mri", "spine"]
        );
    }

    #[test]
    fn empty_and_stopword_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("of the and or but").is_empty());
    }
}
