//! Search request options and result records.

use serde::{Deserialize, Serialize};

/// Options for a policy search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of matches to return
    pub top_k: usize,
    /// Restrict matches to one payer tag (e.g. "aetna") when set
    pub payer: Option<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            top_k: 3,
            payer: None,
        }
    }
}

impl SearchOptions {
    /// Builder: set the maximum number of matches
    #[must_use]
    pub const fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Builder: restrict matches to a payer tag
    #[must_use]
    pub fn payer(mut self, payer: impl Into<String>) -> Self {
        self.payer = Some(payer.into());
        self
    }
}

/// A scored policy document returned by a search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PolicyMatch {
    /// Stable document identifier
    pub document_id: String,
    /// Payer display name
    pub payer: String,
    /// Procedure category tag
    pub category: String,
    /// Document title
    pub title: String,
    /// Full policy text with surrounding whitespace trimmed
    pub content: String,
    /// Cosine similarity against the query, rounded to 4 decimal places
    pub similarity_score: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_options() {
        let options = SearchOptions::default();
        assert_eq!(options.top_k, 3);
        assert_eq!(options.payer, None);
    }

    #[test]
    fn builder_style_options() {
        let options = SearchOptions::default().top_k(5).payer("aetna");
        assert_eq!(options.top_k, 5);
        assert_eq!(options.payer.as_deref(), Some("aetna"));
    }
}
