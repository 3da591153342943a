//! Core record type shared by the corpus and the search layer.

use serde::{Deserialize, Serialize};

/// A single payer policy document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PolicyDocument {
    /// Stable identifier, e.g. "UHC-KNEE-001"
    pub id: String,
    /// Payer display name, e.g. "United Healthcare"
    pub payer: String,
    /// Normalized payer tag used for filtering, e.g. "united_healthcare"
    pub payer_id: String,
    /// Procedure category tag, e.g. "knee_replacement"
    pub category: String,
    /// Document title
    pub title: String,
    /// Full policy text
    pub content: String,
}

impl PolicyDocument {
    /// Create a new policy document.
    pub fn new(
        id: impl Into<String>,
        payer: impl Into<String>,
        payer_id: impl Into<String>,
        category: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            payer: payer.into(),
            payer_id: payer_id.into(),
            category: category.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn document_construction() {
        let doc = PolicyDocument::new(
            "TEST-001",
            "Test Payer",
            "test_payer",
            "MRI",
            "MRI Prior Authorization Policy",
            "MRI studies require prior authorization.",
        );

        assert_eq!(doc.id, "TEST-001");
        assert_eq!(doc.payer_id, "test_payer");
        assert_eq!(doc.category, "MRI");
    }

    #[test]
    fn document_serializes_to_json() {
        let doc = PolicyDocument::new("TEST-001", "Test Payer", "test_payer", "MRI", "T", "C");

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["id"], "TEST-001");
        assert_eq!(json["payer_id"], "test_payer");

        let back: PolicyDocument = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc);
    }
}
