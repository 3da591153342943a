use crate::error::{CorpusError, Result};
use crate::types::PolicyDocument;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const POLICY_CORPUS_SCHEMA_VERSION: u32 = 1;

/// Insertion-ordered collection of policy documents.
///
/// Document order is observable: the search layer breaks similarity ties
/// by corpus position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyCorpus {
    documents: Vec<PolicyDocument>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedPolicyCorpus {
    schema_version: u32,
    documents: Vec<PolicyDocument>,
}

impl PolicyCorpus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from documents, preserving their order.
    #[must_use]
    pub fn from_documents(documents: Vec<PolicyDocument>) -> Self {
        Self { documents }
    }

    /// Load a corpus from a JSON file produced by [`save`](Self::save).
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let persisted: PersistedPolicyCorpus = serde_json::from_slice(&bytes)?;
        if persisted.schema_version != POLICY_CORPUS_SCHEMA_VERSION {
            return Err(CorpusError::UnsupportedSchemaVersion {
                found: persisted.schema_version,
                expected: POLICY_CORPUS_SCHEMA_VERSION,
            });
        }
        log::info!(
            "Loaded {} policy documents from {}",
            persisted.documents.len(),
            path.display()
        );
        Ok(Self {
            documents: persisted.documents,
        })
    }

    /// Save the corpus as pretty-printed JSON, writing a temp file first and
    /// renaming it over the target.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let persisted = PersistedPolicyCorpus {
            schema_version: POLICY_CORPUS_SCHEMA_VERSION,
            documents: self.documents.clone(),
        };
        let bytes = serde_json::to_vec_pretty(&persisted)?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    /// Append a document at the end of the corpus.
    pub fn push(&mut self, document: PolicyDocument) {
        self.documents.push(document);
    }

    /// Look up a document by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PolicyDocument> {
        self.documents.iter().find(|document| document.id == id)
    }

    /// Documents in corpus order.
    #[must_use]
    pub fn documents(&self) -> &[PolicyDocument] {
        &self.documents
    }

    /// Distinct payer tags in order of first appearance.
    #[must_use]
    pub fn payer_ids(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for document in &self.documents {
            if !seen.contains(&document.payer_id) {
                seen.push(document.payer_id.clone());
            }
        }
        seen
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn doc(id: &str, payer: &str, payer_id: &str, content: &str) -> PolicyDocument {
        PolicyDocument::new(id, payer, payer_id, "MRI", "Imaging Policy", content)
    }

    #[tokio::test]
    async fn corpus_roundtrip_preserves_order_and_fields() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("corpus.json");

        let corpus = PolicyCorpus::from_documents(vec![
            doc("A-001", "Org A", "org_a", "alpha"),
            doc("B-001", "Org B", "org_b", "beta"),
            doc("A-002", "Org A", "org_a", "gamma"),
        ]);
        corpus.save(&path).await.unwrap();

        let loaded = PolicyCorpus::load(&path).await.unwrap();
        assert_eq!(loaded, corpus);
        assert_eq!(
            loaded.get("B-001").map(|d| d.content.as_str()),
            Some("beta")
        );
        assert!(loaded.get("missing").is_none());
    }

    #[tokio::test]
    async fn load_rejects_unknown_schema_version() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("corpus.json");

        let body = serde_json::json!({
            "schema_version": 99,
            "documents": [],
        });
        tokio::fs::write(&path, serde_json::to_vec(&body).unwrap())
            .await
            .unwrap();

        let err = PolicyCorpus::load(&path).await.unwrap_err();
        assert!(
            matches!(
                err,
                CorpusError::UnsupportedSchemaVersion {
                    found: 99,
                    expected: POLICY_CORPUS_SCHEMA_VERSION,
                }
            ),
            "unexpected error: {err}"
        );
    }

    #[tokio::test]
    async fn load_surfaces_missing_file_as_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = PolicyCorpus::load(tmp.path().join("nope.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, CorpusError::Io(_)), "unexpected error: {err}");
    }

    #[test]
    fn payer_ids_follow_first_appearance() {
        let mut corpus = PolicyCorpus::new();
        assert!(corpus.is_empty());

        corpus.push(doc("B-001", "Org B", "org_b", "beta"));
        corpus.push(doc("A-001", "Org A", "org_a", "alpha"));
        corpus.push(doc("B-002", "Org B", "org_b", "delta"));

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.payer_ids(), vec!["org_b", "org_a"]);
    }
}
