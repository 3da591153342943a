//! The search engine: one corpus, one lazily built index, read-only queries.

use crate::error::Result;
use crate::index::{IndexStats, TfIdfIndex};
use crate::types::{PolicyMatch, SearchOptions};
use once_cell::sync::OnceCell;
use policy_corpus::{builtin_policies, PolicyCorpus};
use std::cmp::Ordering;
use std::path::Path;

/// TF-IDF retrieval engine over a fixed policy corpus.
///
/// The index is built at most once per engine, on the first call that needs
/// it. Concurrent first calls block on a single build; every later call is
/// a plain read, so the engine can be shared across threads.
#[derive(Debug)]
pub struct PolicySearchEngine {
    corpus: PolicyCorpus,
    index: OnceCell<TfIdfIndex>,
}

impl PolicySearchEngine {
    /// Create an engine over the given corpus.
    #[must_use]
    pub fn new(corpus: PolicyCorpus) -> Self {
        Self {
            corpus,
            index: OnceCell::new(),
        }
    }

    /// Engine over the built-in payer policy corpus.
    #[must_use]
    pub fn with_builtin_policies() -> Self {
        Self::new(builtin_policies())
    }

    /// Load a corpus from a JSON file and build an engine over it.
    pub async fn from_corpus_file(path: impl AsRef<Path>) -> Result<Self> {
        let corpus = PolicyCorpus::load(path).await?;
        Ok(Self::new(corpus))
    }

    /// Build the index now instead of on the first search. Idempotent; a
    /// second call returns without rebuilding.
    pub fn initialize(&self) {
        self.index();
    }

    /// Rank corpus documents against `query` by cosine similarity.
    ///
    /// Returns at most `options.top_k` matches, highest score first. Scores
    /// are rounded to 4 decimal places before ranking, and ties keep corpus
    /// order. Documents are not dropped for scoring 0.0; only the payer
    /// filter and `top_k` limit the result.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<PolicyMatch> {
        log::debug!(
            "Policy search: query='{}', top_k={}, payer={:?}",
            query,
            options.top_k,
            options.payer
        );

        let index = self.index();
        let query_vector = index.vectorize(query);

        let mut matches: Vec<PolicyMatch> = Vec::new();
        for (position, document) in self.corpus.documents().iter().enumerate() {
            if let Some(payer) = options.payer.as_deref() {
                if document.payer_id != payer {
                    continue;
                }
            }

            let similarity = index.similarity(position, &query_vector);
            matches.push(PolicyMatch {
                document_id: document.id.clone(),
                payer: document.payer.clone(),
                category: document.category.clone(),
                title: document.title.clone(),
                content: document.content.trim().to_string(),
                similarity_score: round_score(similarity),
            });
        }

        matches.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(Ordering::Equal)
        });
        matches.truncate(options.top_k);

        log::debug!("Policy search returned {} matches", matches.len());
        matches
    }

    /// Document and term counts, building the index first if needed.
    pub fn stats(&self) -> IndexStats {
        self.index().stats()
    }

    /// The corpus this engine searches.
    #[must_use]
    pub fn corpus(&self) -> &PolicyCorpus {
        &self.corpus
    }

    fn index(&self) -> &TfIdfIndex {
        self.index.get_or_init(|| TfIdfIndex::build(&self.corpus))
    }
}

/// Round to 4 decimal places.
fn round_score(score: f32) -> f32 {
    (score * 10_000.0).round() / 10_000.0
}
