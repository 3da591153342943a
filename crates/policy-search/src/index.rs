//! TF-IDF index construction and query vectorization.

use crate::tokenizer::tokenize;
use ndarray::Array1;
use policy_corpus::PolicyCorpus;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Statistics about a built index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of documents indexed
    pub documents: usize,
    /// Number of distinct vocabulary terms
    pub terms: usize,
}

/// TF-IDF index over one corpus snapshot: the vocabulary, per-dimension IDF
/// weights, and one L2-normalized vector per document, in corpus order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TfIdfIndex {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    document_vectors: Vec<Array1<f32>>,
}

impl TfIdfIndex {
    /// Build an index over every document in the corpus.
    pub(crate) fn build(corpus: &PolicyCorpus) -> Self {
        log::info!(
            "Building TF-IDF index over {} policy documents",
            corpus.len()
        );

        let token_lists: Vec<Vec<String>> = corpus
            .documents()
            .iter()
            .map(|document| tokenize(&document.content))
            .collect();

        // Dimensions are assigned in sorted token order, 0..N-1.
        let terms: BTreeSet<&str> = token_lists
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();
        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(dimension, term)| ((*term).to_string(), dimension))
            .collect();

        // Document frequency counts each term at most once per document.
        let mut document_frequency = vec![0usize; vocabulary.len()];
        for tokens in &token_lists {
            let distinct: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in distinct {
                if let Some(&dimension) = vocabulary.get(term) {
                    document_frequency[dimension] += 1;
                }
            }
        }

        // Smoothed IDF stays strictly positive, even for terms that appear
        // in every document.
        let total = corpus.len();
        let idf: Vec<f32> = document_frequency
            .iter()
            .map(|&df| ((total as f32 + 1.0) / (df as f32 + 1.0)).ln() + 1.0)
            .collect();

        let document_vectors: Vec<Array1<f32>> = token_lists
            .iter()
            .map(|tokens| weighted_vector(tokens, &vocabulary, &idf))
            .collect();

        log::info!(
            "Indexed {} policy documents, {} terms",
            document_vectors.len(),
            vocabulary.len()
        );

        Self {
            vocabulary,
            idf,
            document_vectors,
        }
    }

    /// Vectorize text in the frozen vocabulary space. Tokens outside the
    /// vocabulary are ignored; text with no recognized tokens yields the
    /// zero vector.
    pub(crate) fn vectorize(&self, text: &str) -> Array1<f32> {
        weighted_vector(&tokenize(text), &self.vocabulary, &self.idf)
    }

    /// Cosine similarity between the document at `position` and a query
    /// vector. Both sides are pre-normalized, so this is a dot product;
    /// zero vectors score 0.0 against everything.
    pub(crate) fn similarity(&self, position: usize, query_vector: &Array1<f32>) -> f32 {
        self.document_vectors
            .get(position)
            .map_or(0.0, |vector| query_vector.dot(vector))
    }

    pub(crate) fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.document_vectors.len(),
            terms: self.vocabulary.len(),
        }
    }
}

/// Sublinear term frequency times IDF over the fixed vocabulary, then
/// L2-normalized. No recognized tokens leaves the zero vector untouched.
fn weighted_vector(
    tokens: &[String],
    vocabulary: &HashMap<String, usize>,
    idf: &[f32],
) -> Array1<f32> {
    let mut vector = Array1::<f32>::zeros(vocabulary.len());

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    for (token, count) in counts {
        if let Some(&dimension) = vocabulary.get(token) {
            vector[dimension] = (1.0 + (count as f32).ln()) * idf[dimension];
        }
    }

    let norm = vector.dot(&vector).sqrt();
    if norm > 0.0 {
        vector /= norm;
    }
    vector
}

#[cfg(test)]
mod tests {
    use super::*;
    use policy_corpus::PolicyDocument;
    use pretty_assertions::assert_eq;

    fn doc(id: &str, content: &str) -> PolicyDocument {
        PolicyDocument::new(id, "Org A", "org_a", "MRI", "Imaging Policy", content)
    }

    fn two_doc_corpus() -> PolicyCorpus {
        PolicyCorpus::from_documents(vec![
            doc("A-001", "knee replacement requires physical therapy"),
            doc("B-001", "mri brain requires neurological exam"),
        ])
    }

    #[test]
    fn vocabulary_dimensions_follow_sorted_order() {
        let index = TfIdfIndex::build(&two_doc_corpus());

        // brain exam knee mri neurological physical replacement requires therapy
        assert_eq!(index.vocabulary.len(), 9);
        assert_eq!(index.vocabulary["brain"], 0);
        assert_eq!(index.vocabulary["exam"], 1);
        assert_eq!(index.vocabulary["therapy"], 8);
    }

    #[test]
    fn smoothed_idf_values() {
        let index = TfIdfIndex::build(&two_doc_corpus());

        // Appears in one of two documents: ln(3/2) + 1.
        let knee = index.vocabulary["knee"];
        assert!((index.idf[knee] - 1.405_465_1).abs() < 1e-6);

        // Appears in both documents: ln(3/3) + 1 = 1, still positive.
        let requires = index.vocabulary["requires"];
        assert!((index.idf[requires] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn document_vectors_are_unit_length() {
        let index = TfIdfIndex::build(&two_doc_corpus());
        for vector in &index.document_vectors {
            let norm = vector.dot(vector).sqrt();
            assert!((norm - 1.0).abs() < 1e-5, "norm was {norm}");
        }
    }

    #[test]
    fn query_vector_is_unit_length_or_zero() {
        let index = TfIdfIndex::build(&two_doc_corpus());

        let known = index.vectorize("knee therapy");
        assert!((known.dot(&known).sqrt() - 1.0).abs() < 1e-5);

        let unknown = index.vectorize("completely unrelated words");
        assert_eq!(unknown.dot(&unknown), 0.0);
    }

    #[test]
    fn build_is_deterministic() {
        let corpus = two_doc_corpus();
        let first = TfIdfIndex::build(&corpus);
        let second = TfIdfIndex::build(&corpus);
        assert_eq!(first, second);
    }

    #[test]
    fn similarity_is_zero_for_out_of_range_position() {
        let index = TfIdfIndex::build(&two_doc_corpus());
        let query = index.vectorize("knee");
        assert_eq!(index.similarity(99, &query), 0.0);
    }

    #[test]
    fn empty_corpus_builds_empty_index() {
        let index = TfIdfIndex::build(&PolicyCorpus::new());
        assert_eq!(
            index.stats(),
            IndexStats {
                documents: 0,
                terms: 0,
            }
        );
        assert_eq!(index.vectorize("anything").len(), 0);
    }
}
