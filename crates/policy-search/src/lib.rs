//! # Policy Search
//!
//! Lexical similarity search over payer policy documents.
//!
//! The engine builds a TF-IDF vector index over a fixed corpus exactly once,
//! then ranks documents against free-text queries by cosine similarity.
//! Queries are pure reads, so one engine can serve many threads.
//!
//! ## Architecture
//!
//! ```text
//! PolicyCorpus (insertion-ordered documents)
//!     │
//!     ├──> Tokenizer (lowercase, alphanumeric runs, stopwords dropped)
//!     │
//!     ├──> TfIdfIndex (built once behind a one-shot latch)
//!     │      ├─> Vocabulary: token -> dimension, sorted token order
//!     │      ├─> Smoothed IDF weight per dimension
//!     │      └─> L2-normalized vector per document
//!     │
//!     └──> search() = query vector · document vectors
//!            └─> payer filter, score rounding, rank, top-k
//! ```
//!
//! ## Example
//!
//! ```rust
//! use policy_search::{PolicySearchEngine, SearchOptions};
//!
//! let engine = PolicySearchEngine::with_builtin_policies();
//! engine.initialize();
//!
//! let options = SearchOptions::default().top_k(2).payer("united_healthcare");
//! for result in engine.search("knee replacement physical therapy", &options) {
//!     println!("{} {:.4}", result.document_id, result.similarity_score);
//! }
//! ```

mod engine;
mod error;
mod index;
mod tokenizer;
mod types;

pub use engine::PolicySearchEngine;
pub use error::{Result, SearchError};
pub use index::IndexStats;
pub use types::{PolicyMatch, SearchOptions};

// Re-export corpus types for convenience
pub use policy_corpus::{PolicyCorpus, PolicyDocument};
