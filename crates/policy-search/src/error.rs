//! Error types for the search layer.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Corpus error: {0}")]
    Corpus(#[from] policy_corpus::CorpusError),
}
