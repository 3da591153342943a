//! # Policy Corpus
//!
//! Payer policy documents and structured prior-authorization data.
//!
//! This crate supplies the document side of policy retrieval: the
//! [`PolicyDocument`] record and the insertion-ordered [`PolicyCorpus`]
//! container with JSON persistence, the built-in payer policy corpus,
//! the structured [`PayerRegistry`] of per-procedure requirements, and
//! CPT / ICD-10 code description tables.
//!
//! ## Example
//!
//! ```rust
//! use policy_corpus::{builtin_policies, PayerRegistry};
//!
//! let corpus = builtin_policies();
//! assert!(corpus.get("UHC-KNEE-001").is_some());
//!
//! let registry = PayerRegistry::builtin();
//! let knee = registry
//!     .requirements("united_healthcare", "knee_replacement")
//!     .unwrap();
//! assert!(knee.requires_prior_auth);
//! ```

pub mod codes;

mod builtin;
mod corpus;
mod error;
mod payers;
mod types;

pub use builtin::builtin_policies;
pub use corpus::{PolicyCorpus, POLICY_CORPUS_SCHEMA_VERSION};
pub use error::{CorpusError, Result};
pub use payers::{normalize_payer_id, PayerPolicySet, PayerRegistry, ProcedureRequirements};
pub use types::PolicyDocument;
