//! Binary authorship verification with word n-gram fingerprints.
//!
//! This crate provides:
//! - Per-author unigram, bigram and trigram models built from "known" texts
//! - A weighted scoring function deciding which of two authors wrote a text
//! - An evaluator reporting accuracy over held-out "questioned" texts
//! - Corpus providers reading one text per line from `<author>.dat` files

/// Core models, scoring and evaluation.
pub mod model;

/// Where the raw texts of each author come from.
pub mod corpus;

/// Error type shared by every operation.
pub mod error;

/// I/O utilities (file loading, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use corpus::{CorpusProvider, FolderCorpus, InMemoryCorpus};
pub use error::{VerifyError, VerifyResult};
pub use model::report::AccuracyReport;
pub use model::verification_input::{ScoringWeights, VerificationInput};
pub use model::verifier::verify;
