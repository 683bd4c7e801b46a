//! Top-level module for the authorship verification engine.
//!
//! This module provides the whole statistical pipeline, including:
//! - Tokenization and URL removal (`tokenizer`)
//! - Known/questioned partitioning (`split`)
//! - Word n-gram tables (`NGramTable`) and per-author models (`AuthorModel`)
//! - The two-author scoring function (`Scorer`)
//! - Evaluation and reporting (`evaluate`, `AccuracyReport`)
//! - A one-call entry point (`verify`)

/// Word tokenization and URL stripping.
pub mod tokenizer;

/// Shuffled known/questioned split of an author's texts.
pub mod split;

/// Fixed-order word n-gram frequency table (`n >= 1`).
///
/// Handles window counting, lookups and merging of partial tables.
pub mod ngram_model;

/// Unigram, bigram and trigram tables of one author plus its unigram
/// occurrence rates. Built in parallel from known texts.
pub mod author_model;

/// Authors and the fixed two-slot pair they are compared in.
pub mod author;

/// Scoring and prediction for a questioned text.
pub mod scorer;

/// Accuracy evaluation over every questioned text.
pub mod evaluator;

/// Report types and their textual rendering.
pub mod report;

/// Run parameters: seed, split ratio, scoring weights.
pub mod verification_input;

/// High-level entry point tying a corpus provider to the evaluator.
pub mod verifier;
