//! # verbo-core
//!
//! Core types, verb identity, and error types for verbo.
//!
//! This crate provides the foundational types shared across all verbo crates:
//! - Closed enums for languages, tenses, and conjugation groups
//! - `VerbIdentity` (infinitive with its derived root and group)
//! - Conjugation tables and the sparse mismatch report
//! - Catalog entities (verb entries, irregularity mark outcomes)
//! - Cross-cutting error types
//! - CLI response types

pub mod analysis;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod responses;

pub use analysis::{ConjugationTable, MismatchReport, TenseMismatch, VerbAnalysis};
pub use enums::{Language, Tense, VerbGroup};
pub use errors::CoreError;
pub use identity::VerbIdentity;

/// Number of grammatical persons in a conjugation table.
pub const PERSONS: usize = 6;
