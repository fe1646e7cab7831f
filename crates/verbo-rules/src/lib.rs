//! # verbo-rules
//!
//! Rule-based conjugation for verbo.
//!
//! - [`generator`]: regular Italian forms from fixed suffix tables
//! - [`normalize`]: comparison keys (case, whitespace, accented vowels)
//! - [`reporter`]: observed vs. regular forms, as a sparse mismatch report
//! - [`record`]: conjugation records (`word` + `conjugations[]`) from JSON
//! - [`german`]: small German rule table with an irregular-verb override
//! - [`check`]: person labels and quiz answer checking
//! - [`conjugate`]: per-language conjugation tables

pub mod check;
pub mod conjugate;
pub mod error;
pub mod generator;
pub mod german;
pub mod normalize;
pub mod record;
pub mod reporter;

pub use conjugate::conjugate;
pub use error::RulesError;
pub use normalize::normalize;
pub use record::{ConjugationRecord, analyze_record};
pub use reporter::{analyze, compare};
