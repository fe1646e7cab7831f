//! # verbo-catalog
//!
//! The verb database: which verbs exist, their group, and the tenses in
//! which each one is irregular.
//!
//! Two on-disk layouts are understood. The legacy layout files verbs under
//! `ARE`/`ERE`/`IRE`/`ONREGELMATIG` and only knows verb-level irregularity;
//! the current layout stores `irregular_tenses` per verb. [`VerbCatalog`]
//! answers queries over either, [`migrate_legacy`] converts between them and
//! [`import_raw`] builds a legacy catalog from raw verb lists.
//! [`VerbCatalog::quiz`] draws random practice questions.

mod catalog;
mod defaults;
mod error;
mod import;
mod migrate;
mod model;
mod quiz;

pub use catalog::{VerbCatalog, legacy_key_for};
pub use defaults::KNOWN_IRREGULAR;
pub use error::CatalogError;
pub use import::{ImportReport, import_raw};
pub use migrate::migrate_legacy;
pub use model::{
    CatalogData, CurrentCatalog, GroupFilter, IRREGULAR_KEY, LegacyCatalog, REGULAR_KEYS,
};
pub use quiz::QuizOptions;
