//! Languages, tenses, and conjugation groups.
//!
//! Tenses serialize with the Italian tense names used throughout the verb
//! database (`presente`, `passato_remoto`, ...). Groups serialize upper-case
//! (`ARE`, `ERE`, `IRE`, `OTHER`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// Language served by a practice backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Language {
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
}

impl Language {
    /// ISO 639-1 code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Italian => "it",
            Self::French => "fr",
            Self::German => "de",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "it" | "italian" | "italiano" => Ok(Self::Italian),
            "fr" | "french" | "francais" => Ok(Self::French),
            "de" | "german" | "deutsch" => Ok(Self::German),
            _ => Err(CoreError::UnknownLanguage(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tense
// ---------------------------------------------------------------------------

/// Indicative tense, named after its Italian label.
///
/// Declaration order is the canonical report order, so ordered maps keyed by
/// `Tense` iterate `presente → imperfetto → futuro → passato_remoto → ...`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Presente,
    Imperfetto,
    Futuro,
    PassatoRemoto,
    PassatoProssimo,
    TrapassatoProssimo,
    TrapassatoRemoto,
    FuturoAnteriore,
}

impl Tense {
    /// Simple tenses with a regular suffix rule, in report order.
    pub const ANALYZED: [Self; 4] = [
        Self::Presente,
        Self::Imperfetto,
        Self::Futuro,
        Self::PassatoRemoto,
    ];

    /// Every tense that can carry an irregularity mark in the verb database.
    pub const ALL: [Self; 8] = [
        Self::Presente,
        Self::Imperfetto,
        Self::Futuro,
        Self::PassatoRemoto,
        Self::PassatoProssimo,
        Self::TrapassatoProssimo,
        Self::TrapassatoRemoto,
        Self::FuturoAnteriore,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Presente => "presente",
            Self::Imperfetto => "imperfetto",
            Self::Futuro => "futuro",
            Self::PassatoRemoto => "passato_remoto",
            Self::PassatoProssimo => "passato_prossimo",
            Self::TrapassatoProssimo => "trapassato_prossimo",
            Self::TrapassatoRemoto => "trapassato_remoto",
            Self::FuturoAnteriore => "futuro_anteriore",
        }
    }

    /// Whether the tense is a single-word form with a suffix rule.
    #[must_use]
    pub const fn is_analyzed(self) -> bool {
        matches!(
            self,
            Self::Presente | Self::Imperfetto | Self::Futuro | Self::PassatoRemoto
        )
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tense {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|tense| tense.as_str() == needle)
            .ok_or_else(|| CoreError::UnknownTense(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// VerbGroup
// ---------------------------------------------------------------------------

/// Italian conjugation class, decided by the infinitive ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerbGroup {
    Are,
    Ere,
    Ire,
    Other,
}

impl VerbGroup {
    pub const REGULAR: [Self; 3] = [Self::Are, Self::Ere, Self::Ire];

    /// Classify an infinitive by its three-letter ending.
    #[must_use]
    pub fn classify(infinitive: &str) -> Self {
        Self::REGULAR
            .into_iter()
            .find(|group| group.suffix().is_some_and(|s| infinitive.ends_with(s)))
            .unwrap_or(Self::Other)
    }

    /// Infinitive ending for the group; `None` for `Other`.
    #[must_use]
    pub const fn suffix(self) -> Option<&'static str> {
        match self {
            Self::Are => Some("are"),
            Self::Ere => Some("ere"),
            Self::Ire => Some("ire"),
            Self::Other => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Are => "ARE",
            Self::Ere => "ERE",
            Self::Ire => "IRE",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for VerbGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerbGroup {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ARE" => Ok(Self::Are),
            "ERE" => Ok(Self::Ere),
            "IRE" => Ok(Self::Ire),
            "OTHER" => Ok(Self::Other),
            _ => Err(CoreError::UnknownGroup(s.to_string())),
        }
    }
}
