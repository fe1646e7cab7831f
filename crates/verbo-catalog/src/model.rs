//! On-disk shapes of the verb database.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use verbo_core::entities::{CatalogFormat, VerbEntry};
use verbo_core::{CoreError, VerbGroup};

use crate::error::CatalogError;

/// Legacy key holding verbs that are irregular in every tense.
pub const IRREGULAR_KEY: &str = "ONREGELMATIG";

/// Legacy keys of the regular groups, in listing order.
pub const REGULAR_KEYS: [&str; 3] = ["ARE", "ERE", "IRE"];

// ---------------------------------------------------------------------------
// Legacy
// ---------------------------------------------------------------------------

/// `{ "ARE": [...], "ERE": [...], "IRE": [...], "ONREGELMATIG": [...] }`.
///
/// Irregularity is known per verb only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegacyCatalog {
    groups: BTreeMap<String, Vec<String>>,
}

impl LegacyCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the verb list stored under `key`.
    pub fn set_group(&mut self, key: impl Into<String>, verbs: Vec<String>) {
        self.groups.insert(key.into(), verbs);
    }

    /// Verbs stored under `key`; empty when the key is absent.
    #[must_use]
    pub fn group(&self, key: &str) -> &[String] {
        self.groups.get(key).map_or(&[][..], Vec::as_slice)
    }

    #[must_use]
    pub fn irregular(&self) -> &[String] {
        self.group(IRREGULAR_KEY)
    }

    #[must_use]
    pub fn is_irregular(&self, verb: &str) -> bool {
        self.irregular().iter().any(|v| v == verb)
    }

    /// ARE, ERE and IRE lists concatenated.
    #[must_use]
    pub fn regular_verbs(&self) -> Vec<&str> {
        REGULAR_KEYS
            .iter()
            .flat_map(|key| self.group(key))
            .map(String::as_str)
            .collect()
    }

    /// Every `(key, verbs)` pair, keys in sorted order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(key, verbs)| (key.as_str(), verbs.as_slice()))
    }

    #[must_use]
    pub fn contains(&self, verb: &str) -> bool {
        self.groups.values().flatten().any(|v| v == verb)
    }

    /// First regular key listing `verb`.
    #[must_use]
    pub fn regular_key_of(&self, verb: &str) -> Option<&'static str> {
        REGULAR_KEYS
            .into_iter()
            .find(|key| self.group(key).iter().any(|v| v == verb))
    }
}

// ---------------------------------------------------------------------------
// Current
// ---------------------------------------------------------------------------

/// `{ "verbs": [ { "infinitive", "group", "irregular_tenses" } ] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentCatalog {
    pub verbs: Vec<VerbEntry>,
}

// ---------------------------------------------------------------------------
// Either
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogData {
    Legacy(LegacyCatalog),
    Current(CurrentCatalog),
}

impl CatalogData {
    /// Parse either layout. A top-level `verbs` key selects the current one.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Json`] for invalid JSON or entries of the wrong shape,
    /// [`CatalogError::Malformed`] when the document is not an object.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let Some(object) = value.as_object() else {
            return Err(CatalogError::Malformed(
                "top level must be a JSON object".to_string(),
            ));
        };
        if object.contains_key("verbs") {
            Ok(Self::Current(serde_json::from_value(value)?))
        } else {
            Ok(Self::Legacy(serde_json::from_value(value)?))
        }
    }

    /// Pretty JSON, two-space indent, non-ASCII kept as is.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        let text = match self {
            Self::Legacy(legacy) => serde_json::to_string_pretty(legacy)?,
            Self::Current(current) => serde_json::to_string_pretty(current)?,
        };
        Ok(text)
    }

    #[must_use]
    pub const fn format(&self) -> CatalogFormat {
        match self {
            Self::Legacy(_) => CatalogFormat::Legacy,
            Self::Current(_) => CatalogFormat::Current,
        }
    }
}

// ---------------------------------------------------------------------------
// GroupFilter
// ---------------------------------------------------------------------------

/// Selection used by [`crate::VerbCatalog::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupFilter {
    /// Exact conjugation group.
    Group(VerbGroup),
    /// Regular for the tense, or regular everywhere when no tense is given.
    Regular,
    /// Irregular for the tense, or irregular somewhere when no tense is given.
    Irregular,
}

impl GroupFilter {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Group(group) => group.as_str(),
            Self::Regular => "REGULAR",
            Self::Irregular => "IRREGULAR",
        }
    }
}

impl fmt::Display for GroupFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "REGULAR" => Ok(Self::Regular),
            "IRREGULAR" | "ONREGELMATIG" => Ok(Self::Irregular),
            other => other
                .parse::<VerbGroup>()
                .map(Self::Group)
                .map_err(|_| CoreError::UnknownGroup(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use verbo_core::Tense;

    use super::*;

    #[test]
    fn detects_current_layout() {
        let data = CatalogData::from_json(
            r#"{"verbs": [{"infinitive": "andare", "group": "ARE", "irregular_tenses": ["presente"]}]}"#,
        )
        .unwrap();
        let CatalogData::Current(current) = data else {
            panic!("expected current layout");
        };
        assert_eq!(current.verbs[0].irregular_tenses, vec![Tense::Presente]);
    }

    #[test]
    fn missing_irregular_tenses_defaults_to_empty() {
        let data =
            CatalogData::from_json(r#"{"verbs": [{"infinitive": "amare", "group": "ARE"}]}"#)
                .unwrap();
        assert_eq!(data.format(), CatalogFormat::Current);
        let CatalogData::Current(current) = data else {
            panic!("expected current layout");
        };
        assert!(current.verbs[0].is_fully_regular());
    }

    #[test]
    fn detects_legacy_layout() {
        let data =
            CatalogData::from_json(r#"{"ARE": ["amare"], "ONREGELMATIG": ["essere"]}"#).unwrap();
        let CatalogData::Legacy(legacy) = data else {
            panic!("expected legacy layout");
        };
        assert!(legacy.is_irregular("essere"));
        assert_eq!(legacy.regular_verbs(), vec!["amare"]);
        assert!(legacy.group("IRE").is_empty());
    }

    #[test]
    fn rejects_non_object() {
        assert!(matches!(
            CatalogData::from_json("[1, 2]"),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_unknown_tense_in_current_layout() {
        assert!(matches!(
            CatalogData::from_json(
                r#"{"verbs": [{"infinitive": "x", "group": "ARE", "irregular_tenses": ["aoristo"]}]}"#
            ),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn pretty_json_keeps_non_ascii() {
        let mut legacy = LegacyCatalog::new();
        legacy.set_group("ARE", vec!["perché".to_string()]);
        let text = CatalogData::Legacy(legacy).to_json_pretty().unwrap();
        assert!(text.contains("perché"));
        assert!(text.contains("\n  \"ARE\""));
    }

    #[rstest]
    #[case("are", GroupFilter::Group(VerbGroup::Are))]
    #[case("OTHER", GroupFilter::Group(VerbGroup::Other))]
    #[case("regular", GroupFilter::Regular)]
    #[case("ONREGELMATIG", GroupFilter::Irregular)]
    #[case("Irregular", GroupFilter::Irregular)]
    fn parses_group_filters(#[case] raw: &str, #[case] expected: GroupFilter) {
        assert_eq!(raw.parse::<GroupFilter>().unwrap(), expected);
    }

    #[test]
    fn unknown_filter_is_an_error() {
        assert!(matches!(
            "URE".parse::<GroupFilter>(),
            Err(CoreError::UnknownGroup(_))
        ));
    }
}
