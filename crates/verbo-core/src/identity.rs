use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::VerbGroup;
use crate::errors::CoreError;

/// An infinitive together with the root and group derived from its ending.
///
/// `root` is the infinitive with the matched `are`/`ere`/`ire` removed, or the
/// whole infinitive for [`VerbGroup::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct VerbIdentity {
    pub infinitive: String,
    pub root: String,
    pub group: VerbGroup,
}

impl VerbIdentity {
    /// Derive root and group from an infinitive as given.
    ///
    /// No validation happens here; see [`VerbIdentity::parse`] for input that
    /// crosses a user-facing boundary.
    #[must_use]
    pub fn new(infinitive: impl Into<String>) -> Self {
        let infinitive = infinitive.into();
        let group = VerbGroup::classify(&infinitive);
        let root = group
            .suffix()
            .and_then(|suffix| infinitive.strip_suffix(suffix))
            .unwrap_or(&infinitive)
            .to_string();
        Self {
            infinitive,
            root,
            group,
        }
    }

    /// Trim, lower-case and validate an infinitive before deriving its identity.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for an empty infinitive or one that
    /// contains whitespace (a phrase rather than a single verb).
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let infinitive = raw.trim().to_lowercase();
        if infinitive.is_empty() {
            return Err(CoreError::Validation("infinitive is empty".to_string()));
        }
        if infinitive.chars().any(char::is_whitespace) {
            return Err(CoreError::Validation(format!(
                "infinitive '{infinitive}' must be a single word"
            )));
        }
        Ok(Self::new(infinitive))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("parlare", "parl", VerbGroup::Are)]
    #[case("vedere", "ved", VerbGroup::Ere)]
    #[case("capire", "cap", VerbGroup::Ire)]
    #[case("porre", "porre", VerbGroup::Other)]
    fn derives_root_and_group(
        #[case] infinitive: &str,
        #[case] root: &str,
        #[case] group: VerbGroup,
    ) {
        let identity = VerbIdentity::new(infinitive);
        assert_eq!(identity.root, root);
        assert_eq!(identity.group, group);
        if let Some(suffix) = group.suffix() {
            assert_eq!(format!("{}{suffix}", identity.root), infinitive);
        }
    }

    #[test]
    fn bare_suffix_yields_empty_root() {
        let identity = VerbIdentity::new("are");
        assert_eq!(identity.root, "");
        assert_eq!(identity.group, VerbGroup::Are);
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let identity = VerbIdentity::parse("  Parlare \n").unwrap();
        assert_eq!(identity.infinitive, "parlare");
        assert_eq!(identity.root, "parl");
    }

    #[test]
    fn parse_rejects_empty_and_phrases() {
        assert!(matches!(
            VerbIdentity::parse("   "),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            VerbIdentity::parse("io parlo"),
            Err(CoreError::Validation(_))
        ));
    }
}
