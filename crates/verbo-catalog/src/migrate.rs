//! Legacy → current layout.

use std::collections::HashSet;

use verbo_core::entities::VerbEntry;
use verbo_core::{Tense, VerbGroup};

use crate::model::{CurrentCatalog, LegacyCatalog};

/// Convert verb-level irregularity into tense-level irregularity.
///
/// ARE, ERE and IRE verbs keep their group; those also listed as
/// ONREGELMATIG become irregular in every tense. Remaining ONREGELMATIG verbs
/// are classified by ending (OTHER when none matches) and are irregular in
/// every tense. The result is sorted by infinitive, one entry per verb.
#[must_use]
pub fn migrate_legacy(legacy: &LegacyCatalog) -> CurrentCatalog {
    let mut seen = HashSet::new();
    let mut verbs = Vec::new();

    for group in VerbGroup::REGULAR {
        for verb in legacy.group(group.as_str()) {
            if !seen.insert(verb.as_str()) {
                continue;
            }
            let mut entry = VerbEntry::new(verb.clone(), group);
            if legacy.is_irregular(verb) {
                entry.irregular_tenses = Tense::ALL.to_vec();
            }
            verbs.push(entry);
        }
    }

    for verb in legacy.irregular() {
        if !seen.insert(verb.as_str()) {
            continue;
        }
        let mut entry = VerbEntry::new(verb.clone(), VerbGroup::classify(verb));
        entry.irregular_tenses = Tense::ALL.to_vec();
        verbs.push(entry);
    }

    verbs.sort_by(|a, b| a.infinitive.cmp(&b.infinitive));
    tracing::info!(verbs = verbs.len(), "migrated legacy verb database");
    CurrentCatalog { verbs }
}
