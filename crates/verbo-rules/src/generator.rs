//! Regular Italian conjugation from fixed suffix tables.
//!
//! Presente, imperfetto and passato remoto append group-specific endings to
//! the root. Futuro works from the whole infinitive and is the same for every
//! group, `OTHER` included. Groups without a rule produce no forms at all;
//! callers treat an empty result as "cannot assess".

use verbo_core::{ConjugationTable, PERSONS, Tense, VerbGroup, VerbIdentity};

type Endings = [&'static str; PERSONS];

/// Endings of one tense for the three regular groups.
struct GroupEndings {
    are: Endings,
    ere: Endings,
    ire: Endings,
}

impl GroupEndings {
    const fn for_group(&self, group: VerbGroup) -> Option<&Endings> {
        match group {
            VerbGroup::Are => Some(&self.are),
            VerbGroup::Ere => Some(&self.ere),
            VerbGroup::Ire => Some(&self.ire),
            VerbGroup::Other => None,
        }
    }
}

static PRESENTE: GroupEndings = GroupEndings {
    are: ["o", "i", "a", "iamo", "ate", "ano"],
    ere: ["o", "i", "e", "iamo", "ete", "ono"],
    ire: ["o", "i", "e", "iamo", "ite", "ono"],
};

static IMPERFETTO: GroupEndings = GroupEndings {
    are: ["avo", "avi", "ava", "avamo", "avate", "avano"],
    ere: ["evo", "evi", "eva", "evamo", "evate", "evano"],
    ire: ["ivo", "ivi", "iva", "ivamo", "ivate", "ivano"],
};

// ERE has a second historical pattern (-etti, -ette, -ettero); only the -ei
// series is generated.
static PASSATO_REMOTO: GroupEndings = GroupEndings {
    are: ["ai", "asti", "ò", "ammo", "aste", "arono"],
    ere: ["ei", "esti", "é", "emmo", "este", "erono"],
    ire: ["ii", "isti", "ì", "immo", "iste", "irono"],
};

static FUTURO: Endings = ["ò", "ai", "à", "emo", "ete", "anno"];

/// Root-based endings table for a tense; `None` for futuro and compound tenses.
fn root_table(tense: Tense) -> Option<&'static GroupEndings> {
    match tense {
        Tense::Presente => Some(&PRESENTE),
        Tense::Imperfetto => Some(&IMPERFETTO),
        Tense::PassatoRemoto => Some(&PASSATO_REMOTO),
        Tense::Futuro
        | Tense::PassatoProssimo
        | Tense::TrapassatoProssimo
        | Tense::TrapassatoRemoto
        | Tense::FuturoAnteriore => None,
    }
}

fn append_all(stem: &str, endings: &Endings) -> Vec<String> {
    endings.iter().map(|ending| format!("{stem}{ending}")).collect()
}

fn from_root(tense: Tense, root: &str, group: VerbGroup) -> Vec<String> {
    root_table(tense)
        .and_then(|table| table.for_group(group))
        .map(|endings| append_all(root, endings))
        .unwrap_or_default()
}

#[must_use]
pub fn presente(root: &str, group: VerbGroup) -> Vec<String> {
    from_root(Tense::Presente, root, group)
}

#[must_use]
pub fn imperfetto(root: &str, group: VerbGroup) -> Vec<String> {
    from_root(Tense::Imperfetto, root, group)
}

#[must_use]
pub fn passato_remoto(root: &str, group: VerbGroup) -> Vec<String> {
    from_root(Tense::PassatoRemoto, root, group)
}

/// Future stem: `-are` becomes `-er`, any other infinitive drops its last letter.
#[must_use]
pub fn futuro_stem(infinitive: &str) -> String {
    if let Some(base) = infinitive.strip_suffix("are") {
        return format!("{base}er");
    }
    let mut stem = infinitive.to_string();
    stem.pop();
    stem
}

/// Six future forms. Never empty.
#[must_use]
pub fn futuro(infinitive: &str) -> Vec<String> {
    append_all(&futuro_stem(infinitive), &FUTURO)
}

/// Regular forms of `tense` for a verb, or an empty vector when no rule exists.
#[must_use]
pub fn regular_forms(identity: &VerbIdentity, tense: Tense) -> Vec<String> {
    match tense {
        Tense::Futuro => futuro(&identity.infinitive),
        other => from_root(other, &identity.root, identity.group),
    }
}

/// All analyzed tenses that have a rule for this verb.
#[must_use]
pub fn canonical_conjugation(identity: &VerbIdentity) -> ConjugationTable {
    Tense::ANALYZED
        .into_iter()
        .map(|tense| (tense, regular_forms(identity, tense)))
        .filter(|(_, forms)| !forms.is_empty())
        .collect()
}
