//! Small German conjugator: an irregular-verb table over regular stem rules.
//!
//! Covers present, Präteritum, Perfekt and Futur I. Perfekt of regular verbs
//! always uses `haben`.

use verbo_core::{Language, PERSONS, Tense};

use crate::error::RulesError;

/// German tenses with a rule in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GermanTense {
    Present,
    Imperfect,
    Perfect,
    Future,
}

impl GermanTense {
    /// Map a shared tense name onto the German table.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::UnsupportedTense`] for tenses without a German rule.
    pub fn from_tense(tense: Tense) -> Result<Self, RulesError> {
        match tense {
            Tense::Presente => Ok(Self::Present),
            Tense::Imperfetto => Ok(Self::Imperfect),
            Tense::PassatoProssimo => Ok(Self::Perfect),
            Tense::Futuro => Ok(Self::Future),
            _ => Err(RulesError::UnsupportedTense {
                language: Language::German,
                tense,
            }),
        }
    }

    /// Shared tenses that have a German rule, in display order.
    pub const SUPPORTED: [Tense; 4] = [
        Tense::Presente,
        Tense::Imperfetto,
        Tense::PassatoProssimo,
        Tense::Futuro,
    ];
}

type Forms = [&'static str; PERSONS];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auxiliary {
    Haben,
    Sein,
}

impl Auxiliary {
    const fn present(self) -> &'static Forms {
        match self {
            Self::Haben => &HABEN_PRESENT,
            Self::Sein => &SEIN_PRESENT,
        }
    }
}

const SEIN_PRESENT: Forms = ["bin", "bist", "ist", "sind", "seid", "sind"];
const HABEN_PRESENT: Forms = ["habe", "hast", "hat", "haben", "habt", "haben"];
const WERDEN_PRESENT: Forms = ["werde", "wirst", "wird", "werden", "werdet", "werden"];

struct IrregularVerb {
    infinitive: &'static str,
    present: Forms,
    imperfect: Forms,
    auxiliary: Auxiliary,
    participle: &'static str,
}

static IRREGULAR_VERBS: [IrregularVerb; 7] = [
    IrregularVerb {
        infinitive: "sein",
        present: SEIN_PRESENT,
        imperfect: ["war", "warst", "war", "waren", "wart", "waren"],
        auxiliary: Auxiliary::Sein,
        participle: "gewesen",
    },
    IrregularVerb {
        infinitive: "haben",
        present: HABEN_PRESENT,
        imperfect: ["hatte", "hattest", "hatte", "hatten", "hattet", "hatten"],
        auxiliary: Auxiliary::Haben,
        participle: "gehabt",
    },
    IrregularVerb {
        infinitive: "werden",
        present: WERDEN_PRESENT,
        imperfect: ["wurde", "wurdest", "wurde", "wurden", "wurdet", "wurden"],
        auxiliary: Auxiliary::Sein,
        participle: "geworden",
    },
    IrregularVerb {
        infinitive: "können",
        present: ["kann", "kannst", "kann", "können", "könnt", "können"],
        imperfect: [
            "konnte",
            "konntest",
            "konnte",
            "konnten",
            "konntet",
            "konnten",
        ],
        auxiliary: Auxiliary::Haben,
        participle: "gekonnt",
    },
    IrregularVerb {
        infinitive: "müssen",
        present: ["muss", "musst", "muss", "müssen", "müsst", "müssen"],
        imperfect: [
            "musste",
            "musstest",
            "musste",
            "mussten",
            "musstet",
            "mussten",
        ],
        auxiliary: Auxiliary::Haben,
        participle: "gemusst",
    },
    IrregularVerb {
        infinitive: "wollen",
        present: ["will", "willst", "will", "wollen", "wollt", "wollen"],
        imperfect: [
            "wollte",
            "wolltest",
            "wollte",
            "wollten",
            "wolltet",
            "wollten",
        ],
        auxiliary: Auxiliary::Haben,
        participle: "gewollt",
    },
    IrregularVerb {
        infinitive: "wissen",
        present: ["weiß", "weißt", "weiß", "wissen", "wisst", "wissen"],
        imperfect: [
            "wusste",
            "wusstest",
            "wusste",
            "wussten",
            "wusstet",
            "wussten",
        ],
        auxiliary: Auxiliary::Haben,
        participle: "gewusst",
    },
];

fn irregular(infinitive: &str) -> Option<&'static IrregularVerb> {
    IRREGULAR_VERBS
        .iter()
        .find(|verb| verb.infinitive == infinitive)
}

/// Stem: strip `-en`, else `-n`, else the verb itself.
#[must_use]
pub fn stem(verb: &str) -> &str {
    verb.strip_suffix("en")
        .or_else(|| verb.strip_suffix('n'))
        .unwrap_or(verb)
}

/// Stems ending in d/t, or in m/n after a consonant other than r/l, insert an `e`.
fn needs_linking_e(stem: &str) -> bool {
    if stem.ends_with(['d', 't']) {
        return true;
    }
    stem.ends_with(['m', 'n']) && !["rm", "rn", "lm", "ln"].iter().any(|s| stem.ends_with(*s))
}

fn has_s_sound(stem: &str) -> bool {
    stem.ends_with(['s', 'ß', 'z', 'x'])
}

fn with_auxiliary(auxiliary: &Forms, tail: &str) -> Vec<String> {
    auxiliary.iter().map(|aux| format!("{aux} {tail}")).collect()
}

fn regular(verb: &str, tense: GermanTense) -> Vec<String> {
    let stem = stem(verb);
    let linking = needs_linking_e(stem);

    match tense {
        GermanTense::Present => {
            let du = if linking {
                "est"
            } else if has_s_sound(stem) {
                "t"
            } else {
                "st"
            };
            let t = if linking { "et" } else { "t" };
            ["e", du, t, "en", t, "en"]
                .iter()
                .map(|ending| format!("{stem}{ending}"))
                .collect()
        }
        GermanTense::Imperfect => {
            let base = format!("{stem}{}", if linking { "ete" } else { "te" });
            ["", "st", "", "n", "t", "n"]
                .iter()
                .map(|ending| format!("{base}{ending}"))
                .collect()
        }
        GermanTense::Perfect => {
            let ending = if linking { "et" } else { "t" };
            let participle = if verb.ends_with("ieren") {
                format!("{stem}{ending}")
            } else {
                format!("ge{stem}{ending}")
            };
            with_auxiliary(Auxiliary::Haben.present(), &participle)
        }
        GermanTense::Future => with_auxiliary(&WERDEN_PRESENT, verb),
    }
}

/// Six forms of `verb` in `tense`, irregular table first.
#[must_use]
pub fn conjugate(verb: &str, tense: GermanTense) -> Vec<String> {
    let verb = verb.trim().to_lowercase();
    let Some(entry) = irregular(&verb) else {
        return regular(&verb, tense);
    };
    match tense {
        GermanTense::Present => entry.present.iter().map(ToString::to_string).collect(),
        GermanTense::Imperfect => entry.imperfect.iter().map(ToString::to_string).collect(),
        GermanTense::Perfect => with_auxiliary(entry.auxiliary.present(), entry.participle),
        GermanTense::Future => with_auxiliary(&WERDEN_PRESENT, &verb),
    }
}
