//! Full conjugation tables per language.

use verbo_core::responses::{ConjugateResponse, ConjugatedTense, PersonForm};
use verbo_core::{Language, Tense, VerbIdentity};

use crate::check::table_persons;
use crate::error::RulesError;
use crate::generator;
use crate::german::{self, GermanTense};

/// Tenses [`conjugate`] can produce for a language.
#[must_use]
pub const fn supported_tenses(language: Language) -> &'static [Tense] {
    match language {
        Language::Italian => &Tense::ANALYZED,
        Language::German => &GermanTense::SUPPORTED,
        Language::French => &[],
    }
}

/// Six forms of `verb` in `tense`.
///
/// Italian forms are the regular pattern for the verb's group, so irregular
/// verbs come out regularized.
///
/// # Errors
///
/// [`RulesError::UnsupportedLanguage`] for French,
/// [`RulesError::UnsupportedTense`] when no rule covers the tense (including
/// root-based Italian tenses of verbs outside ARE/ERE/IRE), and
/// [`RulesError::Core`] for an empty or multi-word Italian verb.
pub fn forms(language: Language, verb: &str, tense: Tense) -> Result<Vec<String>, RulesError> {
    match language {
        Language::Italian => {
            let identity = VerbIdentity::parse(verb)?;
            let forms = generator::regular_forms(&identity, tense);
            if forms.is_empty() {
                return Err(RulesError::UnsupportedTense { language, tense });
            }
            Ok(forms)
        }
        Language::German => Ok(german::conjugate(verb, GermanTense::from_tense(tense)?)),
        Language::French => Err(RulesError::UnsupportedLanguage(language)),
    }
}

/// Conjugate `verb` in one tense, or in every supported tense that has a rule.
///
/// # Errors
///
/// See [`forms`]. With `tense: None`, tenses without a rule are left out and
/// only an unsupported language fails.
pub fn conjugate(
    language: Language,
    verb: &str,
    tense: Option<Tense>,
) -> Result<ConjugateResponse, RulesError> {
    let persons = table_persons(language);
    let label = |tense: Tense, forms: Vec<String>| ConjugatedTense {
        tense,
        forms: persons
            .iter()
            .zip(forms)
            .map(|(person, form)| PersonForm {
                person: (*person).to_string(),
                form,
            })
            .collect(),
    };

    let tenses = if let Some(tense) = tense {
        vec![label(tense, forms(language, verb, tense)?)]
    } else {
        if language == Language::French {
            return Err(RulesError::UnsupportedLanguage(language));
        }
        let mut tenses = Vec::new();
        for &tense in supported_tenses(language) {
            match forms(language, verb, tense) {
                Ok(forms) => tenses.push(label(tense, forms)),
                Err(RulesError::UnsupportedTense { .. }) => {
                    tracing::debug!(verb, %tense, "no rule for tense");
                }
                Err(err) => return Err(err),
            }
        }
        tenses
    };

    Ok(ConjugateResponse {
        verb: verb.trim().to_lowercase(),
        language,
        tenses,
    })
}
