//! Person labels and quiz answer checking.

use verbo_core::responses::CheckResponse;
use verbo_core::{Language, Tense};

use crate::error::RulesError;
use crate::german::{self, GermanTense};

/// Person labels offered by each language's quiz, in display order.
#[must_use]
pub const fn person_labels(language: Language) -> &'static [&'static str] {
    match language {
        Language::Italian => &["io", "tu", "lui", "lei", "noi", "voi", "loro"],
        Language::French => &["je", "tu", "il", "elle", "nous", "vous", "ils", "elles"],
        Language::German => &["ich", "du", "er/sie/es", "wir", "ihr", "sie/Sie"],
    }
}

/// Label for each of the six table positions.
#[must_use]
pub const fn table_persons(language: Language) -> [&'static str; 6] {
    match language {
        Language::Italian => ["io", "tu", "lui/lei", "noi", "voi", "loro"],
        Language::French => ["je", "tu", "il/elle", "nous", "vous", "ils/elles"],
        Language::German => ["ich", "du", "er/sie/es", "wir", "ihr", "sie/Sie"],
    }
}

/// Table position (0..6) of a person label.
///
/// German lower-case `sie` is the third person singular; `Sie` is the formal
/// and plural form.
///
/// # Errors
///
/// Returns [`RulesError::UnknownPerson`] when the label matches nothing.
pub fn person_index(language: Language, label: &str) -> Result<usize, RulesError> {
    let label = label.trim();
    let exact = match language {
        Language::Italian => match label {
            "io" => Some(0),
            "tu" => Some(1),
            "lui" | "lei" | "lui/lei" => Some(2),
            "noi" => Some(3),
            "voi" => Some(4),
            "loro" => Some(5),
            _ => None,
        },
        Language::French => match label {
            "je" => Some(0),
            "tu" => Some(1),
            "il" | "elle" | "on" | "il/elle" => Some(2),
            "nous" => Some(3),
            "vous" => Some(4),
            "ils" | "elles" | "ils/elles" => Some(5),
            _ => None,
        },
        Language::German => match label {
            "ich" => Some(0),
            "du" => Some(1),
            "er" | "sie" | "es" | "er/sie/es" => Some(2),
            "wir" => Some(3),
            "ihr" => Some(4),
            "sie/Sie" | "Sie" => Some(5),
            _ if label.contains("er") => Some(2),
            _ if label.contains("sie") && label.contains("Sie") => Some(5),
            _ => None,
        },
    };
    exact.ok_or_else(|| RulesError::UnknownPerson {
        language,
        person: label.to_string(),
    })
}

/// Pronoun typed in front of a form: the first alternative of the label.
#[must_use]
pub fn pronoun_for(label: &str) -> &str {
    label.split('/').next().unwrap_or(label).trim()
}

/// Case- and whitespace-insensitive comparison, with or without the pronoun.
#[must_use]
pub fn check_answer(expected: &str, answer: &str, pronoun: Option<&str>) -> bool {
    let given = answer.trim().to_lowercase();
    let expected = expected.trim().to_lowercase();
    if given == expected {
        return true;
    }
    pronoun.is_some_and(|pronoun| given == format!("{} {expected}", pronoun.to_lowercase()))
}

/// Check a German quiz answer against the rule table.
///
/// # Errors
///
/// Returns [`RulesError::UnsupportedTense`] for tenses without a German rule
/// and [`RulesError::UnknownPerson`] for unknown person labels.
pub fn check_german(
    verb: &str,
    person: &str,
    tense: Tense,
    answer: &str,
) -> Result<CheckResponse, RulesError> {
    let tense = GermanTense::from_tense(tense)?;
    let index = person_index(Language::German, person)?;
    let forms = german::conjugate(verb, tense);
    let correct_answer = forms.get(index).cloned().unwrap_or_default();
    let correct = check_answer(&correct_answer, answer, Some(pronoun_for(person)));
    tracing::debug!(verb, person, correct, "checked answer");
    Ok(CheckResponse {
        correct,
        correct_answer,
        your_answer: answer.to_string(),
    })
}
