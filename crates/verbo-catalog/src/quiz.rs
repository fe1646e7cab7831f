//! Random quiz questions drawn from the verb database.

use rand::Rng;
use rand::seq::SliceRandom;
use verbo_core::responses::QuizResponse;
use verbo_core::{CoreError, Tense, VerbGroup};

use crate::catalog::VerbCatalog;
use crate::error::CatalogError;
use crate::model::GroupFilter;

/// Groups and tenses a question may be drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOptions {
    pub groups: Vec<GroupFilter>,
    pub tenses: Vec<Tense>,
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self {
            groups: vec![GroupFilter::Group(VerbGroup::Are), GroupFilter::Irregular],
            tenses: vec![Tense::Presente],
        }
    }
}

fn split(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|item| !item.is_empty())
}

impl QuizOptions {
    /// Parse comma-separated lists such as `ARE,ONREGELMATIG` and
    /// `presente,passato-remoto`.
    ///
    /// # Errors
    ///
    /// [`CoreError::UnknownGroup`] or [`CoreError::UnknownTense`] for the
    /// first bad name, [`CoreError::Validation`] when a list is empty.
    pub fn parse(groups: &str, tenses: &str) -> Result<Self, CatalogError> {
        let groups = split(groups)
            .map(str::parse::<GroupFilter>)
            .collect::<Result<Vec<_>, _>>()?;
        let tenses = split(tenses)
            .map(|name| name.replace('-', "_").parse::<Tense>())
            .collect::<Result<Vec<_>, _>>()?;
        let options = Self { groups, tenses };
        options.validate()?;
        Ok(options)
    }

    fn validate(&self) -> Result<(), CoreError> {
        if self.groups.is_empty() {
            return Err(CoreError::Validation("no quiz groups given".to_string()));
        }
        if self.tenses.is_empty() {
            return Err(CoreError::Validation("no quiz tenses given".to_string()));
        }
        Ok(())
    }
}

impl VerbCatalog {
    /// Draw one question: a tense, then a group, then a verb matching that
    /// group for the tense, then a person label.
    ///
    /// # Errors
    ///
    /// [`CatalogError::NoQuizCandidates`] when the drawn group has no verb for
    /// the drawn tense, [`CoreError::Validation`] for empty options or
    /// `persons`.
    pub fn quiz<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        options: &QuizOptions,
        persons: &[&str],
    ) -> Result<QuizResponse, CatalogError> {
        options.validate()?;
        let Some(&tense) = options.tenses.choose(rng) else {
            return Err(CoreError::Validation("no quiz tenses given".to_string()).into());
        };
        let Some(&group) = options.groups.choose(rng) else {
            return Err(CoreError::Validation("no quiz groups given".to_string()).into());
        };

        let candidates = self.select(group, Some(tense));
        let Some(&verb) = candidates.choose(rng) else {
            return Err(CatalogError::NoQuizCandidates {
                group: group.to_string(),
                tense,
            });
        };
        let Some(&person) = persons.choose(rng) else {
            return Err(CoreError::Validation("no person labels given".to_string()).into());
        };

        tracing::debug!(verb, %tense, %group, candidates = candidates.len(), "drew quiz question");
        Ok(QuizResponse {
            verb: verb.to_string(),
            person: person.to_string(),
            tense,
            group: group.to_string(),
            is_irregular: self.is_irregular_for(verb, tense),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    const PERSONS: [&str; 7] = ["io", "tu", "lui", "lei", "noi", "voi", "loro"];

    fn catalog() -> VerbCatalog {
        VerbCatalog::from_json(
            r#"{"verbs": [
                {"infinitive": "amare", "group": "ARE", "irregular_tenses": []},
                {"infinitive": "andare", "group": "ARE", "irregular_tenses": ["presente", "futuro"]},
                {"infinitive": "vedere", "group": "ERE", "irregular_tenses": ["passato_remoto"]}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn parses_comma_separated_lists() {
        let options = QuizOptions::parse("ARE, onregelmatig", "presente,passato-remoto").unwrap();
        assert_eq!(
            options.groups,
            vec![GroupFilter::Group(VerbGroup::Are), GroupFilter::Irregular]
        );
        assert_eq!(options.tenses, vec![Tense::Presente, Tense::PassatoRemoto]);
    }

    #[test]
    fn unknown_tense_is_an_error() {
        assert!(matches!(
            QuizOptions::parse("ARE", "presente,aoristo"),
            Err(CatalogError::Core(CoreError::UnknownTense(name))) if name == "aoristo"
        ));
    }

    #[test]
    fn unknown_group_and_empty_lists_are_errors() {
        assert!(matches!(
            QuizOptions::parse("URE", "presente"),
            Err(CatalogError::Core(CoreError::UnknownGroup(_)))
        ));
        assert!(matches!(
            QuizOptions::parse("ARE", " , "),
            Err(CatalogError::Core(CoreError::Validation(_)))
        ));
    }

    #[test]
    fn irregular_question_uses_tense_level_irregularity() {
        let options = QuizOptions {
            groups: vec![GroupFilter::Irregular],
            tenses: vec![Tense::Futuro],
        };
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let question = catalog().quiz(&mut rng, &options, &PERSONS).unwrap();
            assert_eq!(question.verb, "andare");
            assert_eq!(question.tense, Tense::Futuro);
            assert_eq!(question.group, "IRREGULAR");
            assert!(question.is_irregular);
            assert!(PERSONS.contains(&question.person.as_str()));
        }
    }

    #[test]
    fn regular_question_skips_verbs_irregular_in_the_tense() {
        let options = QuizOptions {
            groups: vec![GroupFilter::Regular],
            tenses: vec![Tense::Presente],
        };
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let question = catalog().quiz(&mut rng, &options, &PERSONS).unwrap();
            assert!(["amare", "vedere"].contains(&question.verb.as_str()));
            assert!(!question.is_irregular);
        }
    }

    #[test]
    fn same_seed_draws_same_question() {
        let options = QuizOptions {
            groups: vec![GroupFilter::Regular, GroupFilter::Irregular],
            tenses: vec![Tense::Presente, Tense::Futuro],
        };
        let catalog = catalog();
        let first = catalog
            .quiz(&mut StdRng::seed_from_u64(42), &options, &PERSONS)
            .unwrap();
        let second = catalog
            .quiz(&mut StdRng::seed_from_u64(42), &options, &PERSONS)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_candidate_set_is_an_error() {
        let options = QuizOptions {
            groups: vec![GroupFilter::Group(VerbGroup::Ire)],
            tenses: vec![Tense::Presente],
        };
        let result = catalog().quiz(&mut StdRng::seed_from_u64(1), &options, &PERSONS);
        assert!(matches!(
            result,
            Err(CatalogError::NoQuizCandidates { ref group, tense: Tense::Presente }) if group == "IRE"
        ));
    }

    #[test]
    fn legacy_catalog_draws_from_group_lists() {
        let options = QuizOptions::default();
        let catalog = VerbCatalog::defaults();
        let mut rng = StdRng::seed_from_u64(3);
        let question = catalog.quiz(&mut rng, &options, &PERSONS).unwrap();
        assert!(catalog.contains(&question.verb));
        assert_eq!(question.tense, Tense::Presente);
    }

    #[test]
    fn no_person_labels_is_an_error() {
        let result = catalog().quiz(
            &mut StdRng::seed_from_u64(5),
            &QuizOptions {
                groups: vec![GroupFilter::Regular],
                tenses: vec![Tense::Presente],
            },
            &[],
        );
        assert!(matches!(
            result,
            Err(CatalogError::Core(CoreError::Validation(_)))
        ));
    }
}
