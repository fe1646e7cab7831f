//! Comparison keys for conjugated forms.

/// Accented vowels folded to their base letter. Nothing else is touched.
const ACCENT_FOLDS: [(char, char); 6] = [
    ('à', 'a'),
    ('è', 'e'),
    ('é', 'e'),
    ('ì', 'i'),
    ('ò', 'o'),
    ('ù', 'u'),
];

fn fold(ch: char) -> char {
    ACCENT_FOLDS
        .iter()
        .find_map(|(accented, base)| (*accented == ch).then_some(*base))
        .unwrap_or(ch)
}

/// Lower-case, trim, and strip Italian accents from a form.
///
/// ```
/// use verbo_rules::normalize;
///
/// assert_eq!(normalize("  PARLÒ "), "parlo");
/// ```
#[must_use]
pub fn normalize(form: &str) -> String {
    form.to_lowercase().trim().chars().map(fold).collect()
}

/// Whether two forms share a comparison key.
#[must_use]
pub fn equivalent(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("parlò", "parlo")]
    #[case("PARLÒ", "parlo")]
    #[case(" credé\t", "crede")]
    #[case("sentì", "senti")]
    #[case("città", "citta")]
    #[case("più", "piu")]
    #[case("perché", "perche")]
    fn folds_known_accents(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn leaves_other_diacritics_alone() {
        assert_eq!(normalize("können"), "können");
        assert_eq!(normalize("façade"), "façade");
        assert_eq!(normalize("ô"), "ô");
    }

    #[rstest]
    fn idempotent(#[values("Parlerà", "  ÈRA ", "vanno", "", "ÌÒÙ")] input: &str) {
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn equivalence_ignores_case_and_accents() {
        assert!(equivalent("PARLÒ", "parlo"));
        assert!(!equivalent("vado", "ando"));
    }
}
