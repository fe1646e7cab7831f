use verbo_core::{Language, Tense};

/// Parse a tense name, accepting `-` for `_` (`passato-remoto`).
pub fn parse_tense(raw: &str) -> anyhow::Result<Tense> {
    raw.replace('-', "_").parse::<Tense>().map_err(|_| {
        let names = Tense::ALL.map(Tense::as_str).join(", ");
        anyhow::anyhow!("invalid tense '{raw}' (available: {names})")
    })
}

/// Parse every tense, reporting all invalid names at once.
pub fn parse_tenses(raw: &[String]) -> anyhow::Result<Vec<Tense>> {
    let (valid, invalid): (Vec<_>, Vec<_>) = raw
        .iter()
        .map(|name| (name, parse_tense(name)))
        .partition(|(_, parsed)| parsed.is_ok());
    if !invalid.is_empty() {
        let names = invalid
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let available = Tense::ALL.map(Tense::as_str).join(", ");
        anyhow::bail!("invalid tense(s): {names} (available: {available})");
    }
    Ok(valid
        .into_iter()
        .filter_map(|(_, parsed)| parsed.ok())
        .collect())
}

pub fn parse_language(raw: &str) -> anyhow::Result<Language> {
    raw.parse::<Language>()
        .map_err(|error| anyhow::anyhow!("invalid language: {error}"))
}
