//! Built-in verb lists.

use crate::model::{IRREGULAR_KEY, LegacyCatalog, REGULAR_KEYS};

/// Verbs filed as irregular on import regardless of their ending.
pub const KNOWN_IRREGULAR: [&str; 14] = [
    "essere", "avere", "andare", "fare", "venire", "dire", "potere", "volere", "dovere", "sapere",
    "stare", "uscire", "dare", "bere",
];

const ARE: [&str; 8] = [
    "parlare",
    "mangiare",
    "amare",
    "cantare",
    "lavorare",
    "studiare",
    "giocare",
    "camminare",
];
const ERE: [&str; 8] = [
    "credere", "vedere", "temere", "leggere", "scrivere", "vivere", "mettere", "prendere",
];
const IRE: [&str; 8] = [
    "dormire", "partire", "sentire", "capire", "finire", "preferire", "pulire", "aprire",
];
const IRREGULAR: [&str; 12] = [
    "essere", "avere", "andare", "fare", "venire", "dire", "potere", "volere", "dovere", "sapere",
    "stare", "uscire",
];

fn owned(verbs: &[&str]) -> Vec<String> {
    verbs.iter().map(ToString::to_string).collect()
}

/// Starter catalog used when no database file exists yet.
#[must_use]
pub fn legacy() -> LegacyCatalog {
    let mut catalog = LegacyCatalog::new();
    for (key, verbs) in REGULAR_KEYS.into_iter().zip([&ARE, &ERE, &IRE]) {
        catalog.set_group(key, owned(verbs));
    }
    catalog.set_group(IRREGULAR_KEY, owned(&IRREGULAR));
    catalog
}
