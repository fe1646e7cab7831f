use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use verbo_core::entities::{
    CatalogFormat, MarkMode, MarkOutcome, TenseChange, VerbEntry, VerbInfo,
};
use verbo_core::{Tense, VerbGroup};

use crate::defaults;
use crate::error::CatalogError;
use crate::migrate::migrate_legacy;
use crate::model::{CatalogData, GroupFilter, IRREGULAR_KEY, REGULAR_KEYS};

/// The verb database, in either on-disk layout.
///
/// Read-only once loaded, except through [`VerbCatalog::mark`]. Changes on
/// disk are picked up by [`VerbCatalog::reload`].
#[derive(Debug, Clone)]
pub struct VerbCatalog {
    source: Option<PathBuf>,
    data: CatalogData,
    index: HashMap<String, usize>,
}

impl VerbCatalog {
    #[must_use]
    pub fn new(data: CatalogData) -> Self {
        let index = match &data {
            CatalogData::Current(current) => current
                .verbs
                .iter()
                .enumerate()
                .map(|(i, entry)| (entry.infinitive.clone(), i))
                .collect(),
            CatalogData::Legacy(_) => HashMap::new(),
        };
        Self {
            source: None,
            data,
            index,
        }
    }

    /// Built-in starter list (legacy layout).
    #[must_use]
    pub fn defaults() -> Self {
        Self::new(CatalogData::Legacy(defaults::legacy()))
    }

    /// # Errors
    ///
    /// See [`CatalogData::from_json`].
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        CatalogData::from_json(text).map(Self::new)
    }

    /// Load a database file.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Io`] if the file cannot be read, otherwise see
    /// [`CatalogData::from_json`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        let mut catalog = Self::from_json(&text)?;
        catalog.source = Some(path.to_path_buf());
        tracing::info!(
            path = %path.display(),
            format = ?catalog.format(),
            verbs = catalog.len(),
            "loaded verb database"
        );
        Ok(catalog)
    }

    /// Like [`VerbCatalog::load`], but a missing file yields [`VerbCatalog::defaults`].
    ///
    /// The path is remembered either way, so a later [`VerbCatalog::reload`]
    /// picks the file up once it exists.
    ///
    /// # Errors
    ///
    /// Same as [`VerbCatalog::load`] for a file that exists.
    pub fn load_or_default(path: &Path) -> Result<Self, CatalogError> {
        if path.exists() {
            return Self::load(path);
        }
        tracing::warn!(path = %path.display(), "verb database not found, using default verb list");
        let mut catalog = Self::defaults();
        catalog.source = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Re-read the source file. No-op for catalogs not loaded from a path.
    ///
    /// # Errors
    ///
    /// Same as [`VerbCatalog::load_or_default`]; on error the catalog keeps
    /// its current contents.
    pub fn reload(&mut self) -> Result<(), CatalogError> {
        let Some(path) = self.source.clone() else {
            tracing::debug!("reload skipped: catalog has no source file");
            return Ok(());
        };
        *self = Self::load_or_default(&path)?;
        Ok(())
    }

    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    #[must_use]
    pub const fn data(&self) -> &CatalogData {
        &self.data
    }

    #[must_use]
    pub const fn format(&self) -> CatalogFormat {
        self.data.format()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.all_verbs().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry of `verb`; always `None` on a legacy catalog.
    #[must_use]
    pub fn entry(&self, verb: &str) -> Option<&VerbEntry> {
        let CatalogData::Current(current) = &self.data else {
            return None;
        };
        self.index.get(verb).and_then(|&i| current.verbs.get(i))
    }

    #[must_use]
    pub fn contains(&self, verb: &str) -> bool {
        match &self.data {
            CatalogData::Legacy(legacy) => legacy.contains(verb),
            CatalogData::Current(_) => self.index.contains_key(verb),
        }
    }

    /// Every verb, in stored order (legacy: by group key, then list order).
    #[must_use]
    pub fn all_verbs(&self) -> Vec<&str> {
        match &self.data {
            CatalogData::Legacy(legacy) => legacy
                .groups()
                .flat_map(|(_, verbs)| verbs)
                .map(String::as_str)
                .collect(),
            CatalogData::Current(current) => current
                .verbs
                .iter()
                .map(|entry| entry.infinitive.as_str())
                .collect(),
        }
    }

    /// Verb count per stored group label.
    #[must_use]
    pub fn group_counts(&self) -> BTreeMap<String, usize> {
        match &self.data {
            CatalogData::Legacy(legacy) => legacy
                .groups()
                .map(|(key, verbs)| (key.to_string(), verbs.len()))
                .collect(),
            CatalogData::Current(current) => {
                let mut counts = BTreeMap::new();
                for entry in &current.verbs {
                    *counts.entry(entry.group.as_str().to_string()).or_insert(0) += 1;
                }
                counts
            }
        }
    }

    /// Verbs matching `filter`, optionally narrowed to one tense.
    ///
    /// Legacy catalogs ignore `tense`: `Regular` is the ARE, ERE and IRE lists
    /// and `Irregular` the ONREGELMATIG list.
    #[must_use]
    pub fn select(&self, filter: GroupFilter, tense: Option<Tense>) -> Vec<&str> {
        match &self.data {
            CatalogData::Legacy(legacy) => match filter {
                GroupFilter::Regular => legacy.regular_verbs(),
                GroupFilter::Irregular => legacy.irregular().iter().map(String::as_str).collect(),
                GroupFilter::Group(group) => legacy
                    .group(group.as_str())
                    .iter()
                    .map(String::as_str)
                    .collect(),
            },
            CatalogData::Current(current) => current
                .verbs
                .iter()
                .filter(|entry| matches_filter(entry, filter, tense))
                .map(|entry| entry.infinitive.as_str())
                .collect(),
        }
    }

    /// Legacy: whether the verb is listed as ONREGELMATIG, for any tense.
    /// Current: whether `tense` is in its irregular list. Unknown verbs are
    /// regular.
    #[must_use]
    pub fn is_irregular_for(&self, verb: &str, tense: Tense) -> bool {
        match &self.data {
            CatalogData::Legacy(legacy) => legacy.is_irregular(verb),
            CatalogData::Current(_) => self
                .entry(verb)
                .is_some_and(|entry| entry.is_irregular_for(tense)),
        }
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownVerb`] when the verb is not listed.
    pub fn info(&self, verb: &str) -> Result<VerbInfo, CatalogError> {
        match &self.data {
            CatalogData::Current(_) => {
                let entry = self
                    .entry(verb)
                    .ok_or_else(|| CatalogError::UnknownVerb(verb.to_string()))?;
                Ok(VerbInfo {
                    infinitive: entry.infinitive.clone(),
                    group: Some(entry.group.as_str().to_string()),
                    irregular_tenses: Some(entry.irregular_tenses.clone()),
                    irregular: None,
                    format: CatalogFormat::Current,
                })
            }
            CatalogData::Legacy(legacy) => {
                if !legacy.contains(verb) {
                    return Err(CatalogError::UnknownVerb(verb.to_string()));
                }
                let irregular = legacy.is_irregular(verb);
                let group = if irregular {
                    Some(IRREGULAR_KEY)
                } else {
                    legacy.regular_key_of(verb)
                };
                Ok(VerbInfo {
                    infinitive: verb.to_string(),
                    group: group.map(ToString::to_string),
                    irregular_tenses: None,
                    irregular: Some(irregular),
                    format: CatalogFormat::Legacy,
                })
            }
        }
    }

    /// Mark `tenses` irregular (or regular again) for one verb.
    ///
    /// The resulting list is deduplicated and kept in tense order. Nothing is
    /// written to disk; call [`VerbCatalog::save`].
    ///
    /// # Errors
    ///
    /// [`CatalogError::LegacyFormat`] on a legacy catalog,
    /// [`CatalogError::UnknownVerb`] when the verb is not listed.
    pub fn mark(
        &mut self,
        verb: &str,
        tenses: &[Tense],
        mode: MarkMode,
    ) -> Result<MarkOutcome, CatalogError> {
        let CatalogData::Current(current) = &mut self.data else {
            return Err(CatalogError::LegacyFormat);
        };
        let entry = self
            .index
            .get(verb)
            .and_then(|&i| current.verbs.get_mut(i))
            .ok_or_else(|| CatalogError::UnknownVerb(verb.to_string()))?;

        let mut irregular: BTreeSet<Tense> = entry.irregular_tenses.iter().copied().collect();
        let changes = tenses
            .iter()
            .map(|&tense| {
                let changed = match mode {
                    MarkMode::Irregular => irregular.insert(tense),
                    MarkMode::Regular => irregular.remove(&tense),
                };
                tracing::debug!(verb, %tense, ?mode, changed, "marked tense");
                TenseChange { tense, changed }
            })
            .collect();
        entry.irregular_tenses = irregular.into_iter().collect();

        Ok(MarkOutcome {
            infinitive: entry.infinitive.clone(),
            mode,
            changes,
            irregular_tenses: entry.irregular_tenses.clone(),
        })
    }

    /// Current-layout copy of a legacy catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::AlreadyCurrent`] if there is nothing to migrate.
    pub fn migrated(&self) -> Result<Self, CatalogError> {
        match &self.data {
            CatalogData::Legacy(legacy) => {
                Ok(Self::new(CatalogData::Current(migrate_legacy(legacy))))
            }
            CatalogData::Current(_) => Err(CatalogError::AlreadyCurrent),
        }
    }

    /// Write the catalog as pretty JSON.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Io`] if the file (or its parent directory) cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        let text = self.data.to_json_pretty()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
        }
        std::fs::write(path, text).map_err(|e| CatalogError::io(path, e))?;
        tracing::info!(path = %path.display(), verbs = self.len(), "saved verb database");
        Ok(())
    }
}

fn matches_filter(entry: &VerbEntry, filter: GroupFilter, tense: Option<Tense>) -> bool {
    match (filter, tense) {
        (GroupFilter::Group(group), _) => entry.group == group,
        (GroupFilter::Regular, Some(tense)) => !entry.is_irregular_for(tense),
        (GroupFilter::Regular, None) => entry.is_fully_regular(),
        (GroupFilter::Irregular, Some(tense)) => entry.is_irregular_for(tense),
        (GroupFilter::Irregular, None) => !entry.is_fully_regular(),
    }
}

/// Legacy group key a raw verb is filed under on import.
///
/// Known irregular verbs and verbs outside the three regular endings go to
/// ONREGELMATIG.
#[must_use]
pub fn legacy_key_for(verb: &str) -> &'static str {
    let verb = verb.trim().to_lowercase();
    if defaults::KNOWN_IRREGULAR.contains(&verb.as_str()) {
        return IRREGULAR_KEY;
    }
    match VerbGroup::classify(&verb) {
        VerbGroup::Are => REGULAR_KEYS[0],
        VerbGroup::Ere => REGULAR_KEYS[1],
        VerbGroup::Ire => REGULAR_KEYS[2],
        VerbGroup::Other => IRREGULAR_KEY,
    }
}
