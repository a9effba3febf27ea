//! Translated string tables.

use std::borrow::Cow;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::keys::StringKey;
use super::Localizer;

/// Translations for one locale, keyed by [`StringKey::identifier`].
///
/// Keys missing from the table resolve to their English text, so a partial
/// translation is always usable.
///
/// ## Example
///
/// ```
/// use prediction_effects::localization::{Localizer, StringKey, StringTable};
///
/// let table = StringTable::new("de")
///     .with_entry(StringKey::InsulinTitle, "Insulin (DE)");
///
/// assert_eq!(table.localized(StringKey::InsulinTitle), "Insulin (DE)");
/// assert_eq!(table.localized(StringKey::CarbsTitle), "Carbohydrates");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringTable {
    /// Locale tag (e.g. `"de"`, `"pt-BR"`). Informational only.
    pub locale: String,

    /// Identifier -> template.
    #[serde(default)]
    entries: FxHashMap<String, String>,
}

impl StringTable {
    /// Create an empty table for `locale`.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: FxHashMap::default(),
        }
    }

    /// Add a translation.
    #[must_use]
    pub fn with_entry(mut self, key: StringKey, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    /// Add or replace a translation, returning the previous one.
    pub fn insert(&mut self, key: StringKey, text: impl Into<String>) -> Option<String> {
        self.entries.insert(key.identifier().to_owned(), text.into())
    }

    /// Translation for `key`, without English fallback.
    #[must_use]
    pub fn get(&self, key: StringKey) -> Option<&str> {
        self.entries.get(key.identifier()).map(String::as_str)
    }

    /// Keys with no translation in this table.
    pub fn missing_keys(&self) -> impl Iterator<Item = StringKey> + '_ {
        StringKey::ALL_KEYS
            .into_iter()
            .filter(move |key| !self.entries.contains_key(key.identifier()))
    }

    /// Entry identifiers that don't name any known key.
    pub fn unknown_identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries
            .keys()
            .map(String::as_str)
            .filter(|id| StringKey::from_identifier(id).is_none())
    }

    /// Number of entries, including unknown identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Localizer for StringTable {
    fn localized(&self, key: StringKey) -> Cow<'_, str> {
        match self.get(key) {
            Some(text) => Cow::Borrowed(text),
            None => Cow::Borrowed(key.english()),
        }
    }
}
