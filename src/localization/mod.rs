//! Localized display text for prediction input effects.
//!
//! Locale selection belongs to the host application. This module fixes the
//! stable key and English fallback for each string and defines the seam a
//! host plugs its translations into:
//!
//! - `StringKey`: The 12 localizable strings (title and description per kind)
//! - `Localizer`: Resolves a key to text for the active locale
//! - `EnglishLocalizer`: Built-in English text
//! - `StringTable`: Serde-loadable translations with English fallback

mod keys;
mod table;

use std::borrow::Cow;

pub use keys::{format_with_unit, StringKey, UNIT_PLACEHOLDER};
pub use table::StringTable;

/// Resolves string keys to localized text.
///
/// Implementations must return something for every key. Returning the
/// English text is always acceptable.
pub trait Localizer {
    /// Localized template for `key`.
    fn localized(&self, key: StringKey) -> Cow<'_, str>;
}

impl<L: Localizer + ?Sized> Localizer for &L {
    fn localized(&self, key: StringKey) -> Cow<'_, str> {
        (**self).localized(key)
    }
}

/// The built-in English strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnglishLocalizer;

impl Localizer for EnglishLocalizer {
    fn localized(&self, key: StringKey) -> Cow<'_, str> {
        Cow::Borrowed(key.english())
    }
}
