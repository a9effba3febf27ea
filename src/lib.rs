//! # prediction-effects
//!
//! Flags describing which effects went into a glucose prediction, and the
//! display text for each one.
//!
//! ## Design Principles
//!
//! 1. **Sets Are Values**: A `PredictionInputEffect` is a `Copy` bit set.
//!    Prediction runs build one, compare it and throw it away.
//!
//! 2. **Labels Per Kind**: Titles and descriptions exist for exactly one
//!    effect at a time. Asking for the label of an empty or combined set
//!    returns `None`, which means "don't render a label", not failure.
//!
//! 3. **Host Owns Locale**: The crate ships English text and a stable key
//!    per string. Translations come in through the `Localizer` trait.
//!
//! ## Modules
//!
//! - `effect_set`: The effect bit set and single effect kinds
//! - `localization`: String keys, English fallback, translation tables
//! - `units`: Glucose unit display strings
//!
//! ## Example
//!
//! ```
//! use prediction_effects::{GlucoseUnit, PredictionInputEffect};
//!
//! let applied = PredictionInputEffect::CARBS | PredictionInputEffect::INSULIN;
//! assert!(PredictionInputEffect::ALL.contains(applied));
//!
//! // One legend row per applied effect.
//! let rows: Vec<_> = applied
//!     .kinds()
//!     .iter()
//!     .map(|kind| kind.localized_description(&GlucoseUnit::MillimolesPerLiter))
//!     .collect();
//! assert_eq!(rows[1], "Insulin Absorbed (U) × Insulin Sensitivity (mmol/L/U)");
//!
//! // The combined set itself has no label.
//! assert_eq!(applied.localized_title(), None);
//! ```

pub mod effect_set;
pub mod localization;
pub mod units;

// Re-export commonly used types
pub use crate::effect_set::{EffectKind, PredictionInputEffect};
pub use crate::localization::{EnglishLocalizer, Localizer, StringKey, StringTable};
pub use crate::units::{GlucoseUnit, ShortUnitString};
