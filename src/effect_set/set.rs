//! The prediction input effect set.

use bitflags::bitflags;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

use super::kind::EffectKind;
use crate::localization::{EnglishLocalizer, Localizer};
use crate::units::ShortUnitString;

bitflags! {
    /// Which effects contributed to a glucose prediction.
    ///
    /// A plain bit set over the six effect kinds. Sets combine with `|`,
    /// `union`, `insert` and friends; equality is bit equality.
    ///
    /// Note the two "everything" values:
    /// - `PredictionInputEffect::ALL`: the standard effect set, which leaves
    ///   out `SUSPEND`
    /// - `PredictionInputEffect::all()`: every defined bit, `SUSPEND` included
    ///
    /// ```
    /// use prediction_effects::PredictionInputEffect;
    ///
    /// let effects = PredictionInputEffect::CARBS | PredictionInputEffect::INSULIN;
    /// assert!(effects.contains(PredictionInputEffect::CARBS));
    /// assert!(!effects.contains(PredictionInputEffect::MOMENTUM));
    ///
    /// assert!(PredictionInputEffect::ALL.contains(effects));
    /// assert!(!PredictionInputEffect::ALL.contains(PredictionInputEffect::SUSPEND));
    /// ```
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
    #[serde(transparent)]
    pub struct PredictionInputEffect: u32 {
        const CARBS = 1 << 0;
        const INSULIN = 1 << 1;
        const MOMENTUM = 1 << 2;
        const RETROSPECTION = 1 << 3;
        const SUSPEND = 1 << 4;
        const DAMPER = 1 << 5;
    }
}

impl PredictionInputEffect {
    /// The standard effects applied to a prediction. Suspension is reported
    /// on its own and is not part of this set.
    pub const ALL: Self = Self::CARBS
        .union(Self::INSULIN)
        .union(Self::DAMPER)
        .union(Self::MOMENTUM)
        .union(Self::RETROSPECTION);

    /// The kind this set holds, if it holds exactly one.
    #[must_use]
    pub fn single(self) -> Option<EffectKind> {
        EffectKind::try_from(self).ok()
    }

    /// Member kinds in bit order. Undefined bits are skipped.
    #[must_use]
    pub fn kinds(self) -> SmallVec<[EffectKind; 6]> {
        EffectKind::ALL_KINDS
            .into_iter()
            .filter(|kind| self.contains(kind.flag()))
            .collect()
    }

    /// English title, defined only for single-kind sets.
    ///
    /// Empty sets, combinations and undefined bits have no title; callers
    /// should skip the label rather than treat this as an error.
    ///
    /// ```
    /// use prediction_effects::PredictionInputEffect;
    ///
    /// assert_eq!(
    ///     PredictionInputEffect::RETROSPECTION.localized_title().as_deref(),
    ///     Some("Retrospective Correction")
    /// );
    /// assert_eq!(PredictionInputEffect::ALL.localized_title(), None);
    /// ```
    #[must_use]
    pub fn localized_title(self) -> Option<String> {
        self.localized_title_in(&EnglishLocalizer)
    }

    /// Title from `localizer`, defined only for single-kind sets.
    #[must_use]
    pub fn localized_title_in<L: Localizer + ?Sized>(self, localizer: &L) -> Option<String> {
        self.single().map(|kind| kind.localized_title_in(localizer))
    }

    /// English description for values shown in `unit`, defined only for
    /// single-kind sets.
    ///
    /// ```
    /// use prediction_effects::{GlucoseUnit, PredictionInputEffect};
    ///
    /// let text = PredictionInputEffect::CARBS
    ///     .localized_description(&GlucoseUnit::MilligramsPerDeciliter)
    ///     .unwrap();
    /// assert!(text.ends_with("Insulin Sensitivity (mg/dL/U)"));
    /// ```
    #[must_use]
    pub fn localized_description<U: ShortUnitString + ?Sized>(self, unit: &U) -> Option<String> {
        self.localized_description_in(unit, &EnglishLocalizer)
    }

    /// Description from `localizer` for values shown in `unit`, defined only
    /// for single-kind sets.
    #[must_use]
    pub fn localized_description_in<U, L>(self, unit: &U, localizer: &L) -> Option<String>
    where
        U: ShortUnitString + ?Sized,
        L: Localizer + ?Sized,
    {
        self.single()
            .map(|kind| kind.localized_description_in(unit, localizer))
    }
}

impl Default for PredictionInputEffect {
    fn default() -> Self {
        Self::empty()
    }
}

/// Accepts the same text as the derived format, but rejects undefined bits.
impl<'de> Deserialize<'de> for PredictionInputEffect {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed: Self = bitflags::serde::deserialize(deserializer)?;
        Self::from_bits(parsed.bits()).ok_or_else(|| {
            D::Error::custom(format_args!(
                "undefined prediction input effect bits {:#x}",
                parsed.bits() & !Self::all().bits()
            ))
        })
    }
}

impl std::fmt::Display for PredictionInputEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kinds = self.kinds();
        if kinds.is_empty() {
            return f.write_str("none");
        }
        for (i, kind) in kinds.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(kind.name())?;
        }
        Ok(())
    }
}

impl FromIterator<EffectKind> for PredictionInputEffect {
    fn from_iter<I: IntoIterator<Item = EffectKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, kind| set.union(kind.flag()))
    }
}
