//! Single effect kinds.

use serde::{Deserialize, Serialize};

use super::set::PredictionInputEffect;
use crate::localization::{format_with_unit, EnglishLocalizer, Localizer, StringKey};
use crate::units::ShortUnitString;

/// Exactly one prediction input effect.
///
/// Where `PredictionInputEffect` is a set, `EffectKind` is a member of it.
/// Display text is only defined per kind, so a set must first be narrowed
/// to a kind (see `PredictionInputEffect::single`) before it can be labelled.
///
/// ```
/// use prediction_effects::{EffectKind, PredictionInputEffect};
///
/// let kind = EffectKind::try_from(PredictionInputEffect::MOMENTUM).unwrap();
/// assert_eq!(kind, EffectKind::Momentum);
/// assert_eq!(kind.localized_title(), "Glucose Momentum");
///
/// assert!(EffectKind::try_from(PredictionInputEffect::ALL).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EffectKind {
    /// Carbohydrate absorption.
    Carbs,
    /// Insulin activity.
    Insulin,
    /// Recent glucose trend.
    Momentum,
    /// Correction from past prediction error.
    Retrospection,
    /// Suspension of insulin delivery.
    Suspend,
    /// Damping of rises caused by negative insulin.
    Damper,
}

impl EffectKind {
    /// Every kind, in bit order.
    pub const ALL_KINDS: [EffectKind; 6] = [
        EffectKind::Carbs,
        EffectKind::Insulin,
        EffectKind::Momentum,
        EffectKind::Retrospection,
        EffectKind::Suspend,
        EffectKind::Damper,
    ];

    /// The one-element set holding this kind.
    #[must_use]
    pub const fn flag(self) -> PredictionInputEffect {
        match self {
            EffectKind::Carbs => PredictionInputEffect::CARBS,
            EffectKind::Insulin => PredictionInputEffect::INSULIN,
            EffectKind::Momentum => PredictionInputEffect::MOMENTUM,
            EffectKind::Retrospection => PredictionInputEffect::RETROSPECTION,
            EffectKind::Suspend => PredictionInputEffect::SUSPEND,
            EffectKind::Damper => PredictionInputEffect::DAMPER,
        }
    }

    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EffectKind::Carbs => "carbs",
            EffectKind::Insulin => "insulin",
            EffectKind::Momentum => "momentum",
            EffectKind::Retrospection => "retrospection",
            EffectKind::Suspend => "suspend",
            EffectKind::Damper => "damper",
        }
    }

    #[must_use]
    pub const fn title_key(self) -> StringKey {
        match self {
            EffectKind::Carbs => StringKey::CarbsTitle,
            EffectKind::Insulin => StringKey::InsulinTitle,
            EffectKind::Momentum => StringKey::MomentumTitle,
            EffectKind::Retrospection => StringKey::RetrospectionTitle,
            EffectKind::Suspend => StringKey::SuspendTitle,
            EffectKind::Damper => StringKey::DamperTitle,
        }
    }

    #[must_use]
    pub const fn description_key(self) -> StringKey {
        match self {
            EffectKind::Carbs => StringKey::CarbsDescription,
            EffectKind::Insulin => StringKey::InsulinDescription,
            EffectKind::Momentum => StringKey::MomentumDescription,
            EffectKind::Retrospection => StringKey::RetrospectionDescription,
            EffectKind::Suspend => StringKey::SuspendDescription,
            EffectKind::Damper => StringKey::DamperDescription,
        }
    }

    /// English title.
    #[must_use]
    pub fn localized_title(self) -> String {
        self.localized_title_in(&EnglishLocalizer)
    }

    /// Title from `localizer`.
    #[must_use]
    pub fn localized_title_in<L: Localizer + ?Sized>(self, localizer: &L) -> String {
        localizer.localized(self.title_key()).into_owned()
    }

    /// English description for values shown in `unit`.
    #[must_use]
    pub fn localized_description<U: ShortUnitString + ?Sized>(self, unit: &U) -> String {
        self.localized_description_in(unit, &EnglishLocalizer)
    }

    /// Description from `localizer` for values shown in `unit`.
    ///
    /// Only descriptions whose key `takes_unit()` go through substitution;
    /// the rest are returned exactly as the localizer supplies them.
    #[must_use]
    pub fn localized_description_in<U, L>(self, unit: &U, localizer: &L) -> String
    where
        U: ShortUnitString + ?Sized,
        L: Localizer + ?Sized,
    {
        let key = self.description_key();
        let template = localizer.localized(key);
        if key.takes_unit() {
            format_with_unit(&template, unit.short_unit_string())
        } else {
            template.into_owned()
        }
    }
}

impl TryFrom<PredictionInputEffect> for EffectKind {
    /// The set that wasn't exactly one kind.
    type Error = PredictionInputEffect;

    fn try_from(set: PredictionInputEffect) -> Result<Self, Self::Error> {
        Self::ALL_KINDS
            .into_iter()
            .find(|kind| kind.flag() == set)
            .ok_or(set)
    }
}

impl From<EffectKind> for PredictionInputEffect {
    fn from(kind: EffectKind) -> Self {
        kind.flag()
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title_key().english())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::StringTable;
    use crate::units::GlucoseUnit;

    #[test]
    fn test_flags_are_distinct_single_bits() {
        let mut seen = PredictionInputEffect::empty();
        for kind in EffectKind::ALL_KINDS {
            let bits = kind.flag().bits();
            assert!(bits.is_power_of_two(), "{} is not a single bit", kind.name());
            assert!(!seen.intersects(kind.flag()));
            seen |= kind.flag();
        }
        assert_eq!(seen, PredictionInputEffect::all());
    }

    #[test]
    fn test_bit_positions() {
        assert_eq!(EffectKind::Carbs.flag().bits(), 1);
        assert_eq!(EffectKind::Insulin.flag().bits(), 2);
        assert_eq!(EffectKind::Momentum.flag().bits(), 4);
        assert_eq!(EffectKind::Retrospection.flag().bits(), 8);
        assert_eq!(EffectKind::Suspend.flag().bits(), 16);
        assert_eq!(EffectKind::Damper.flag().bits(), 32);
    }

    #[test]
    fn test_try_from_round_trip() {
        for kind in EffectKind::ALL_KINDS {
            assert_eq!(EffectKind::try_from(kind.flag()), Ok(kind));
            assert_eq!(PredictionInputEffect::from(kind), kind.flag());
        }
    }

    #[test]
    fn test_try_from_rejects_non_singletons() {
        let empty = PredictionInputEffect::empty();
        assert_eq!(EffectKind::try_from(empty), Err(empty));

        let pair = PredictionInputEffect::CARBS | PredictionInputEffect::INSULIN;
        assert_eq!(EffectKind::try_from(pair), Err(pair));

        let stray = PredictionInputEffect::from_bits_retain(1 << 6);
        assert_eq!(EffectKind::try_from(stray), Err(stray));
    }

    #[test]
    fn test_titles_and_descriptions_use_matching_kind() {
        for kind in EffectKind::ALL_KINDS {
            assert!(kind.title_key().identifier().contains(kind.name()));
            assert!(kind.description_key().identifier().contains(kind.name()));
        }
    }

    #[test]
    fn test_description_substitution() {
        let desc = EffectKind::Insulin.localized_description(&GlucoseUnit::MillimolesPerLiter);
        assert_eq!(desc, "Insulin Absorbed (U) × Insulin Sensitivity (mmol/L/U)");
    }

    #[test]
    fn test_unformatted_descriptions_keep_placeholder_text() {
        // Momentum text is never formatted, even if a translation contains the marker.
        let table = StringTable::new("xx")
            .with_entry(StringKey::MomentumDescription, "trend in %unit%");
        assert_eq!(
            EffectKind::Momentum.localized_description_in("mg/dL", &table),
            "trend in %unit%"
        );
    }

    #[test]
    fn test_translated_description_substitution() {
        let table = StringTable::new("de").with_entry(
            StringKey::CarbsDescription,
            "Kohlenhydrate (g) ÷ KH-Faktor (g/IE) × Korrekturfaktor (%unit%/IE)",
        );
        assert_eq!(
            EffectKind::Carbs.localized_description_in(&GlucoseUnit::MillimolesPerLiter, &table),
            "Kohlenhydrate (g) ÷ KH-Faktor (g/IE) × Korrekturfaktor (mmol/L/IE)"
        );
    }

    #[test]
    fn test_display_uses_english_title() {
        assert_eq!(format!("{}", EffectKind::Damper), "Negative Insulin Damper");
    }
}
