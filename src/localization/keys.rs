//! Stable string keys and their English fallback text.

use serde::{Deserialize, Serialize};

/// Placeholder replaced by the glucose unit's short display string.
pub const UNIT_PLACEHOLDER: &str = "%unit%";

/// Identifier for one localizable string.
///
/// Each effect kind owns a title key and a description key. The
/// `identifier()` string is what host string tables are keyed by and must
/// never change once shipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StringKey {
    CarbsTitle,
    InsulinTitle,
    DamperTitle,
    MomentumTitle,
    RetrospectionTitle,
    SuspendTitle,
    CarbsDescription,
    InsulinDescription,
    DamperDescription,
    MomentumDescription,
    RetrospectionDescription,
    SuspendDescription,
}

impl StringKey {
    /// Every key, titles first.
    pub const ALL_KEYS: [StringKey; 12] = [
        StringKey::CarbsTitle,
        StringKey::InsulinTitle,
        StringKey::DamperTitle,
        StringKey::MomentumTitle,
        StringKey::RetrospectionTitle,
        StringKey::SuspendTitle,
        StringKey::CarbsDescription,
        StringKey::InsulinDescription,
        StringKey::DamperDescription,
        StringKey::MomentumDescription,
        StringKey::RetrospectionDescription,
        StringKey::SuspendDescription,
    ];

    /// Stable lookup identifier.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            StringKey::CarbsTitle => "prediction_input_effect.carbs.title",
            StringKey::InsulinTitle => "prediction_input_effect.insulin.title",
            StringKey::DamperTitle => "prediction_input_effect.damper.title",
            StringKey::MomentumTitle => "prediction_input_effect.momentum.title",
            StringKey::RetrospectionTitle => "prediction_input_effect.retrospection.title",
            StringKey::SuspendTitle => "prediction_input_effect.suspend.title",
            StringKey::CarbsDescription => "prediction_input_effect.carbs.description",
            StringKey::InsulinDescription => "prediction_input_effect.insulin.description",
            StringKey::DamperDescription => "prediction_input_effect.damper.description",
            StringKey::MomentumDescription => "prediction_input_effect.momentum.description",
            StringKey::RetrospectionDescription => {
                "prediction_input_effect.retrospection.description"
            }
            StringKey::SuspendDescription => "prediction_input_effect.suspend.description",
        }
    }

    /// Reverse of `identifier()`.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL_KEYS
            .into_iter()
            .find(|key| key.identifier() == identifier)
    }

    /// English text, used whenever no translation is available.
    ///
    /// Description templates may contain [`UNIT_PLACEHOLDER`].
    #[must_use]
    pub const fn english(self) -> &'static str {
        match self {
            StringKey::CarbsTitle => "Carbohydrates",
            StringKey::InsulinTitle => "Insulin",
            StringKey::DamperTitle => "Negative Insulin Damper",
            StringKey::MomentumTitle => "Glucose Momentum",
            StringKey::RetrospectionTitle => "Retrospective Correction",
            StringKey::SuspendTitle => "Suspension of Insulin Delivery",
            StringKey::CarbsDescription => {
                "Carbs Absorbed (g) ÷ Carb Ratio (g/U) × Insulin Sensitivity (%unit%/U)"
            }
            StringKey::InsulinDescription => {
                "Insulin Absorbed (U) × Insulin Sensitivity (%unit%/U)"
            }
            StringKey::DamperDescription => {
                "Glucose effect of applying a damper to reduce increases in glucose due to negative insulin"
            }
            StringKey::MomentumDescription => {
                "15 min glucose regression coefficient (b₁), continued with decay over 30 min"
            }
            StringKey::RetrospectionDescription => {
                "30 min comparison of glucose prediction vs actual, continued with decay over 60 min"
            }
            StringKey::SuspendDescription => "Glucose effect of suspending insulin delivery",
        }
    }

    /// Context note for translators.
    #[must_use]
    pub const fn translator_comment(self) -> &'static str {
        match self {
            StringKey::CarbsTitle => "Title of the prediction input effect for carbohydrates",
            StringKey::InsulinTitle => "Title of the prediction input effect for insulin",
            StringKey::DamperTitle => {
                "Title of the prediction input effect for negative insulin damper"
            }
            StringKey::MomentumTitle => {
                "Title of the prediction input effect for glucose momentum"
            }
            StringKey::RetrospectionTitle => {
                "Title of the prediction input effect for retrospective correction"
            }
            StringKey::SuspendTitle => {
                "Title of the prediction input effect for suspension of insulin delivery"
            }
            StringKey::CarbsDescription => {
                "Description of the prediction input effect for carbohydrates. (%unit%: The glucose unit string)"
            }
            StringKey::InsulinDescription => {
                "Description of the prediction input effect for insulin"
            }
            StringKey::DamperDescription => {
                "Description of the prediction input effect for negative insulin damper"
            }
            StringKey::MomentumDescription => {
                "Description of the prediction input effect for glucose momentum"
            }
            StringKey::RetrospectionDescription => {
                "Description of the prediction input effect for retrospective correction"
            }
            StringKey::SuspendDescription => {
                "Description of the prediction input effect for suspension of insulin delivery"
            }
        }
    }

    /// Whether the localized text is run through unit substitution.
    #[must_use]
    pub const fn takes_unit(self) -> bool {
        matches!(
            self,
            StringKey::CarbsDescription
                | StringKey::InsulinDescription
                | StringKey::DamperDescription
        )
    }
}

impl std::fmt::Display for StringKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Substitute `unit` for every [`UNIT_PLACEHOLDER`] in `template`.
#[must_use]
pub fn format_with_unit(template: &str, unit: &str) -> String {
    template.replace(UNIT_PLACEHOLDER, unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_identifiers_are_unique() {
        let ids: FxHashSet<_> = StringKey::ALL_KEYS.iter().map(|k| k.identifier()).collect();
        assert_eq!(ids.len(), StringKey::ALL_KEYS.len());
    }

    #[test]
    fn test_identifier_round_trip() {
        for key in StringKey::ALL_KEYS {
            assert_eq!(StringKey::from_identifier(key.identifier()), Some(key));
        }
        assert_eq!(StringKey::from_identifier("prediction_input_effect.bogus"), None);
    }

    #[test]
    fn test_english_text_is_never_empty() {
        for key in StringKey::ALL_KEYS {
            assert!(!key.english().is_empty(), "{key} has no English text");
            assert!(!key.translator_comment().is_empty());
        }
    }

    #[test]
    fn test_only_unit_keys_have_placeholders() {
        for key in StringKey::ALL_KEYS {
            if key.english().contains(UNIT_PLACEHOLDER) {
                assert!(key.takes_unit(), "{key} has a placeholder but is never formatted");
            }
        }
        // Damper is formatted but has nothing to substitute.
        assert!(StringKey::DamperDescription.takes_unit());
        assert!(!StringKey::DamperDescription.english().contains(UNIT_PLACEHOLDER));
    }

    #[test]
    fn test_only_carbs_comment_mentions_unit() {
        assert!(StringKey::CarbsDescription.translator_comment().contains(UNIT_PLACEHOLDER));
        assert_eq!(
            StringKey::InsulinDescription.translator_comment(),
            "Description of the prediction input effect for insulin"
        );
        for key in StringKey::ALL_KEYS {
            if key != StringKey::CarbsDescription {
                assert!(!key.translator_comment().contains(UNIT_PLACEHOLDER), "{key}");
            }
        }
    }

    #[test]
    fn test_format_with_unit() {
        assert_eq!(format_with_unit("x (%unit%/U)", "mmol/L"), "x (mmol/L/U)");
        assert_eq!(format_with_unit("no placeholder", "mg/dL"), "no placeholder");
    }
}
