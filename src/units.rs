//! Glucose concentration units.
//!
//! The crate never converts between units. It only needs a short display
//! string to splice into description templates, so any type implementing
//! `ShortUnitString` can be passed where a unit is expected.

use serde::{Deserialize, Serialize};

/// A glucose unit that can render its short display string.
pub trait ShortUnitString {
    /// Short form shown next to values, e.g. `"mg/dL"`.
    fn short_unit_string(&self) -> &str;
}

impl ShortUnitString for str {
    fn short_unit_string(&self) -> &str {
        self
    }
}

impl ShortUnitString for String {
    fn short_unit_string(&self) -> &str {
        self.as_str()
    }
}

impl<T: ShortUnitString + ?Sized> ShortUnitString for &T {
    fn short_unit_string(&self) -> &str {
        (**self).short_unit_string()
    }
}

/// The two glucose concentration units in clinical use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlucoseUnit {
    /// Milligrams per deciliter.
    MilligramsPerDeciliter,
    /// Millimoles per liter.
    MillimolesPerLiter,
}

impl ShortUnitString for GlucoseUnit {
    fn short_unit_string(&self) -> &str {
        match self {
            GlucoseUnit::MilligramsPerDeciliter => "mg/dL",
            GlucoseUnit::MillimolesPerLiter => "mmol/L",
        }
    }
}

impl std::fmt::Display for GlucoseUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_unit_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glucose_unit_strings() {
        assert_eq!(GlucoseUnit::MilligramsPerDeciliter.short_unit_string(), "mg/dL");
        assert_eq!(GlucoseUnit::MillimolesPerLiter.short_unit_string(), "mmol/L");
        assert_eq!(format!("{}", GlucoseUnit::MillimolesPerLiter), "mmol/L");
    }

    #[test]
    fn test_plain_strings_are_units() {
        assert_eq!("mg/dL".short_unit_string(), "mg/dL");
        assert_eq!(String::from("mmol/L").short_unit_string(), "mmol/L");
    }
}
