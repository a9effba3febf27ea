//! Prediction input effects.
//!
//! ## Key Types
//!
//! - `PredictionInputEffect`: Bit set of effects applied to a prediction
//! - `EffectKind`: Exactly one effect, the unit that carries display text
//!
//! ## Labels
//!
//! Titles and descriptions exist per kind only. The lookups on
//! `PredictionInputEffect` return `None` for the empty set, for any
//! combination of kinds and for undefined bits. A chart legend listing one
//! effect at a time gets a label; a combined prediction does not.

mod kind;
mod set;

pub use kind::EffectKind;
pub use set::PredictionInputEffect;
