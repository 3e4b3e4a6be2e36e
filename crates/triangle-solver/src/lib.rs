//! Triangle solver: resolve a partial side/angle specification into a full
//! triangle, with derived metrics and typed validity errors.
//!
//! The pipeline is Normalizer → Classifier → Resolver → Validator → Deriver;
//! [`solve`] runs it end to end as a pure function of the input spec.

pub mod classify;
pub mod error;
pub mod metrics;
pub mod normalize;
pub mod resolve;
pub mod solve;
pub mod tolerance;
pub mod validate;

pub use classify::classify;
pub use error::{InputError, SolveError};
pub use normalize::{normalize_value, SlotKind};
pub use solve::{has_enough_information, solve};
