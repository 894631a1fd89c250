//! Shared building blocks for the flowcut crates: arena ids, the `Real`
//! scalar with its tolerance rules, and the numeric error type.

pub mod error;
pub mod ids;
pub mod numeric;

pub use error::{FcError, FcResult};
pub use ids::{EdgeId, Id, NodeId};
pub use numeric::{Real, Tolerances, ensure_finite, ensure_non_negative, nearly_equal, negligible};
