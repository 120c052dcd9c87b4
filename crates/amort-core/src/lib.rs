pub mod daycount;
pub mod error;
pub mod rounding;
pub mod schedule;
pub mod types;

pub use error::AmortError;
pub use types::*;

/// Standard result type for all schedule computations
pub type AmortResult<T> = Result<T, AmortError>;
