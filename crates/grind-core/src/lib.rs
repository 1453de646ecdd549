pub mod error;
pub mod types;

#[cfg(feature = "projection")]
pub mod projection;

#[cfg(feature = "catalog")]
pub mod catalog;

#[cfg(feature = "progress")]
pub mod progress;

#[cfg(feature = "store")]
pub mod store;

pub use error::GrindError;
pub use types::*;

/// Standard result type for all grind-core operations
pub type GrindResult<T> = Result<T, GrindError>;
