pub mod error;
pub mod schedule;
pub mod solvers;
pub mod types;
pub mod words;

pub use error::LoanEngineError;
pub use types::*;

/// Standard result type for all engine operations
pub type LoanEngineResult<T> = Result<T, LoanEngineError>;
