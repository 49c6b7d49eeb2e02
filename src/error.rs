// src/error.rs

use thiserror::Error;

/// Result alias used throughout the planner.
pub type PlannerResult<T> = Result<T, PlannerError>;

/// Errors the planner can report to its caller.
///
/// Both variants are recoverable at the boundary: the caller checked (or should
/// have checked) its inputs, so the right response is a user-facing warning,
/// not a crash.
#[derive(Debug, Error, PartialEq)]
pub enum PlannerError {
    /// A parameter is outside its valid domain (non-positive cost/demand,
    /// negative lead time, NaN, etc.).
    #[error("invalid parameter '{name}': {value} is outside the valid domain")]
    InvalidParameter {
        /// Which parameter was rejected.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The cost-curve quantity range contains no valid integer quantity.
    #[error("cost curve domain around EOQ {eoq:.2} contains no valid quantity")]
    EmptyDomain {
        /// The EOQ the domain was derived from.
        eoq: f64,
    },
}
