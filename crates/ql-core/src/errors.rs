//! Error types for qlval.
//!
//! Every fallible operation in the workspace returns [`Result`], carrying a
//! specific [`Error`] kind. Input validation reports the offending field by
//! name; numerical breakdowns (NaN, overflow, non-convergence) are reported
//! as [`Error::NumericalInstability`] rather than returned as values.

use thiserror::Error;

/// The top-level error type used throughout qlval.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// An input parameter is outside its valid domain.
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter {
        /// Name of the offending input field.
        field: &'static str,
        /// Human-readable description of the violation.
        reason: String,
    },

    /// An intermediate computation produced a non-finite value or failed to
    /// converge.
    #[error("numerical instability in {context}: {reason}")]
    NumericalInstability {
        /// The computation in which the instability was detected.
        context: &'static str,
        /// Human-readable description.
        reason: String,
    },

    /// An operation was requested on a null / unset value.
    #[error("null value")]
    NullValue,

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Name of the offending field for [`Error::InvalidParameter`].
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Shorthand `Result` type used throughout qlval.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidParameter { field, .. })` if `$cond` is false.
///
/// # Example
/// ```
/// use ql_core::{ensure_param, errors::Error};
/// fn strike(k: f64) -> ql_core::errors::Result<f64> {
///     ensure_param!(k > 0.0, "strike", "must be positive, got {k}");
///     Ok(k)
/// }
/// assert!(strike(95.0).is_ok());
/// assert_eq!(strike(0.0).unwrap_err().field(), Some("strike"));
/// ```
#[macro_export]
macro_rules! ensure_param {
    ($cond:expr, $field:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidParameter {
                field: $field,
                reason: format!($($msg)*),
            });
        }
    };
}

/// Returns `Err(Error::NumericalInstability { .. })` if `$value` is not
/// finite, otherwise evaluates to `$value`.
///
/// # Example
/// ```
/// use ql_core::{ensure_finite, errors::Error};
/// fn ratio(a: f64, b: f64) -> ql_core::errors::Result<f64> {
///     Ok(ensure_finite!(a / b, "ratio"))
/// }
/// assert!(ratio(1.0, 2.0).is_ok());
/// assert!(ratio(1.0, 0.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure_finite {
    ($value:expr, $context:expr) => {{
        let v = $value;
        if !v.is_finite() {
            return Err($crate::errors::Error::NumericalInstability {
                context: $context,
                reason: format!("non-finite value {v}"),
            });
        }
        v
    }};
}
