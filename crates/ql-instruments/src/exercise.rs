//! Option exercise rights.
//!
//! An `Exercise` defines *when* an option can be exercised.

use ql_core::errors::Result;
use ql_core::ensure_param;
use ql_time::Date;
use std::fmt;

/// Kind of exercise right, without its dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseType {
    /// Can only be exercised at expiry.
    European,
    /// Can be exercised at any time in a window ending at expiry.
    American,
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseType::European => f.write_str("European"),
            ExerciseType::American => f.write_str("American"),
        }
    }
}

/// Exercise rights of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exercise {
    /// Exercise at `maturity` only.
    European {
        /// Expiry date.
        maturity: Date,
    },
    /// Exercise on any date in `[earliest, maturity]`.
    American {
        /// First exercise date.
        earliest: Date,
        /// Expiry date.
        maturity: Date,
    },
}

impl Exercise {
    /// A European exercise at `maturity`.
    pub fn european(maturity: Date) -> Self {
        Exercise::European { maturity }
    }

    /// An American exercise window.
    ///
    /// # Errors
    /// `InvalidParameter` (`earliest`) if `earliest` is after `maturity`.
    pub fn american(earliest: Date, maturity: Date) -> Result<Self> {
        ensure_param!(
            earliest <= maturity,
            "earliest",
            "first exercise date {earliest} is after maturity {maturity}"
        );
        Ok(Exercise::American { earliest, maturity })
    }

    /// The last possible exercise date.
    pub fn maturity(&self) -> Date {
        match *self {
            Exercise::European { maturity } | Exercise::American { maturity, .. } => maturity,
        }
    }

    /// The first possible exercise date.
    pub fn earliest(&self) -> Date {
        match *self {
            Exercise::European { maturity } => maturity,
            Exercise::American { earliest, .. } => earliest,
        }
    }

    /// The kind of exercise right.
    pub fn exercise_type(&self) -> ExerciseType {
        match self {
            Exercise::European { .. } => ExerciseType::European,
            Exercise::American { .. } => ExerciseType::American,
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exercise::European { maturity } => write!(f, "European({maturity})"),
            Exercise::American { earliest, maturity } => {
                write!(f, "American({earliest} to {maturity})")
            }
        }
    }
}
