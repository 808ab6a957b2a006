//! # ql-quotes
//!
//! Immutable market quotes shared by reference across term structures.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `Quote` trait and concrete implementations.
pub mod quote;

pub use quote::{handle_value, Quote, SimpleQuote};
