//! Probability distributions, delegating to the `statrs` crate for the
//! special functions.

pub mod normal;

pub use normal::{erfc, normal_cdf, normal_pdf};
