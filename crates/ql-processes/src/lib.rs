//! # ql-processes
//!
//! The Black-Scholes-Merton process: a spot quote together with the
//! risk-free curve, the dividend curve and the Black volatility surface that
//! drive `dS/S = (r − q) dt + σ dW`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod black_scholes_process;

pub use black_scholes_process::BlackScholesProcess;
