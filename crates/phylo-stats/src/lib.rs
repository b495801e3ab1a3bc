//! phylo-stats - Posterior summaries for phylogenetic dating output
//!
//! This crate provides the interval estimates reported alongside
//! Bayesian date estimates:
//!
//! - **HPD**: Highest posterior density interval over one-dimensional samples
//! - **Summary**: Mean, median, spread and HPD of a posterior trace
//!
//! All functions are pure and allocate only local state, so they can be
//! called concurrently on independent inputs.

pub mod error;
pub mod hpd;
pub mod summary;

pub use error::*;
pub use hpd::*;
pub use summary::*;
