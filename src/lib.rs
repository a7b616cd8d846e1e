//! Parametric tensegrity structures explored with a genetic search.
//!
//! The crate decodes flat numeric genomes into node layouts plus bar/cable
//! topologies (`engines::generation`), evolves populations of them against
//! an injected fitness evaluator (`engines::evaluation`), and renders the
//! result as a MuJoCo model (`model`).

pub mod config;
pub mod engines;
pub mod error;
pub mod model;

pub use error::{Result, TensegError};
