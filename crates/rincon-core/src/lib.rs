//! # rincon-core
//!
//! Core crate for the Rincón Suites reservation system. Contains the
//! persistence-substrate trait, configuration schemas, typed identifiers,
//! currency helpers, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Rincón crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
