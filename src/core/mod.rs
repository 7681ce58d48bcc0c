//! Core types shared by the parser modules.
//!
//! - [`FrontmatterError`] - every failure the crate reports
//! - [`ErrorContext`] - an error plus details and a suggested fix
//! - [`user_friendly_error`] - turn any [`anyhow::Error`] into an [`ErrorContext`]

pub mod error;

pub use error::{ErrorContext, FrontmatterError, Result, user_friendly_error};
