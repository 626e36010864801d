//! Utilities module
//!
//! Contains error handling, logging and report formatting

pub mod error;
pub mod format;
pub mod logging;
