//! Service layer module
//!
//! Contains the DeepSeek API client

pub mod client;

pub use client::*;
