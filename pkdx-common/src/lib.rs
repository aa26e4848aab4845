//! # PKDX Common Library
//!
//! Shared code for the PKDX services:
//! - Error and result types
//! - TOML configuration loading and defaults
//! - Logging configuration

pub mod config;
pub mod error;

pub use error::{Error, Result};
