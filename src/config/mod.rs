//! Configuration module for Fundsheet
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FundsheetPaths;
pub use settings::Settings;
