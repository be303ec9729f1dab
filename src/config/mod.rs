//! Configuration module for debt-destroyer
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::DebtPaths;
pub use settings::Settings;
