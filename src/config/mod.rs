//! Configuration module for the dining budget tracker
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - App preference persistence

pub mod paths;
pub mod settings;

pub use paths::DiningPaths;
pub use settings::{OverspendPolicy, Settings, ViewMode};
