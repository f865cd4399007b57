//! Dining budget - pace a semester of dining dollars
//!
//! This library provides the core of the `dining` CLI. A student has a fixed
//! pot of dining dollars for a semester; the pacing engine spreads it over
//! the days they actually eat on campus (skipping breaks, scaled by meals
//! per week) and reports whether spending is ahead of or behind that pace.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and app preferences
//! - `error`: Custom error types
//! - `models`: Plan, transactions, presets, weeks and semester templates
//! - `pacing`: Pure pacing queries over a plan and its transactions
//! - `storage`: Persistence behind the `BudgetStore` trait (JSON or memory)
//! - `services`: Business logic layer
//! - `reports`: Daily, weekly and statistics reports
//! - `display`: Terminal formatting helpers
//! - `cli`: Command handlers for the `dining` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use dining_budget::config::{paths::DiningPaths, settings::Settings};
//! use dining_budget::storage::JsonStore;
//!
//! let paths = DiningPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = JsonStore::new(paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod pacing;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{DiningError, DiningResult};
