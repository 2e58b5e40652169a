//! Landsat Collection ID decoding and collection catalog maintenance.
//!
//! Collection directories are decoded by [`identifier`], their files sorted
//! into artifact columns by [`classifier`], assembled into rows by
//! [`scanner`] and merged into a persisted table by [`catalog`]. [`update`]
//! applies a finished scan to the persisted table.

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod error;
pub mod identifier;
pub mod scanner;
pub mod update;
pub mod utils;
