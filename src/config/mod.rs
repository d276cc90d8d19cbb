//! Configuration loading and management for the mini-job engine.
//!
//! This module provides functionality to load mini-job configurations from
//! YAML files: the statutory limits (minimum wage, earnings threshold, hour
//! ceiling) and the deduction and surcharge rates.
//!
//! # Example
//!
//! ```no_run
//! use minijob_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/minijob_2025").unwrap();
//! println!("Loaded: {}", loader.config().limits().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DeductionRates, Limits, MinijobConfig, RateConfig, SurchargeRates};
