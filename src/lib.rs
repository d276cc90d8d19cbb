//! Pay and threshold engine for German mini-jobs
//!
//! This crate computes a mini-job employee's monthly gross and net pay,
//! including tax-free Sunday/holiday and night surcharges, and tracks
//! whether the earnings threshold ("Minijob-Grenze") was exceeded too often
//! within a rolling 12-month window ("Zeitjahr").
//!
//! - [`calculation`]: the per-month pay rules
//! - [`tracking`]: overage events and the rolling-window classification
//! - [`ledger`]: a year of monthly inputs and its aggregation
//! - [`transfer`]: CSV import and export
//! - [`api`]: the HTTP surface

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod tracking;
pub mod transfer;
