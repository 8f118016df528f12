//! Payroll calculators for a small-business payroll site.
//!
//! This crate provides the computational core behind a set of payroll
//! calculators (hourly to salary, salary to hourly, overtime pay and a weekly
//! timecard), the lenient input normalization and locale-aware formatting they
//! share, and an HTTP API that serves them.

#![warn(missing_docs)]

pub mod analytics;
pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod normalize;
