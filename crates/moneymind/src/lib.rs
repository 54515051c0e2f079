//! # MoneyMind
//!
//! Command line report of the MoneyMind survey dashboard.
//!
//! Loads the survey dataset and styling, builds every chart view and prints
//! them as JSON or as plain-text tables.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod error;
pub mod report;

pub use app::*;
pub use error::*;
pub use report::*;
