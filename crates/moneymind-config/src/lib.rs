//! # MoneyMind Config
//!
//! Survey dataset and styling configuration for the MoneyMind dashboard.
//!
//! This crate provides configuration loading from YAML, TOML or JSON,
//! validation, built-in defaults reproducing the published survey results,
//! and a lock-free snapshot cache.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use cache::*;
pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
