//! Configuration loading for the salary calculation engine.
//!
//! This module provides the raw, serde-deserializable configuration structs
//! and a YAML loader. The raw configuration is validated and normalized into
//! [`crate::calculation::ScheduleSettings`] before the pipeline accepts any
//! shift.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/salary.yaml").unwrap();
//! println!("Time zone: {}", config.time_zone);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalculatorConfig, OvertimeLevelEntry, RegularRateEntry};
