//! Shift-to-wage calculation engine.
//!
//! This crate turns a stream of individual work-shift records into one monthly
//! pay amount per person, applying a configured daily schedule of regular
//! hourly rates and a configured list of daily overtime tiers. The engine is a
//! batch calculator: feed shifts to a [`calculation::SalaryCalculator`] and
//! close it to receive the [`models::MonthlySalary`] stream through the sink
//! the calculator was created with.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
