//! Core data models for the salary calculation engine.
//!
//! This module contains the immutable input and output value types exchanged
//! with the engine's collaborators.

mod salary;
mod shift;

pub use salary::MonthlySalary;
pub use shift::ShiftRecord;
