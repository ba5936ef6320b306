//! The shift-to-wage calculation pipeline.
//!
//! This module contains the core of the engine: DST-aware interval overlap,
//! the validated rate schedule, the per-day segmentation and overtime
//! tiering stages, and the grouping driver that turns a sorted shift stream
//! into monthly salaries.

mod interval;
mod overtime;
mod pipeline;
mod schedule;
mod segmentation;
mod work_shift;

pub use interval::{LocalInterval, ZonedInterval};
pub use pipeline::SalaryCalculator;
pub use schedule::{OvertimeTier, RegularRatePeriod, ScheduleSettings};
