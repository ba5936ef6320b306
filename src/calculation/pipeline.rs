//! The salary calculation pipeline driver.
//!
//! [`SalaryCalculator`] collects shift records, and on flush sorts them,
//! walks the sorted stream detecting day and person/month boundaries, and
//! sequences the segmentation and overtime stages to produce one
//! [`MonthlySalary`] per distinct (person, month) group.

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::error::{EngineError, EngineResult};
use crate::models::{MonthlySalary, ShiftRecord};

use super::overtime::OvertimeRatesStage;
use super::schedule::ScheduleSettings;
use super::segmentation::RegularRatesStage;
use super::work_shift::WorkShift;

/// A pipeline that takes a stream of work shift records and emits a stream
/// of monthly salaries.
///
/// Feed the shift stream through [`accept`](Self::accept) and invoke
/// [`close`](Self::close) when done; the [`MonthlySalary`] values are sent,
/// ordered by month, person name and person id, to the sink the calculator
/// was created with. [`flush`](Self::flush) computes the salaries of the
/// shifts collected so far and leaves the pipeline open for further input;
/// after [`close`](Self::close), any `accept` or `flush` fails with
/// [`EngineError::PipelineClosed`].
///
/// A calculator instance is single-threaded state; independent instances
/// share nothing and may run concurrently.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::{RegularRatePeriod, SalaryCalculator, ScheduleSettings};
/// use salary_engine::models::ShiftRecord;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let settings = ScheduleSettings::new(
///     chrono_tz::Europe::Helsinki,
///     0,
///     vec![RegularRatePeriod::new(100, NaiveTime::MIN, NaiveTime::MIN)],
///     vec![],
/// )?;
///
/// let mut salaries = Vec::new();
/// let mut calculator = SalaryCalculator::new(settings, |salary| salaries.push(salary));
///
/// calculator.accept(ShiftRecord {
///     person_id: "1".to_string(),
///     person_name: "John Doe".to_string(),
///     date: NaiveDate::from_ymd_opt(2016, 3, 2).unwrap(),
///     begin: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
/// })?;
/// calculator.close()?;
/// drop(calculator);
///
/// assert_eq!(salaries.len(), 1);
/// assert_eq!(salaries[0].amount_by_100, 100);
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
pub struct SalaryCalculator<F: FnMut(MonthlySalary)> {
    settings: ScheduleSettings,
    sink: F,
    shifts: Vec<WorkShift>,
    closed: bool,
}

impl<F: FnMut(MonthlySalary)> SalaryCalculator<F> {
    /// Creates a calculator with validated settings and a salary sink.
    pub fn new(settings: ScheduleSettings, sink: F) -> Self {
        Self {
            settings,
            sink,
            shifts: Vec::new(),
            closed: false,
        }
    }

    /// Accepts one shift record, localizing it in the configured time zone.
    ///
    /// # Errors
    ///
    /// Fails with [`EngineError::PipelineClosed`] after [`close`](Self::close).
    pub fn accept(&mut self, record: ShiftRecord) -> EngineResult<()> {
        self.ensure_open()?;
        self.shifts
            .push(WorkShift::new(&record, self.settings.time_zone()));
        Ok(())
    }

    /// Calculates and emits the monthly salaries of all shifts collected so
    /// far, then resets the pipeline for further input.
    ///
    /// # Errors
    ///
    /// Fails with [`EngineError::PipelineClosed`] after [`close`](Self::close).
    pub fn flush(&mut self) -> EngineResult<()> {
        self.ensure_open()?;
        self.run();
        Ok(())
    }

    /// Performs a final flush and closes the pipeline. Closing an already
    /// closed pipeline has no effect.
    pub fn close(&mut self) -> EngineResult<()> {
        if !self.closed {
            self.run();
            self.closed = true;
        }
        Ok(())
    }

    fn ensure_open(&self) -> EngineResult<()> {
        if self.closed {
            Err(EngineError::PipelineClosed)
        } else {
            Ok(())
        }
    }

    /// Sorts the collected shifts and walks them through the stages,
    /// flushing at day boundaries and emitting a salary at person/month
    /// boundaries.
    fn run(&mut self) {
        let mut shifts = std::mem::take(&mut self.shifts);
        shifts.sort();

        debug!(shifts = shifts.len(), "calculating monthly salaries");

        let mut regular = RegularRatesStage::new(&self.settings);
        let mut overtime = OvertimeRatesStage::new(&self.settings);

        let mut person: Option<PersonMonth> = None;
        let mut day: Option<NaiveDate> = None;

        for shift in &shifts {
            let at_person_boundary = person
                .as_ref()
                .is_none_or(|current| !current.matches(shift));
            // a person/month change always also crosses a day boundary
            let at_day_boundary = at_person_boundary || day != Some(shift.date);

            // the smaller granularity first: settle the previous day into
            // the still-current person before anything else changes
            if at_day_boundary {
                if day.is_some() {
                    if let Some(current) = person.as_mut() {
                        flush_day(&mut regular, &mut overtime, current);
                    }
                }

                day = Some(shift.date);
            }

            if at_person_boundary {
                if let Some(finished) = person.take() {
                    self.emit(finished);
                }

                person = Some(PersonMonth::start(shift));
            }

            regular.accept(shift);
        }

        if let Some(mut current) = person.take() {
            flush_day(&mut regular, &mut overtime, &mut current);
            self.emit(current);
        }
    }

    fn emit(&mut self, person: PersonMonth) {
        let salary = person.into_salary();
        trace!(person = %salary.person_id, month = %salary.month, "emitting monthly salary");
        (self.sink)(salary);
    }
}

/// Propagates one finished day through the stages into the person's monthly
/// total.
fn flush_day(
    regular: &mut RegularRatesStage,
    overtime: &mut OvertimeRatesStage,
    person: &mut PersonMonth,
) {
    for slice in regular.flush() {
        overtime.accept(slice);
    }

    if let Some(amount_by_100) = overtime.flush() {
        person.add_amount(amount_by_100);
    }
}

/// The person/month group currently being summed.
struct PersonMonth {
    person_id: String,
    person_name: String,
    month: NaiveDate,
    amount_by_100: i64,
}

impl PersonMonth {
    fn start(shift: &WorkShift) -> Self {
        Self {
            person_id: shift.person_id.clone(),
            person_name: shift.person_name.clone(),
            month: shift.month(),
            amount_by_100: 0,
        }
    }

    /// Checks whether the given shift belongs to this person and month.
    fn matches(&self, shift: &WorkShift) -> bool {
        self.person_id == shift.person_id && self.month == shift.month()
    }

    fn add_amount(&mut self, amount_by_100: i64) {
        self.amount_by_100 += amount_by_100;
    }

    fn into_salary(self) -> MonthlySalary {
        MonthlySalary {
            person_id: self.person_id,
            person_name: self.person_name,
            month: self.month,
            amount_by_100: self.amount_by_100,
        }
    }
}
