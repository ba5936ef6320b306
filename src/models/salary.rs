//! Monthly salary model.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The monthly salary computed for one person.
///
/// One instance is emitted per distinct (person, month) group in the shift
/// stream. Instances are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySalary {
    /// Identifier of the person the salary belongs to.
    pub person_id: String,
    /// Display name of the person the salary belongs to.
    pub person_name: String,
    /// The first day of the month the salary covers.
    pub month: NaiveDate,
    /// The salary amount in hundredths of the currency unit.
    pub amount_by_100: i64,
}

impl MonthlySalary {
    /// Returns the salary amount as a decimal currency value.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::models::MonthlySalary;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let salary = MonthlySalary {
    ///     person_id: "1".to_string(),
    ///     person_name: "John Doe".to_string(),
    ///     month: NaiveDate::from_ymd_opt(2016, 3, 1).unwrap(),
    ///     amount_by_100: 12345,
    /// };
    /// assert_eq!(salary.amount(), Decimal::new(12345, 2)); // $123.45
    /// ```
    pub fn amount(&self) -> Decimal {
        Decimal::new(self.amount_by_100, 2)
    }
}

impl fmt::Display for MonthlySalary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}/{}, ${}",
            self.person_id,
            self.person_name,
            self.month.month(),
            self.month.year(),
            self.amount()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_salary(amount_by_100: i64) -> MonthlySalary {
        MonthlySalary {
            person_id: "7".to_string(),
            person_name: "Jane Doe".to_string(),
            month: NaiveDate::from_ymd_opt(2016, 11, 1).unwrap(),
            amount_by_100,
        }
    }

    #[test]
    fn test_amount_is_hundredths() {
        assert_eq!(make_salary(100).amount(), Decimal::new(1, 0));
        assert_eq!(make_salary(150).amount(), Decimal::new(15, 1));
        assert_eq!(make_salary(12345).amount(), Decimal::new(12345, 2));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(make_salary(12345).to_string(), "7, Jane Doe, 11/2016, $123.45");
    }

    #[test]
    fn test_serialization_round_trip() {
        let salary = make_salary(4200);
        let json = serde_json::to_string(&salary).unwrap();
        let deserialized: MonthlySalary = serde_json::from_str(&json).unwrap();
        assert_eq!(salary, deserialized);
    }
}
