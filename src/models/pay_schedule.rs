//! Pay schedule models.
//!
//! This module contains the [`PayWeek`] type describing one week of leave and
//! what is paid for it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One week of leave in the pay schedule.
///
/// # Example
///
/// ```
/// use leave_entitlement_engine::models::PayWeek;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let week = PayWeek {
///     week: 1,
///     start_date: NaiveDate::from_ymd_opt(2026, 5, 31).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 6, 6).unwrap(),
///     pay_type: "SMP (90% AWE)".to_string(),
///     amount: Decimal::new(27000, 2),
///     statutory_amount: Decimal::new(27000, 2),
///     notes: None,
/// };
///
/// assert!(week.contains_date(NaiveDate::from_ymd_opt(2026, 6, 3).unwrap()));
/// assert!(!week.contains_date(NaiveDate::from_ymd_opt(2026, 6, 7).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayWeek {
    /// Week number, 1 to 52.
    pub week: u32,
    /// First day of the week (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the week (inclusive).
    pub end_date: NaiveDate,
    /// Label naming the rule that produced the amount.
    pub pay_type: String,
    /// The amount paid for the week.
    pub amount: Decimal,
    /// The statutory component of the week's pay.
    pub statutory_amount: Decimal,
    /// Explanation of how the amount was calculated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PayWeek {
    /// Returns true if the given date falls within this week.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true when nothing is paid for the week.
    pub fn is_unpaid(&self) -> bool {
        self.amount.is_zero()
    }
}
