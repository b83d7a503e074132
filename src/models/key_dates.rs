//! Key statutory dates derived from the expected week of childbirth.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The statutory dates that anchor a leave calculation.
///
/// All dates are fixed week offsets from [`KeyDates::ewc_sunday`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDates {
    /// The Sunday starting the expected week of childbirth (or placement).
    pub ewc_sunday: NaiveDate,
    /// The qualifying week, 15 weeks before the EWC.
    pub qualifying_week: NaiveDate,
    /// The week occupational pay service is checked, 11 weeks before the EWC.
    pub service_check_week: NaiveDate,
    /// The earliest date leave may start, 11 weeks before the EWC.
    pub earliest_leave_start: NaiveDate,
    /// The latest date leave may end, 52 weeks after the EWC.
    pub latest_leave_end: NaiveDate,
    /// The date statutory pay ends, 39 weeks after the EWC.
    pub statutory_pay_end: NaiveDate,
}
