//! Key statutory date calculation.
//!
//! Every statutory date is a fixed number of weeks before or after the
//! Sunday that starts the expected week of childbirth (or placement). Weeks
//! run Sunday to Saturday.

use chrono::{Datelike, Days, Duration, NaiveDate};

use crate::models::{KeyDates, LeaveCase, LeaveType, Note};

/// Weeks before the EWC that the qualifying week starts.
pub const QUALIFYING_WEEK_OFFSET: i64 = 15;

/// Weeks before the EWC that occupational service is checked, and the
/// earliest leave may start.
pub const EARLIEST_START_OFFSET: i64 = 11;

/// Weeks after the EWC that leave must end.
pub const LATEST_END_OFFSET: i64 = 52;

/// Weeks after the EWC that statutory pay ends.
pub const STATUTORY_PAY_END_OFFSET: i64 = 39;

/// Returns the Sunday that starts the week containing `date`, or `None` when
/// that Sunday falls outside the representable calendar.
///
/// # Example
///
/// ```
/// use leave_entitlement_engine::calculation::week_start_sunday;
/// use chrono::NaiveDate;
///
/// // 2026-06-10 is a Wednesday
/// let wednesday = NaiveDate::from_ymd_opt(2026, 6, 10).unwrap();
/// assert_eq!(week_start_sunday(wednesday), NaiveDate::from_ymd_opt(2026, 6, 7));
/// ```
pub fn week_start_sunday(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_sunday())))
}

fn weeks_before(date: NaiveDate, weeks: i64) -> Option<NaiveDate> {
    date.checked_sub_signed(Duration::weeks(weeks))
}

fn weeks_after(date: NaiveDate, weeks: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::weeks(weeks))
}

/// Calculates the key statutory dates for an EWC or placement date.
///
/// Returns `None` when any of the dates would fall outside the calendar
/// chrono can represent.
pub fn calculate_key_dates(ewc_date: NaiveDate) -> Option<KeyDates> {
    let ewc_sunday = week_start_sunday(ewc_date)?;
    let earliest_leave_start = weeks_before(ewc_sunday, EARLIEST_START_OFFSET)?;

    Some(KeyDates {
        ewc_sunday,
        qualifying_week: weeks_before(ewc_sunday, QUALIFYING_WEEK_OFFSET)?,
        service_check_week: earliest_leave_start,
        earliest_leave_start,
        latest_leave_end: weeks_after(ewc_sunday, LATEST_END_OFFSET)?,
        statutory_pay_end: weeks_after(ewc_sunday, STATUTORY_PAY_END_OFFSET)?,
    })
}

/// Returns true when a full schedule of `weeks` weeks starting at `start`
/// stays inside the representable calendar.
pub fn schedule_fits(start: NaiveDate, weeks: u32) -> bool {
    weeks_after(start, i64::from(weeks)).is_some()
}

/// Resolves the date the pay schedule is anchored at.
///
/// Uses the supplied leave start when there is one, otherwise the EWC Sunday.
/// Adds a warning when maternity leave is due to start before the earliest
/// permitted date.
pub fn resolve_leave_start(
    case: &LeaveCase,
    key_dates: &KeyDates,
    notes: &mut Vec<Note>,
) -> NaiveDate {
    let start = case.actual_leave_start.unwrap_or(key_dates.ewc_sunday);

    if case.leave_type == LeaveType::Maternity && start < key_dates.earliest_leave_start {
        notes.push(
            Note::warning(format!(
                "Maternity leave cannot usually start before {} (11 weeks before the expected week of childbirth).",
                key_dates.earliest_leave_start.format("%d %B %Y")
            ))
            .with_source("Maternity and Parental Leave Regulations 1999"),
        );
    }

    start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AcademyPolicy, PayAnnualised, ReturnIntent, Role, SchoolType};
    use chrono::Weekday;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn case_starting(leave_type: LeaveType, start: Option<NaiveDate>) -> LeaveCase {
        LeaveCase {
            role: Role::Teacher,
            school_type: SchoolType::Maintained,
            academy_policy: AcademyPolicy::Other,
            service_weeks: Decimal::from(52),
            la_service_weeks: Decimal::from(52),
            annual_salary: Decimal::from(30000),
            pay_annualised: PayAnnualised::Yes,
            leave_type,
            ewc_date: date(2026, 6, 10),
            actual_leave_start: start,
            return_intent: ReturnIntent::Yes,
            spl_mother_weeks_taken: Decimal::ZERO,
            spl_partner_weeks: Decimal::ZERO,
        }
    }

    #[test]
    fn test_sunday_is_its_own_week_start() {
        let sunday = date(2026, 6, 7);
        assert_eq!(week_start_sunday(sunday), Some(sunday));
    }

    #[test]
    fn test_saturday_rolls_back_six_days() {
        assert_eq!(week_start_sunday(date(2026, 6, 13)), Some(date(2026, 6, 7)));
    }

    #[test]
    fn test_key_dates_offsets_from_ewc_sunday() {
        let key_dates = calculate_key_dates(date(2026, 6, 10)).unwrap();

        assert_eq!(key_dates.ewc_sunday, date(2026, 6, 7));
        assert_eq!(key_dates.qualifying_week, date(2026, 2, 22));
        assert_eq!(key_dates.service_check_week, date(2026, 3, 22));
        assert_eq!(key_dates.earliest_leave_start, date(2026, 3, 22));
        assert_eq!(key_dates.latest_leave_end, date(2027, 6, 6));
        assert_eq!(key_dates.statutory_pay_end, date(2027, 3, 7));
    }

    #[test]
    fn test_all_week_dates_are_sundays() {
        let key_dates = calculate_key_dates(date(2026, 1, 1)).unwrap();
        for d in [
            key_dates.ewc_sunday,
            key_dates.qualifying_week,
            key_dates.service_check_week,
            key_dates.earliest_leave_start,
            key_dates.latest_leave_end,
            key_dates.statutory_pay_end,
        ] {
            assert_eq!(d.weekday(), Weekday::Sun);
        }
    }

    #[test]
    fn test_leave_start_defaults_to_ewc_sunday() {
        let case = case_starting(LeaveType::Maternity, None);
        let key_dates = calculate_key_dates(case.ewc_date).unwrap();
        let mut notes = vec![];

        assert_eq!(resolve_leave_start(&case, &key_dates, &mut notes), date(2026, 6, 7));
        assert!(notes.is_empty());
    }

    #[test]
    fn test_supplied_leave_start_is_used_as_given() {
        let case = case_starting(LeaveType::Maternity, Some(date(2026, 5, 20)));
        let key_dates = calculate_key_dates(case.ewc_date).unwrap();
        let mut notes = vec![];

        assert_eq!(resolve_leave_start(&case, &key_dates, &mut notes), date(2026, 5, 20));
    }

    #[test]
    fn test_early_maternity_start_is_warned() {
        let case = case_starting(LeaveType::Maternity, Some(date(2026, 3, 1)));
        let key_dates = calculate_key_dates(case.ewc_date).unwrap();
        let mut notes = vec![];

        resolve_leave_start(&case, &key_dates, &mut notes);
        assert_eq!(notes.len(), 1);
        assert!(notes[0].message.contains("22 March 2026"));
    }

    #[test]
    fn test_early_start_not_warned_for_adoption() {
        let case = case_starting(LeaveType::Adoption, Some(date(2026, 3, 1)));
        let key_dates = calculate_key_dates(case.ewc_date).unwrap();
        let mut notes = vec![];

        resolve_leave_start(&case, &key_dates, &mut notes);
        assert!(notes.is_empty());
    }

    #[test]
    fn test_key_dates_outside_calendar_are_none() {
        assert!(calculate_key_dates(NaiveDate::MAX).is_none());
        assert!(calculate_key_dates(NaiveDate::MIN).is_none());
    }

    #[test]
    fn test_schedule_fits_near_calendar_end() {
        assert!(schedule_fits(date(2026, 6, 7), 52));
        assert!(!schedule_fits(NaiveDate::MAX - Duration::weeks(10), 52));
    }
}
