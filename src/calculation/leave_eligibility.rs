//! Statutory leave eligibility by leave type.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::models::{LeaveCase, LeaveType, Note};

/// Weeks of maternity or adoption leave.
pub const MATERNITY_LEAVE_WEEKS: u32 = 52;

/// Weeks of paternity leave.
pub const PATERNITY_LEAVE_WEEKS: u32 = 2;

/// Compulsory maternity leave weeks the mother must take after the birth.
pub const COMPULSORY_MATERNITY_WEEKS: u32 = 2;

/// The leave eligibility decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveEligibilityResult {
    /// Weeks of statutory leave.
    pub weeks: u32,
    /// Whether statutory leave is available.
    pub eligible: bool,
    /// Why leave is unavailable, when it is.
    pub reason: Option<String>,
    /// Advisory notes raised by the decision.
    pub notes: Vec<Note>,
}

/// Determines statutory leave eligibility.
///
/// Maternity and adoption leave are a day-one right. Paternity leave needs
/// the continuous service threshold with the current employer. Shared
/// parental leave is the 52-week maternity entitlement less the compulsory
/// weeks; joint eligibility of both parents is noted but not tested.
pub fn determine_leave_eligibility(
    case: &LeaveCase,
    rates: &StatutoryRates,
) -> LeaveEligibilityResult {
    match case.leave_type {
        LeaveType::Maternity | LeaveType::Adoption => LeaveEligibilityResult {
            weeks: MATERNITY_LEAVE_WEEKS,
            eligible: true,
            reason: None,
            notes: vec![],
        },
        LeaveType::Paternity => {
            let required = Decimal::from(rates.min_service_weeks);
            if case.service_weeks >= required {
                LeaveEligibilityResult {
                    weeks: PATERNITY_LEAVE_WEEKS,
                    eligible: true,
                    reason: None,
                    notes: vec![],
                }
            } else {
                LeaveEligibilityResult {
                    weeks: PATERNITY_LEAVE_WEEKS,
                    eligible: false,
                    reason: Some(format!(
                        "Paternity leave requires at least {} weeks' continuous service with your current employer.",
                        rates.min_service_weeks
                    )),
                    notes: vec![],
                }
            }
        }
        LeaveType::SharedParental => LeaveEligibilityResult {
            weeks: MATERNITY_LEAVE_WEEKS - COMPULSORY_MATERNITY_WEEKS,
            eligible: true,
            reason: None,
            notes: vec![
                Note::info(
                    "Shared parental leave depends on both parents meeting their own eligibility tests; only your side has been checked.",
                )
                .with_source("Shared Parental Leave Regulations 2014"),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AcademyPolicy, PayAnnualised, ReturnIntent, Role, SchoolType};
    use chrono::NaiveDate;

    fn case_with(leave_type: LeaveType, service_weeks: i64) -> LeaveCase {
        LeaveCase {
            role: Role::Support,
            school_type: SchoolType::Academy,
            academy_policy: AcademyPolicy::Green,
            service_weeks: Decimal::from(service_weeks),
            la_service_weeks: Decimal::from(service_weeks),
            annual_salary: Decimal::from(24000),
            pay_annualised: PayAnnualised::Yes,
            leave_type,
            ewc_date: NaiveDate::from_ymd_opt(2026, 9, 16).unwrap(),
            actual_leave_start: None,
            return_intent: ReturnIntent::Yes,
            spl_mother_weeks_taken: Decimal::ZERO,
            spl_partner_weeks: Decimal::ZERO,
        }
    }

    #[test]
    fn test_maternity_leave_is_a_day_one_right() {
        let result = determine_leave_eligibility(
            &case_with(LeaveType::Maternity, 0),
            &StatutoryRates::default(),
        );
        assert!(result.eligible);
        assert_eq!(result.weeks, 52);
    }

    #[test]
    fn test_adoption_leave_is_52_weeks() {
        let result = determine_leave_eligibility(
            &case_with(LeaveType::Adoption, 4),
            &StatutoryRates::default(),
        );
        assert!(result.eligible);
        assert_eq!(result.weeks, 52);
    }

    #[test]
    fn test_paternity_leave_needs_26_weeks() {
        let rates = StatutoryRates::default();

        let short = determine_leave_eligibility(&case_with(LeaveType::Paternity, 25), &rates);
        assert!(!short.eligible);
        assert!(short.reason.unwrap().contains("26 weeks"));

        let enough = determine_leave_eligibility(&case_with(LeaveType::Paternity, 26), &rates);
        assert!(enough.eligible);
        assert_eq!(enough.weeks, 2);
        assert!(enough.reason.is_none());
    }

    #[test]
    fn test_shared_parental_leave_is_50_weeks_with_joint_note() {
        let result = determine_leave_eligibility(
            &case_with(LeaveType::SharedParental, 0),
            &StatutoryRates::default(),
        );
        assert!(result.eligible);
        assert_eq!(result.weeks, 50);
        assert_eq!(result.notes.len(), 1);
        assert!(result.notes[0].message.contains("both parents"));
    }
}
