//! Calculation result models for the Leave Entitlement Engine.
//!
//! [`CalculationResults`] aggregates everything a calculation produces. It
//! carries no timestamps or identifiers, so identical inputs serialise to
//! identical output.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Eligibility, KeyDates, LeaveType, Note, PayWeek};

/// The complete result of an entitlement calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResults {
    /// Leave and pay eligibility decisions.
    pub eligibility: Eligibility,
    /// Key statutory dates.
    pub key_dates: Option<KeyDates>,
    /// The 52-week pay schedule.
    pub pay_schedule: Vec<PayWeek>,
    /// Advisories and warnings, in the order they were raised.
    pub notes: Vec<Note>,
    /// The leave type calculated.
    pub leave_type: LeaveType,
    /// Occupational pay to repay if the employee does not return to work.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_repayment: Option<Decimal>,
    /// Total occupational pay paid above the statutory floor.
    pub occupational_pay_above_statutory_total: Decimal,
    /// Effective date of the statutory rates applied.
    pub rates_effective_date: NaiveDate,
}

impl CalculationResults {
    /// Total pay across the whole schedule.
    pub fn total_pay(&self) -> Decimal {
        self.pay_schedule.iter().map(|w| w.amount).sum()
    }

    /// Total statutory pay across the whole schedule.
    pub fn total_statutory_pay(&self) -> Decimal {
        self.pay_schedule.iter().map(|w| w.statutory_amount).sum()
    }

    /// Returns the pay week with the given 1-based number.
    pub fn week(&self, number: u32) -> Option<&PayWeek> {
        self.pay_schedule.iter().find(|w| w.week == number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OccupationalEligibility;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_week(week: u32, amount: &str, statutory: &str) -> PayWeek {
        let start = NaiveDate::from_ymd_opt(2026, 5, 31).unwrap()
            + chrono::Duration::weeks(i64::from(week) - 1);
        PayWeek {
            week,
            start_date: start,
            end_date: start + chrono::Duration::days(6),
            pay_type: "SMP (90% AWE)".to_string(),
            amount: dec(amount),
            statutory_amount: dec(statutory),
            notes: None,
        }
    }

    fn sample_results(pay_schedule: Vec<PayWeek>) -> CalculationResults {
        CalculationResults {
            eligibility: Eligibility {
                statutory_leave_weeks: 52,
                statutory_leave_eligible: true,
                leave_reason: None,
                statutory_pay_type: "SMP".to_string(),
                statutory_pay_eligible: true,
                statutory_pay_weeks: 39,
                statutory_pay_reason: "Eligible".to_string(),
                occupational_pay_eligible: OccupationalEligibility::Eligible,
                occupational_pay_scheme: "Burgundy Book".to_string(),
                occupational_pay_reason: "Eligible".to_string(),
                term_time_warning: None,
            },
            key_dates: None,
            pay_schedule,
            notes: vec![],
            leave_type: LeaveType::Maternity,
            estimated_repayment: None,
            occupational_pay_above_statutory_total: dec("30.00"),
            rates_effective_date: NaiveDate::from_ymd_opt(2025, 4, 6).unwrap(),
        }
    }

    #[test]
    fn test_totals_sum_schedule() {
        let results = sample_results(vec![
            sample_week(1, "300.00", "270.00"),
            sample_week(2, "270.00", "270.00"),
        ]);

        assert_eq!(results.total_pay(), dec("570.00"));
        assert_eq!(results.total_statutory_pay(), dec("540.00"));
    }

    #[test]
    fn test_week_lookup_by_number() {
        let results = sample_results(vec![
            sample_week(1, "300.00", "270.00"),
            sample_week(2, "270.00", "270.00"),
        ]);

        assert_eq!(results.week(2).unwrap().amount, dec("270.00"));
        assert!(results.week(53).is_none());
    }

    #[test]
    fn test_results_serialization_omits_absent_repayment() {
        let results = sample_results(vec![sample_week(1, "300.00", "270.00")]);
        let json = serde_json::to_value(&results).unwrap();

        assert!(json.get("estimated_repayment").is_none());
        assert_eq!(json["leave_type"], "maternity");
        assert_eq!(json["eligibility"]["occupational_pay_eligible"], true);
        assert_eq!(json["occupational_pay_above_statutory_total"], "30.00");
    }
}
