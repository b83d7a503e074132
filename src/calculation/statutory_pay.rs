//! Statutory pay eligibility.
//!
//! Statutory pay (SMP, SAP, SPP or ShPP) needs continuous service with the
//! current employer and average weekly earnings at or above the Lower
//! Earnings Limit. For term-time staff whose pay is not annualised, salary
//! based earnings can understate the relevant period, so a failed earnings
//! test is treated as inconclusive rather than final.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::StatutoryRates;
use crate::models::{LeaveCase, LeaveType, Note, PayAnnualised};

use super::leave_eligibility::{COMPULSORY_MATERNITY_WEEKS, PATERNITY_LEAVE_WEEKS};
use super::money::format_gbp;

/// The statutory pay decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatutoryPayResult {
    /// Whether statutory pay is due.
    pub eligible: bool,
    /// Weeks of statutory pay awarded.
    pub weeks: u32,
    /// Human-readable explanation.
    pub reason: String,
    /// Set when term-time pay made the earnings test inconclusive.
    pub term_time_warning: Option<String>,
    /// Advisory notes raised by the decision.
    pub notes: Vec<Note>,
}

/// Remaining ShPP weeks once the mother's statutory pay weeks are deducted.
///
/// The compulsory weeks are already counted in the 39-week pool, so only
/// weeks beyond them reduce it. The result never exceeds the pool less the
/// compulsory weeks.
///
/// # Example
///
/// ```
/// use leave_entitlement_engine::calculation::shared_parental_pay_pool;
/// use leave_entitlement_engine::config::StatutoryRates;
/// use rust_decimal::Decimal;
///
/// let pool = shared_parental_pay_pool(Decimal::from(20), &StatutoryRates::default());
/// assert_eq!(pool, 21);
/// ```
pub fn shared_parental_pay_pool(mother_weeks_taken: Decimal, rates: &StatutoryRates) -> u32 {
    let compulsory = Decimal::from(COMPULSORY_MATERNITY_WEEKS);
    let beyond_compulsory = (mother_weeks_taken - compulsory).max(Decimal::ZERO);
    let remaining = (Decimal::from(rates.statutory_pay_weeks) - beyond_compulsory)
        .max(Decimal::ZERO)
        .floor()
        .to_u32()
        .unwrap_or(0);

    remaining.min(rates.statutory_pay_weeks.saturating_sub(COMPULSORY_MATERNITY_WEEKS))
}

/// Determines statutory pay eligibility and the number of paid weeks.
pub fn determine_statutory_pay(
    case: &LeaveCase,
    awe: Decimal,
    rates: &StatutoryRates,
) -> StatutoryPayResult {
    let service_ok = case.service_weeks >= Decimal::from(rates.min_service_weeks);
    let earnings_ok = awe >= rates.lower_earnings_limit;
    let term_time = case.pay_annualised != PayAnnualised::Yes && !earnings_ok && awe > Decimal::ZERO;

    let awe_text = format_gbp(awe);
    let lel_text = format_gbp(rates.lower_earnings_limit);
    let mut notes = Vec::new();
    let mut term_time_warning = None;

    if term_time {
        let warning = format!(
            "Your pay is not annualised, so average weekly earnings of {} worked out from salary may understate your earnings in the relevant period. Statutory pay eligibility has been based on service alone; ask payroll to confirm your earnings against the Lower Earnings Limit ({}).",
            awe_text, lel_text
        );
        notes.push(Note::warning(warning.clone()).with_source("HMRC"));
        term_time_warning = Some(warning);
    }

    let eligible = if term_time {
        service_ok
    } else {
        service_ok && earnings_ok
    };

    let reason = match (service_ok, earnings_ok, term_time) {
        (true, true, _) => format!(
            "At least {} weeks' continuous service and average weekly earnings of {} meet the Lower Earnings Limit ({}).",
            rates.min_service_weeks, awe_text, lel_text
        ),
        (true, false, true) => format!(
            "At least {} weeks' continuous service; average weekly earnings of {} are below the Lower Earnings Limit ({}) but may be understated by term-time pay.",
            rates.min_service_weeks, awe_text, lel_text
        ),
        (true, false, false) => format!(
            "Average weekly earnings of {} are below the Lower Earnings Limit ({}).",
            awe_text, lel_text
        ),
        (false, true, _) | (false, false, true) => format!(
            "Less than {} weeks' continuous service with your current employer by the qualifying week.",
            rates.min_service_weeks
        ),
        (false, false, false) => format!(
            "Less than {} weeks' continuous service with your current employer, and average weekly earnings of {} are below the Lower Earnings Limit ({}).",
            rates.min_service_weeks, awe_text, lel_text
        ),
    };

    let weeks = if !eligible {
        0
    } else {
        match case.leave_type {
            LeaveType::Maternity | LeaveType::Adoption => rates.statutory_pay_weeks,
            LeaveType::Paternity => PATERNITY_LEAVE_WEEKS,
            LeaveType::SharedParental => {
                let pool = shared_parental_pay_pool(case.spl_mother_weeks_taken, rates);
                let partner = case.spl_partner_weeks.floor().to_u32().unwrap_or(u32::MAX);
                let weeks = partner.min(pool);
                notes.push(Note::info(format!(
                    "{} weeks of ShPP remain after the mother's leave; {} weeks are payable for the weeks you intend to take.",
                    pool, weeks
                )));
                weeks
            }
        }
    };

    StatutoryPayResult {
        eligible,
        weeks,
        reason,
        term_time_warning,
        notes,
    }
}
