//! The entitlement calculation pipeline.
//!
//! Runs each phase in order: input coercion, derived quantities, key dates,
//! leave eligibility, statutory pay, occupational pay, the pay schedule and
//! finally repayment and closing notes. The pipeline is pure; it reads no
//! clock and holds no state between calls.

use tracing::{debug, info};

use crate::config::{RatesTable, StatutoryRates};
use crate::error::EngineResult;
use crate::models::{CalculationResults, CalculatorInputs, Eligibility};

use super::coercion::{CoercionResult, coerce_inputs};
use super::earnings::average_weekly_earnings;
use super::key_dates::resolve_leave_start;
use super::leave_eligibility::determine_leave_eligibility;
use super::occupational_pay::determine_occupational_pay;
use super::pay_schedule::{ScheduleContext, build_pay_schedule};
use super::repayment::{assess_repayment, keeping_in_touch_note};
use super::statutory_pay::determine_statutory_pay;

/// Calculates leave entitlements using the built-in statutory rates.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidDate`] if the EWC/placement
/// date cannot be parsed or lies at the edge of the calendar. All other
/// malformed input is coerced.
///
/// # Example
///
/// ```
/// use leave_entitlement_engine::calculate_entitlements;
/// use leave_entitlement_engine::models::CalculatorInputs;
///
/// let inputs = CalculatorInputs {
///     leave_type: "maternity".to_string(),
///     ewc_date: "2026-06-10".to_string(),
///     service_years: "2".to_string(),
///     annual_salary: "31284".to_string(),
///     ..CalculatorInputs::default()
/// };
///
/// let results = calculate_entitlements(&inputs).unwrap();
/// assert!(results.eligibility.statutory_pay_eligible);
/// assert_eq!(results.pay_schedule.len(), 52);
/// ```
pub fn calculate_entitlements(inputs: &CalculatorInputs) -> EngineResult<CalculationResults> {
    calculate_entitlements_with_rates(inputs, &StatutoryRates::default())
}

/// Calculates leave entitlements using the given statutory rates.
pub fn calculate_entitlements_with_rates(
    inputs: &CalculatorInputs,
    rates: &StatutoryRates,
) -> EngineResult<CalculationResults> {
    let coerced = coerce_inputs(inputs)?;
    Ok(calculate_case(coerced, rates))
}

/// Calculates leave entitlements using the rates version effective on the
/// Sunday of the expected week.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidDate`] for an unreadable
/// EWC/placement date, or [`crate::error::EngineError::RatesNotFound`] if no
/// rates version covers it.
pub fn calculate_entitlements_with_table(
    inputs: &CalculatorInputs,
    table: &RatesTable,
) -> EngineResult<CalculationResults> {
    let coerced = coerce_inputs(inputs)?;
    let rates = table.rates_for(coerced.key_dates.ewc_sunday)?;
    Ok(calculate_case(coerced, rates))
}

fn calculate_case(coerced: CoercionResult, rates: &StatutoryRates) -> CalculationResults {
    let CoercionResult {
        case,
        key_dates,
        mut notes,
    } = coerced;

    let awe = average_weekly_earnings(case.annual_salary, rates);
    debug!(
        leave_type = %case.leave_type,
        awe = %awe,
        service_weeks = %case.service_weeks,
        la_service_weeks = %case.la_service_weeks,
        "Derived earnings and service"
    );

    let leave_start = resolve_leave_start(&case, &key_dates, &mut notes);
    debug!(
        ewc_sunday = %key_dates.ewc_sunday,
        leave_start = %leave_start,
        "Resolved key dates"
    );

    let leave = determine_leave_eligibility(&case, rates);
    notes.extend(leave.notes);

    let statutory = determine_statutory_pay(&case, awe, rates);
    notes.extend(statutory.notes);
    debug!(
        eligible = statutory.eligible,
        weeks = statutory.weeks,
        term_time = statutory.term_time_warning.is_some(),
        "Statutory pay decided"
    );

    let occupational = determine_occupational_pay(&case, rates);
    notes.extend(occupational.notes.iter().cloned());
    debug!(
        scheme = %occupational.scheme_name(),
        eligible = occupational.eligibility.is_eligible(),
        "Occupational pay decided"
    );

    let schedule = build_pay_schedule(&ScheduleContext {
        leave_start,
        leave_type: case.leave_type,
        awe,
        statutory_eligible: statutory.eligible,
        statutory_weeks: statutory.weeks,
        spl_partner_weeks: case.spl_partner_weeks,
        scheme: occupational.payable_scheme(),
        rates,
    });

    let repayment = assess_repayment(
        case.return_intent,
        schedule.occupational_above_statutory,
        occupational.payable_scheme(),
    );
    notes.extend(repayment.notes);
    notes.push(keeping_in_touch_note());

    let eligibility = Eligibility {
        statutory_leave_weeks: leave.weeks,
        statutory_leave_eligible: leave.eligible,
        leave_reason: leave.reason,
        statutory_pay_type: case.leave_type.statutory_pay_type().to_string(),
        statutory_pay_eligible: statutory.eligible,
        statutory_pay_weeks: statutory.weeks,
        statutory_pay_reason: statutory.reason,
        occupational_pay_eligible: occupational.eligibility,
        occupational_pay_scheme: occupational.scheme_name(),
        occupational_pay_reason: occupational.reason.clone(),
        term_time_warning: statutory.term_time_warning,
    };

    info!(
        leave_type = %case.leave_type,
        statutory_pay_eligible = eligibility.statutory_pay_eligible,
        statutory_pay_weeks = eligibility.statutory_pay_weeks,
        occupational_above_statutory = %schedule.occupational_above_statutory,
        notes = notes.len(),
        "Entitlement calculation completed"
    );

    CalculationResults {
        eligibility,
        key_dates: Some(key_dates),
        pay_schedule: schedule.weeks,
        notes,
        leave_type: case.leave_type,
        estimated_repayment: repayment.estimated_repayment,
        occupational_pay_above_statutory_total: schedule.occupational_above_statutory,
        rates_effective_date: rates.effective_date,
    }
}
