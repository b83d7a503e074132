//! Derived earnings and service quantities.
//!
//! Average weekly earnings and service lengths are the inputs to every
//! eligibility test, so they are computed once up front.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;

/// Weeks in a year for service conversions.
const WEEKS_PER_YEAR: u32 = 52;

/// Months in a year for service conversions.
const MONTHS_PER_YEAR: u32 = 12;

/// Computes average weekly earnings from an annual salary.
///
/// AWE is the salary divided by the rates table's divisor (52.14). A zero or
/// negative salary yields zero.
///
/// # Example
///
/// ```
/// use leave_entitlement_engine::calculation::average_weekly_earnings;
/// use leave_entitlement_engine::config::StatutoryRates;
/// use rust_decimal::Decimal;
///
/// let awe = average_weekly_earnings(Decimal::new(15642, 0), &StatutoryRates::default());
/// assert_eq!(awe, Decimal::new(300, 0));
/// ```
pub fn average_weekly_earnings(annual_salary: Decimal, rates: &StatutoryRates) -> Decimal {
    if annual_salary <= Decimal::ZERO || rates.awe_divisor <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    annual_salary / rates.awe_divisor
}

/// Converts a years + months service length into weeks.
///
/// Years count as 52 weeks and months as 52/12 weeks.
///
/// # Example
///
/// ```
/// use leave_entitlement_engine::calculation::service_weeks;
/// use rust_decimal::Decimal;
///
/// assert_eq!(service_weeks(Decimal::new(2, 0), Decimal::ZERO), Decimal::new(104, 0));
/// ```
pub fn service_weeks(years: Decimal, months: Decimal) -> Decimal {
    let weeks_per_year = Decimal::from(WEEKS_PER_YEAR);
    years * weeks_per_year + months * weeks_per_year / Decimal::from(MONTHS_PER_YEAR)
}
