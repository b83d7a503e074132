//! Input coercion.
//!
//! Converts the raw [`CalculatorInputs`] form record into a typed
//! [`LeaveCase`]. Parsing is deliberately permissive: non-numeric service and
//! salary fields become zero and unrecognised choices fall back to defaults,
//! with notes recording what was assumed. Only an unreadable EWC/placement
//! date is rejected.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AcademyPolicy, CalculatorInputs, KeyDates, LeaveCase, LeaveType, Note, PayAnnualised,
    ReturnIntent, Role, SchoolType,
};

use super::earnings::service_weeks;
use super::money::format_gbp;
use super::key_dates::{calculate_key_dates, schedule_fits};
use super::pay_schedule::SCHEDULE_WEEKS;

/// Largest value any numeric form field is taken at; larger values are
/// capped with a warning.
pub const MAX_FORM_VALUE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Decimal carries 28 significant digits (29 just below `Decimal::MAX`).
const MAX_DECIMAL_DIGITS: usize = 28;

/// The typed case plus any notes raised while coercing it.
#[derive(Debug, Clone)]
pub struct CoercionResult {
    /// The coerced case.
    pub case: LeaveCase,
    /// Key dates derived from the EWC/placement date.
    pub key_dates: KeyDates,
    /// Notes describing assumptions made about the input.
    pub notes: Vec<Note>,
}

/// Reads the leading number from a form value.
///
/// Leading whitespace is skipped and the longest
/// `[+-]digits[.digits][(e|E)[+-]digits]` prefix is read, so `"12 weeks"`
/// reads as 12 and `"1e5"` as 100000. Values too large for a `Decimal`
/// saturate at `Decimal::MAX` (or `Decimal::MIN`) and values too small
/// become zero. Returns `None` when the value does not start with a number.
///
/// # Example
///
/// ```
/// use leave_entitlement_engine::calculation::parse_number;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_number("32000"), Some(Decimal::new(32000, 0)));
/// assert_eq!(parse_number(" 12abc"), Some(Decimal::new(12, 0)));
/// assert_eq!(parse_number("3.2e4"), Some(Decimal::new(32000, 0)));
/// assert_eq!(parse_number("abc"), None);
/// ```
pub fn parse_number(value: &str) -> Option<Decimal> {
    let trimmed = value.trim_start();
    let bytes = trimmed.as_bytes();
    let digits_from = |from: usize| {
        bytes[from.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let negative = bytes.first() == Some(&b'-');
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_start = end;
    end += digits_from(end);
    let integer = &trimmed[int_start..end];

    let mut fraction = "";
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        end = frac_start + digits_from(frac_start);
        fraction = &trimmed[frac_start..end];
    }

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut exponent: i64 = 0;
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign_len = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_start = end + 1 + sign_len;
        let exp_len = digits_from(exp_start);
        if exp_len > 0 {
            let exp_negative = bytes.get(end + 1) == Some(&b'-');
            exponent = trimmed[exp_start..exp_start + exp_len]
                .parse::<i64>()
                .unwrap_or(i64::MAX);
            if exp_negative {
                exponent = -exponent;
            }
        }
    }

    let mantissa = match parse_mantissa(integer, fraction) {
        Some(mantissa) => mantissa,
        None => return Some(saturated(negative)),
    };
    let magnitude = match scale_by_power_of_ten(mantissa, exponent) {
        Some(magnitude) => magnitude,
        None => return Some(saturated(negative)),
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// Parses unsigned integer and fraction digits, dropping fraction digits
/// beyond what a `Decimal` can hold. `None` means the integer part overflows.
fn parse_mantissa(integer: &str, fraction: &str) -> Option<Decimal> {
    let integer = integer.trim_start_matches('0');
    if integer.len() > MAX_DECIMAL_DIGITS + 1 {
        return None;
    }

    let keep = MAX_DECIMAL_DIGITS.saturating_sub(integer.len());
    let fraction = &fraction[..fraction.len().min(keep)];
    let integer = if integer.is_empty() { "0" } else { integer };
    let text = if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    };

    Decimal::from_str(&text).ok()
}

/// Multiplies by `10^exponent`. `None` means the result overflows; results
/// below the smallest representable magnitude become zero.
fn scale_by_power_of_ten(value: Decimal, exponent: i64) -> Option<Decimal> {
    if value.is_zero() || exponent == 0 {
        return Some(value);
    }

    let max_exponent = MAX_DECIMAL_DIGITS as i64;
    if exponent > max_exponent {
        return None;
    }
    if exponent < -max_exponent {
        return Some(Decimal::ZERO);
    }

    if exponent > 0 {
        let factor = Decimal::from_i128_with_scale(10i128.pow(exponent as u32), 0);
        value.checked_mul(factor)
    } else {
        Some(
            value
                .checked_mul(Decimal::new(1, (-exponent) as u32))
                .unwrap_or(Decimal::ZERO),
        )
    }
}

fn saturated(negative: bool) -> Decimal {
    if negative { Decimal::MIN } else { Decimal::MAX }
}

/// Parses an ISO `YYYY-MM-DD` date, ignoring any trailing `T…` time part.
///
/// # Example
///
/// ```
/// use leave_entitlement_engine::calculation::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_date("2026-06-10"), NaiveDate::from_ymd_opt(2026, 6, 10));
/// assert_eq!(parse_date("2026-06-10T00:00:00.000Z"), NaiveDate::from_ymd_opt(2026, 6, 10));
/// assert_eq!(parse_date("not-a-date"), None);
/// ```
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let date_part = trimmed.split_once('T').map_or(trimmed, |(date, _)| date);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// How a numeric form field was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldReading {
    /// A number within range.
    Number,
    /// Left blank.
    Empty,
    /// Not a number.
    Malformed,
    /// Larger than [`MAX_FORM_VALUE`].
    Capped,
}

/// Parses a numeric field, treating malformed or negative values as zero and
/// capping values above [`MAX_FORM_VALUE`].
fn coerce_number(raw: &str) -> (Decimal, FieldReading) {
    match parse_number(raw) {
        Some(value) if value > MAX_FORM_VALUE => (MAX_FORM_VALUE, FieldReading::Capped),
        Some(value) => (value.max(Decimal::ZERO), FieldReading::Number),
        None if raw.trim().is_empty() => (Decimal::ZERO, FieldReading::Empty),
        None => (Decimal::ZERO, FieldReading::Malformed),
    }
}

fn invalid_ewc_date(inputs: &CalculatorInputs) -> EngineError {
    EngineError::InvalidDate {
        field: "ewc_date".to_string(),
        value: inputs.ewc_date.clone(),
    }
}

/// Coerces a raw form submission into a typed [`LeaveCase`].
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`] if `ewc_date` is not a valid date, or
/// is so close to the edge of the calendar that its key dates cannot be
/// represented.
pub fn coerce_inputs(inputs: &CalculatorInputs) -> EngineResult<CoercionResult> {
    let ewc_date = parse_date(&inputs.ewc_date).ok_or_else(|| invalid_ewc_date(inputs))?;
    let key_dates = calculate_key_dates(ewc_date).ok_or_else(|| invalid_ewc_date(inputs))?;

    let mut notes = Vec::new();

    let leave_type = match LeaveType::from_form(&inputs.leave_type) {
        Some(leave_type) => leave_type,
        None => {
            warn!(leave_type = %inputs.leave_type, "Unrecognised leave type, using maternity");
            notes.push(Note::warning(format!(
                "Leave type '{}' was not recognised, so maternity leave has been calculated.",
                inputs.leave_type.trim()
            )));
            LeaveType::Maternity
        }
    };

    let service = [
        coerce_number(&inputs.service_years),
        coerce_number(&inputs.service_months),
        coerce_number(&inputs.la_service_years),
        coerce_number(&inputs.la_service_months),
    ];
    if service.iter().any(|(_, r)| *r == FieldReading::Malformed) {
        warn!("Non-numeric service length treated as zero");
        notes.push(Note::warning(
            "One or more service length fields were not numbers and have been treated as 0.",
        ));
    }
    if service.iter().any(|(_, r)| *r == FieldReading::Capped) {
        warn!("Oversized service length capped");
        notes.push(Note::warning(format!(
            "One or more service length fields were implausibly large and have been capped at {}.",
            MAX_FORM_VALUE
        )));
    }
    let [(years, _), (months, _), (la_years, _), (la_months, _)] = service;

    let (annual_salary, salary_reading) = coerce_number(&inputs.annual_salary);
    match salary_reading {
        FieldReading::Malformed => {
            warn!(salary = %inputs.annual_salary, "Non-numeric salary treated as zero");
            notes.push(Note::warning(format!(
                "Annual salary '{}' is not a number, so average weekly earnings have been treated as £0.00.",
                inputs.annual_salary.trim()
            )));
        }
        FieldReading::Empty => notes.push(Note::info(
            "No annual salary was entered, so average weekly earnings have been treated as £0.00.",
        )),
        FieldReading::Capped => {
            warn!(salary = %inputs.annual_salary, "Oversized salary capped");
            notes.push(Note::warning(format!(
                "Annual salary '{}' is implausibly large and has been capped at {}.",
                inputs.annual_salary.trim(),
                format_gbp(MAX_FORM_VALUE)
            )));
        }
        FieldReading::Number => {}
    }

    let actual_leave_start = match inputs.actual_leave_start_date.as_deref().map(str::trim) {
        None | Some("") => {
            notes.push(Note::info(
                "No leave start date was entered, so leave is assumed to start at the beginning of the expected week.",
            ));
            None
        }
        Some(raw) => match parse_date(raw) {
            Some(date) if schedule_fits(date, SCHEDULE_WEEKS) => Some(date),
            Some(_) => {
                warn!(leave_start = %raw, "Out-of-range leave start date ignored");
                notes.push(Note::warning(format!(
                    "Leave start date '{}' is too far in the future to schedule, so leave is assumed to start at the beginning of the expected week.",
                    raw
                )));
                None
            }
            None => {
                warn!(leave_start = %raw, "Unreadable leave start date ignored");
                notes.push(Note::warning(format!(
                    "Leave start date '{}' could not be read, so leave is assumed to start at the beginning of the expected week.",
                    raw
                )));
                None
            }
        },
    };

    let case = LeaveCase {
        role: Role::from(inputs.role.as_str()),
        school_type: SchoolType::from(inputs.school_type.as_str()),
        academy_policy: AcademyPolicy::from(inputs.academy_policy.as_str()),
        service_weeks: service_weeks(years, months),
        la_service_weeks: service_weeks(la_years, la_months),
        annual_salary,
        pay_annualised: PayAnnualised::from(inputs.is_pay_annualised.as_str()),
        leave_type,
        ewc_date,
        actual_leave_start,
        return_intent: ReturnIntent::from(inputs.returning_to_work.as_str()),
        spl_mother_weeks_taken: coerce_number(&inputs.spl_mother_weeks_taken).0,
        spl_partner_weeks: coerce_number(&inputs.spl_partner_weeks).0,
    };

    Ok(CoercionResult {
        case,
        key_dates,
        notes,
    })
}
