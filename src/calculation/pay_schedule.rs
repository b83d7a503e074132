//! Week-by-week pay schedule.
//!
//! Builds the 52-week schedule from the leave start. Each week combines a
//! statutory component with any occupational component; the employee is
//! paid whichever is higher, and the amount by which occupational pay
//! exceeds statutory pay is accumulated for repayment purposes.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::models::{LeaveType, PayWeek};

use super::money::{format_gbp, round_pence};
use super::occupational_pay::{OccupationalScheme, occupational_week};

/// Number of weeks in every pay schedule.
pub const SCHEDULE_WEEKS: u32 = 52;

/// Maternity and adoption weeks paid at 90% of AWE without the flat-rate cap.
pub const EARNINGS_RELATED_WEEKS: u32 = 6;

/// Everything the schedule needs from earlier phases.
#[derive(Debug, Clone)]
pub struct ScheduleContext<'a> {
    /// The date week 1 starts.
    pub leave_start: NaiveDate,
    /// The leave type.
    pub leave_type: LeaveType,
    /// Average weekly earnings.
    pub awe: Decimal,
    /// Whether statutory pay is due.
    pub statutory_eligible: bool,
    /// Weeks of statutory pay awarded.
    pub statutory_weeks: u32,
    /// Weeks the partner intends to take (shared parental leave only).
    pub spl_partner_weeks: Decimal,
    /// The occupational scheme to pay, when eligible.
    pub scheme: Option<OccupationalScheme>,
    /// The statutory rates applied.
    pub rates: &'a StatutoryRates,
}

/// The schedule and its occupational excess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayScheduleResult {
    /// Exactly [`SCHEDULE_WEEKS`] weeks.
    pub weeks: Vec<PayWeek>,
    /// Total occupational pay above the statutory component.
    pub occupational_above_statutory: Decimal,
}

/// The statutory part of one week.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StatutoryWeek {
    amount: Decimal,
    label: String,
    note: String,
}

impl StatutoryWeek {
    fn unpaid(label: &str, note: String) -> Self {
        Self {
            amount: Decimal::new(0, 2),
            label: label.to_string(),
            note,
        }
    }
}

fn statutory_week(ctx: &ScheduleContext<'_>, week: u32) -> StatutoryWeek {
    let pay_type = ctx.leave_type.statutory_pay_type();

    if ctx.leave_type == LeaveType::SharedParental && Decimal::from(week) > ctx.spl_partner_weeks {
        return StatutoryWeek::unpaid(
            "Not on SPL / Unpaid",
            "Outside the weeks of shared parental leave you intend to take".to_string(),
        );
    }
    if !ctx.statutory_eligible {
        return StatutoryWeek::unpaid("Unpaid", format!("Not eligible for {}", pay_type));
    }
    if week > ctx.statutory_weeks {
        return StatutoryWeek::unpaid("Unpaid", format!("{} period has ended", pay_type));
    }

    let ninety = round_pence(ctx.awe * Decimal::new(9, 1));
    let flat = ctx.rates.statutory_weekly_rate;

    if ctx.leave_type.is_maternity_or_adoption() && week <= EARNINGS_RELATED_WEEKS {
        StatutoryWeek {
            amount: ninety,
            label: format!("{} (90% AWE)", pay_type),
            note: format!(
                "90% of AWE for the first {} weeks",
                EARNINGS_RELATED_WEEKS
            ),
        }
    } else if ninety < flat {
        StatutoryWeek {
            amount: ninety,
            label: format!("{} (90% AWE)", pay_type),
            note: format!(
                "90% of AWE ({}) is below the flat rate ({})",
                format_gbp(ninety),
                format_gbp(flat)
            ),
        }
    } else {
        StatutoryWeek {
            amount: flat,
            label: format!("{} (Flat Rate)", pay_type),
            note: format!("Flat statutory rate of {}", format_gbp(flat)),
        }
    }
}

/// Builds the 52-week pay schedule.
///
/// Weeks are contiguous, seven days each, starting at `ctx.leave_start`.
/// Coercion only accepts leave starts with room for every week; the
/// schedule stops short at the end of the calendar rather than overflow.
pub fn build_pay_schedule(ctx: &ScheduleContext<'_>) -> PayScheduleResult {
    let pay_type = ctx.leave_type.statutory_pay_type();
    let mut weeks = Vec::with_capacity(SCHEDULE_WEEKS as usize);
    let mut occupational_above_statutory = Decimal::new(0, 2);

    for week in 1..=SCHEDULE_WEEKS {
        let dates = ctx
            .leave_start
            .checked_add_signed(Duration::weeks(i64::from(week - 1)))
            .and_then(|start| Some((start, start.checked_add_signed(Duration::days(6))?)));
        let Some((start_date, end_date)) = dates else {
            break;
        };
        let statutory = statutory_week(ctx, week);

        let occupational = ctx
            .scheme
            .and_then(|scheme| occupational_week(scheme, week, ctx.awe, statutory.amount, pay_type))
            .filter(|occ| occ.amount > Decimal::ZERO);

        let (amount, label, notes) = match occupational {
            Some(occ) if occ.amount >= statutory.amount => {
                occupational_above_statutory += occ.amount - statutory.amount;
                let notes = if statutory.amount.is_zero() {
                    occ.note
                } else {
                    format!(
                        "{}; includes {} of {}",
                        occ.note,
                        pay_type,
                        format_gbp(statutory.amount)
                    )
                };
                (occ.amount, occ.label, notes)
            }
            Some(_) => (
                statutory.amount,
                statutory.label,
                format!("{}; above the occupational entitlement", statutory.note),
            ),
            None => (statutory.amount, statutory.label, statutory.note),
        };

        weeks.push(PayWeek {
            week,
            start_date,
            end_date,
            pay_type: label,
            amount,
            statutory_amount: statutory.amount,
            notes: Some(notes),
        });
    }

    PayScheduleResult {
        weeks,
        occupational_above_statutory,
    }
}
