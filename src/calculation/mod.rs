//! Calculation logic for the Leave Entitlement Engine.
//!
//! This module contains one submodule per calculation phase: input coercion,
//! average weekly earnings and service length, key statutory dates, leave
//! eligibility, statutory pay eligibility, occupational pay schemes, the
//! week-by-week pay schedule, and repayment of occupational pay. The
//! [`calculate_entitlements`] family runs them in order.

mod coercion;
mod earnings;
mod engine;
mod key_dates;
mod leave_eligibility;
mod money;
mod occupational_pay;
mod pay_schedule;
mod repayment;
mod statutory_pay;

pub use coercion::{CoercionResult, MAX_FORM_VALUE, coerce_inputs, parse_date, parse_number};
pub use earnings::{average_weekly_earnings, service_weeks};
pub use engine::{
    calculate_entitlements, calculate_entitlements_with_rates, calculate_entitlements_with_table,
};
pub use key_dates::{
    EARLIEST_START_OFFSET, LATEST_END_OFFSET, QUALIFYING_WEEK_OFFSET, STATUTORY_PAY_END_OFFSET,
    calculate_key_dates, resolve_leave_start, schedule_fits, week_start_sunday,
};
pub use leave_eligibility::{
    COMPULSORY_MATERNITY_WEEKS, LeaveEligibilityResult, MATERNITY_LEAVE_WEEKS,
    PATERNITY_LEAVE_WEEKS, determine_leave_eligibility,
};
pub use money::{format_gbp, round_pence};
pub use occupational_pay::{
    OCCUPATIONAL_PAY_WEEKS, OccupationalPayResult, OccupationalScheme, OccupationalWeek,
    determine_occupational_pay, occupational_week, resolve_scheme,
};
pub use pay_schedule::{
    EARNINGS_RELATED_WEEKS, PayScheduleResult, SCHEDULE_WEEKS, ScheduleContext,
    build_pay_schedule,
};
pub use repayment::{RepaymentResult, assess_repayment, keeping_in_touch_note};
pub use statutory_pay::{StatutoryPayResult, determine_statutory_pay, shared_parental_pay_pool};
