//! Money helpers: rounding to pence and formatting pound amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to whole pence, halves away from zero, at a scale of 2.
pub fn round_pence(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Formats an amount as pounds with thousands separators, e.g. `£1,473.84`.
///
/// # Example
///
/// ```
/// use leave_entitlement_engine::calculation::format_gbp;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_gbp(Decimal::new(147384, 2)), "£1,473.84");
/// assert_eq!(format_gbp(Decimal::new(123, 0)), "£123.00");
/// ```
pub fn format_gbp(amount: Decimal) -> String {
    let rounded = round_pence(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (whole, pence) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}£{}.{}", sign, grouped, pence)
}
