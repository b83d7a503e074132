//! Occupational pay repayment and closing advisories.

use rust_decimal::Decimal;

use crate::models::{Note, ReturnIntent};

use super::money::format_gbp;
use super::occupational_pay::OccupationalScheme;

/// The repayment assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepaymentResult {
    /// Amount repayable, set only when the employee will not return.
    pub estimated_repayment: Option<Decimal>,
    /// Notes describing the repayment position.
    pub notes: Vec<Note>,
}

fn return_condition(scheme: Option<OccupationalScheme>) -> &'static str {
    match scheme {
        Some(OccupationalScheme::BurgundyBook) => "for at least 13 weeks",
        Some(OccupationalScheme::GreenBook) => "for at least 3 months",
        _ => "for the period your scheme requires",
    }
}

/// Assesses repayment of occupational pay paid above the statutory floor.
///
/// Only an explicit intention not to return populates the repayment figure;
/// otherwise the amount at risk is reported for information.
pub fn assess_repayment(
    return_intent: ReturnIntent,
    occupational_above_statutory: Decimal,
    scheme: Option<OccupationalScheme>,
) -> RepaymentResult {
    if occupational_above_statutory <= Decimal::ZERO {
        return RepaymentResult {
            estimated_repayment: None,
            notes: vec![],
        };
    }

    let amount = format_gbp(occupational_above_statutory);
    let source = scheme.map(|s| s.name());

    let (estimated_repayment, note) = if return_intent == ReturnIntent::No {
        (
            Some(occupational_above_statutory),
            Note::warning(format!(
                "As you do not intend to return to work, you may have to repay {} of occupational pay received above statutory pay.",
                amount
            )),
        )
    } else {
        (
            None,
            Note::info(format!(
                "{} of your leave pay is occupational pay above statutory pay. It may have to be repaid if you do not return to work {}.",
                amount,
                return_condition(scheme)
            )),
        )
    };

    let note = match source {
        Some(source) => note.with_source(source),
        None => note,
    };

    RepaymentResult {
        estimated_repayment,
        notes: vec![note],
    }
}

/// The advisory about keeping-in-touch days appended to every calculation.
pub fn keeping_in_touch_note() -> Note {
    Note::info(
        "You can work up to 10 Keeping in Touch (KIT) days during maternity or adoption leave, and up to 20 Shared Parental Leave in Touch (SPLIT) days during shared parental leave, without ending your leave. Pay for these days should be agreed with your employer.",
    )
    .with_source("GOV.UK")
}
