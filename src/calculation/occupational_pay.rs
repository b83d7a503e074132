//! Occupational (employer top-up) pay.
//!
//! This module resolves which collective agreement governs an employee's
//! maternity or adoption top-up pay, decides eligibility, and provides the
//! weekly occupational amount for each scheme's tiers.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::models::{
    AcademyPolicy, LeaveCase, Note, OccupationalEligibility, Role, SchoolType,
};

use super::money::round_pence;

/// Last week of any occupational pay tier.
pub const OCCUPATIONAL_PAY_WEEKS: u32 = 18;

/// An occupational pay scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupationalScheme {
    /// Burgundy Book terms for teachers.
    BurgundyBook,
    /// Green Book (NJC) terms for support staff.
    GreenBook,
    /// An academy's own enhanced policy.
    CustomEnhanced,
}

impl OccupationalScheme {
    /// The scheme's display name.
    pub fn name(&self) -> &'static str {
        match self {
            OccupationalScheme::BurgundyBook => "Burgundy Book",
            OccupationalScheme::GreenBook => "Green Book",
            OccupationalScheme::CustomEnhanced => "Custom Enhanced Scheme",
        }
    }
}

impl std::fmt::Display for OccupationalScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One week's occupational pay and the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupationalWeek {
    /// Occupational amount for the week, in pence precision.
    pub amount: Decimal,
    /// Pay-type label naming the tier.
    pub label: String,
    /// Explanation of the calculation.
    pub note: String,
}

/// The occupational pay decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupationalPayResult {
    /// Tri-state eligibility.
    pub eligibility: OccupationalEligibility,
    /// The scheme that applies, if any.
    pub scheme: Option<OccupationalScheme>,
    /// Human-readable explanation.
    pub reason: String,
    /// Advisory notes raised by the decision.
    pub notes: Vec<Note>,
}

impl OccupationalPayResult {
    /// The scheme name, or "N/A" when none applies.
    pub fn scheme_name(&self) -> String {
        self.scheme
            .map(|s| s.name().to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// The scheme whose weekly tiers should be paid, if eligible.
    pub fn payable_scheme(&self) -> Option<OccupationalScheme> {
        if self.eligibility.is_eligible() {
            self.scheme
        } else {
            None
        }
    }
}

/// Resolves the occupational scheme for a role and school.
///
/// Maintained schools follow the national agreements by role. Academies and
/// independent schools follow their adopted policy, which only applies to
/// the matching role; a custom policy applies to everyone.
///
/// # Example
///
/// ```
/// use leave_entitlement_engine::calculation::{resolve_scheme, OccupationalScheme};
/// use leave_entitlement_engine::models::{AcademyPolicy, Role, SchoolType};
///
/// assert_eq!(
///     resolve_scheme(Role::Teacher, SchoolType::Maintained, AcademyPolicy::Other),
///     Some(OccupationalScheme::BurgundyBook)
/// );
/// assert_eq!(
///     resolve_scheme(Role::Support, SchoolType::Academy, AcademyPolicy::Burgundy),
///     None
/// );
/// ```
pub fn resolve_scheme(
    role: Role,
    school_type: SchoolType,
    policy: AcademyPolicy,
) -> Option<OccupationalScheme> {
    match (school_type, role, policy) {
        (SchoolType::Maintained, Role::Teacher, _) => Some(OccupationalScheme::BurgundyBook),
        (SchoolType::Maintained, Role::Support, _) => Some(OccupationalScheme::GreenBook),
        (SchoolType::Academy | SchoolType::Independent, _, AcademyPolicy::Custom) => {
            Some(OccupationalScheme::CustomEnhanced)
        }
        (SchoolType::Academy | SchoolType::Independent, Role::Teacher, AcademyPolicy::Burgundy) => {
            Some(OccupationalScheme::BurgundyBook)
        }
        (SchoolType::Academy | SchoolType::Independent, Role::Support, AcademyPolicy::Green) => {
            Some(OccupationalScheme::GreenBook)
        }
        _ => None,
    }
}

/// Determines occupational pay eligibility.
///
/// Only maternity and adoption leave carry occupational pay. Burgundy and
/// Green Book pay needs the cumulative local-authority service threshold; a
/// custom policy is treated as always met.
pub fn determine_occupational_pay(case: &LeaveCase, rates: &StatutoryRates) -> OccupationalPayResult {
    if !case.leave_type.is_maternity_or_adoption() {
        return OccupationalPayResult {
            eligibility: OccupationalEligibility::NotApplicable,
            scheme: None,
            reason: "Occupational pay schemes apply to maternity and adoption leave only."
                .to_string(),
            notes: vec![],
        };
    }

    let scheme = resolve_scheme(case.role, case.school_type, case.academy_policy);

    match scheme {
        None => OccupationalPayResult {
            eligibility: OccupationalEligibility::NotEligible,
            scheme: None,
            reason: "No occupational pay scheme is configured for this role and school.".to_string(),
            notes: vec![],
        },
        Some(OccupationalScheme::CustomEnhanced) => OccupationalPayResult {
            eligibility: OccupationalEligibility::Eligible,
            scheme,
            reason: "Your school's custom enhanced policy applies; check its service requirements."
                .to_string(),
            notes: vec![
                Note::info(
                    "Custom enhanced pay is not modelled in the schedule; only statutory pay is shown. Check your school's policy for its top-up terms.",
                )
                .with_source(OccupationalScheme::CustomEnhanced.name()),
            ],
        },
        Some(named) => {
            let required = rates.occupational_min_service_weeks;
            if case.la_service_weeks >= Decimal::from(required) {
                OccupationalPayResult {
                    eligibility: OccupationalEligibility::Eligible,
                    scheme,
                    reason: format!(
                        "At least {} weeks' continuous local authority service under the {}.",
                        required, named
                    ),
                    notes: vec![],
                }
            } else {
                OccupationalPayResult {
                    eligibility: OccupationalEligibility::NotEligible,
                    scheme,
                    reason: format!(
                        "The {} requires at least {} weeks' continuous local authority service by the 11th week before the expected week.",
                        named, required
                    ),
                    notes: vec![],
                }
            }
        }
    }
}

/// Half pay plus the statutory component, never more than full pay.
fn half_pay_plus_statutory(
    scheme: OccupationalScheme,
    awe: Decimal,
    statutory: Decimal,
    statutory_type: &str,
) -> OccupationalWeek {
    let full = round_pence(awe);
    let half = round_pence(awe * Decimal::new(5, 1));
    let combined = half + statutory;

    let label = if statutory.is_zero() {
        format!("Half Pay ({})", scheme)
    } else {
        format!("Half Pay + {} ({})", statutory_type, scheme)
    };

    if combined > full {
        OccupationalWeek {
            amount: full,
            label,
            note: format!("Half pay plus {} capped at full pay", statutory_type),
        }
    } else {
        OccupationalWeek {
            amount: combined,
            label,
            note: format!("50% of AWE plus {}", statutory_type),
        }
    }
}

/// Returns the occupational amount for a leave week under a scheme.
///
/// Burgundy Book: 4 weeks at full pay, 2 weeks at 90%, then 12 weeks at half
/// pay plus statutory pay. Green Book: 6 weeks at 90%, then 12 weeks at half
/// pay plus statutory pay. Half-pay weeks never exceed full pay. The custom
/// scheme has no modelled tiers.
pub fn occupational_week(
    scheme: OccupationalScheme,
    week: u32,
    awe: Decimal,
    statutory: Decimal,
    statutory_type: &str,
) -> Option<OccupationalWeek> {
    let ninety = round_pence(awe * Decimal::new(9, 1));

    match (scheme, week) {
        (OccupationalScheme::BurgundyBook, 1..=4) => Some(OccupationalWeek {
            amount: round_pence(awe),
            label: format!("Full Pay ({})", scheme),
            note: "100% of AWE".to_string(),
        }),
        (OccupationalScheme::BurgundyBook, 5..=6) | (OccupationalScheme::GreenBook, 1..=6) => {
            Some(OccupationalWeek {
                amount: ninety,
                label: format!("90% Pay ({})", scheme),
                note: "90% of AWE".to_string(),
            })
        }
        (OccupationalScheme::BurgundyBook | OccupationalScheme::GreenBook, 7..=OCCUPATIONAL_PAY_WEEKS) => {
            Some(half_pay_plus_statutory(scheme, awe, statutory, statutory_type))
        }
        _ => None,
    }
}
