//! Eligibility model.
//!
//! Records the leave, statutory pay and occupational pay decisions made for
//! a single calculation, together with the reasons behind them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tri-state occupational pay eligibility.
///
/// Serialises as `true`, `false` or `"N/A"`.
///
/// # Example
///
/// ```
/// use leave_entitlement_engine::models::OccupationalEligibility;
///
/// let json = serde_json::to_string(&OccupationalEligibility::NotApplicable).unwrap();
/// assert_eq!(json, "\"N/A\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupationalEligibility {
    /// Entitled to occupational top-up pay.
    Eligible,
    /// A scheme applies but its conditions are not met, or no scheme is configured.
    NotEligible,
    /// Occupational pay does not apply to this leave type.
    NotApplicable,
}

impl OccupationalEligibility {
    /// Returns true only for [`OccupationalEligibility::Eligible`].
    pub fn is_eligible(&self) -> bool {
        matches!(self, OccupationalEligibility::Eligible)
    }
}

impl Serialize for OccupationalEligibility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OccupationalEligibility::Eligible => serializer.serialize_bool(true),
            OccupationalEligibility::NotEligible => serializer.serialize_bool(false),
            OccupationalEligibility::NotApplicable => serializer.serialize_str("N/A"),
        }
    }
}

impl<'de> Deserialize<'de> for OccupationalEligibility {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Flag(true) => Ok(OccupationalEligibility::Eligible),
            Repr::Flag(false) => Ok(OccupationalEligibility::NotEligible),
            Repr::Text(s) if s == "N/A" => Ok(OccupationalEligibility::NotApplicable),
            Repr::Text(s) => Err(serde::de::Error::custom(format!(
                "invalid occupational eligibility '{}'",
                s
            ))),
        }
    }
}

/// The eligibility decisions for one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    /// Weeks of statutory leave available.
    pub statutory_leave_weeks: u32,
    /// Whether statutory leave is available at all.
    pub statutory_leave_eligible: bool,
    /// Why statutory leave is unavailable, when it is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_reason: Option<String>,
    /// The statutory pay scheme (SMP, SAP, SPP or ShPP).
    pub statutory_pay_type: String,
    /// Whether statutory pay is due.
    pub statutory_pay_eligible: bool,
    /// Number of weeks of statutory pay awarded.
    pub statutory_pay_weeks: u32,
    /// Human-readable explanation of the statutory pay decision.
    pub statutory_pay_reason: String,
    /// Occupational (employer top-up) pay eligibility.
    pub occupational_pay_eligible: OccupationalEligibility,
    /// The occupational scheme applied, or "N/A".
    pub occupational_pay_scheme: String,
    /// Human-readable explanation of the occupational pay decision.
    pub occupational_pay_reason: String,
    /// Warning raised when term-time pay may understate average earnings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_time_warning: Option<String>,
}
