//! Calculator input models.
//!
//! [`CalculatorInputs`] is the raw record submitted by an upstream form, with
//! every field arriving as text. [`LeaveCase`] is its typed counterpart,
//! produced once at the coercion boundary and used by every calculation phase.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The raw calculator form submission.
///
/// Missing fields deserialize as empty strings so that a partially completed
/// form can still be calculated.
///
/// # Example
///
/// ```
/// use leave_entitlement_engine::models::CalculatorInputs;
///
/// let inputs: CalculatorInputs = serde_json::from_str(r#"{
///     "leave_type": "maternity",
///     "ewc_date": "2026-06-10",
///     "annual_salary": "32000"
/// }"#).unwrap();
/// assert_eq!(inputs.role, "");
/// assert!(inputs.actual_leave_start_date.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorInputs {
    /// Job role: `teacher`, `support` or anything else.
    pub role: String,
    /// School type: `maintained`, `academy` or `independent`.
    pub school_type: String,
    /// Whole years of continuous service with the current employer.
    pub service_years: String,
    /// Additional months of continuous service with the current employer.
    pub service_months: String,
    /// Whole years of cumulative local-authority service.
    pub la_service_years: String,
    /// Additional months of cumulative local-authority service.
    pub la_service_months: String,
    /// Academy/independent pay policy: `burgundy`, `green` or `custom`.
    pub academy_policy: String,
    /// Annual salary in pounds.
    pub annual_salary: String,
    /// Whether pay is annualised: `yes`, `no` or `unsure`.
    pub is_pay_annualised: String,
    /// Leave type: `maternity`, `adoption`, `paternity` or `spl`.
    pub leave_type: String,
    /// Expected week of childbirth, or the placement date for adoption.
    pub ewc_date: String,
    /// The date leave actually starts, if known.
    pub actual_leave_start_date: Option<String>,
    /// Whether the employee intends to return to work: `yes`, `no` or `unsure`.
    pub returning_to_work: String,
    /// Shared parental leave: weeks of leave the mother has already taken.
    pub spl_mother_weeks_taken: String,
    /// Shared parental leave: weeks the partner intends to take.
    pub spl_partner_weeks: String,
}

/// The employee's job role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Teaching staff, covered by the Burgundy Book.
    Teacher,
    /// Support staff, covered by the Green Book.
    Support,
    /// Any other role.
    Other,
}

/// The type of school employing the member of staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchoolType {
    /// Local-authority maintained school.
    Maintained,
    /// Academy or academy trust.
    Academy,
    /// Independent school.
    Independent,
    /// Unrecognised school type.
    Other,
}

/// The pay policy an academy or independent school has adopted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcademyPolicy {
    /// Burgundy Book terms.
    Burgundy,
    /// Green Book terms.
    Green,
    /// A custom enhanced scheme.
    Custom,
    /// No recognised policy.
    Other,
}

/// Whether the employee's pay is spread evenly across the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayAnnualised {
    /// Pay is annualised.
    Yes,
    /// Term-time only pay.
    No,
    /// The employee does not know.
    Unsure,
}

/// The kind of family leave being calculated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Maternity leave.
    Maternity,
    /// Adoption leave.
    Adoption,
    /// Paternity leave.
    Paternity,
    /// Shared parental leave.
    #[serde(rename = "spl")]
    SharedParental,
}

/// Whether the employee intends to return to work after leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnIntent {
    /// Intends to return.
    Yes,
    /// Does not intend to return.
    No,
    /// Undecided.
    Unsure,
}

fn normalise(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match normalise(value).as_str() {
            "teacher" => Role::Teacher,
            "support" => Role::Support,
            _ => Role::Other,
        }
    }
}

impl From<&str> for SchoolType {
    fn from(value: &str) -> Self {
        match normalise(value).as_str() {
            "maintained" => SchoolType::Maintained,
            "academy" => SchoolType::Academy,
            "independent" => SchoolType::Independent,
            _ => SchoolType::Other,
        }
    }
}

impl From<&str> for AcademyPolicy {
    fn from(value: &str) -> Self {
        match normalise(value).as_str() {
            "burgundy" => AcademyPolicy::Burgundy,
            "green" => AcademyPolicy::Green,
            "custom" => AcademyPolicy::Custom,
            _ => AcademyPolicy::Other,
        }
    }
}

impl From<&str> for PayAnnualised {
    /// Only an explicit `no` or `unsure` counts as non-annualised.
    fn from(value: &str) -> Self {
        match normalise(value).as_str() {
            "no" => PayAnnualised::No,
            "unsure" => PayAnnualised::Unsure,
            _ => PayAnnualised::Yes,
        }
    }
}

impl From<&str> for ReturnIntent {
    fn from(value: &str) -> Self {
        match normalise(value).as_str() {
            "yes" => ReturnIntent::Yes,
            "no" => ReturnIntent::No,
            _ => ReturnIntent::Unsure,
        }
    }
}

impl LeaveType {
    /// Parses a form value, returning `None` for anything unrecognised.
    ///
    /// ```
    /// use leave_entitlement_engine::models::LeaveType;
    ///
    /// assert_eq!(LeaveType::from_form(" SPL "), Some(LeaveType::SharedParental));
    /// assert_eq!(LeaveType::from_form("sabbatical"), None);
    /// ```
    pub fn from_form(value: &str) -> Option<Self> {
        match normalise(value).as_str() {
            "maternity" => Some(LeaveType::Maternity),
            "adoption" => Some(LeaveType::Adoption),
            "paternity" => Some(LeaveType::Paternity),
            "spl" => Some(LeaveType::SharedParental),
            _ => None,
        }
    }

    /// The name of the statutory pay scheme for this leave type.
    pub fn statutory_pay_type(&self) -> &'static str {
        match self {
            LeaveType::Maternity => "SMP",
            LeaveType::Adoption => "SAP",
            LeaveType::Paternity => "SPP",
            LeaveType::SharedParental => "ShPP",
        }
    }

    /// Returns true for the leave types that carry occupational top-up pay.
    pub fn is_maternity_or_adoption(&self) -> bool {
        matches!(self, LeaveType::Maternity | LeaveType::Adoption)
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveType::Maternity => write!(f, "maternity"),
            LeaveType::Adoption => write!(f, "adoption"),
            LeaveType::Paternity => write!(f, "paternity"),
            LeaveType::SharedParental => write!(f, "shared parental"),
        }
    }
}

/// The typed, coerced form of [`CalculatorInputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveCase {
    /// The employee's job role.
    pub role: Role,
    /// The type of school.
    pub school_type: SchoolType,
    /// Academy/independent pay policy.
    pub academy_policy: AcademyPolicy,
    /// Continuous service with the current employer, in weeks.
    pub service_weeks: Decimal,
    /// Cumulative local-authority service, in weeks.
    pub la_service_weeks: Decimal,
    /// Annual salary, zero when missing or malformed.
    pub annual_salary: Decimal,
    /// Whether pay is annualised.
    pub pay_annualised: PayAnnualised,
    /// The leave type under calculation.
    pub leave_type: LeaveType,
    /// Expected week of childbirth or placement date, as supplied.
    pub ewc_date: NaiveDate,
    /// The actual leave start, when a valid one was supplied.
    pub actual_leave_start: Option<NaiveDate>,
    /// Return-to-work intent.
    pub return_intent: ReturnIntent,
    /// Weeks of leave the mother has already taken (SPL only).
    pub spl_mother_weeks_taken: Decimal,
    /// Weeks the partner intends to take (SPL only).
    pub spl_partner_weeks: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_complete_form() {
        let json = r#"{
            "role": "teacher",
            "school_type": "maintained",
            "service_years": "3",
            "service_months": "2",
            "la_service_years": "5",
            "la_service_months": "0",
            "academy_policy": "",
            "annual_salary": "38000",
            "is_pay_annualised": "yes",
            "leave_type": "maternity",
            "ewc_date": "2026-06-10",
            "actual_leave_start_date": "2026-05-17",
            "returning_to_work": "yes",
            "spl_mother_weeks_taken": "",
            "spl_partner_weeks": ""
        }"#;

        let inputs: CalculatorInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.role, "teacher");
        assert_eq!(inputs.service_years, "3");
        assert_eq!(inputs.actual_leave_start_date.as_deref(), Some("2026-05-17"));
    }

    #[test]
    fn test_deserialize_empty_form_uses_defaults() {
        let inputs: CalculatorInputs = serde_json::from_str("{}").unwrap();
        assert_eq!(inputs, CalculatorInputs::default());
    }

    #[test]
    fn test_role_from_form_value() {
        assert_eq!(Role::from("teacher"), Role::Teacher);
        assert_eq!(Role::from(" Support "), Role::Support);
        assert_eq!(Role::from("caretaker"), Role::Other);
    }

    #[test]
    fn test_school_type_from_form_value() {
        assert_eq!(SchoolType::from("MAINTAINED"), SchoolType::Maintained);
        assert_eq!(SchoolType::from("academy"), SchoolType::Academy);
        assert_eq!(SchoolType::from("independent"), SchoolType::Independent);
        assert_eq!(SchoolType::from(""), SchoolType::Other);
    }

    #[test]
    fn test_academy_policy_from_form_value() {
        assert_eq!(AcademyPolicy::from("burgundy"), AcademyPolicy::Burgundy);
        assert_eq!(AcademyPolicy::from("green"), AcademyPolicy::Green);
        assert_eq!(AcademyPolicy::from("custom"), AcademyPolicy::Custom);
        assert_eq!(AcademyPolicy::from("none"), AcademyPolicy::Other);
    }

    #[test]
    fn test_unrecognised_annualised_flag_counts_as_yes() {
        assert_eq!(PayAnnualised::from("no"), PayAnnualised::No);
        assert_eq!(PayAnnualised::from("unsure"), PayAnnualised::Unsure);
        assert_eq!(PayAnnualised::from(""), PayAnnualised::Yes);
        assert_eq!(PayAnnualised::from("maybe"), PayAnnualised::Yes);
    }

    #[test]
    fn test_only_explicit_no_is_no_return() {
        assert_eq!(ReturnIntent::from("no"), ReturnIntent::No);
        assert_eq!(ReturnIntent::from("yes"), ReturnIntent::Yes);
        assert_eq!(ReturnIntent::from("not sure"), ReturnIntent::Unsure);
    }

    #[test]
    fn test_statutory_pay_type_per_leave_type() {
        assert_eq!(LeaveType::Maternity.statutory_pay_type(), "SMP");
        assert_eq!(LeaveType::Adoption.statutory_pay_type(), "SAP");
        assert_eq!(LeaveType::Paternity.statutory_pay_type(), "SPP");
        assert_eq!(LeaveType::SharedParental.statutory_pay_type(), "ShPP");
    }

    #[test]
    fn test_leave_type_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveType::SharedParental).unwrap(),
            "\"spl\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveType::Adoption).unwrap(),
            "\"adoption\""
        );
    }
}
