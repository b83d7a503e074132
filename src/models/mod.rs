//! Core data models for the Leave Entitlement Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_results;
mod eligibility;
mod inputs;
mod key_dates;
mod notes;
mod pay_schedule;

pub use calculation_results::CalculationResults;
pub use eligibility::{Eligibility, OccupationalEligibility};
pub use inputs::{
    AcademyPolicy, CalculatorInputs, LeaveCase, LeaveType, PayAnnualised, ReturnIntent, Role,
    SchoolType,
};
pub use key_dates::KeyDates;
pub use notes::{Note, NoteKind};
pub use pay_schedule::PayWeek;
