//! Leave Entitlement Engine for UK school staff
//!
//! This crate calculates statutory and occupational maternity, adoption,
//! paternity and shared parental leave entitlements, producing eligibility
//! decisions, key statutory dates and a week-by-week pay schedule.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

pub use calculation::{
    calculate_entitlements, calculate_entitlements_with_rates, calculate_entitlements_with_table,
};
