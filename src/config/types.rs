//! Configuration types for statutory leave pay.
//!
//! This module contains the strongly-typed rate structures that are
//! deserialized from YAML configuration files, and the versioned table
//! that selects between them by effective date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Statutory pay parameters for a single tax year.
///
/// Every threshold the engine applies is read from here rather than from
/// module-level constants, so a new tax year only needs a new rates file.
///
/// # Example
///
/// ```
/// use leave_entitlement_engine::config::StatutoryRates;
/// use rust_decimal::Decimal;
///
/// let rates = StatutoryRates::default();
/// assert_eq!(rates.statutory_weekly_rate, Decimal::new(18718, 2));
/// assert_eq!(rates.lower_earnings_limit, Decimal::new(123, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryRates {
    /// The first day these rates apply.
    pub effective_date: NaiveDate,
    /// Flat weekly rate of SMP/SAP/SPP/ShPP after the earnings-related weeks.
    pub statutory_weekly_rate: Decimal,
    /// Lower Earnings Limit: minimum average weekly earnings for statutory pay.
    pub lower_earnings_limit: Decimal,
    /// Divisor converting an annual salary into average weekly earnings.
    pub awe_divisor: Decimal,
    /// Continuous service (weeks) needed with the current employer.
    #[serde(default = "default_min_service_weeks")]
    pub min_service_weeks: u32,
    /// Maximum number of statutory pay weeks for maternity and adoption.
    #[serde(default = "default_statutory_pay_weeks")]
    pub statutory_pay_weeks: u32,
    /// Cumulative local-authority service (weeks) needed for occupational pay.
    #[serde(default = "default_occupational_min_service_weeks")]
    pub occupational_min_service_weeks: u32,
}

fn default_min_service_weeks() -> u32 {
    26
}

fn default_statutory_pay_weeks() -> u32 {
    39
}

fn default_occupational_min_service_weeks() -> u32 {
    52
}

impl Default for StatutoryRates {
    /// The 2025/26 rates.
    fn default() -> Self {
        Self {
            effective_date: NaiveDate::from_ymd_opt(2025, 4, 6).unwrap_or_default(),
            statutory_weekly_rate: Decimal::new(18718, 2),
            lower_earnings_limit: Decimal::new(123, 0),
            awe_divisor: Decimal::new(5214, 2),
            min_service_weeks: default_min_service_weeks(),
            statutory_pay_weeks: default_statutory_pay_weeks(),
            occupational_min_service_weeks: default_occupational_min_service_weeks(),
        }
    }
}

/// A set of statutory rates versions keyed by effective date.
#[derive(Debug, Clone, Default)]
pub struct RatesTable {
    /// Rates versions sorted oldest first.
    versions: Vec<StatutoryRates>,
}

impl RatesTable {
    /// Creates a table from rates versions in any order.
    pub fn new(versions: Vec<StatutoryRates>) -> Self {
        let mut sorted = versions;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self { versions: sorted }
    }

    /// Returns all rates versions, oldest first.
    pub fn versions(&self) -> &[StatutoryRates] {
        &self.versions
    }

    /// Returns the most recent rates version effective on or before `date`.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_entitlement_engine::config::{RatesTable, StatutoryRates};
    /// use chrono::NaiveDate;
    ///
    /// let table = RatesTable::new(vec![StatutoryRates::default()]);
    /// let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    /// assert!(table.rates_for(date).is_ok());
    /// ```
    pub fn rates_for(&self, date: NaiveDate) -> EngineResult<&StatutoryRates> {
        self.versions
            .iter()
            .rfind(|r| r.effective_date <= date)
            .ok_or(EngineError::RatesNotFound { date })
    }
}
