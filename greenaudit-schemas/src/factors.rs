//! Emission factors and impact thresholds.
//!
//! The built-in values are the ones the dashboard has always shipped with.
//! They carry no regulatory citation, so every value records where it came
//! from and can be replaced through a factor-set file.

use serde::{Deserialize, Serialize};

// Emission Factors (kg CO2e per unit consumed)
pub const FACTOR_DIESEL_KG_PER_LITER: f64 = 2.68;
pub const FACTOR_NATURAL_GAS_KG_PER_M3: f64 = 1.90;
pub const FACTOR_ELECTRICITY_KG_PER_KWH: f64 = 0.15;

// Impact Thresholds (kg CO2e, strict lower bounds)
pub const MODERATE_IMPACT_ABOVE_KG: f64 = 2000.0;
pub const HIGH_IMPACT_ABOVE_KG: f64 = 5000.0;

pub const BUILTIN_SOURCE: &str = "GreenAudit built-in default (uncited)";
pub const BUILTIN_EFFECTIVE_DATE: &str = "2024-01-01";

/// Where a factor value comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
}

impl Provenance {
    pub fn builtin() -> Self {
        Self {
            reference: BUILTIN_SOURCE.to_string(),
            effective_date: Some(BUILTIN_EFFECTIVE_DATE.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactor {
    pub value: f64,
    pub unit: String,
    pub source: Provenance,
}

impl EmissionFactor {
    fn builtin(value: f64, unit: &str) -> Self {
        Self {
            value,
            unit: unit.to_string(),
            source: Provenance::builtin(),
        }
    }
}

/// Factors missing from a factor-set file keep their built-in value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionFactors {
    /// Diesel combustion, Scope 1.
    pub fuel: EmissionFactor,
    /// Natural gas combustion, Scope 1.
    pub gas: EmissionFactor,
    /// Purchased electricity, Scope 2.
    pub electricity: EmissionFactor,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            fuel: EmissionFactor::builtin(FACTOR_DIESEL_KG_PER_LITER, "kg CO2e/L"),
            gas: EmissionFactor::builtin(FACTOR_NATURAL_GAS_KG_PER_M3, "kg CO2e/m3"),
            electricity: EmissionFactor::builtin(FACTOR_ELECTRICITY_KG_PER_KWH, "kg CO2e/kWh"),
        }
    }
}

impl EmissionFactors {
    pub fn named(&self) -> [(&'static str, &EmissionFactor); 3] {
        [
            ("fuel", &self.fuel),
            ("gas", &self.gas),
            ("electricity", &self.electricity),
        ]
    }
}

/// Totals strictly above a bound move to the next severity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactThresholds {
    pub moderate_above_kg_co2e: f64,
    pub high_above_kg_co2e: f64,
}

impl Default for ImpactThresholds {
    fn default() -> Self {
        Self {
            moderate_above_kg_co2e: MODERATE_IMPACT_ABOVE_KG,
            high_above_kg_co2e: HIGH_IMPACT_ABOVE_KG,
        }
    }
}
