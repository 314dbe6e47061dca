use crate::error::GreenAuditError;
use greenaudit_schemas::{consumption::ConsumptionInputs, factors::EmissionFactors};
use serde::{Deserialize, Serialize};

/// Per-source and total emissions for one set of inputs, in kg CO2e.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmissionBreakdown {
    pub fuel_emissions: f64,
    pub gas_emissions: f64,
    pub scope1_total: f64,
    pub scope2_total: f64,
    pub grand_total: f64,
}

impl EmissionBreakdown {
    pub fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("fuel_emissions", self.fuel_emissions),
            ("gas_emissions", self.gas_emissions),
            ("scope1_total", self.scope1_total),
            ("scope2_total", self.scope2_total),
            ("grand_total", self.grand_total),
        ]
    }
}

/// Rejects consumption values the calculator is not defined for.
///
/// This is the boundary check. [`calculate`] itself assumes it has passed.
pub fn validate_inputs(inputs: &ConsumptionInputs) -> Result<(), GreenAuditError> {
    for (field, value) in inputs.fields() {
        if !value.is_finite() || value < 0.0 {
            return Err(GreenAuditError::InvalidInput {
                field: field.to_string(),
                value,
            });
        }
    }
    Ok(())
}

pub fn validate_factors(factors: &EmissionFactors) -> Result<(), GreenAuditError> {
    for (name, factor) in factors.named() {
        if !factor.value.is_finite() || factor.value < 0.0 {
            return Err(GreenAuditError::InvalidFactor {
                name: name.to_string(),
                value: factor.value,
            });
        }
    }
    Ok(())
}

/// Rejects a breakdown whose values overflowed to infinity.
///
/// Inputs that pass [`validate_inputs`] can still be large enough for a
/// product or sum to leave the `f64` range.
pub fn validate_breakdown(breakdown: &EmissionBreakdown) -> Result<(), GreenAuditError> {
    for (field, value) in breakdown.fields() {
        if !value.is_finite() {
            return Err(GreenAuditError::InvalidInput {
                field: field.to_string(),
                value,
            });
        }
    }
    Ok(())
}

// -0.0 + 0.0 == +0.0, so a signed zero never shows up as "-0.00".
fn unsigned_zero(value: f64) -> f64 {
    value + 0.0
}

/// Folds signed zeros in the consumption figures into +0.0.
pub fn normalize_inputs(inputs: &ConsumptionInputs) -> ConsumptionInputs {
    ConsumptionInputs::new(
        unsigned_zero(inputs.diesel_liters),
        unsigned_zero(inputs.natural_gas_cubic_meters),
        unsigned_zero(inputs.electricity_kwh),
    )
}

/// Converts consumption into emissions using the given factors.
///
/// Scope 1 covers diesel and natural gas burned on site, Scope 2 covers
/// purchased electricity.
pub fn calculate(inputs: &ConsumptionInputs, factors: &EmissionFactors) -> EmissionBreakdown {
    let fuel_emissions = unsigned_zero(inputs.diesel_liters * factors.fuel.value);
    let gas_emissions = unsigned_zero(inputs.natural_gas_cubic_meters * factors.gas.value);
    let scope1_total = fuel_emissions + gas_emissions;
    let scope2_total = unsigned_zero(inputs.electricity_kwh * factors.electricity.value);

    EmissionBreakdown {
        fuel_emissions,
        gas_emissions,
        scope1_total,
        scope2_total,
        grand_total: scope1_total + scope2_total,
    }
}

pub fn calculate_default(inputs: &ConsumptionInputs) -> EmissionBreakdown {
    calculate(inputs, &EmissionFactors::default())
}
