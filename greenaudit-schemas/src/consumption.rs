use serde::{Deserialize, Serialize};

/// Seed values shown to a user before they enter their own figures.
pub const DEFAULT_DIESEL_LITERS: f64 = 1200.0;
pub const DEFAULT_NATURAL_GAS_CUBIC_METERS: f64 = 500.0;
pub const DEFAULT_ELECTRICITY_KWH: f64 = 4500.0;

/// Consumption figures for a single reporting period.
///
/// Every field must be non-negative before it reaches the calculator.
/// Missing fields in a YAML request fall back to the seed values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumptionInputs {
    /// Diesel burned by company vehicles, in liters.
    pub diesel_liters: f64,
    /// Natural gas burned on site, in cubic meters.
    pub natural_gas_cubic_meters: f64,
    /// Purchased electricity, in kilowatt-hours.
    pub electricity_kwh: f64,
}

impl ConsumptionInputs {
    pub fn new(diesel_liters: f64, natural_gas_cubic_meters: f64, electricity_kwh: f64) -> Self {
        Self {
            diesel_liters,
            natural_gas_cubic_meters,
            electricity_kwh,
        }
    }

    /// Field names paired with their values, in display order.
    pub fn fields(&self) -> [(&'static str, f64); 3] {
        [
            ("diesel_liters", self.diesel_liters),
            ("natural_gas_cubic_meters", self.natural_gas_cubic_meters),
            ("electricity_kwh", self.electricity_kwh),
        ]
    }
}

impl Default for ConsumptionInputs {
    fn default() -> Self {
        Self::new(
            DEFAULT_DIESEL_LITERS,
            DEFAULT_NATURAL_GAS_CUBIC_METERS,
            DEFAULT_ELECTRICITY_KWH,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_seed_scenario() {
        let inputs = ConsumptionInputs::default();
        assert_eq!(inputs.diesel_liters, 1200.0);
        assert_eq!(inputs.natural_gas_cubic_meters, 500.0);
        assert_eq!(inputs.electricity_kwh, 4500.0);
    }

    #[test]
    fn test_partial_yaml_falls_back_to_seed() {
        let inputs: ConsumptionInputs = serde_yaml::from_str("electricity_kwh: 10.0").unwrap();
        assert_eq!(inputs.diesel_liters, DEFAULT_DIESEL_LITERS);
        assert_eq!(inputs.natural_gas_cubic_meters, DEFAULT_NATURAL_GAS_CUBIC_METERS);
        assert_eq!(inputs.electricity_kwh, 10.0);
    }

    #[test]
    fn test_fields_order() {
        let names: Vec<_> = ConsumptionInputs::default().fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["diesel_liters", "natural_gas_cubic_meters", "electricity_kwh"]);
    }
}
