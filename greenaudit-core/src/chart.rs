use crate::calculator::EmissionBreakdown;
use serde::Serialize;

pub const FUEL_LABEL: &str = "Fuel (Scope 1)";
pub const GAS_LABEL: &str = "Gas (Scope 1)";
pub const ELECTRICITY_LABEL: &str = "Electricity (Scope 2)";
pub const VALUE_AXIS_TITLE: &str = "Emissions (kg CO2e)";
pub const CATEGORY_AXIS_TITLE: &str = "Source";

/// One bar of the emissions-by-source chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub label: &'static str,
    pub value_kg_co2e: f64,
}

/// The three bars of the emissions chart, in display order.
pub fn chart_series(breakdown: &EmissionBreakdown) -> Vec<ChartBar> {
    vec![
        ChartBar {
            label: FUEL_LABEL,
            value_kg_co2e: breakdown.fuel_emissions,
        },
        ChartBar {
            label: GAS_LABEL,
            value_kg_co2e: breakdown.gas_emissions,
        },
        ChartBar {
            label: ELECTRICITY_LABEL,
            value_kg_co2e: breakdown.scope2_total,
        },
    ]
}
