use greenaudit_core::AuditReport;
use std::fmt;

/// The terminal version of the dashboard: profile, inputs, the per-source
/// table and the impact rating.
pub struct Summary<'a>(pub &'a AuditReport);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let b = &report.breakdown;
        let c = &report.consumption;

        writeln!(f, "\n--- 🌿 ESG Carbon Audit: {} ---", report.profile.company_name)?;
        writeln!(f, "Environmental Impact Assessment (Scope 1 & 2)")?;
        writeln!(f, "Industry Sector: {}", report.profile.industry)?;
        writeln!(f, "========================================")?;

        writeln!(f, "\n🔥 Scope 1: Direct Emissions")?;
        writeln!(f, "  - Diesel Consumption:     {:>12.2} L", c.diesel_liters)?;
        writeln!(f, "  - Natural Gas Usage:      {:>12.2} m³", c.natural_gas_cubic_meters)?;
        writeln!(f, "\n⚡ Scope 2: Indirect Emissions")?;
        writeln!(f, "  - Electricity Consumption:{:>12.2} kWh", c.electricity_kwh)?;

        writeln!(f, "\n📊 Audit Results (kg CO2e)")?;
        for bar in &report.chart {
            writeln!(f, "  - {:<24}{:>12.2}", bar.label, bar.value_kg_co2e)?;
        }
        writeln!(f, "  --------------------------------------")?;
        writeln!(f, "  - {:<24}{:>12.2}", "Scope 1 Total", b.scope1_total)?;
        writeln!(f, "  - {:<24}{:>12.2}", "Scope 2 Total", b.scope2_total)?;
        writeln!(f, "  - {:<24}{:>12.2}", "Total Emissions", b.grand_total)?;

        writeln!(f, "\nImpact: {}", report.impact.label())?;
        writeln!(f, "  {}", report.impact.caption())?;

        writeln!(f, "\nEmission factors:")?;
        for (name, factor) in report.factors.named() {
            let date = factor.source.effective_date.as_deref().unwrap_or("undated");
            writeln!(
                f,
                "  - {:<12}{:>6.2} {} ({}, {})",
                name, factor.value, factor.unit, factor.source.reference, date
            )?;
        }
        writeln!(f, "========================================")
    }
}
