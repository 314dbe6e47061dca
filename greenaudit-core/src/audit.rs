use crate::{
    calculator::{self, EmissionBreakdown},
    chart::{self, ChartBar},
    classifier,
    error::GreenAuditError,
    logger::AuditLogger,
};
use greenaudit_schemas::{
    consumption::ConsumptionInputs,
    factors::{EmissionFactors, ImpactThresholds},
    impact::ImpactLevel,
    profile::CompanyProfile,
};
use log::{debug, info};
use serde::Serialize;

/// Everything a front end needs to render one evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub profile: CompanyProfile,
    pub consumption: ConsumptionInputs,
    pub factors: EmissionFactors,
    pub thresholds: ImpactThresholds,
    pub breakdown: EmissionBreakdown,
    pub impact: ImpactLevel,
    pub chart: Vec<ChartBar>,
}

impl AuditReport {
    pub fn to_json_pretty(&self) -> Result<String, GreenAuditError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A fluent builder for constructing an [`Audit`].
///
/// Anything left unset falls back to the dashboard defaults: the seed
/// consumption figures, the built-in factors and the 2000 / 5000 kg CO2e
/// thresholds.
#[derive(Default)]
pub struct AuditBuilder {
    profile: Option<CompanyProfile>,
    consumption: Option<ConsumptionInputs>,
    factors: Option<EmissionFactors>,
    thresholds: Option<ImpactThresholds>,
    log_path: Option<String>,
}

impl AuditBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: CompanyProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_consumption(mut self, consumption: ConsumptionInputs) -> Self {
        self.consumption = Some(consumption);
        self
    }

    pub fn with_factors(mut self, factors: EmissionFactors) -> Self {
        self.factors = Some(factors);
        self
    }

    pub fn with_thresholds(mut self, thresholds: ImpactThresholds) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    /// Appends every evaluated report to the given CSV file.
    pub fn with_csv_log(mut self, path: &str) -> Self {
        self.log_path = Some(path.to_string());
        self
    }

    /// Validates the configuration and returns a ready-to-run `Audit`.
    ///
    /// # Errors
    ///
    /// Returns a `GreenAuditError` if a consumption value is negative or not
    /// finite, if the resulting emissions overflow, if a factor or threshold is invalid, or if the CSV log cannot
    /// be opened.
    pub fn build(self) -> Result<Audit, GreenAuditError> {
        let consumption = calculator::normalize_inputs(&self.consumption.unwrap_or_default());
        let factors = self.factors.unwrap_or_default();
        let thresholds = self.thresholds.unwrap_or_default();

        calculator::validate_inputs(&consumption)?;
        calculator::validate_factors(&factors)?;
        classifier::validate_thresholds(&thresholds)?;
        calculator::validate_breakdown(&calculator::calculate(&consumption, &factors))?;

        let logger = match self.log_path {
            Some(path) => Some(
                AuditLogger::new(&path).map_err(|e| GreenAuditError::FileIO(path.clone(), e))?,
            ),
            None => None,
        };

        Ok(Audit {
            profile: self.profile.unwrap_or_default(),
            consumption,
            factors,
            thresholds,
            logger,
        })
    }
}

pub struct Audit {
    profile: CompanyProfile,
    consumption: ConsumptionInputs,
    factors: EmissionFactors,
    thresholds: ImpactThresholds,
    logger: Option<AuditLogger>,
}

impl Audit {
    /// Runs the calculator and classifier and records the result if a CSV
    /// log was configured.
    pub fn run(&mut self) -> Result<AuditReport, GreenAuditError> {
        debug!("Evaluating consumption {:?}", self.consumption);

        let breakdown = calculator::calculate(&self.consumption, &self.factors);
        let impact = classifier::classify(breakdown.grand_total, &self.thresholds);
        info!(
            "{}: {:.2} kg CO2e total, rated {}",
            self.profile.company_name, breakdown.grand_total, impact
        );

        let report = AuditReport {
            profile: self.profile.clone(),
            consumption: self.consumption,
            factors: self.factors.clone(),
            thresholds: self.thresholds,
            breakdown,
            impact,
            chart: chart::chart_series(&breakdown),
        };

        if let Some(logger) = &mut self.logger {
            logger.log_report(&report)?;
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::read_log;
    use greenaudit_schemas::profile::IndustrySector;
    use std::fs;

    fn temp_path(name: &str) -> String {
        let path = std::env::temp_dir().join(format!("greenaudit_{}_{}", std::process::id(), name));
        let _ = fs::remove_file(&path);
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_defaults_reproduce_seed_scenario() {
        let report = AuditBuilder::new().build().unwrap().run().unwrap();
        assert_eq!(report.profile.company_name, "Maple Leaf Logistics");
        assert!((report.breakdown.grand_total - 4841.0).abs() < 1e-9);
        assert_eq!(report.impact, ImpactLevel::Moderate);
        assert_eq!(report.chart.len(), 3);
    }

    #[test]
    fn test_negative_input_is_rejected_at_build() {
        let result = AuditBuilder::new()
            .with_consumption(ConsumptionInputs::new(-1.0, 0.0, 0.0))
            .build();
        assert!(matches!(result, Err(GreenAuditError::InvalidInput { .. })));
    }

    #[test]
    fn test_overflowing_consumption_is_rejected_at_build() {
        let result = AuditBuilder::new()
            .with_consumption(ConsumptionInputs::new(f64::MAX, 0.0, 0.0))
            .build();
        assert!(matches!(result, Err(GreenAuditError::InvalidInput { .. })));

        // Each source stays finite, their Scope 1 sum does not.
        let result = AuditBuilder::new()
            .with_consumption(ConsumptionInputs::new(f64::MAX / 3.0, f64::MAX / 2.0, 0.0))
            .build();
        match result {
            Err(GreenAuditError::InvalidInput { field, .. }) => assert_eq!(field, "scope1_total"),
            other => panic!("unexpected result: {:?}", other.err()),
        }
    }

    #[test]
    fn test_inverted_thresholds_are_rejected_at_build() {
        let result = AuditBuilder::new()
            .with_thresholds(ImpactThresholds {
                moderate_above_kg_co2e: 10.0,
                high_above_kg_co2e: 5.0,
            })
            .build();
        assert!(matches!(result, Err(GreenAuditError::InvalidThresholds(_))));
    }

    #[test]
    fn test_running_twice_is_identical() {
        let mut audit = AuditBuilder::new()
            .with_consumption(ConsumptionInputs::new(3000.0, 0.0, 0.0))
            .build()
            .unwrap();
        let first = audit.run().unwrap();
        let second = audit.run().unwrap();
        assert_eq!(first.breakdown, second.breakdown);
        assert_eq!(first.impact, ImpactLevel::High);
    }

    #[test]
    fn test_profile_does_not_affect_totals() {
        let retail = CompanyProfile {
            company_name: "Corner Shop".to_string(),
            industry: IndustrySector::Retail,
        };
        let a = AuditBuilder::new().build().unwrap().run().unwrap();
        let b = AuditBuilder::new().with_profile(retail).build().unwrap().run().unwrap();
        assert_eq!(a.breakdown, b.breakdown);
        assert_eq!(a.impact, b.impact);
    }

    #[test]
    fn test_csv_log_appends_rows() {
        let path = temp_path("audit_log.csv");
        let mut audit = AuditBuilder::new().with_csv_log(&path).build().unwrap();
        audit.run().unwrap();
        drop(audit);

        let mut audit = AuditBuilder::new()
            .with_consumption(ConsumptionInputs::new(0.0, 0.0, 0.0))
            .with_csv_log(&path)
            .build()
            .unwrap();
        audit.run().unwrap();
        drop(audit);

        let rows = read_log(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].impact, ImpactLevel::Moderate);
        assert_eq!(rows[0].industry, IndustrySector::Logistics);
        assert!((rows[0].grand_total - 4841.0).abs() < 1e-9);
        assert_eq!(rows[1].impact, ImpactLevel::Low);

        let raw = fs::read_to_string(&path).unwrap();
        let report = AuditBuilder::new().build().unwrap().run().unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["impact"], "moderate");
        assert!(raw.lines().nth(1).unwrap().ends_with(",moderate"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = AuditBuilder::new().build().unwrap().run().unwrap();
        let json = report.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["impact"], "moderate");
        assert_eq!(value["chart"][2]["label"], "Electricity (Scope 2)");
        assert_eq!(value["profile"]["industry"], "Logistics");
    }
}
