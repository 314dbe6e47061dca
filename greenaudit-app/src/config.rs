use crate::Cli;
use anyhow::{Context, Result};
use greenaudit_core::{files, AuditBuilder};
use greenaudit_schemas::{
    consumption::ConsumptionInputs,
    factors::{EmissionFactors, ImpactThresholds},
    profile::CompanyProfile,
};
use log::{debug, info};
use std::path::PathBuf;

/// Inputs for one audit after merging CLI flags, files and defaults.
///
/// A CLI flag wins over the request file, which wins over the built-in
/// default.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditSettings {
    pub profile: CompanyProfile,
    pub consumption: ConsumptionInputs,
    pub factors: EmissionFactors,
    pub thresholds: ImpactThresholds,
    pub csv_log: Option<PathBuf>,
}

impl AuditSettings {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let (mut profile, mut consumption) = match &cli.request {
            Some(path) => {
                info!("Loading request from '{}'", path.display());
                let request = files::load_request(path)
                    .with_context(|| format!("Failed to load request {}", path.display()))?;
                (request.profile, request.consumption)
            }
            None => (CompanyProfile::default(), ConsumptionInputs::default()),
        };

        let (factors, thresholds) = match &cli.factors {
            Some(path) => {
                info!("Loading factor set from '{}'", path.display());
                let set = files::load_factor_set(path)
                    .with_context(|| format!("Failed to load factor set {}", path.display()))?;
                (set.factors, set.thresholds)
            }
            None => (EmissionFactors::default(), ImpactThresholds::default()),
        };

        if let Some(name) = &cli.company {
            profile.company_name = name.clone();
        }
        if let Some(industry) = cli.industry {
            profile.industry = industry;
        }
        if let Some(diesel) = cli.diesel {
            consumption.diesel_liters = diesel;
        }
        if let Some(gas) = cli.gas {
            consumption.natural_gas_cubic_meters = gas;
        }
        if let Some(electricity) = cli.electricity {
            consumption.electricity_kwh = electricity;
        }
        debug!("Resolved consumption: {:?}", consumption);

        Ok(Self {
            profile,
            consumption,
            factors,
            thresholds,
            csv_log: cli.csv_log.clone(),
        })
    }

    pub fn to_builder(&self) -> AuditBuilder {
        let builder = AuditBuilder::new()
            .with_profile(self.profile.clone())
            .with_consumption(self.consumption)
            .with_factors(self.factors.clone())
            .with_thresholds(self.thresholds);
        match &self.csv_log {
            Some(path) => builder.with_csv_log(&path.to_string_lossy()),
            None => builder,
        }
    }
}

/// Clap value parser for consumption flags.
pub fn parse_non_negative(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("'{}' must be a finite, non-negative number", s));
    }
    // Folds "-0" into +0.0.
    Ok(value + 0.0)
}

pub fn default_output_dir(company_name: &str) -> PathBuf {
    let slug: String = company_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    PathBuf::from(format!(
        "./data/runs/{}_{}",
        slug,
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use greenaudit_schemas::profile::IndustrySector;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::parse_from(["greenaudit"]);
        let settings = AuditSettings::resolve(&cli).unwrap();
        assert_eq!(settings.consumption, ConsumptionInputs::default());
        assert_eq!(settings.profile, CompanyProfile::default());
        assert_eq!(settings.thresholds, ImpactThresholds::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "greenaudit",
            "--diesel",
            "0",
            "--electricity",
            "100.5",
            "--company",
            "Harbour Goods",
            "--industry",
            "retail",
        ]);
        let settings = AuditSettings::resolve(&cli).unwrap();
        assert_eq!(settings.consumption.diesel_liters, 0.0);
        assert_eq!(settings.consumption.natural_gas_cubic_meters, 500.0);
        assert_eq!(settings.consumption.electricity_kwh, 100.5);
        assert_eq!(settings.profile.company_name, "Harbour Goods");
        assert_eq!(settings.profile.industry, IndustrySector::Retail);
    }

    #[test]
    fn test_flag_overrides_request_file() {
        let path = std::env::temp_dir().join(format!("greenaudit_{}_cli_request.yaml", std::process::id()));
        std::fs::write(
            &path,
            "schema_version: \"1.0\"\nconsumption:\n  diesel_liters: 10.0\n  natural_gas_cubic_meters: 20.0\n  electricity_kwh: 30.0\n",
        )
        .unwrap();
        let path_str = path.to_string_lossy().into_owned();
        let cli = Cli::parse_from(["greenaudit", "--request", path_str.as_str(), "--gas", "99"]);
        let settings = AuditSettings::resolve(&cli).unwrap();
        assert_eq!(settings.consumption, ConsumptionInputs::new(10.0, 99.0, 30.0));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_negative_flag_is_rejected() {
        assert!(Cli::try_parse_from(["greenaudit", "--diesel", "-5"]).is_err());
        assert!(Cli::try_parse_from(["greenaudit", "--gas", "lots"]).is_err());
        assert!(Cli::try_parse_from(["greenaudit", "--industry", "Mining"]).is_err());
    }

    #[test]
    fn test_parse_non_negative() {
        assert_eq!(parse_non_negative("0"), Ok(0.0));
        assert_eq!(parse_non_negative(" 12.5 "), Ok(12.5));
        assert!(parse_non_negative("-0.1").is_err());
        let zero = parse_non_negative("-0").unwrap();
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_positive());
        assert!(parse_non_negative("NaN").is_err());
        assert!(parse_non_negative("inf").is_err());
    }

    #[test]
    fn test_default_output_dir_is_sanitized() {
        let dir = default_output_dir("Maple Leaf Logistics");
        let name = dir.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("Maple_Leaf_Logistics_"));
    }
}
