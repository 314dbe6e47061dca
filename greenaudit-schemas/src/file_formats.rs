use crate::{
    consumption::ConsumptionInputs,
    factors::{EmissionFactors, ImpactThresholds},
    profile::CompanyProfile,
};
use serde::{Deserialize, Serialize};

pub const SUPPORTED_SCHEMA_VERSION: &str = "1.0";

/// A saved set of dashboard inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRequestFile {
    pub schema_version: String,
    #[serde(default)]
    pub profile: CompanyProfile,
    #[serde(default)]
    pub consumption: ConsumptionInputs,
}

/// Replacement factors and thresholds, e.g. for a different grid or year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorSetFile {
    pub schema_version: String,
    #[serde(default)]
    pub factors: EmissionFactors,
    #[serde(default)]
    pub thresholds: ImpactThresholds,
}
