use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_COMPANY_NAME: &str = "Maple Leaf Logistics";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IndustrySector {
    #[default]
    Logistics,
    Manufacturing,
    Retail,
}

impl IndustrySector {
    pub const ALL: [IndustrySector; 3] = [
        IndustrySector::Logistics,
        IndustrySector::Manufacturing,
        IndustrySector::Retail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndustrySector::Logistics => "Logistics",
            IndustrySector::Manufacturing => "Manufacturing",
            IndustrySector::Retail => "Retail",
        }
    }
}

impl fmt::Display for IndustrySector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndustrySector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndustrySector::ALL
            .into_iter()
            .find(|sector| sector.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown industry sector '{}' (expected Logistics, Manufacturing or Retail)", s)
            })
    }
}

/// Descriptive company details. Shown on reports, never used in calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    pub company_name: String,
    pub industry: IndustrySector,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            industry: IndustrySector::default(),
        }
    }
}
