use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative rating of a period's total emissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    Low,
    Moderate,
    High,
}

impl ImpactLevel {
    /// Headline shown for this level.
    pub fn label(&self) -> &'static str {
        match self {
            ImpactLevel::High => "⚠️ High Impact",
            ImpactLevel::Moderate => "⚠️ Moderate Impact",
            ImpactLevel::Low => "✅ Low Impact (Green)",
        }
    }

    /// Caption for the illustration that accompanies the headline.
    pub fn caption(&self) -> &'static str {
        match self {
            ImpactLevel::High => "Current Environmental Stress",
            ImpactLevel::Moderate => "Urban Impact",
            ImpactLevel::Low => "Sustainable Operation",
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImpactLevel::Low => "Low",
            ImpactLevel::Moderate => "Moderate",
            ImpactLevel::High => "High",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered_by_severity() {
        assert!(ImpactLevel::Low < ImpactLevel::Moderate);
        assert!(ImpactLevel::Moderate < ImpactLevel::High);
    }

    #[test]
    fn test_labels_are_distinct() {
        assert_ne!(ImpactLevel::Low.label(), ImpactLevel::Moderate.label());
        assert_ne!(ImpactLevel::Moderate.label(), ImpactLevel::High.label());
        assert_eq!(ImpactLevel::Moderate.caption(), "Urban Impact");
    }
}
