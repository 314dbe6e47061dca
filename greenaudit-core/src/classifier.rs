use crate::error::GreenAuditError;
use greenaudit_schemas::{factors::ImpactThresholds, impact::ImpactLevel};

/// Maps a total (kg CO2e) to an impact level.
///
/// A total equal to a threshold stays in the lower level.
pub fn classify(grand_total: f64, thresholds: &ImpactThresholds) -> ImpactLevel {
    if grand_total > thresholds.high_above_kg_co2e {
        ImpactLevel::High
    } else if grand_total > thresholds.moderate_above_kg_co2e {
        ImpactLevel::Moderate
    } else {
        ImpactLevel::Low
    }
}

pub fn classify_default(grand_total: f64) -> ImpactLevel {
    classify(grand_total, &ImpactThresholds::default())
}

pub fn validate_thresholds(thresholds: &ImpactThresholds) -> Result<(), GreenAuditError> {
    let ImpactThresholds {
        moderate_above_kg_co2e: moderate,
        high_above_kg_co2e: high,
    } = *thresholds;

    if !moderate.is_finite() || !high.is_finite() || moderate < 0.0 || high < 0.0 {
        return Err(GreenAuditError::InvalidThresholds(format!(
            "thresholds must be finite and non-negative (moderate: {}, high: {})",
            moderate, high
        )));
    }
    if moderate > high {
        return Err(GreenAuditError::InvalidThresholds(format!(
            "moderate threshold {} exceeds high threshold {}",
            moderate, high
        )));
    }
    Ok(())
}
