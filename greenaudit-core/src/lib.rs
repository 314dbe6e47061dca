//! Emissions calculation and impact classification for GreenAudit.
//!
//! Everything in this crate except [`logger`] and [`files`] is pure: the same
//! inputs always produce the same outputs and nothing is cached.

pub mod audit;
pub mod calculator;
pub mod chart;
pub mod classifier;
pub mod error;
pub mod files;
pub mod logger;

pub use audit::{Audit, AuditBuilder, AuditReport};
pub use calculator::EmissionBreakdown;
pub use error::GreenAuditError;
