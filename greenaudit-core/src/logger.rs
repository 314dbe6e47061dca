use crate::{audit::AuditReport, error::GreenAuditError};
use greenaudit_schemas::{impact::ImpactLevel, profile::IndustrySector};
use csv::{Writer, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io;

/// One row of the audit trail CSV. Enum columns use the same serde
/// spelling as `report.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub company_name: String,
    pub industry: IndustrySector,
    pub diesel_liters: f64,
    pub natural_gas_cubic_meters: f64,
    pub electricity_kwh: f64,
    pub fuel_emissions: f64,
    pub gas_emissions: f64,
    pub scope1_total: f64,
    pub scope2_total: f64,
    pub grand_total: f64,
    pub impact: ImpactLevel,
}

impl From<&AuditReport> for LogEntry {
    fn from(report: &AuditReport) -> Self {
        Self {
            company_name: report.profile.company_name.clone(),
            industry: report.profile.industry,
            diesel_liters: report.consumption.diesel_liters,
            natural_gas_cubic_meters: report.consumption.natural_gas_cubic_meters,
            electricity_kwh: report.consumption.electricity_kwh,
            fuel_emissions: report.breakdown.fuel_emissions,
            gas_emissions: report.breakdown.gas_emissions,
            scope1_total: report.breakdown.scope1_total,
            scope2_total: report.breakdown.scope2_total,
            grand_total: report.breakdown.grand_total,
            impact: report.impact,
        }
    }
}

/// Appends one CSV row per evaluated audit. The header is written only
/// when the file is new or empty.
pub struct AuditLogger {
    path: String,
    writer: Writer<fs::File>,
}

impl AuditLogger {
    pub fn new(path: &str) -> Result<Self, io::Error> {
        let needs_header = fs::metadata(path).map_or(true, |m| m.len() == 0);
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let writer = WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        Ok(Self {
            path: path.to_string(),
            writer,
        })
    }

    pub fn log_report(&mut self, report: &AuditReport) -> Result<(), GreenAuditError> {
        self.writer
            .serialize(LogEntry::from(report))
            .map_err(|e| GreenAuditError::CsvError(self.path.clone(), e))?;
        self.writer
            .flush()
            .map_err(|e| GreenAuditError::FileIO(self.path.clone(), e))?;
        Ok(())
    }
}

pub fn read_log(path: &str) -> Result<Vec<LogEntry>, GreenAuditError> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| GreenAuditError::CsvError(path.to_string(), e))?;
    reader
        .deserialize()
        .collect::<Result<Vec<LogEntry>, _>>()
        .map_err(|e| GreenAuditError::CsvError(path.to_string(), e))
}
