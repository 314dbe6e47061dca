use thiserror::Error;

#[derive(Debug, Error)]
pub enum GreenAuditError {
    #[error("Invalid input: '{field}' must be a finite, non-negative number (got {value})")]
    InvalidInput { field: String, value: f64 },

    #[error("Invalid emission factor '{name}': must be a finite, non-negative number (got {value})")]
    InvalidFactor { name: String, value: f64 },

    #[error("Invalid impact thresholds: {0}")]
    InvalidThresholds(String),

    #[error("Unsupported schema version '{found}' in '{path}' (expected '{expected}')")]
    UnsupportedSchemaVersion {
        path: String,
        found: String,
        expected: String,
    },

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Failed to write CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}
