//! Loading of request and factor-set YAML files.

use crate::error::GreenAuditError;
use greenaudit_schemas::file_formats::{
    AuditRequestFile, FactorSetFile, SUPPORTED_SCHEMA_VERSION,
};
use log::debug;
use std::{fs, path::Path};

pub fn load_request<P: AsRef<Path>>(path: P) -> Result<AuditRequestFile, GreenAuditError> {
    let path = path.as_ref();
    let file: AuditRequestFile = load_yaml_file(path)?;
    check_schema_version(path, &file.schema_version)?;
    Ok(file)
}

pub fn load_factor_set<P: AsRef<Path>>(path: P) -> Result<FactorSetFile, GreenAuditError> {
    let path = path.as_ref();
    let file: FactorSetFile = load_yaml_file(path)?;
    check_schema_version(path, &file.schema_version)?;
    Ok(file)
}

fn load_yaml_file<F>(path: &Path) -> Result<F, GreenAuditError>
where
    F: for<'de> serde::Deserialize<'de>,
{
    let display = path.display().to_string();
    debug!("Reading YAML from '{}'", display);
    let content =
        fs::read_to_string(path).map_err(|e| GreenAuditError::FileIO(display.clone(), e))?;
    serde_yaml::from_str(&content).map_err(|e| GreenAuditError::YamlParsing(display, e))
}

fn check_schema_version(path: &Path, found: &str) -> Result<(), GreenAuditError> {
    if found != SUPPORTED_SCHEMA_VERSION {
        return Err(GreenAuditError::UnsupportedSchemaVersion {
            path: path.display().to_string(),
            found: found.to_string(),
            expected: SUPPORTED_SCHEMA_VERSION.to_string(),
        });
    }
    Ok(())
}
