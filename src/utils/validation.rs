use crate::domain::model::SalesData;
use crate::utils::error::{ReportError, Result};
use serde_json::Value;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

const REQUIRED_COLLECTIONS: [&str; 3] = ["sellers", "products", "purchase_records"];

/// Structural check for the top-level sales bundle, applied before any
/// aggregation starts. Only the bundle shape is checked here; malformed
/// sub-records degrade to zero defaults during deserialization instead of
/// failing the run.
pub fn parse_sales_data(value: &Value) -> Result<SalesData> {
    let object = value
        .as_object()
        .ok_or_else(|| ReportError::invalid_input("expected an object with sales data"))?;

    for key in REQUIRED_COLLECTIONS {
        match object.get(key) {
            Some(Value::Array(_)) => {}
            Some(_) => {
                return Err(ReportError::invalid_input(format!(
                    "'{}' must be an array",
                    key
                )))
            }
            None => {
                return Err(ReportError::invalid_input(format!(
                    "missing required collection '{}'",
                    key
                )))
            }
        }
    }

    serde_json::from_value(value.clone())
        .map_err(|e| ReportError::invalid_input(format!("malformed sales data: {}", e)))
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(ReportError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Allowed values: {}", allowed.join(", ")),
    })
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ReportError::MissingConfigError {
        field: field_name.to_string(),
    })
}
