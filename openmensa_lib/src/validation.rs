use chrono::NaiveDate;
use openmensa_api::types::CanteenID;

use crate::error::MensaError;

/// Date format used by the OpenMensa API in paths and payloads.
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate a YYYY-MM-DD date string.
pub fn validate_date(input: &str) -> Result<NaiveDate, MensaError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, API_DATE_FORMAT).map_err(|_| {
        MensaError::InvalidInput(format!(
            "invalid date '{}'. Expected format: YYYY-MM-DD (e.g., 2024-06-01)",
            trimmed
        ))
    })
}

/// Validate a canteen ID: a non-negative integer.
pub fn validate_canteen_id(input: &str) -> Result<CanteenID, MensaError> {
    let trimmed = input.trim();
    match trimmed.parse::<CanteenID>() {
        Ok(id) if id >= 0 => Ok(id),
        _ => Err(MensaError::InvalidInput(format!(
            "invalid canteen id '{}'. Expected a non-negative number (e.g., 229)",
            trimmed
        ))),
    }
}

/// Validate a comma-separated list of canteen IDs (e.g. `1,2,229`).
pub fn validate_canteen_ids(input: &str) -> Result<Vec<CanteenID>, MensaError> {
    let ids = input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(validate_canteen_id)
        .collect::<Result<Vec<_>, _>>()?;
    if ids.is_empty() {
        return Err(MensaError::InvalidInput(
            "expected at least one canteen id".to_string(),
        ));
    }
    Ok(ids)
}

/// Validate a `LAT,LNG` coordinate pair in decimal degrees.
pub fn validate_coordinates(input: &str) -> Result<(f64, f64), MensaError> {
    let invalid = || {
        MensaError::InvalidInput(format!(
            "invalid coordinates '{}'. Expected LAT,LNG (e.g., 49.45,11.08)",
            input.trim()
        ))
    };
    let (lat, lng) = input.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(invalid());
    }
    Ok((lat, lng))
}

/// Validate a page size: must be 1..=1000.
pub fn validate_page_size(page_size: u32) -> Result<u32, MensaError> {
    if !(1..=1000).contains(&page_size) {
        return Err(MensaError::InvalidInput(format!(
            "page size must be between 1 and 1000, got {}",
            page_size
        )));
    }
    Ok(page_size)
}

/// Render a date the way the API expects it in request paths.
pub fn format_api_date(date: NaiveDate) -> String {
    date.format(API_DATE_FORMAT).to_string()
}
