use rmcp::ErrorData as McpError;
use rmcp::serde_json::json;

use zmanim_core::ZmanimError;

use crate::core::utils::AVAILABLE_RESOURCES;

// Error codes
const ERROR_EMPTY_FIELD: &str = "empty_field";
const ERROR_LOCATION_TOO_LONG: &str = "location_too_long";
const ERROR_COORDINATE_OUT_OF_RANGE: &str = "coordinate_out_of_range";
const ERROR_INVALID_DATE: &str = "invalid_date";
const ERROR_INVALID_CANDLE_LIGHTING_OFFSET: &str = "invalid_candle_lighting_offset";
const ERROR_INVALID_TIMEZONE: &str = "invalid_timezone";
const ERROR_CALCULATION: &str = "calculation_error";
const ERROR_RESOURCE_NOT_FOUND: &str = "resource_not_found";

/// Custom error types for better error handling
#[derive(Debug, thiserror::Error)]
pub enum ZmanimServerError {
    #[error("Field '{field}' must not be empty")]
    EmptyField { field: &'static str },
    #[error("Location name is {length} characters long (maximum {max})")]
    LocationTooLong { length: usize, max: usize },
    #[error("{field} {value} is outside [{min}, {max}]")]
    CoordinateOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("Invalid date: {date}. Expected YYYY-MM-DD format")]
    InvalidDate { date: String },
    #[error("Invalid candle lighting offset: {minutes}. Expected 1 to 60 minutes")]
    InvalidCandleLightingOffset { minutes: u32 },
    #[error(transparent)]
    Calculation(#[from] ZmanimError),
    #[error("Resource not found: {uri}")]
    ResourceNotFound { uri: String },
}

impl From<ZmanimServerError> for McpError {
    fn from(err: ZmanimServerError) -> Self {
        match err {
            ZmanimServerError::EmptyField { field } => {
                McpError::invalid_params(ERROR_EMPTY_FIELD, Some(json!({ "field": field })))
            }
            ZmanimServerError::LocationTooLong { length, max } => McpError::invalid_params(
                ERROR_LOCATION_TOO_LONG,
                Some(json!({ "length": length, "max": max })),
            ),
            ZmanimServerError::CoordinateOutOfRange {
                field,
                value,
                min,
                max,
            } => McpError::invalid_params(
                ERROR_COORDINATE_OUT_OF_RANGE,
                Some(json!({ "field": field, "value": value, "min": min, "max": max })),
            ),
            ZmanimServerError::InvalidDate { date } => {
                McpError::invalid_params(ERROR_INVALID_DATE, Some(json!({ "date": date })))
            }
            ZmanimServerError::InvalidCandleLightingOffset { minutes } => McpError::invalid_params(
                ERROR_INVALID_CANDLE_LIGHTING_OFFSET,
                Some(json!({ "minutes": minutes, "min": 1, "max": 60 })),
            ),
            ZmanimServerError::Calculation(ZmanimError::InvalidTimezone { timezone }) => {
                McpError::invalid_params(
                    ERROR_INVALID_TIMEZONE,
                    Some(json!({ "timezone": timezone })),
                )
            }
            ZmanimServerError::Calculation(inner) => McpError::internal_error(
                ERROR_CALCULATION,
                Some(json!({ "message": inner.to_string() })),
            ),
            ZmanimServerError::ResourceNotFound { uri } => McpError::resource_not_found(
                ERROR_RESOURCE_NOT_FOUND,
                Some(json!({
                    "uri": uri,
                    "available_resources": AVAILABLE_RESOURCES
                })),
            ),
        }
    }
}

pub type ZmanimServerResult<T> = Result<T, ZmanimServerError>;
pub type McpResult<T> = Result<T, McpError>;

#[cfg(test)]
mod tests {
    use super::{McpError, ZmanimServerError};
    use zmanim_core::ZmanimError;

    #[test]
    fn test_validation_error_conversion() {
        let error = ZmanimServerError::InvalidDate {
            date: "21-06-2024".to_string(),
        };
        let mcp_error: McpError = error.into();

        // Should convert to proper MCP error format
        assert!(mcp_error.to_string().contains("invalid_date"));
    }

    #[test]
    fn test_invalid_timezone_is_invalid_params() {
        let error = ZmanimServerError::Calculation(ZmanimError::InvalidTimezone {
            timezone: "Invalid/Zone".to_string(),
        });
        let mcp_error: McpError = error.into();

        assert!(mcp_error.to_string().contains("invalid_timezone"));
    }
}
