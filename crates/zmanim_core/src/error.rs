/// Custom error types for better error handling
#[derive(Debug, Clone, thiserror::Error)]
pub enum ZmanimError {
    #[error("Invalid timezone: {timezone}")]
    InvalidTimezone { timezone: String },
    #[error("Coordinates out of range: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
    #[error("Solar position computation failed: {message}")]
    SolarComputation { message: String },
}

pub type ZmanimResult<T> = Result<T, ZmanimError>;

#[cfg(test)]
mod tests {
    use super::ZmanimError;

    #[test]
    fn test_error_display() {
        let error = ZmanimError::InvalidTimezone {
            timezone: "Invalid/Zone".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid timezone: Invalid/Zone");

        let error = ZmanimError::InvalidCoordinates {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert!(error.to_string().contains("latitude 91"));
    }
}
