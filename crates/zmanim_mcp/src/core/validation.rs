use chrono::NaiveDate;

use crate::core::error::{ZmanimServerError, ZmanimServerResult};
use crate::core::models::{ShabbatTimesRequest, ZmanimRequest};
use crate::core::utils::DATE_INPUT_FORMAT;

pub const MAX_LOCATION_LENGTH: usize = 100;
pub const MIN_CANDLE_LIGHTING_OFFSET: u32 = 1;
pub const MAX_CANDLE_LIGHTING_OFFSET: u32 = 60;

/// Field-level request validation, run before any computation.
pub trait Validate {
    fn validate(&self) -> ZmanimServerResult<()>;
}

fn validate_location_fields(
    location: &str,
    latitude: f64,
    longitude: f64,
    time_zone: &str,
    date: Option<&str>,
) -> ZmanimServerResult<()> {
    if location.is_empty() {
        return Err(ZmanimServerError::EmptyField { field: "location" });
    }
    let length = location.chars().count();
    if length > MAX_LOCATION_LENGTH {
        return Err(ZmanimServerError::LocationTooLong {
            length,
            max: MAX_LOCATION_LENGTH,
        });
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ZmanimServerError::CoordinateOutOfRange {
            field: "latitude",
            value: latitude,
            min: -90.0,
            max: 90.0,
        });
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ZmanimServerError::CoordinateOutOfRange {
            field: "longitude",
            value: longitude,
            min: -180.0,
            max: 180.0,
        });
    }
    if time_zone.is_empty() {
        return Err(ZmanimServerError::EmptyField { field: "time_zone" });
    }
    if let Some(date) = date {
        NaiveDate::parse_from_str(date, DATE_INPUT_FORMAT).map_err(|_| {
            ZmanimServerError::InvalidDate {
                date: date.to_string(),
            }
        })?;
    }
    Ok(())
}

impl Validate for ZmanimRequest {
    fn validate(&self) -> ZmanimServerResult<()> {
        validate_location_fields(
            &self.location,
            self.latitude,
            self.longitude,
            &self.time_zone,
            self.date.as_deref(),
        )
    }
}

impl Validate for ShabbatTimesRequest {
    fn validate(&self) -> ZmanimServerResult<()> {
        validate_location_fields(
            &self.location,
            self.latitude,
            self.longitude,
            &self.time_zone,
            self.date.as_deref(),
        )?;
        if !(MIN_CANDLE_LIGHTING_OFFSET..=MAX_CANDLE_LIGHTING_OFFSET)
            .contains(&self.candle_lighting_offset)
        {
            return Err(ZmanimServerError::InvalidCandleLightingOffset {
                minutes: self.candle_lighting_offset,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ResponseFormat;

    fn valid_request() -> ZmanimRequest {
        ZmanimRequest {
            location: "New York, NY".to_string(),
            latitude: 40.7128,
            longitude: -74.0060,
            time_zone: "America/New_York".to_string(),
            date: Some("2024-06-21".to_string()),
            response_format: ResponseFormat::Markdown,
        }
    }

    fn valid_shabbat_request() -> ShabbatTimesRequest {
        ShabbatTimesRequest {
            location: "New York, NY".to_string(),
            latitude: 40.7128,
            longitude: -74.0060,
            time_zone: "America/New_York".to_string(),
            date: Some("2024-06-21".to_string()),
            response_format: ResponseFormat::Json,
            candle_lighting_offset: 18,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
        assert!(valid_shabbat_request().validate().is_ok());
    }

    #[test]
    fn test_empty_location_rejected() {
        let mut request = valid_request();
        request.location = String::new();
        assert!(matches!(
            request.validate(),
            Err(ZmanimServerError::EmptyField { field: "location" })
        ));
    }

    #[test]
    fn test_overlong_location_rejected() {
        let mut request = valid_request();
        request.location = "x".repeat(MAX_LOCATION_LENGTH + 1);
        assert!(matches!(
            request.validate(),
            Err(ZmanimServerError::LocationTooLong { .. })
        ));
    }

    #[test]
    fn test_latitude_bounds() {
        let mut request = valid_request();
        request.latitude = 90.0;
        assert!(request.validate().is_ok());

        request.latitude = 90.1;
        assert!(matches!(
            request.validate(),
            Err(ZmanimServerError::CoordinateOutOfRange {
                field: "latitude",
                ..
            })
        ));

        request.latitude = -90.1;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_longitude_bounds() {
        let mut request = valid_request();
        request.longitude = -180.0;
        assert!(request.validate().is_ok());

        request.longitude = 180.5;
        assert!(matches!(
            request.validate(),
            Err(ZmanimServerError::CoordinateOutOfRange {
                field: "longitude",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_timezone_rejected() {
        let mut request = valid_request();
        request.time_zone = String::new();
        assert!(matches!(
            request.validate(),
            Err(ZmanimServerError::EmptyField { field: "time_zone" })
        ));
    }

    #[test]
    fn test_malformed_date_rejected() {
        let mut request = valid_request();
        request.date = Some("21-06-2024".to_string());
        assert!(matches!(
            request.validate(),
            Err(ZmanimServerError::InvalidDate { .. })
        ));

        request.date = Some("2024-13-01".to_string());
        assert!(request.validate().is_err());

        request.date = Some(String::new());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_candle_lighting_offset_bounds() {
        let mut request = valid_shabbat_request();

        request.candle_lighting_offset = 0;
        assert!(matches!(
            request.validate(),
            Err(ZmanimServerError::InvalidCandleLightingOffset { minutes: 0 })
        ));

        request.candle_lighting_offset = 61;
        assert!(matches!(
            request.validate(),
            Err(ZmanimServerError::InvalidCandleLightingOffset { minutes: 61 })
        ));

        request.candle_lighting_offset = 1;
        assert!(request.validate().is_ok());

        request.candle_lighting_offset = 60;
        assert!(request.validate().is_ok());
    }
}
