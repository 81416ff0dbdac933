use std::str::FromStr;

use chrono_tz::Tz;

use crate::error::{ZmanimError, ZmanimResult};

/// A named geographic position with its IANA timezone.
#[derive(Debug, Clone)]
pub struct GeoLocation {
    name: String,
    latitude: f64,
    longitude: f64,
    timezone: Tz,
}

impl GeoLocation {
    /// Create a location, parsing the IANA timezone identifier.
    ///
    /// Fails when the timezone is not in the IANA database or the
    /// coordinates are outside the valid ranges.
    pub fn new(name: &str, latitude: f64, longitude: f64, timezone: &str) -> ZmanimResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(ZmanimError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }

        let timezone = Tz::from_str(timezone).map_err(|_| ZmanimError::InvalidTimezone {
            timezone: timezone.to_string(),
        })?;

        Ok(Self {
            name: name.to_string(),
            latitude,
            longitude,
            timezone,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}
