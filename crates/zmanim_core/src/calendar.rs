use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use spa::SunriseAndSet;

use crate::error::{ZmanimError, ZmanimResult};
use crate::geo::GeoLocation;

/// Default candle lighting offset in minutes before sunset.
pub const DEFAULT_CANDLE_LIGHTING_OFFSET: i64 = 18;

/// Minutes before sunrise for alos (dawn).
const ALOS_OFFSET_MINUTES: i64 = 72;

/// Minutes after sunset for tzais (nightfall).
const TZAIS_OFFSET_MINUTES: i64 = 72;

/// Halachic time calculator for one location and civil date.
///
/// Sunrise and sunset come from the NREL Solar Position Algorithm; all
/// other instants are fixed offsets or temporal-hour prorations of that
/// window. Every query returns `Ok(None)` when the sun neither rises nor
/// sets on the requested date (polar day or night), and an error only
/// when the solar computation itself fails.
#[derive(Debug, Clone)]
pub struct ZmanimCalendar {
    geo: GeoLocation,
    date: NaiveDate,
    candle_lighting_offset: i64,
}

impl ZmanimCalendar {
    pub fn new(geo: GeoLocation, date: NaiveDate) -> Self {
        Self {
            geo,
            date,
            candle_lighting_offset: DEFAULT_CANDLE_LIGHTING_OFFSET,
        }
    }

    /// Set the candle lighting offset in minutes before sunset.
    #[must_use]
    pub fn with_candle_lighting_offset(mut self, minutes: i64) -> Self {
        self.candle_lighting_offset = minutes;
        self
    }

    pub fn geo(&self) -> &GeoLocation {
        &self.geo
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn candle_lighting_offset(&self) -> i64 {
        self.candle_lighting_offset
    }

    pub fn sunrise(&self) -> ZmanimResult<Option<DateTime<Tz>>> {
        Ok(self.solar_window()?.map(|(rise, _)| rise))
    }

    pub fn sunset(&self) -> ZmanimResult<Option<DateTime<Tz>>> {
        Ok(self.solar_window()?.map(|(_, set)| set))
    }

    /// Alos HaShachar (dawn), 72 minutes before sunrise.
    pub fn alos_72(&self) -> ZmanimResult<Option<DateTime<Tz>>> {
        Ok(self
            .sunrise()?
            .map(|rise| rise - Duration::minutes(ALOS_OFFSET_MINUTES)))
    }

    /// Tzais HaKochavim (nightfall), 72 minutes after sunset.
    pub fn tzais_72(&self) -> ZmanimResult<Option<DateTime<Tz>>> {
        Ok(self
            .sunset()?
            .map(|set| set + Duration::minutes(TZAIS_OFFSET_MINUTES)))
    }

    /// Chatzos (solar midday), the midpoint of sunrise and sunset.
    pub fn chatzos(&self) -> ZmanimResult<Option<DateTime<Tz>>> {
        Ok(self
            .solar_window()?
            .map(|(rise, set)| rise + (set - rise) / 2))
    }

    /// Latest Shema per the GR"A, 3 temporal hours after sunrise.
    pub fn sof_zman_shma_gra(&self) -> ZmanimResult<Option<DateTime<Tz>>> {
        self.gra_hours(3.0)
    }

    /// Latest Shema per the MG"A, 3 temporal hours after alos.
    pub fn sof_zman_shma_mga(&self) -> ZmanimResult<Option<DateTime<Tz>>> {
        self.mga_hours(3.0)
    }

    /// Latest morning Tefila per the GR"A, 4 temporal hours after sunrise.
    pub fn sof_zman_tfila_gra(&self) -> ZmanimResult<Option<DateTime<Tz>>> {
        self.gra_hours(4.0)
    }

    /// Latest morning Tefila per the MG"A, 4 temporal hours after alos.
    pub fn sof_zman_tfila_mga(&self) -> ZmanimResult<Option<DateTime<Tz>>> {
        self.mga_hours(4.0)
    }

    /// Earliest Mincha, 6.5 temporal hours after sunrise.
    pub fn mincha_gedola(&self) -> ZmanimResult<Option<DateTime<Tz>>> {
        self.gra_hours(6.5)
    }

    /// Preferred earliest Mincha, 9.5 temporal hours after sunrise.
    pub fn mincha_ketana(&self) -> ZmanimResult<Option<DateTime<Tz>>> {
        self.gra_hours(9.5)
    }

    /// Plag HaMincha, 10.75 temporal hours after sunrise.
    pub fn plag_hamincha(&self) -> ZmanimResult<Option<DateTime<Tz>>> {
        self.gra_hours(10.75)
    }

    /// Candle lighting, the configured number of minutes before sunset.
    pub fn candle_lighting(&self) -> ZmanimResult<Option<DateTime<Tz>>> {
        Ok(self
            .sunset()?
            .map(|set| set - Duration::minutes(self.candle_lighting_offset)))
    }

    /// Temporal hours per the GR"A: the sunrise-sunset day split into 12.
    fn gra_hours(&self, hours: f64) -> ZmanimResult<Option<DateTime<Tz>>> {
        Ok(self
            .solar_window()?
            .map(|(rise, set)| prorate(rise, set, hours)))
    }

    /// Temporal hours per the MG"A: the alos-tzais day split into 12.
    fn mga_hours(&self, hours: f64) -> ZmanimResult<Option<DateTime<Tz>>> {
        Ok(self.solar_window()?.map(|(rise, set)| {
            let alos = rise - Duration::minutes(ALOS_OFFSET_MINUTES);
            let tzais = set + Duration::minutes(TZAIS_OFFSET_MINUTES);
            prorate(alos, tzais, hours)
        }))
    }

    /// Sunrise and sunset for the civil date, in the location's timezone.
    fn solar_window(&self) -> ZmanimResult<Option<(DateTime<Tz>, DateTime<Tz>)>> {
        let Some(anchor) = self.local_noon_utc() else {
            // The civil date was skipped by a timezone transition; no
            // instant occurs on it.
            return Ok(None);
        };

        let window = self.window_at(anchor)?;

        // The SPA works in whole UTC days. Far from the prime meridian the
        // returned window can land on a neighboring civil date; realign once.
        if let Some((rise, _)) = window {
            let local_date = rise.date_naive();
            if local_date != self.date {
                let shift = self.date.signed_duration_since(local_date);
                tracing::trace!(
                    "realigning solar window for {} by {} day(s)",
                    self.geo.name(),
                    shift.num_days()
                );
                return self.window_at(anchor + shift);
            }
        }

        Ok(window)
    }

    fn window_at(&self, anchor: DateTime<Utc>) -> ZmanimResult<Option<(DateTime<Tz>, DateTime<Tz>)>> {
        let timezone = self.geo.timezone();
        match spa::calc_sunrise_and_set(anchor, self.geo.latitude(), self.geo.longitude()) {
            Ok(SunriseAndSet::Daylight(rise, set)) => Ok(Some((
                rise.with_timezone(&timezone),
                set.with_timezone(&timezone),
            ))),
            Ok(SunriseAndSet::PolarNight | SunriseAndSet::PolarDay) => Ok(None),
            Err(e) => Err(ZmanimError::SolarComputation {
                message: format!("{e:?}"),
            }),
        }
    }

    fn local_noon_utc(&self) -> Option<DateTime<Utc>> {
        let noon = self.date.and_hms_opt(12, 0, 0)?;
        self.geo
            .timezone()
            .from_local_datetime(&noon)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// An instant `hours` twelfths of the way through the `start`-`end` day.
fn prorate(start: DateTime<Tz>, end: DateTime<Tz>, hours: f64) -> DateTime<Tz> {
    let span_ms = (end - start).num_milliseconds() as f64;
    start + Duration::milliseconds((span_ms * hours / 12.0).round() as i64)
}
