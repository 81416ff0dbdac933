use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use zmanim_core::{GeoLocation, ZmanimCalendar};

use crate::core::error::{ZmanimServerError, ZmanimServerResult};
use crate::core::models::{
    DailyTimes, MinchaTimes, ShabbatTimes, ShabbatTimesRequest, ShemaTimes, SunriseSunsetTimes,
    TefilaTimes, ZmanimRequest,
};
use crate::core::utils::DATE_INPUT_FORMAT;

/// Builds one calculator per request and runs the per-tool query sets.
///
/// The evaluation clock is injectable so that "today" resolution stays
/// deterministic under test.
#[derive(Clone)]
pub struct ZmanimProvider {
    now: fn() -> DateTime<Utc>,
}

impl ZmanimProvider {
    pub fn new() -> Self {
        Self { now: Utc::now }
    }

    #[cfg(test)]
    pub(crate) fn with_clock(now: fn() -> DateTime<Utc>) -> Self {
        Self { now }
    }

    pub fn sunrise_sunset(&self, req: &ZmanimRequest) -> ZmanimServerResult<SunriseSunsetTimes> {
        let calendar = self.calendar(req)?;
        Ok(SunriseSunsetTimes {
            location: req.location.clone(),
            date: calendar.date(),
            timezone: req.time_zone.clone(),
            sunrise: calendar.sunrise()?,
            sunset: calendar.sunset()?,
        })
    }

    pub fn shema_times(&self, req: &ZmanimRequest) -> ZmanimServerResult<ShemaTimes> {
        let calendar = self.calendar(req)?;
        Ok(ShemaTimes {
            location: req.location.clone(),
            date: calendar.date(),
            timezone: req.time_zone.clone(),
            gra: calendar.sof_zman_shma_gra()?,
            mga: calendar.sof_zman_shma_mga()?,
        })
    }

    pub fn tefila_times(&self, req: &ZmanimRequest) -> ZmanimServerResult<TefilaTimes> {
        let calendar = self.calendar(req)?;
        Ok(TefilaTimes {
            location: req.location.clone(),
            date: calendar.date(),
            timezone: req.time_zone.clone(),
            gra: calendar.sof_zman_tfila_gra()?,
            mga: calendar.sof_zman_tfila_mga()?,
        })
    }

    pub fn mincha_times(&self, req: &ZmanimRequest) -> ZmanimServerResult<MinchaTimes> {
        let calendar = self.calendar(req)?;
        Ok(MinchaTimes {
            location: req.location.clone(),
            date: calendar.date(),
            timezone: req.time_zone.clone(),
            chatzos: calendar.chatzos()?,
            mincha_gedola: calendar.mincha_gedola()?,
            mincha_ketana: calendar.mincha_ketana()?,
            plag_hamincha: calendar.plag_hamincha()?,
        })
    }

    pub fn shabbat_times(&self, req: &ShabbatTimesRequest) -> ZmanimServerResult<ShabbatTimes> {
        let geo = GeoLocation::new(&req.location, req.latitude, req.longitude, &req.time_zone)?;
        let date = self.resolve_date(req.date.as_deref(), geo.timezone())?;
        let calendar = ZmanimCalendar::new(geo, date)
            .with_candle_lighting_offset(i64::from(req.candle_lighting_offset));

        Ok(ShabbatTimes {
            location: req.location.clone(),
            date: calendar.date(),
            timezone: req.time_zone.clone(),
            candle_lighting_offset: req.candle_lighting_offset,
            candle_lighting: calendar.candle_lighting()?,
            sunset: calendar.sunset()?,
            tzais_72: calendar.tzais_72()?,
        })
    }

    pub fn daily_times(&self, req: &ZmanimRequest) -> ZmanimServerResult<DailyTimes> {
        let calendar = self.calendar(req)?;
        Ok(DailyTimes {
            location: req.location.clone(),
            date: calendar.date(),
            timezone: req.time_zone.clone(),
            alos_72: calendar.alos_72()?,
            sunrise: calendar.sunrise()?,
            shema_gra: calendar.sof_zman_shma_gra()?,
            shema_mga: calendar.sof_zman_shma_mga()?,
            tefila_gra: calendar.sof_zman_tfila_gra()?,
            tefila_mga: calendar.sof_zman_tfila_mga()?,
            chatzos: calendar.chatzos()?,
            mincha_gedola: calendar.mincha_gedola()?,
            mincha_ketana: calendar.mincha_ketana()?,
            plag_hamincha: calendar.plag_hamincha()?,
            sunset: calendar.sunset()?,
            tzais_72: calendar.tzais_72()?,
        })
    }

    /// One calculator per request, never reused or cached.
    fn calendar(&self, req: &ZmanimRequest) -> ZmanimServerResult<ZmanimCalendar> {
        let geo = GeoLocation::new(&req.location, req.latitude, req.longitude, &req.time_zone)?;
        let date = self.resolve_date(req.date.as_deref(), geo.timezone())?;
        Ok(ZmanimCalendar::new(geo, date))
    }

    /// The explicit request date, or today in the requested timezone.
    fn resolve_date(&self, date: Option<&str>, timezone: Tz) -> ZmanimServerResult<NaiveDate> {
        match date {
            Some(s) => NaiveDate::parse_from_str(s, DATE_INPUT_FORMAT).map_err(|_| {
                ZmanimServerError::InvalidDate {
                    date: s.to_string(),
                }
            }),
            None => Ok((self.now)().with_timezone(&timezone).date_naive()),
        }
    }
}

impl Default for ZmanimProvider {
    fn default() -> Self {
        Self::new()
    }
}
