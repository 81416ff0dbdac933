//! Markdown and JSON renderers for the per-tool reports.
//!
//! Both renderers are pure: absent instants become the literal `N/A` in
//! markdown and `null` in JSON, never an error.

use serde::Serialize;

use crate::core::models::{
    DailyTimes, MinchaTimes, ResponseFormat, ShabbatTimes, ShemaTimes, SunriseSunsetTimes,
    TefilaTimes,
};
use crate::core::utils::{format_iso, format_long_date, format_time, format_time_with_date};

impl SunriseSunsetTimes {
    pub fn render(&self, format: ResponseFormat) -> String {
        match format {
            ResponseFormat::Markdown => self.markdown(),
            ResponseFormat::Json => self.json(),
        }
    }

    fn markdown(&self) -> String {
        format!(
            r#"# Sunrise and Sunset Times

**Location:** {}
**Date:** {}
**Timezone:** {}

- **Sunrise:** {}
- **Sunset:** {}
"#,
            self.location,
            format_long_date(self.date),
            self.timezone,
            format_time(self.sunrise.as_ref()),
            format_time(self.sunset.as_ref()),
        )
    }

    fn json(&self) -> String {
        #[derive(Serialize)]
        struct Payload<'a> {
            location: &'a str,
            date: String,
            timezone: &'a str,
            sunrise: String,
            sunset: String,
            sunrise_iso: Option<String>,
            sunset_iso: Option<String>,
        }

        serde_json::to_string_pretty(&Payload {
            location: &self.location,
            date: self.date.to_string(),
            timezone: &self.timezone,
            sunrise: format_time_with_date(self.sunrise.as_ref()),
            sunset: format_time_with_date(self.sunset.as_ref()),
            sunrise_iso: format_iso(self.sunrise.as_ref()),
            sunset_iso: format_iso(self.sunset.as_ref()),
        })
        .unwrap()
    }
}

impl ShemaTimes {
    pub fn render(&self, format: ResponseFormat) -> String {
        match format {
            ResponseFormat::Markdown => self.markdown(),
            ResponseFormat::Json => self.json(),
        }
    }

    fn markdown(&self) -> String {
        format!(
            r#"# Latest Times for Shema

**Location:** {}
**Date:** {}
**Timezone:** {}

## Opinions:

- **GR"A (Vilna Gaon):** {}
- **MG"A (Magen Avraham):** {}

*Note: The MG"A time is typically earlier and is the more stringent opinion.*
"#,
            self.location,
            format_long_date(self.date),
            self.timezone,
            format_time(self.gra.as_ref()),
            format_time(self.mga.as_ref()),
        )
    }

    fn json(&self) -> String {
        #[derive(Serialize)]
        struct Payload<'a> {
            location: &'a str,
            date: String,
            timezone: &'a str,
            sof_zman_shema_gra: String,
            sof_zman_shema_mga: String,
            sof_zman_shema_gra_iso: Option<String>,
            sof_zman_shema_mga_iso: Option<String>,
        }

        serde_json::to_string_pretty(&Payload {
            location: &self.location,
            date: self.date.to_string(),
            timezone: &self.timezone,
            sof_zman_shema_gra: format_time_with_date(self.gra.as_ref()),
            sof_zman_shema_mga: format_time_with_date(self.mga.as_ref()),
            sof_zman_shema_gra_iso: format_iso(self.gra.as_ref()),
            sof_zman_shema_mga_iso: format_iso(self.mga.as_ref()),
        })
        .unwrap()
    }
}

impl TefilaTimes {
    pub fn render(&self, format: ResponseFormat) -> String {
        match format {
            ResponseFormat::Markdown => self.markdown(),
            ResponseFormat::Json => self.json(),
        }
    }

    fn markdown(&self) -> String {
        format!(
            r#"# Latest Times for Morning Prayer (Tefila)

**Location:** {}
**Date:** {}
**Timezone:** {}

## Opinions:

- **GR"A (Vilna Gaon):** {}
- **MG"A (Magen Avraham):** {}

*Note: The MG"A time is typically earlier.*
"#,
            self.location,
            format_long_date(self.date),
            self.timezone,
            format_time(self.gra.as_ref()),
            format_time(self.mga.as_ref()),
        )
    }

    fn json(&self) -> String {
        #[derive(Serialize)]
        struct Payload<'a> {
            location: &'a str,
            date: String,
            timezone: &'a str,
            sof_zman_tefila_gra: String,
            sof_zman_tefila_mga: String,
            sof_zman_tefila_gra_iso: Option<String>,
            sof_zman_tefila_mga_iso: Option<String>,
        }

        serde_json::to_string_pretty(&Payload {
            location: &self.location,
            date: self.date.to_string(),
            timezone: &self.timezone,
            sof_zman_tefila_gra: format_time_with_date(self.gra.as_ref()),
            sof_zman_tefila_mga: format_time_with_date(self.mga.as_ref()),
            sof_zman_tefila_gra_iso: format_iso(self.gra.as_ref()),
            sof_zman_tefila_mga_iso: format_iso(self.mga.as_ref()),
        })
        .unwrap()
    }
}

impl MinchaTimes {
    pub fn render(&self, format: ResponseFormat) -> String {
        match format {
            ResponseFormat::Markdown => self.markdown(),
            ResponseFormat::Json => self.json(),
        }
    }

    fn markdown(&self) -> String {
        format!(
            r#"# Mincha (Afternoon Prayer) Times

**Location:** {}
**Date:** {}
**Timezone:** {}

## Times:

- **Chatzos (Midday):** {}
- **Mincha Gedola (Earliest):** {}
- **Mincha Ketana (Preferred):** {}
- **Plag HaMincha:** {}

*Note: Mincha can be prayed from Mincha Gedola until sunset, with Mincha Ketana being the preferred earliest time.*
"#,
            self.location,
            format_long_date(self.date),
            self.timezone,
            format_time(self.chatzos.as_ref()),
            format_time(self.mincha_gedola.as_ref()),
            format_time(self.mincha_ketana.as_ref()),
            format_time(self.plag_hamincha.as_ref()),
        )
    }

    fn json(&self) -> String {
        #[derive(Serialize)]
        struct Payload<'a> {
            location: &'a str,
            date: String,
            timezone: &'a str,
            chatzos: String,
            mincha_gedola: String,
            mincha_ketana: String,
            plag_hamincha: String,
            chatzos_iso: Option<String>,
            mincha_gedola_iso: Option<String>,
            mincha_ketana_iso: Option<String>,
            plag_hamincha_iso: Option<String>,
        }

        serde_json::to_string_pretty(&Payload {
            location: &self.location,
            date: self.date.to_string(),
            timezone: &self.timezone,
            chatzos: format_time_with_date(self.chatzos.as_ref()),
            mincha_gedola: format_time_with_date(self.mincha_gedola.as_ref()),
            mincha_ketana: format_time_with_date(self.mincha_ketana.as_ref()),
            plag_hamincha: format_time_with_date(self.plag_hamincha.as_ref()),
            chatzos_iso: format_iso(self.chatzos.as_ref()),
            mincha_gedola_iso: format_iso(self.mincha_gedola.as_ref()),
            mincha_ketana_iso: format_iso(self.mincha_ketana.as_ref()),
            plag_hamincha_iso: format_iso(self.plag_hamincha.as_ref()),
        })
        .unwrap()
    }
}

impl ShabbatTimes {
    pub fn render(&self, format: ResponseFormat) -> String {
        match format {
            ResponseFormat::Markdown => self.markdown(),
            ResponseFormat::Json => self.json(),
        }
    }

    fn markdown(&self) -> String {
        format!(
            r#"# Shabbat Times

**Location:** {}
**Date:** {}
**Timezone:** {}

## Friday Evening:

- **Candle Lighting:** {} ({} minutes before sunset)
- **Sunset (Shabbat Begins):** {}

## Saturday Evening:

- **Havdalah (Tzeis HaKochavim):** {} (72 minutes after sunset)
- **Shabbat Ends:** {}

*Note: Candle lighting customs vary by community. Jerusalem uses 40 minutes before sunset.*
"#,
            self.location,
            format_long_date(self.date),
            self.timezone,
            format_time(self.candle_lighting.as_ref()),
            self.candle_lighting_offset,
            format_time(self.sunset.as_ref()),
            format_time(self.tzais_72.as_ref()),
            format_time(self.tzais_72.as_ref()),
        )
    }

    fn json(&self) -> String {
        #[derive(Serialize)]
        struct Payload<'a> {
            location: &'a str,
            date: String,
            timezone: &'a str,
            candle_lighting_offset_minutes: u32,
            candle_lighting: String,
            sunset: String,
            havdalah_tzeis_72: String,
            candle_lighting_iso: Option<String>,
            sunset_iso: Option<String>,
            havdalah_tzeis_72_iso: Option<String>,
        }

        serde_json::to_string_pretty(&Payload {
            location: &self.location,
            date: self.date.to_string(),
            timezone: &self.timezone,
            candle_lighting_offset_minutes: self.candle_lighting_offset,
            candle_lighting: format_time_with_date(self.candle_lighting.as_ref()),
            sunset: format_time_with_date(self.sunset.as_ref()),
            havdalah_tzeis_72: format_time_with_date(self.tzais_72.as_ref()),
            candle_lighting_iso: format_iso(self.candle_lighting.as_ref()),
            sunset_iso: format_iso(self.sunset.as_ref()),
            havdalah_tzeis_72_iso: format_iso(self.tzais_72.as_ref()),
        })
        .unwrap()
    }
}

impl DailyTimes {
    pub fn render(&self, format: ResponseFormat) -> String {
        match format {
            ResponseFormat::Markdown => self.markdown(),
            ResponseFormat::Json => self.json(),
        }
    }

    fn markdown(&self) -> String {
        format!(
            r#"# Daily Zmanim

**Location:** {}
**Date:** {}
**Timezone:** {}

## Morning Times:

- **Alos HaShachar (Dawn):** {} (72 minutes before sunrise)
- **Sunrise:** {}
- **Latest Shema (GR"A):** {}
- **Latest Shema (MG"A):** {}
- **Latest Tefila (GR"A):** {}
- **Latest Tefila (MG"A):** {}

## Afternoon Times:

- **Chatzos (Midday):** {}
- **Mincha Gedola:** {}
- **Mincha Ketana:** {}
- **Plag HaMincha:** {}

## Evening Times:

- **Sunset:** {}
- **Tzeis HaKochavim (Nightfall):** {} (72 minutes after sunset)
"#,
            self.location,
            format_long_date(self.date),
            self.timezone,
            format_time(self.alos_72.as_ref()),
            format_time(self.sunrise.as_ref()),
            format_time(self.shema_gra.as_ref()),
            format_time(self.shema_mga.as_ref()),
            format_time(self.tefila_gra.as_ref()),
            format_time(self.tefila_mga.as_ref()),
            format_time(self.chatzos.as_ref()),
            format_time(self.mincha_gedola.as_ref()),
            format_time(self.mincha_ketana.as_ref()),
            format_time(self.plag_hamincha.as_ref()),
            format_time(self.sunset.as_ref()),
            format_time(self.tzais_72.as_ref()),
        )
    }

    fn json(&self) -> String {
        #[derive(Serialize)]
        struct Times {
            alos_hashachar_72: String,
            sunrise: String,
            sof_zman_shema_gra: String,
            sof_zman_shema_mga: String,
            sof_zman_tefila_gra: String,
            sof_zman_tefila_mga: String,
            chatzos: String,
            mincha_gedola: String,
            mincha_ketana: String,
            plag_hamincha: String,
            sunset: String,
            tzeis_hakochavim_72: String,
        }

        #[derive(Serialize)]
        struct TimesIso {
            alos_hashachar_72: Option<String>,
            sunrise: Option<String>,
            sof_zman_shema_gra: Option<String>,
            sof_zman_shema_mga: Option<String>,
            sof_zman_tefila_gra: Option<String>,
            sof_zman_tefila_mga: Option<String>,
            chatzos: Option<String>,
            mincha_gedola: Option<String>,
            mincha_ketana: Option<String>,
            plag_hamincha: Option<String>,
            sunset: Option<String>,
            tzeis_hakochavim_72: Option<String>,
        }

        #[derive(Serialize)]
        struct Payload<'a> {
            location: &'a str,
            date: String,
            timezone: &'a str,
            times: Times,
            times_iso: TimesIso,
        }

        serde_json::to_string_pretty(&Payload {
            location: &self.location,
            date: self.date.to_string(),
            timezone: &self.timezone,
            times: Times {
                alos_hashachar_72: format_time_with_date(self.alos_72.as_ref()),
                sunrise: format_time_with_date(self.sunrise.as_ref()),
                sof_zman_shema_gra: format_time_with_date(self.shema_gra.as_ref()),
                sof_zman_shema_mga: format_time_with_date(self.shema_mga.as_ref()),
                sof_zman_tefila_gra: format_time_with_date(self.tefila_gra.as_ref()),
                sof_zman_tefila_mga: format_time_with_date(self.tefila_mga.as_ref()),
                chatzos: format_time_with_date(self.chatzos.as_ref()),
                mincha_gedola: format_time_with_date(self.mincha_gedola.as_ref()),
                mincha_ketana: format_time_with_date(self.mincha_ketana.as_ref()),
                plag_hamincha: format_time_with_date(self.plag_hamincha.as_ref()),
                sunset: format_time_with_date(self.sunset.as_ref()),
                tzeis_hakochavim_72: format_time_with_date(self.tzais_72.as_ref()),
            },
            times_iso: TimesIso {
                alos_hashachar_72: format_iso(self.alos_72.as_ref()),
                sunrise: format_iso(self.sunrise.as_ref()),
                sof_zman_shema_gra: format_iso(self.shema_gra.as_ref()),
                sof_zman_shema_mga: format_iso(self.shema_mga.as_ref()),
                sof_zman_tefila_gra: format_iso(self.tefila_gra.as_ref()),
                sof_zman_tefila_mga: format_iso(self.tefila_mga.as_ref()),
                chatzos: format_iso(self.chatzos.as_ref()),
                mincha_gedola: format_iso(self.mincha_gedola.as_ref()),
                mincha_ketana: format_iso(self.mincha_ketana.as_ref()),
                plag_hamincha: format_iso(self.plag_hamincha.as_ref()),
                sunset: format_iso(self.sunset.as_ref()),
                tzeis_hakochavim_72: format_iso(self.tzais_72.as_ref()),
            },
        })
        .unwrap()
    }
}
