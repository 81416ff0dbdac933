use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use rmcp::schemars;
use serde::{Deserialize, Deserializer, Serialize};

/// Helper function to deserialize and trim strings
fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s.trim().to_string())
}

/// Helper function to deserialize and trim optional strings
fn deserialize_trimmed_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = Option::<String>::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_string()))
}

fn default_candle_lighting_offset() -> u32 {
    18
}

/// Output format for tool responses
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Human-readable markdown document
    #[default]
    Markdown,
    /// Machine-readable JSON document
    Json,
}

/// Location and date parameters shared by the zmanim query tools
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct ZmanimRequest {
    /// Name of the location (e.g., 'Jerusalem', 'New York, NY', 'London')
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub location: String,
    /// Latitude coordinate in decimal degrees (e.g., 40.7128 for New York)
    pub latitude: f64,
    /// Longitude coordinate in decimal degrees (e.g., -74.0060 for New York)
    pub longitude: f64,
    /// IANA timezone identifier (e.g., 'America/New_York', 'Asia/Jerusalem')
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub time_zone: String,
    /// Optional date in YYYY-MM-DD format (defaults to today in the requested timezone)
    #[serde(default, deserialize_with = "deserialize_trimmed_option")]
    pub date: Option<String>,
    /// Output format: 'markdown' for human-readable or 'json' for machine-readable
    #[serde(default)]
    pub response_format: ResponseFormat,
}

/// Parameters for the Shabbat times tool
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct ShabbatTimesRequest {
    /// Name of the location (e.g., 'Jerusalem', 'New York, NY', 'London')
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub location: String,
    /// Latitude coordinate in decimal degrees (e.g., 40.7128 for New York)
    pub latitude: f64,
    /// Longitude coordinate in decimal degrees (e.g., -74.0060 for New York)
    pub longitude: f64,
    /// IANA timezone identifier (e.g., 'America/New_York', 'Asia/Jerusalem')
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub time_zone: String,
    /// Optional date in YYYY-MM-DD format (defaults to today in the requested timezone)
    #[serde(default, deserialize_with = "deserialize_trimmed_option")]
    pub date: Option<String>,
    /// Output format: 'markdown' for human-readable or 'json' for machine-readable
    #[serde(default)]
    pub response_format: ResponseFormat,
    /// Minutes before sunset to light candles (typically 18-40 depending on custom)
    #[serde(default = "default_candle_lighting_offset")]
    pub candle_lighting_offset: u32,
}

/// Sunrise and sunset for one location and date
#[derive(Debug, Clone)]
pub struct SunriseSunsetTimes {
    pub location: String,
    pub date: NaiveDate,
    pub timezone: String,
    pub sunrise: Option<DateTime<Tz>>,
    pub sunset: Option<DateTime<Tz>>,
}

/// Latest Shema per the GR"A and MG"A
#[derive(Debug, Clone)]
pub struct ShemaTimes {
    pub location: String,
    pub date: NaiveDate,
    pub timezone: String,
    pub gra: Option<DateTime<Tz>>,
    pub mga: Option<DateTime<Tz>>,
}

/// Latest morning Tefila per the GR"A and MG"A
#[derive(Debug, Clone)]
pub struct TefilaTimes {
    pub location: String,
    pub date: NaiveDate,
    pub timezone: String,
    pub gra: Option<DateTime<Tz>>,
    pub mga: Option<DateTime<Tz>>,
}

/// The Mincha window: Chatzos through Plag HaMincha
#[derive(Debug, Clone)]
pub struct MinchaTimes {
    pub location: String,
    pub date: NaiveDate,
    pub timezone: String,
    pub chatzos: Option<DateTime<Tz>>,
    pub mincha_gedola: Option<DateTime<Tz>>,
    pub mincha_ketana: Option<DateTime<Tz>>,
    pub plag_hamincha: Option<DateTime<Tz>>,
}

/// Shabbat candle lighting and Havdalah
#[derive(Debug, Clone)]
pub struct ShabbatTimes {
    pub location: String,
    pub date: NaiveDate,
    pub timezone: String,
    pub candle_lighting_offset: u32,
    pub candle_lighting: Option<DateTime<Tz>>,
    pub sunset: Option<DateTime<Tz>>,
    pub tzais_72: Option<DateTime<Tz>>,
}

/// The full daily digest of zmanim
#[derive(Debug, Clone)]
pub struct DailyTimes {
    pub location: String,
    pub date: NaiveDate,
    pub timezone: String,
    pub alos_72: Option<DateTime<Tz>>,
    pub sunrise: Option<DateTime<Tz>>,
    pub shema_gra: Option<DateTime<Tz>>,
    pub shema_mga: Option<DateTime<Tz>>,
    pub tefila_gra: Option<DateTime<Tz>>,
    pub tefila_mga: Option<DateTime<Tz>>,
    pub chatzos: Option<DateTime<Tz>>,
    pub mincha_gedola: Option<DateTime<Tz>>,
    pub mincha_ketana: Option<DateTime<Tz>>,
    pub plag_hamincha: Option<DateTime<Tz>>,
    pub sunset: Option<DateTime<Tz>>,
    pub tzais_72: Option<DateTime<Tz>>,
}
