//! # Zmanim Core
//!
//! Halachic prayer time ("zmanim") calculations for a named location and
//! civil date.
//!
//! ## Features
//! - Sunrise/sunset from the NREL Solar Position Algorithm (`spa` crate)
//! - Fixed-offset dawn and nightfall (72 minutes)
//! - Temporal-hour proration for the GR"A and MG"A day definitions
//! - Candle lighting with a configurable offset before sunset
//!
//! Every query returns an optional timestamp: `None` means the instant does
//! not occur on the requested date (polar day or night), which is not an
//! error.
//!
//! ## Modules
//! - `error`: Calculation-boundary error types
//! - `geo`: Named geographic location with its IANA timezone
//! - `calendar`: The per-date zmanim calculator

pub mod calendar;
pub mod error;
pub mod geo;

pub use calendar::ZmanimCalendar;
pub use error::{ZmanimError, ZmanimResult};
pub use geo::GeoLocation;
