//! # ethiocal
//!
//! Ethiopian calendar arithmetic and Ethiopian holiday calculation.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this crate
//! rather than the individual `ethio-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! ethiocal = "0.1"
//! ```
//!
//! ```rust
//! use ethiocal::holidays::EthiopianHolidayCalendar;
//! use ethiocal::time::EthiopicDate;
//!
//! let fasika = EthiopicDate::of(2017, 8, 12).unwrap();
//! assert_eq!(fasika.to_string(), "12 Miyazya 2017");
//!
//! let calendar = EthiopianHolidayCalendar::default();
//! let on_the_day = calendar.holidays_on(fasika).unwrap();
//! assert!(on_the_day.iter().any(|h| h.id == "orthodox_fasika_2017"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and primitive aliases.
pub use ethio_core as core;

/// Ethiopic dates, fields, units, the Hijri primitive, and business-day
/// calendars.
pub use ethio_time as time;

/// Holiday calculators and the Ethiopian holiday calendar.
pub use ethio_holidays as holidays;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use ethio_core::{Error, Result};
pub use ethio_holidays::{EthiopianHolidayCalendar, Holiday, HolidayType};
pub use ethio_time::{Calendar, EthiopicDate};
