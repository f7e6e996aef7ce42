//! # ethio-time
//!
//! Ethiopic date type, calendrical arithmetic, the Hijri host primitive, and
//! business-day calendars over Ethiopic dates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait and the weekends-only calendar.
pub mod calendar;

/// `EthiopicDate` type.
pub mod date;

/// `EthiopicEra` — before / from the Incarnation.
pub mod era;

/// `EthiopicField` and `ValueRange`.
pub mod field;

/// Hijri calendar primitive and the tabular adapter.
pub mod hijri;

/// `EthiopicMonth` — Meskerem through Pagume.
pub mod month;

/// `EthiopicPeriod` — years, months, and days between two dates.
pub mod period;

/// `TimeUnit` — days through eras.
pub mod time_unit;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, WeekendsOnly};
pub use date::{is_leap_year, EthiopicDate, MAX_YEAR, MIN_YEAR};
pub use era::EthiopicEra;
pub use field::{EthiopicField, ValueRange};
pub use hijri::{HijriCalendar, HijriDate, HijriEpoch, TabularHijri};
pub use month::EthiopicMonth;
pub use period::EthiopicPeriod;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
