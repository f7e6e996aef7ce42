//! # ethio-holidays
//!
//! Ethiopian holiday calculation: the Bahire Hasab reckoning of Orthodox
//! movable feasts, Muslim holidays mapped from the Hijri calendar with
//! configurable corrections, fixed national days, and a business-day calendar
//! built from them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `EthiopianHolidayCalendar` and `HolidaySelection`.
pub mod calendar;

/// `Holiday`, `HolidayType`, and `HolidayOccurrence`.
pub mod holiday;

/// Muslim holiday calculator.
pub mod muslim;

/// Remote-configuration day offsets for Muslim holidays.
pub mod offsets;

/// Orthodox holiday calculator and the Bahire Hasab primitives.
pub mod orthodox;

/// National holiday calculator.
pub mod public;

/// Holiday display text.
pub mod resources;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{EthiopianHolidayCalendar, HolidaySelection};
pub use holiday::{Holiday, HolidayOccurrence, HolidayType};
pub use muslim::{MuslimHolidayCalculator, DEFAULT_VERIFICATION_WINDOW};
pub use offsets::{ConfigHolidayOffset, ConfigOffsetSource, NoOffsets, OffsetTable};
pub use orthodox::{MetqiRule, OrthodoxHolidayCalculator};
pub use public::PublicHolidayCalculator;
pub use resources::{DefaultResources, ResourceProvider};
