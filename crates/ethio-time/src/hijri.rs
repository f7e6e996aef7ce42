//! Hijri (Islamic) calendar primitive.
//!
//! The holiday calculators treat Hijri↔day-count conversion as a host
//! capability behind the [`HijriCalendar`] trait.  [`TabularHijri`] is the
//! default adapter: the arithmetical 30-year-cycle calendar from
//! `calendrical_calculations`, which needs no observation data.  A platform
//! with Umm al-Qura tables or sighting reports plugs in its own adapter.

use crate::date::EthiopicDate;
use calendrical_calculations::islamic;
use calendrical_calculations::rata_die::RataDie;
use ethio_core::errors::{Error, Result};
use ethio_core::EpochDay;

/// Rata Die number (days from 0001-01-01 proleptic Gregorian, day 1) of
/// 1970-01-01.
const RD_AT_UNIX_EPOCH: i64 = 719_163;

/// A date in a Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HijriDate {
    /// Hijri year (AH).
    pub year: i32,
    /// Month, 1 (Muharram) to 12 (Dhu al-Hijjah).
    pub month: u8,
    /// Day of month, 1–30.
    pub day: u8,
}

impl HijriDate {
    /// Create a Hijri date without validation.
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl std::fmt::Display for HijriDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{} AH", self.day, self.month, self.year)
    }
}

/// A Hijri calendar supplied by the host platform.
pub trait HijriCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Epoch day of a Hijri date.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if the date does not exist.
    fn to_epoch_day(&self, year: i32, month: u8, day: u8) -> Result<EpochDay>;

    /// The Hijri date of an epoch day.
    fn from_epoch_day(&self, epoch_day: EpochDay) -> HijriDate;

    /// The Hijri date corresponding to an Ethiopic date.
    fn hijri_of(&self, date: EthiopicDate) -> HijriDate {
        self.from_epoch_day(date.to_epoch_day())
    }

    /// The Ethiopic date corresponding to a Hijri date.
    fn to_ethiopic(&self, date: HijriDate) -> Result<EthiopicDate> {
        EthiopicDate::of_epoch_day(self.to_epoch_day(date.year, date.month, date.day)?)
    }
}

/// Day on which the tabular calendar starts counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HijriEpoch {
    /// Friday 16 July 622 (Julian), the civil reckoning.
    #[default]
    Friday,
    /// Thursday 15 July 622 (Julian), the astronomical reckoning.
    Thursday,
}

/// The arithmetical Hijri calendar with 11 leap years in every 30.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabularHijri {
    epoch: HijriEpoch,
}

impl TabularHijri {
    /// Create a tabular calendar counting from `epoch`.
    pub fn new(epoch: HijriEpoch) -> Self {
        Self { epoch }
    }

    /// The epoch this calendar counts from.
    pub fn epoch(&self) -> HijriEpoch {
        self.epoch
    }

    fn epoch_rd(&self) -> RataDie {
        match self.epoch {
            HijriEpoch::Friday => islamic::ISLAMIC_EPOCH_FRIDAY,
            HijriEpoch::Thursday => islamic::ISLAMIC_EPOCH_THURSDAY,
        }
    }
}

impl HijriCalendar for TabularHijri {
    fn name(&self) -> &str {
        match self.epoch {
            HijriEpoch::Friday => "Tabular Hijri (civil)",
            HijriEpoch::Thursday => "Tabular Hijri (astronomical)",
        }
    }

    fn to_epoch_day(&self, year: i32, month: u8, day: u8) -> Result<EpochDay> {
        if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
            return Err(Error::InvalidDate(format!(
                "Hijri date {day}/{month}/{year} out of range"
            )));
        }
        let rd = islamic::fixed_from_tabular_islamic(year, month, day, self.epoch_rd());
        // Day 30 of a 29-day month lands on the next month's first day.
        if islamic::tabular_islamic_from_fixed(rd, self.epoch_rd()) != (year, month, day) {
            return Err(Error::InvalidDate(format!(
                "Hijri date {day}/{month}/{year} does not exist"
            )));
        }
        Ok(rd.to_i64_date() - RD_AT_UNIX_EPOCH)
    }

    fn from_epoch_day(&self, epoch_day: EpochDay) -> HijriDate {
        let (year, month, day) = islamic::tabular_islamic_from_fixed(
            RataDie::new(epoch_day + RD_AT_UNIX_EPOCH),
            self.epoch_rd(),
        );
        HijriDate { year, month, day }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> EthiopicDate {
        EthiopicDate::of(y, m, d).unwrap()
    }

    #[test]
    fn civil_new_year_1446() {
        let cal = TabularHijri::default();
        assert_eq!(cal.to_epoch_day(1446, 1, 1).unwrap(), 19_912);
        assert_eq!(
            cal.to_ethiopic(HijriDate::new(1446, 1, 1)).unwrap(),
            date(2016, 11, 1)
        );
    }

    #[test]
    fn epoch_day_zero() {
        let cal = TabularHijri::default();
        assert_eq!(cal.from_epoch_day(0), HijriDate::new(1389, 10, 22));
    }

    #[test]
    fn thursday_epoch_is_one_day_earlier() {
        let civil = TabularHijri::new(HijriEpoch::Friday);
        let astro = TabularHijri::new(HijriEpoch::Thursday);
        assert_eq!(
            astro.to_epoch_day(1446, 10, 1).unwrap(),
            civil.to_epoch_day(1446, 10, 1).unwrap() - 1
        );
    }

    #[test]
    fn rejects_missing_days() {
        let cal = TabularHijri::default();
        // Muharram has 30 days, Safar 29 in the tabular scheme.
        assert!(cal.to_epoch_day(1446, 1, 30).is_ok());
        assert!(cal.to_epoch_day(1446, 2, 30).is_err());
        assert!(cal.to_epoch_day(1446, 13, 1).is_err());
    }

    #[test]
    fn round_trip_through_ethiopic() {
        let cal = TabularHijri::default();
        let d = date(2017, 7, 22);
        let h = cal.hijri_of(d);
        assert_eq!(h, HijriDate::new(1446, 10, 1));
        assert_eq!(cal.to_ethiopic(h).unwrap(), d);
    }
}
