//! `EthiopicField` — the temporal fields an [`EthiopicDate`] can be queried
//! and adjusted by.
//!
//! [`EthiopicDate`]: crate::date::EthiopicDate

use crate::date::{MAX_YEAR, MIN_YEAR};
use ethio_core::errors::{Error, Result};

/// A field of an Ethiopic date.
///
/// The time-of-day fields exist so that callers holding a generic field can
/// be told precisely that the date type does not model them; every accessor
/// rejects them with [`Error::UnsupportedField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EthiopicField {
    /// Day of week, 1 (Monday) to 7 (Sunday).
    DayOfWeek,
    /// Day of week counted from the first day of the month, 1 to 7.
    AlignedDayOfWeekInMonth,
    /// Day of week counted from the first day of the year, 1 to 7.
    AlignedDayOfWeekInYear,
    /// Day of month, 1 to 30 (1 to 5 or 6 in Pagume).
    DayOfMonth,
    /// Day of year, 1 to 365 or 366.
    DayOfYear,
    /// Days since 1970-01-01 (Gregorian).
    EpochDay,
    /// Week of month counted from the first day of the month, 1 to 5.
    AlignedWeekOfMonth,
    /// Week of year counted from the first day of the year, 1 to 53.
    AlignedWeekOfYear,
    /// Month of year, 1 (Meskerem) to 13 (Pagume).
    MonthOfYear,
    /// Months since year 0, `year * 13 + month - 1`.
    ProlepticMonth,
    /// Year within the era, always positive.
    YearOfEra,
    /// Proleptic year.
    Year,
    /// Era, 0 (before Incarnation) or 1 (Incarnation).
    Era,
    /// Hour of day (not supported).
    HourOfDay,
    /// Minute of hour (not supported).
    MinuteOfHour,
    /// Second of minute (not supported).
    SecondOfMinute,
}

impl EthiopicField {
    /// Return `true` if the field is date-based and supported.
    pub fn is_supported(&self) -> bool {
        !matches!(
            self,
            EthiopicField::HourOfDay | EthiopicField::MinuteOfHour | EthiopicField::SecondOfMinute
        )
    }

    /// The chronology-wide range of the field, independent of any particular
    /// date.
    pub fn range(&self) -> Result<ValueRange> {
        let min_year = i64::from(MIN_YEAR);
        let max_year = i64::from(MAX_YEAR);
        let r = match self {
            EthiopicField::DayOfWeek
            | EthiopicField::AlignedDayOfWeekInMonth
            | EthiopicField::AlignedDayOfWeekInYear => ValueRange::new(1, 7),
            EthiopicField::DayOfMonth => ValueRange::new(1, 30),
            EthiopicField::DayOfYear => ValueRange::new(1, 366),
            EthiopicField::EpochDay => ValueRange::new(
                crate::date::EthiopicDate::MIN.to_epoch_day(),
                crate::date::EthiopicDate::MAX.to_epoch_day(),
            ),
            EthiopicField::AlignedWeekOfMonth => ValueRange::new(1, 5),
            EthiopicField::AlignedWeekOfYear => ValueRange::new(1, 53),
            EthiopicField::MonthOfYear => ValueRange::new(1, 13),
            EthiopicField::ProlepticMonth => ValueRange::new(min_year * 13, max_year * 13 + 12),
            EthiopicField::YearOfEra => ValueRange::new(1, max_year.max(1 - min_year)),
            EthiopicField::Year => ValueRange::new(min_year, max_year),
            EthiopicField::Era => ValueRange::new(0, 1),
            _ => return Err(Error::UnsupportedField(self.to_string())),
        };
        Ok(r)
    }
}

impl std::fmt::Display for EthiopicField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EthiopicField::DayOfWeek => "DayOfWeek",
            EthiopicField::AlignedDayOfWeekInMonth => "AlignedDayOfWeekInMonth",
            EthiopicField::AlignedDayOfWeekInYear => "AlignedDayOfWeekInYear",
            EthiopicField::DayOfMonth => "DayOfMonth",
            EthiopicField::DayOfYear => "DayOfYear",
            EthiopicField::EpochDay => "EpochDay",
            EthiopicField::AlignedWeekOfMonth => "AlignedWeekOfMonth",
            EthiopicField::AlignedWeekOfYear => "AlignedWeekOfYear",
            EthiopicField::MonthOfYear => "MonthOfYear",
            EthiopicField::ProlepticMonth => "ProlepticMonth",
            EthiopicField::YearOfEra => "YearOfEra",
            EthiopicField::Year => "Year",
            EthiopicField::Era => "Era",
            EthiopicField::HourOfDay => "HourOfDay",
            EthiopicField::MinuteOfHour => "MinuteOfHour",
            EthiopicField::SecondOfMinute => "SecondOfMinute",
        };
        write!(f, "{s}")
    }
}

/// An inclusive range of legal values for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueRange {
    /// Smallest legal value.
    pub min: i64,
    /// Largest legal value.
    pub max: i64,
}

impl ValueRange {
    /// Create a range `[min, max]`.
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Return `true` if `value` lies within the range.
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Check that `value` is legal for `field`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] when `value` is out of range.
    pub fn check(&self, value: i64, field: EthiopicField) -> Result<i64> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(Error::InvalidArgument(format!(
                "{field} value {value} out of range [{}, {}]",
                self.min, self.max
            )))
        }
    }
}

impl std::fmt::Display for ValueRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_fields_rejected() {
        for field in [
            EthiopicField::HourOfDay,
            EthiopicField::MinuteOfHour,
            EthiopicField::SecondOfMinute,
        ] {
            assert!(!field.is_supported());
            assert!(matches!(field.range(), Err(Error::UnsupportedField(_))));
        }
    }

    #[test]
    fn chronology_ranges() {
        assert_eq!(
            EthiopicField::DayOfMonth.range().unwrap(),
            ValueRange::new(1, 30)
        );
        assert_eq!(
            EthiopicField::MonthOfYear.range().unwrap(),
            ValueRange::new(1, 13)
        );
        assert_eq!(
            EthiopicField::YearOfEra.range().unwrap(),
            ValueRange::new(1, 999_999)
        );
    }

    #[test]
    fn check_reports_bounds() {
        let r = ValueRange::new(1, 7);
        assert_eq!(r.check(7, EthiopicField::DayOfWeek).unwrap(), 7);
        let err = r.check(8, EthiopicField::DayOfWeek).unwrap_err();
        assert!(err.to_string().contains("DayOfWeek"));
    }
}
