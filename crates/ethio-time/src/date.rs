//! `EthiopicDate` type.
//!
//! A date is held as a proleptic `(year, month, day)` triple.  Conversion to
//! and from the host calendar goes through the *epoch day*, a signed count of
//! days with day 0 = 1970-01-01 (Gregorian).
//!
//! # Calendar rules
//! * Twelve 30-day months followed by Pagume, which has 5 days, or 6 when
//!   `year mod 4 == 3`.
//! * Year 1, Meskerem 1 is epoch day -716 367 (29 August 8 CE, Julian).
//! * The supported range is year -999 998 through 999 999.
//!
//! Strict construction ([`EthiopicDate::of`], [`EthiopicDate::of_year_day`])
//! rejects impossible dates.  Field mutation and month/year arithmetic clamp
//! an overflowing Pagume day down to the last valid day instead.

use crate::era::EthiopicEra;
use crate::field::{EthiopicField, ValueRange};
use crate::month::EthiopicMonth;
use crate::period::EthiopicPeriod;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use chrono::{Datelike, NaiveDate};
use ethio_core::errors::{Error, Result};
use ethio_core::{ensure_date, ensure_range, EpochDay, Year};

/// Smallest supported proleptic year.
pub const MIN_YEAR: Year = -999_998;

/// Largest supported proleptic year.
pub const MAX_YEAR: Year = 999_999;

/// Days between 0001-01-01 E.C. and 1970-01-01 (Gregorian).
const EPOCH_DAY_DIFFERENCE: i64 = 716_367;

/// Days in a four-year leap cycle.
const DAYS_PER_CYCLE: i64 = 1461;

/// Leap cycles added to a negative Ethiopic day count before decomposing it.
const CYCLE_SHIFT: i64 = 250_000;

/// Years spanned by `CYCLE_SHIFT` cycles.
const YEAR_SHIFT: i64 = 4 * CYCLE_SHIFT;

/// `chrono`'s day-from-CE number of 1970-01-01.
const CE_DAYS_AT_UNIX_EPOCH: i64 = 719_163;

/// An immutable date in the Ethiopian (Ge'ez) calendar.
///
/// Ordering, equality, and hashing follow the `(year, month, day)` triple,
/// which is equivalent to ordering by epoch day.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawEthiopicDate"))]
pub struct EthiopicDate {
    year: Year,
    month: u8,
    day: u8,
}

// ── Constants ─────────────────────────────────────────────────────────────────

impl EthiopicDate {
    /// Earliest supported date: Meskerem 1, -999 998.
    pub const MIN: EthiopicDate = EthiopicDate {
        year: MIN_YEAR,
        month: 1,
        day: 1,
    };

    /// Latest supported date: Pagume 6, 999 999.
    pub const MAX: EthiopicDate = EthiopicDate {
        year: MAX_YEAR,
        month: 13,
        day: 6,
    };

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a proleptic year, month (1–13), and day.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if the year is outside the supported
    /// range, the month is not 1–13, or the day does not exist in that month
    /// (Pagume 6 exists only in leap years).
    pub fn of(year: Year, month: u8, day: u8) -> Result<Self> {
        ensure_date!(
            (MIN_YEAR..=MAX_YEAR).contains(&year),
            "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
        );
        ensure_date!(
            (1..=13).contains(&month),
            "month {month} out of range [1, 13]"
        );
        let days_in = month_length(i64::from(year), month);
        ensure_date!(
            day >= 1 && day <= days_in,
            "day {day} out of range [1, {days_in}] for {year}-{month:02}"
        );
        Ok(Self { year, month, day })
    }

    /// Create a date from a proleptic year and day of year (1–365/366).
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if the year is out of range or the day
    /// of year exceeds the length of that year.
    pub fn of_year_day(year: Year, day_of_year: u16) -> Result<Self> {
        ensure_date!(
            (MIN_YEAR..=MAX_YEAR).contains(&year),
            "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
        );
        let len = year_length(i64::from(year));
        ensure_date!(
            day_of_year >= 1 && day_of_year <= len,
            "day of year {day_of_year} out of range [1, {len}] for {year}"
        );
        let doy0 = day_of_year - 1;
        Ok(Self {
            year,
            month: (doy0 / 30 + 1) as u8,
            day: (doy0 % 30 + 1) as u8,
        })
    }

    /// Create a date from an epoch day (day 0 = 1970-01-01).
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if the day falls outside
    /// [`EthiopicDate::MIN`]..=[`EthiopicDate::MAX`].
    pub fn of_epoch_day(epoch_day: EpochDay) -> Result<Self> {
        ensure_range!(
            (Self::MIN.to_epoch_day()..=Self::MAX.to_epoch_day()).contains(&epoch_day),
            "epoch day {epoch_day} outside [{}, {}]",
            Self::MIN.to_epoch_day(),
            Self::MAX.to_epoch_day()
        );
        Ok(Self::from_epoch_day_unchecked(epoch_day))
    }

    /// Convert a Gregorian date from the host date primitive.
    ///
    /// Every date `chrono` can represent lies within the supported range.
    pub fn from_gregorian(date: NaiveDate) -> Self {
        Self::from_epoch_day_unchecked(i64::from(date.num_days_from_ce()) - CE_DAYS_AT_UNIX_EPOCH)
    }

    /// Today's date in the host's local time zone.
    pub fn now() -> Self {
        Self::from_gregorian(chrono::Local::now().date_naive())
    }

    fn from_epoch_day_unchecked(epoch_day: EpochDay) -> Self {
        let (year, month, day) = ymd_from_epoch_day(epoch_day);
        Self {
            year: year as Year,
            month,
            day,
        }
    }

    /// Build a date, clamping a day past the end of the month down to the
    /// month's last day.  The month must already be 1–13.
    fn resolve_previous_valid(year: i64, month: u8, day: u8) -> Result<Self> {
        ensure_range!(
            (i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&year),
            "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
        );
        let day = day.min(month_length(year, month));
        Ok(Self {
            year: year as Year,
            month,
            day,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the proleptic year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Return the month (1–13).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return the month as an [`EthiopicMonth`].
    pub fn month_of_year(&self) -> EthiopicMonth {
        EthiopicMonth::from_number(self.month).expect("month is always in 1..=13")
    }

    /// Return the day of the year (1–366).
    pub const fn day_of_year(&self) -> u16 {
        (self.month as u16 - 1) * 30 + self.day as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_epoch_day(self.to_epoch_day())
    }

    /// Return the era.
    pub fn era(&self) -> EthiopicEra {
        EthiopicEra::of_year(self.year)
    }

    /// Return the year within the era (always ≥ 1).
    pub fn year_of_era(&self) -> Year {
        if self.year >= 1 {
            self.year
        } else {
            1 - self.year
        }
    }

    /// Months since year 0: `year * 13 + month - 1`.
    pub fn proleptic_month(&self) -> i64 {
        i64::from(self.year) * 13 + i64::from(self.month) - 1
    }

    /// Return the epoch day (day 0 = 1970-01-01).
    pub const fn to_epoch_day(&self) -> EpochDay {
        epoch_day_of(self.year as i64, self.day_of_year() as i64)
    }

    /// Convert to a Gregorian date through the host date primitive.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] for dates beyond `chrono`'s range
    /// (roughly ±262 000 years).
    pub fn to_gregorian(&self) -> Result<NaiveDate> {
        i32::try_from(self.to_epoch_day() + CE_DAYS_AT_UNIX_EPOCH)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or_else(|| {
                Error::OutOfRange(format!("{self:?} has no host Gregorian equivalent"))
            })
    }

    /// Return `true` if the year of this date is a leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Number of days in this date's month: 30, or 5/6 for Pagume.
    pub fn length_of_month(&self) -> u8 {
        month_length(i64::from(self.year), self.month)
    }

    /// Number of days in this date's year: 365 or 366.
    pub fn length_of_year(&self) -> u16 {
        year_length(i64::from(self.year))
    }

    /// Return the first day of the month containing this date.
    pub fn first_day_of_month(self) -> Self {
        Self { day: 1, ..self }
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        Self {
            day: self.length_of_month(),
            ..self
        }
    }

    /// Return `true` if this is the last day of its month.
    pub fn is_end_of_month(self) -> bool {
        self.day == self.length_of_month()
    }

    // ── Fields ────────────────────────────────────────────────────────────────

    /// Read a field.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedField`] for time-of-day fields.
    pub fn get(&self, field: EthiopicField) -> Result<i64> {
        let dom = i64::from(self.day);
        let doy = i64::from(self.day_of_year());
        let value = match field {
            EthiopicField::DayOfWeek => i64::from(self.weekday().ordinal()),
            EthiopicField::AlignedDayOfWeekInMonth => (dom - 1) % 7 + 1,
            EthiopicField::AlignedDayOfWeekInYear => (doy - 1) % 7 + 1,
            EthiopicField::DayOfMonth => dom,
            EthiopicField::DayOfYear => doy,
            EthiopicField::EpochDay => self.to_epoch_day(),
            EthiopicField::AlignedWeekOfMonth => (dom - 1) / 7 + 1,
            EthiopicField::AlignedWeekOfYear => (doy - 1) / 7 + 1,
            EthiopicField::MonthOfYear => i64::from(self.month),
            EthiopicField::ProlepticMonth => self.proleptic_month(),
            EthiopicField::YearOfEra => i64::from(self.year_of_era()),
            EthiopicField::Year => i64::from(self.year),
            EthiopicField::Era => self.era().value(),
            EthiopicField::HourOfDay | EthiopicField::MinuteOfHour | EthiopicField::SecondOfMinute => {
                return Err(Error::UnsupportedField(format!(
                    "{field} is not a date field"
                )))
            }
        };
        Ok(value)
    }

    /// The legal range of a field, refined by this date's month and year
    /// where the length differs.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedField`] for time-of-day fields.
    pub fn range(&self, field: EthiopicField) -> Result<ValueRange> {
        match field {
            EthiopicField::DayOfMonth => {
                Ok(ValueRange::new(1, i64::from(self.length_of_month())))
            }
            EthiopicField::DayOfYear => Ok(ValueRange::new(1, i64::from(self.length_of_year()))),
            EthiopicField::AlignedWeekOfMonth => {
                Ok(ValueRange::new(1, if self.month == 13 { 1 } else { 5 }))
            }
            _ => field.range(),
        }
    }

    /// Return a copy with `field` set to `value`.
    ///
    /// The value is checked against the field's chronology-wide range; a day
    /// that does not exist in the resulting month is clamped to the month's
    /// last day, so setting day 6 of Pagume in a common year yields Pagume 5.
    ///
    /// # Errors
    /// * [`Error::UnsupportedField`] for time-of-day fields.
    /// * [`Error::InvalidArgument`] if `value` is outside the field's range.
    /// * [`Error::OutOfRange`] if the result leaves the supported range.
    pub fn with(&self, field: EthiopicField, value: i64) -> Result<Self> {
        let value = field.range()?.check(value, field)?;
        let current = self.get(field)?;
        if value == current {
            return Ok(*self);
        }
        match field {
            EthiopicField::DayOfWeek
            | EthiopicField::AlignedDayOfWeekInMonth
            | EthiopicField::AlignedDayOfWeekInYear => self.plus_days(value - current),
            EthiopicField::AlignedWeekOfMonth | EthiopicField::AlignedWeekOfYear => {
                self.plus_weeks(value - current)
            }
            EthiopicField::DayOfMonth => {
                Self::resolve_previous_valid(i64::from(self.year), self.month, value as u8)
            }
            EthiopicField::DayOfYear => {
                let doy = value.min(i64::from(self.length_of_year()));
                Self::of_year_day(self.year, doy as u16)
            }
            EthiopicField::EpochDay => Self::of_epoch_day(value),
            EthiopicField::MonthOfYear => {
                Self::resolve_previous_valid(i64::from(self.year), value as u8, self.day)
            }
            EthiopicField::ProlepticMonth => self.plus_months(value - current),
            EthiopicField::YearOfEra => {
                let year = if self.year >= 1 { value } else { 1 - value };
                Self::resolve_previous_valid(year, self.month, self.day)
            }
            EthiopicField::Year => Self::resolve_previous_valid(value, self.month, self.day),
            EthiopicField::Era => {
                Self::resolve_previous_valid(1 - i64::from(self.year), self.month, self.day)
            }
            EthiopicField::HourOfDay | EthiopicField::MinuteOfHour | EthiopicField::SecondOfMinute => {
                Err(Error::UnsupportedField(format!("{field} is not a date field")))
            }
        }
    }

    /// Return a copy with the day of year set, clamped to the year's length.
    pub fn with_day_of_year(&self, day_of_year: u16) -> Result<Self> {
        self.with(EthiopicField::DayOfYear, i64::from(day_of_year))
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if the result leaves the supported range.
    pub fn plus_days(&self, n: i64) -> Result<Self> {
        if n == 0 {
            return Ok(*self);
        }
        let epoch_day = self
            .to_epoch_day()
            .checked_add(n)
            .ok_or_else(|| overflow("plus_days", n))?;
        Self::of_epoch_day(epoch_day)
    }

    /// Advance by `n` weeks.
    pub fn plus_weeks(&self, n: i64) -> Result<Self> {
        self.plus_days(scaled(n, 7)?)
    }

    /// Advance by `n` months, clamping Pagume overflow.
    pub fn plus_months(&self, n: i64) -> Result<Self> {
        if n == 0 {
            return Ok(*self);
        }
        let target = self
            .proleptic_month()
            .checked_add(n)
            .ok_or_else(|| overflow("plus_months", n))?;
        let (year, month) = split_proleptic_month(target);
        Self::resolve_previous_valid(year, month, self.day)
    }

    /// Advance by `n` years, clamping Pagume 6 to Pagume 5 when the target
    /// year is not a leap year.
    pub fn plus_years(&self, n: i64) -> Result<Self> {
        if n == 0 {
            return Ok(*self);
        }
        let year = i64::from(self.year)
            .checked_add(n)
            .ok_or_else(|| overflow("plus_years", n))?;
        Self::resolve_previous_valid(year, self.month, self.day)
    }

    /// Advance by `n` units.
    ///
    /// # Errors
    /// * [`Error::UnsupportedUnit`] for time-of-day units.
    /// * [`Error::OutOfRange`] if the result leaves the supported range.
    /// * [`Error::InvalidArgument`] when adding eras moves past the two eras.
    pub fn plus(&self, n: i64, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.plus_days(n),
            TimeUnit::Weeks => self.plus_weeks(n),
            TimeUnit::Months => self.plus_months(n),
            TimeUnit::Years | TimeUnit::Decades | TimeUnit::Centuries | TimeUnit::Millennia => {
                self.plus_years(scaled(n, unit.years().unwrap_or(1))?)
            }
            TimeUnit::Eras => {
                let era = self
                    .era()
                    .value()
                    .checked_add(n)
                    .ok_or_else(|| overflow("plus eras", n))?;
                self.with(EthiopicField::Era, era)
            }
            TimeUnit::Hours | TimeUnit::Minutes | TimeUnit::Seconds => Err(
                Error::UnsupportedUnit(format!("{unit} is not a date-based unit")),
            ),
        }
    }

    /// Move back by `n` units.  See [`EthiopicDate::plus`].
    pub fn minus(&self, n: i64, unit: TimeUnit) -> Result<Self> {
        let n = n.checked_neg().ok_or_else(|| overflow("minus", n))?;
        self.plus(n, unit)
    }

    /// Whole units from `self` to `end`; negative when `end` is earlier.
    ///
    /// `self.plus(self.until(end, TimeUnit::Days)?, TimeUnit::Days)? == end`.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedUnit`] for time-of-day units.
    pub fn until(&self, end: EthiopicDate, unit: TimeUnit) -> Result<i64> {
        let days = end.to_epoch_day() - self.to_epoch_day();
        match unit {
            TimeUnit::Days => Ok(days),
            TimeUnit::Weeks => Ok(days / 7),
            TimeUnit::Months => Ok(self.months_until(end)),
            TimeUnit::Years | TimeUnit::Decades | TimeUnit::Centuries | TimeUnit::Millennia => {
                Ok(self.months_until(end) / (13 * unit.years().unwrap_or(1)))
            }
            TimeUnit::Eras => Ok(end.era().value() - self.era().value()),
            TimeUnit::Hours | TimeUnit::Minutes | TimeUnit::Seconds => Err(
                Error::UnsupportedUnit(format!("{unit} is not a date-based unit")),
            ),
        }
    }

    /// The years, months, and days from `self` to `end`.
    ///
    /// The day component carries the sign of the month component; when the
    /// month count is positive but the days would be negative, one month is
    /// borrowed and the days are counted from the shortened month boundary.
    pub fn period_until(&self, end: EthiopicDate) -> EthiopicPeriod {
        let mut total_months = end.proleptic_month() - self.proleptic_month();
        let mut days = i64::from(end.day) - i64::from(self.day);
        if total_months > 0 && days < 0 {
            total_months -= 1;
            let (year, month) = split_proleptic_month(self.proleptic_month() + total_months);
            let day = self.day.min(month_length(year, month));
            let anchor = epoch_day_of(year, i64::from(month - 1) * 30 + i64::from(day));
            days = end.to_epoch_day() - anchor;
        } else if total_months < 0 && days > 0 {
            total_months += 1;
            days -= i64::from(end.length_of_month());
        }
        EthiopicPeriod::new(total_months / 13, total_months % 13, days)
    }

    /// Whole months from `self` to `end`, truncated toward zero.
    fn months_until(&self, end: EthiopicDate) -> i64 {
        let packed1 = self.proleptic_month() * 256 + i64::from(self.day);
        let packed2 = end.proleptic_month() * 256 + i64::from(end.day);
        (packed2 - packed1) / 256
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl From<NaiveDate> for EthiopicDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_gregorian(date)
    }
}

impl TryFrom<EthiopicDate> for NaiveDate {
    type Error = Error;
    fn try_from(date: EthiopicDate) -> Result<Self> {
        date.to_gregorian()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawEthiopicDate {
    year: Year,
    month: u8,
    day: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawEthiopicDate> for EthiopicDate {
    type Error = Error;
    fn try_from(raw: RawEthiopicDate) -> Result<Self> {
        EthiopicDate::of(raw.year, raw.month, raw.day)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i64> for EthiopicDate {
    type Output = Self;
    fn add(self, rhs: i64) -> Self {
        self.plus_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i64> for EthiopicDate {
    type Output = Self;
    fn sub(self, rhs: i64) -> Self {
        self.minus(rhs, TimeUnit::Days)
            .expect("date subtraction underflow")
    }
}

impl std::ops::Sub<EthiopicDate> for EthiopicDate {
    type Output = i64;
    fn sub(self, rhs: EthiopicDate) -> i64 {
        self.to_epoch_day() - rhs.to_epoch_day()
    }
}

impl std::ops::AddAssign<i64> for EthiopicDate {
    fn add_assign(&mut self, rhs: i64) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<i64> for EthiopicDate {
    fn sub_assign(&mut self, rhs: i64) {
        *self = *self - rhs;
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for EthiopicDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_of_year(), self.year)
    }
}

impl std::fmt::Debug for EthiopicDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EthiopicDate({:04}-{:02}-{:02})",
            self.year, self.month, self.day
        )
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a proleptic Ethiopian year is a leap year (`year mod 4 == 3`).
pub fn is_leap_year(year: Year) -> bool {
    year.rem_euclid(4) == 3
}

/// Number of days in `month` (1–13) of `year`.
fn month_length(year: i64, month: u8) -> u8 {
    if month == 13 {
        if year.rem_euclid(4) == 3 {
            6
        } else {
            5
        }
    } else {
        30
    }
}

fn year_length(year: i64) -> u16 {
    if year.rem_euclid(4) == 3 {
        366
    } else {
        365
    }
}

/// Epoch day of the 1-based `day_of_year` in `year`.
const fn epoch_day_of(year: i64, day_of_year: i64) -> i64 {
    (year - 1) * 365 + year.div_euclid(4) + day_of_year - 1 - EPOCH_DAY_DIFFERENCE
}

/// Decompose an epoch day into proleptic `(year, month, day)`.
fn ymd_from_epoch_day(epoch_day: i64) -> (i64, u8, u8) {
    let mut ethiopic_day = epoch_day + EPOCH_DAY_DIFFERENCE;
    let mut adjustment = 0;
    if ethiopic_day < 0 {
        ethiopic_day += DAYS_PER_CYCLE * CYCLE_SHIFT;
        adjustment = -YEAR_SHIFT;
    }
    let year = (ethiopic_day * 4 + 1463) / DAYS_PER_CYCLE;
    let start_of_year = (year - 1) * 365 + year / 4;
    let doy0 = ethiopic_day - start_of_year;
    (
        year + adjustment,
        (doy0 / 30 + 1) as u8,
        (doy0 % 30 + 1) as u8,
    )
}

fn split_proleptic_month(proleptic_month: i64) -> (i64, u8) {
    (
        proleptic_month.div_euclid(13),
        (proleptic_month.rem_euclid(13) + 1) as u8,
    )
}

fn scaled(n: i64, factor: i64) -> Result<i64> {
    n.checked_mul(factor)
        .ok_or_else(|| overflow("unit scaling", n))
}

fn overflow(op: &str, n: i64) -> Error {
    Error::OutOfRange(format!("{op}: amount {n} overflows"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
