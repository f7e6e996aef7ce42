//! `Calendar` trait over Ethiopic dates.
//!
//! A calendar knows which dates are business days and can adjust dates
//! according to a [`BusinessDayConvention`].  Months are Ethiopian months, so
//! the "modified" conventions keep a date inside its Ethiopian month, and
//! Pagume counts as a month of its own.

use crate::business_day_convention::BusinessDayConvention;
use crate::date::EthiopicDate;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Ethiopia"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: EthiopicDate) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: EthiopicDate) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a weekend according to this calendar.
    ///
    /// The default treats Saturday and Sunday as the weekend.
    fn is_weekend(&self, date: EthiopicDate) -> bool {
        date.weekday().is_weekend()
    }

    /// Move `date` in steps of `step` days until it is a business day.
    ///
    /// Stops at [`EthiopicDate::MIN`] or [`EthiopicDate::MAX`] if no business
    /// day is reached first.
    fn roll(&self, mut date: EthiopicDate, step: i64) -> EthiopicDate {
        while self.is_holiday(date) {
            match date.plus_days(step) {
                Ok(next) => date = next,
                Err(_) => break,
            }
        }
        date
    }

    /// Adjust `date` according to the given business-day convention.
    fn adjust(&self, date: EthiopicDate, convention: BusinessDayConvention) -> EthiopicDate {
        match convention {
            BusinessDayConvention::Unadjusted => date,
            BusinessDayConvention::Following => self.roll(date, 1),
            BusinessDayConvention::Preceding => self.roll(date, -1),
            BusinessDayConvention::ModifiedFollowing | BusinessDayConvention::ModifiedPreceding => {
                let adjusted = self.adjust(date, convention.base());
                match convention.fallback() {
                    Some(fallback) if !same_month(adjusted, date) => self.adjust(date, fallback),
                    _ => adjusted,
                }
            }
        }
    }

    /// Advance `date` by `n` business days, stopping at the edge of the
    /// supported range.
    fn advance_business_days(&self, mut date: EthiopicDate, n: i64) -> EthiopicDate {
        let step: i64 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.unsigned_abs();
        while remaining > 0 {
            match date.plus_days(step) {
                Ok(next) => date = next,
                Err(_) => break,
            }
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        date
    }

    /// Count the business days in `(d1, d2]`, negated when `d2 < d1`.
    fn business_days_between(&self, d1: EthiopicDate, d2: EthiopicDate) -> i64 {
        let (lo, hi, sign) = if d1 <= d2 { (d1, d2, 1) } else { (d2, d1, -1) };
        let count = (lo.to_epoch_day() + 1..=hi.to_epoch_day())
            .filter_map(|ed| EthiopicDate::of_epoch_day(ed).ok())
            .filter(|&d| self.is_business_day(d))
            .count() as i64;
        sign * count
    }
}

fn same_month(a: EthiopicDate, b: EthiopicDate) -> bool {
    (a.year(), a.month()) == (b.year(), b.month())
}

/// A calendar that treats only Saturdays and Sundays as non-business days.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: EthiopicDate) -> bool {
        !self.is_weekend(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> EthiopicDate {
        EthiopicDate::of(y, m, d).unwrap()
    }

    #[test]
    fn weekends_only_saturday() {
        let cal = WeekendsOnly;
        // 2017-01-04 is a Saturday (2024-09-14)
        assert!(!cal.is_business_day(date(2017, 1, 4)));
        assert!(cal.is_business_day(date(2017, 1, 6)));
    }

    #[test]
    fn adjust_following_and_preceding() {
        let cal = WeekendsOnly;
        let sat = date(2017, 1, 4);
        assert_eq!(
            cal.adjust(sat, BusinessDayConvention::Following),
            date(2017, 1, 6)
        );
        assert_eq!(
            cal.adjust(sat, BusinessDayConvention::Preceding),
            date(2017, 1, 3)
        );
        assert_eq!(cal.adjust(sat, BusinessDayConvention::Unadjusted), sat);
    }

    #[test]
    fn modified_following_stays_in_pagume() {
        let cal = WeekendsOnly;
        // Pagume 5, 2016 is a Tuesday; Pagume 1 is a Friday, 2 and 3 the weekend.
        assert!(cal.is_business_day(date(2016, 13, 5)));
        let sat = date(2016, 13, 2);
        assert_eq!(
            cal.adjust(sat, BusinessDayConvention::ModifiedFollowing),
            date(2016, 13, 4)
        );
    }

    #[test]
    fn business_days_between() {
        let cal = WeekendsOnly;
        let mon = date(2017, 1, 6);
        let fri = date(2017, 1, 10);
        assert_eq!(cal.business_days_between(mon, fri), 4);
        assert_eq!(cal.business_days_between(fri, mon), -4);
        assert_eq!(cal.advance_business_days(fri, 1), date(2017, 1, 13));
    }

    #[test]
    fn range_edges_do_not_overflow() {
        let cal = WeekendsOnly;
        let (min, max) = (EthiopicDate::MIN, EthiopicDate::MAX);
        assert_eq!(cal.advance_business_days(max, 10), max);
        assert_eq!(cal.advance_business_days(min, -10), min);
        assert!(cal.advance_business_days(max, -10) < max);
        for convention in [
            BusinessDayConvention::Following,
            BusinessDayConvention::Preceding,
            BusinessDayConvention::ModifiedFollowing,
            BusinessDayConvention::ModifiedPreceding,
        ] {
            let adjusted = cal.adjust(max, convention);
            assert!(adjusted <= max && max - adjusted < 7, "{convention}");
            let adjusted = cal.adjust(min, convention);
            assert!(adjusted >= min, "{convention}");
        }
        assert_eq!(cal.business_days_between(max, max), 0);
    }
}
