//! Ethiopian holiday calendar.
//!
//! Combines the public, Orthodox, and Muslim calculators behind one query
//! surface and exposes the result as a business-day [`Calendar`]: Saturdays,
//! Sundays, and day-off holidays are non-business days.

use std::collections::HashSet;
use std::sync::Arc;

use ethio_core::errors::Result;
use ethio_time::{Calendar, EthiopicDate};
use tracing::{debug, warn};

use crate::holiday::Holiday;
use crate::muslim::MuslimHolidayCalculator;
use crate::orthodox::OrthodoxHolidayCalculator;
use crate::public::PublicHolidayCalculator;
use crate::resources::{DefaultResources, ResourceProvider};

/// Which holiday groups a calendar reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HolidaySelection {
    /// Secular national days off.
    pub national: bool,
    /// Orthodox days off.
    pub orthodox_day_off: bool,
    /// Orthodox feasts and fasts that are working days.
    pub orthodox_working: bool,
    /// Muslim days off.
    pub muslim_day_off: bool,
    /// Muslim observances that are working days.
    pub muslim_working: bool,
}

impl HolidaySelection {
    /// Every group.
    pub const ALL: Self = Self {
        national: true,
        orthodox_day_off: true,
        orthodox_working: true,
        muslim_day_off: true,
        muslim_working: true,
    };

    /// Only the groups that are public days off.
    pub const DAYS_OFF: Self = Self {
        national: true,
        orthodox_day_off: true,
        orthodox_working: false,
        muslim_day_off: true,
        muslim_working: false,
    };

    /// No groups.
    pub const NONE: Self = Self {
        national: false,
        orthodox_day_off: false,
        orthodox_working: false,
        muslim_day_off: false,
        muslim_working: false,
    };
}

impl Default for HolidaySelection {
    fn default() -> Self {
        Self::ALL
    }
}

/// The Ethiopian holiday calendar.
#[derive(Debug, Clone)]
pub struct EthiopianHolidayCalendar {
    public: PublicHolidayCalculator,
    orthodox: OrthodoxHolidayCalculator,
    muslim: MuslimHolidayCalculator,
    selection: HolidaySelection,
}

impl EthiopianHolidayCalendar {
    /// Create a calendar with default calculators drawing text from
    /// `resources`.
    pub fn new(resources: Arc<dyn ResourceProvider>) -> Self {
        Self {
            public: PublicHolidayCalculator::new(resources.clone()),
            orthodox: OrthodoxHolidayCalculator::new(resources.clone()),
            muslim: MuslimHolidayCalculator::new(resources),
            selection: HolidaySelection::default(),
        }
    }

    /// Report only the groups in `selection`.
    pub fn with_selection(mut self, selection: HolidaySelection) -> Self {
        self.selection = selection;
        self
    }

    /// Replace the Orthodox calculator.
    pub fn with_orthodox(mut self, orthodox: OrthodoxHolidayCalculator) -> Self {
        self.orthodox = orthodox;
        self
    }

    /// Replace the Muslim calculator.
    pub fn with_muslim(mut self, muslim: MuslimHolidayCalculator) -> Self {
        self.muslim = muslim;
        self
    }

    /// The groups reported.
    pub fn selection(&self) -> HolidaySelection {
        self.selection
    }

    /// Selected holidays of `year`, in chronological order.  Holidays sharing
    /// a date appear as national, Orthodox, then Muslim.
    pub fn holidays_for_year(&self, year: i32) -> Result<Vec<Holiday>> {
        self.collect(year, self.selection)
    }

    /// Selected holidays in `month` of `year`.
    pub fn holidays_for_month(&self, year: i32, month: u8) -> Result<Vec<Holiday>> {
        EthiopicDate::of(year, month, 1)?;
        let mut holidays = self.holidays_for_year(year)?;
        holidays.retain(|h| h.ethiopian_month == month);
        Ok(holidays)
    }

    /// Selected holidays falling on `date`.
    pub fn holidays_on(&self, date: EthiopicDate) -> Result<Vec<Holiday>> {
        let mut holidays = self.holidays_for_year(date.year())?;
        holidays.retain(|h| h.ethiopian_month == date.month() && h.ethiopian_day == date.day());
        Ok(holidays)
    }

    /// Return `true` if a selected day-off holiday falls on `date`.
    pub fn is_day_off_holiday(&self, date: EthiopicDate) -> Result<bool> {
        Ok(self
            .days_off(date.year())?
            .contains(&(date.month(), date.day())))
    }

    /// `(month, day)` of every selected day-off holiday in `year`.
    fn days_off(&self, year: i32) -> Result<HashSet<(u8, u8)>> {
        let selection = HolidaySelection {
            orthodox_working: false,
            muslim_working: false,
            ..self.selection
        };
        Ok(self
            .collect(year, selection)?
            .iter()
            .filter(|h| h.is_day_off)
            .map(|h| (h.ethiopian_month, h.ethiopian_day))
            .collect())
    }

    fn collect(&self, year: i32, selection: HolidaySelection) -> Result<Vec<Holiday>> {
        let mut holidays = Vec::new();
        if selection.national {
            holidays.extend(self.public.public_holidays_for_year(year)?);
        }
        if selection.orthodox_day_off || selection.orthodox_working {
            holidays.extend(self.orthodox.orthodox_holidays_for_year(
                year,
                selection.orthodox_day_off,
                selection.orthodox_working,
            )?);
        }
        if selection.muslim_day_off || selection.muslim_working {
            holidays.extend(self.muslim.muslim_holidays_for_ethiopian_year(
                year,
                selection.muslim_day_off,
                selection.muslim_working,
            )?);
        }
        holidays.sort_by_key(Holiday::sort_key);
        debug!(target: "ethiocal::calendar", year, count = holidays.len(), "Holidays collected");
        Ok(holidays)
    }
}

impl Default for EthiopianHolidayCalendar {
    fn default() -> Self {
        Self::new(Arc::new(DefaultResources))
    }
}

/// Day-off lookups that compute each year's holidays once.
struct DaysOffCache<'a> {
    calendar: &'a EthiopianHolidayCalendar,
    year: Option<i32>,
    days: HashSet<(u8, u8)>,
}

impl<'a> DaysOffCache<'a> {
    fn new(calendar: &'a EthiopianHolidayCalendar) -> Self {
        Self {
            calendar,
            year: None,
            days: HashSet::new(),
        }
    }

    fn is_business_day(&mut self, date: EthiopicDate) -> bool {
        if self.calendar.is_weekend(date) {
            return false;
        }
        if self.year != Some(date.year()) {
            self.days = self.calendar.days_off(date.year()).unwrap_or_else(|e| {
                warn!(target: "ethiocal::calendar", date = %date, error = %e, "Holiday lookup failed, treating as business day");
                HashSet::new()
            });
            self.year = Some(date.year());
        }
        !self.days.contains(&(date.month(), date.day()))
    }
}

impl Calendar for EthiopianHolidayCalendar {
    fn name(&self) -> &str {
        "Ethiopia"
    }

    fn is_business_day(&self, date: EthiopicDate) -> bool {
        DaysOffCache::new(self).is_business_day(date)
    }

    fn advance_business_days(&self, mut date: EthiopicDate, n: i64) -> EthiopicDate {
        let mut cache = DaysOffCache::new(self);
        let step: i64 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.unsigned_abs();
        while remaining > 0 {
            match date.plus_days(step) {
                Ok(next) => date = next,
                Err(_) => break,
            }
            if cache.is_business_day(date) {
                remaining -= 1;
            }
        }
        date
    }

    fn business_days_between(&self, d1: EthiopicDate, d2: EthiopicDate) -> i64 {
        let mut cache = DaysOffCache::new(self);
        let (lo, hi, sign) = if d1 <= d2 { (d1, d2, 1) } else { (d2, d1, -1) };
        let count = (lo.to_epoch_day() + 1..=hi.to_epoch_day())
            .filter_map(|ed| EthiopicDate::of_epoch_day(ed).ok())
            .filter(|&d| cache.is_business_day(d))
            .count() as i64;
        sign * count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethio_time::BusinessDayConvention;

    fn date(y: i32, m: u8, d: u8) -> EthiopicDate {
        EthiopicDate::of(y, m, d).unwrap()
    }

    fn calendar() -> EthiopianHolidayCalendar {
        let muslim = MuslimHolidayCalculator::default().with_evaluation_date(date(2017, 1, 1));
        EthiopianHolidayCalendar::default().with_muslim(muslim)
    }

    #[test]
    fn year_is_sorted_and_complete() {
        let all = calendar().holidays_for_year(2017).unwrap();
        assert_eq!(all.len(), 4 + 19 + 8);
        assert!(all.windows(2).all(|w| w[0].sort_key() <= w[1].sort_key()));
        assert_eq!(all[0].id, "public_new_year_2017");
    }

    #[test]
    fn selection_filters_groups() {
        let cal = calendar().with_selection(HolidaySelection::DAYS_OFF);
        let all = cal.holidays_for_year(2017).unwrap();
        assert_eq!(all.len(), 4 + 5 + 4);
        assert!(all.iter().all(|h| h.is_day_off));
        let none = calendar().with_selection(HolidaySelection::NONE);
        assert!(none.holidays_for_year(2017).unwrap().is_empty());
    }

    #[test]
    fn month_and_day_queries() {
        let cal = calendar();
        let meskerem: Vec<_> = cal
            .holidays_for_month(2017, 1)
            .unwrap()
            .into_iter()
            .map(|h| h.id)
            .collect();
        assert_eq!(
            meskerem,
            ["public_new_year_2017", "muslim_mawlid_1446", "orthodox_day_off_meskel_2017"]
        );
        let easter = cal.holidays_on(date(2017, 8, 12)).unwrap();
        assert_eq!(easter.len(), 1);
        assert_eq!(easter[0].id, "orthodox_fasika_2017");
        assert!(cal.holidays_for_month(2017, 14).is_err());
    }

    #[test]
    fn business_days() {
        let cal = calendar();
        assert_eq!(cal.name(), "Ethiopia");
        // Meskel, Friday 2017-01-17.
        assert!(!cal.is_business_day(date(2017, 1, 17)));
        assert!(cal.is_business_day(date(2017, 1, 16)));
        // Nineveh is a working observance.
        assert!(cal.is_business_day(date(2017, 6, 3)));
        assert_eq!(
            cal.adjust(date(2017, 1, 17), BusinessDayConvention::Following),
            date(2017, 1, 20)
        );
        assert_eq!(cal.business_days_between(date(2017, 1, 16), date(2017, 1, 20)), 1);
    }

    #[test]
    fn business_days_across_a_year_match_single_lookups() {
        let cal = calendar().with_selection(HolidaySelection::DAYS_OFF);
        let (start, end) = (date(2016, 12, 20), date(2017, 2, 15));
        let single = (start.to_epoch_day() + 1..=end.to_epoch_day())
            .map(|ed| EthiopicDate::of_epoch_day(ed).unwrap())
            .filter(|&d| cal.is_business_day(d))
            .count() as i64;
        assert_eq!(cal.business_days_between(start, end), single);
        assert_eq!(cal.business_days_between(end, start), -single);
        let advanced = cal.advance_business_days(start, single);
        assert_eq!(cal.business_days_between(start, advanced), single);
        assert!(cal.is_business_day(advanced));
        assert!(advanced <= end);
    }
}
