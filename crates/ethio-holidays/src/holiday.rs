//! `Holiday` record, `HolidayType`, and `HolidayOccurrence`.

use chrono::NaiveDate;
use ethio_core::errors::Result;
use ethio_time::EthiopicDate;
use serde::{Deserialize, Serialize};

use crate::resources::HolidayText;

/// Classification of a holiday.
///
/// "Working" holidays are observed but are not days off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HolidayType {
    /// Orthodox feast or fast that is not a public day off.
    OrthodoxWorking,
    /// Orthodox feast that is a public day off.
    OrthodoxDayOff,
    /// Muslim observance that is not a public day off.
    MuslimWorking,
    /// Muslim feast that is a public day off.
    MuslimDayOff,
    /// Secular national day off.
    NationalDayOff,
}

impl HolidayType {
    /// Return `true` for the day-off types.
    pub fn is_day_off(&self) -> bool {
        matches!(
            self,
            HolidayType::OrthodoxDayOff | HolidayType::MuslimDayOff | HolidayType::NationalDayOff
        )
    }
}

impl std::fmt::Display for HolidayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HolidayType::OrthodoxWorking => "ORTHODOX_WORKING",
            HolidayType::OrthodoxDayOff => "ORTHODOX_DAY_OFF",
            HolidayType::MuslimWorking => "MUSLIM_WORKING",
            HolidayType::MuslimDayOff => "MUSLIM_DAY_OFF",
            HolidayType::NationalDayOff => "NATIONAL_DAY_OFF",
        };
        write!(f, "{s}")
    }
}

/// A computed holiday.
///
/// Holidays are recomputed on every query; `id` (holiday kind plus year) is
/// the only identity and is stable across recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holiday {
    /// Stable identifier, e.g. `"orthodox_fasika_2017"`.
    pub id: String,
    /// Display title from the resource provider.
    pub title: String,
    /// Amharic name.
    pub name_amharic: String,
    /// Classification.
    pub holiday_type: HolidayType,
    /// Ethiopian year the date falls in.
    pub ethiopian_year: i32,
    /// Ethiopian month (1–13).
    pub ethiopian_month: u8,
    /// Ethiopian day of month.
    pub ethiopian_day: u8,
    /// Public non-working day.
    pub is_day_off: bool,
    /// Month and day never shift from year to year.
    pub is_fixed_date: bool,
    /// Muslim holidays only: whether an authoritative correction confirms
    /// the date.
    pub is_verified: Option<bool>,
    /// Background text.
    pub description: String,
    /// How the day is celebrated.
    pub celebration: String,
}

impl Holiday {
    pub(crate) fn new(
        id: String,
        text: HolidayText,
        name_amharic: &str,
        holiday_type: HolidayType,
        date: EthiopicDate,
        is_fixed_date: bool,
    ) -> Self {
        Self {
            id,
            title: text.title,
            name_amharic: name_amharic.to_string(),
            holiday_type,
            ethiopian_year: date.year(),
            ethiopian_month: date.month(),
            ethiopian_day: date.day(),
            is_day_off: holiday_type.is_day_off(),
            is_fixed_date,
            is_verified: None,
            description: text.description,
            celebration: text.celebration,
        }
    }

    pub(crate) fn verified(mut self, verified: bool) -> Self {
        self.is_verified = Some(verified);
        self
    }

    /// The holiday's Ethiopic date.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`](ethio_core::Error::InvalidDate) if the
    /// record was edited into an impossible date.
    pub fn date(&self) -> Result<EthiopicDate> {
        EthiopicDate::of(self.ethiopian_year, self.ethiopian_month, self.ethiopian_day)
    }

    /// Chronological sort key; holidays sharing a day keep their generation
    /// order under a stable sort.
    pub fn sort_key(&self) -> (i32, u8, u8) {
        (self.ethiopian_year, self.ethiopian_month, self.ethiopian_day)
    }
}

/// A holiday placed on the calendar, optionally moved by a number of days
/// (e.g. an announced shift of a moon-sighted feast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayOccurrence {
    /// The underlying holiday.
    pub holiday: Holiday,
    /// The computed date before adjustment.
    pub ethiopic_date: EthiopicDate,
    /// Days added to the computed date.
    pub adjustment: i64,
}

impl HolidayOccurrence {
    /// Place `holiday` on its computed date, shifted by `adjustment` days.
    pub fn new(holiday: Holiday, adjustment: i64) -> Result<Self> {
        let ethiopic_date = holiday.date()?;
        Ok(Self {
            holiday,
            ethiopic_date,
            adjustment,
        })
    }

    /// The date after the adjustment is applied.
    pub fn actual_date(&self) -> Result<EthiopicDate> {
        self.ethiopic_date.plus_days(self.adjustment)
    }

    /// The adjusted date in the Gregorian calendar.
    pub fn to_gregorian(&self) -> Result<NaiveDate> {
        self.actual_date()?.to_gregorian()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(id: &str, y: i32, m: u8, d: u8) -> Holiday {
        Holiday::new(
            id.to_string(),
            HolidayText::plain(id),
            "",
            HolidayType::NationalDayOff,
            EthiopicDate::of(y, m, d).unwrap(),
            true,
        )
    }

    #[test]
    fn day_off_flag_follows_type() {
        assert!(HolidayType::MuslimDayOff.is_day_off());
        assert!(!HolidayType::OrthodoxWorking.is_day_off());
        assert!(holiday("a", 2017, 1, 1).is_day_off);
    }

    #[test]
    fn ordering_is_chronological() {
        let mut v = vec![
            holiday("b", 2017, 6, 23),
            holiday("a", 2017, 1, 1),
            holiday("c", 2016, 13, 5),
        ];
        v.sort_by_key(Holiday::sort_key);
        let ids: Vec<_> = v.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn occurrence_adjustment_crosses_year() {
        let occ = HolidayOccurrence::new(holiday("x", 2016, 13, 5), 1).unwrap();
        assert_eq!(occ.actual_date().unwrap(), EthiopicDate::of(2017, 1, 1).unwrap());
        assert_eq!(
            occ.to_gregorian().unwrap(),
            NaiveDate::from_ymd_opt(2024, 9, 11).unwrap()
        );
    }

    #[test]
    fn serialises_type_in_screaming_case() {
        let json = serde_json::to_string(&HolidayType::OrthodoxDayOff).unwrap();
        assert_eq!(json, "\"ORTHODOX_DAY_OFF\"");
    }
}
