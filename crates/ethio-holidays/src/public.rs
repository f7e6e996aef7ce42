//! Secular national holidays.

use std::sync::Arc;

use ethio_core::errors::Result;
use ethio_time::EthiopicDate;

use crate::holiday::{Holiday, HolidayType};
use crate::resources::{DefaultResources, HolidayText, ResourceProvider};

struct NationalDay {
    id: &'static str,
    resource: &'static str,
    amharic: &'static str,
    month: u8,
    day: u8,
}

const NATIONAL_DAYS: [NationalDay; 4] = [
    NationalDay {
        id: "public_new_year",
        resource: "holiday_public_enkutatash",
        amharic: "እንቁጣጣሽ",
        month: 1,
        day: 1,
    },
    NationalDay {
        id: "public_adwa",
        resource: "holiday_public_adwa",
        amharic: "የዓድዋ ድል",
        month: 6,
        day: 23,
    },
    NationalDay {
        id: "public_mayday",
        resource: "holiday_public_labour_day",
        amharic: "የሰራተኞች ቀን",
        month: 8,
        day: 23,
    },
    NationalDay {
        id: "public_patriot_day",
        resource: "holiday_public_patriots_day",
        amharic: "የአርበኞች ቀን",
        month: 8,
        day: 27,
    },
];

/// Computes the national days off of an Ethiopian year: Enkutatash, Adwa
/// Victory Day, Labour Day, and Patriots' Day.
#[derive(Clone)]
pub struct PublicHolidayCalculator {
    resources: Arc<dyn ResourceProvider>,
}

impl PublicHolidayCalculator {
    /// Create a calculator drawing text from `resources`.
    pub fn new(resources: Arc<dyn ResourceProvider>) -> Self {
        Self { resources }
    }

    /// The four national holidays of `year`, in calendar order.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`](ethio_core::Error::InvalidDate) if
    /// `year` is outside the supported range.
    pub fn public_holidays_for_year(&self, year: i32) -> Result<Vec<Holiday>> {
        NATIONAL_DAYS
            .iter()
            .map(|nd| {
                let date = EthiopicDate::of(year, nd.month, nd.day)?;
                Ok(Holiday::new(
                    format!("{}_{year}", nd.id),
                    HolidayText::lookup(self.resources.as_ref(), nd.resource),
                    nd.amharic,
                    HolidayType::NationalDayOff,
                    date,
                    true,
                ))
            })
            .collect()
    }
}

impl Default for PublicHolidayCalculator {
    fn default() -> Self {
        Self::new(Arc::new(DefaultResources))
    }
}

impl std::fmt::Debug for PublicHolidayCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicHolidayCalculator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_national_days() {
        let all = PublicHolidayCalculator::default()
            .public_holidays_for_year(2017)
            .unwrap();
        let ids: Vec<_> = all.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "public_new_year_2017",
                "public_adwa_2017",
                "public_mayday_2017",
                "public_patriot_day_2017"
            ]
        );
        assert!(all.iter().all(|h| h.is_day_off && h.is_fixed_date && h.is_verified.is_none()));
        assert_eq!(all[1].title, "Adwa Victory Day");
        assert_eq!(all[1].name_amharic, "የዓድዋ ድል");
        assert_eq!(all[2].sort_key(), (2017, 8, 23));
    }

    #[test]
    fn adwa_is_march_2() {
        let adwa = &PublicHolidayCalculator::default()
            .public_holidays_for_year(2017)
            .unwrap()[1];
        assert_eq!(
            adwa.date().unwrap().to_gregorian().unwrap(),
            chrono::NaiveDate::from_ymd_opt(2025, 3, 2).unwrap()
        );
    }

    #[test]
    fn out_of_range_year() {
        assert!(PublicHolidayCalculator::default()
            .public_holidays_for_year(-1_000_000)
            .is_err());
    }
}
