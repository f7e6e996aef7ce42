//! Muslim holidays falling within an Ethiopian year.
//!
//! An Ethiopian year overlaps two (occasionally three) Hijri years, so each
//! observance may occur zero, one, or two times in it.  Dates come from a
//! [`HijriCalendar`] and may be shifted by the per-year corrections of a
//! [`ConfigOffsetSource`].

use std::sync::Arc;

use ethio_core::errors::Result;
use ethio_core::EpochDay;
use ethio_time::{EthiopicDate, HijriCalendar, TabularHijri};
use tracing::debug;

use crate::holiday::{Holiday, HolidayType};
use crate::offsets::{ConfigHolidayOffset, ConfigOffsetSource, NoOffsets};
use crate::resources::{DefaultResources, HolidayText, ResourceProvider};

/// Days past the evaluation date for which a confirmed correction still
/// marks a holiday as verified.
pub const DEFAULT_VERIFICATION_WINDOW: i64 = 2;

#[derive(Clone, Copy)]
enum Correction {
    EidAlFitr,
    EidAlAdha,
    Mawlid,
    RamadanStart,
    None,
}

impl Correction {
    fn days(self, offsets: &ConfigHolidayOffset) -> i64 {
        i64::from(match self {
            Correction::EidAlFitr => offsets.eid_al_fitr,
            Correction::EidAlAdha => offsets.eid_al_adha,
            Correction::Mawlid => offsets.mawlid,
            Correction::RamadanStart => offsets.ramadan_start,
            Correction::None => 0,
        })
    }
}

struct Observance {
    id: &'static str,
    resource: &'static str,
    amharic: &'static str,
    month: u8,
    day: u8,
    correction: Correction,
}

const DAY_OFF: [Observance; 3] = [
    Observance {
        id: "eid_fitr",
        resource: "holiday_muslim_eid_fitr",
        amharic: "ኢድ አል-ፈጥር",
        month: 10,
        day: 1,
        correction: Correction::EidAlFitr,
    },
    Observance {
        id: "eid_adha",
        resource: "holiday_muslim_eid_adha",
        amharic: "ኢድ አል-አድሃ",
        month: 12,
        day: 10,
        correction: Correction::EidAlAdha,
    },
    Observance {
        id: "mawlid",
        resource: "holiday_muslim_mawlid",
        amharic: "መውሊድ",
        month: 3,
        day: 12,
        correction: Correction::Mawlid,
    },
];

const WORKING: [Observance; 4] = [
    Observance {
        id: "new_year",
        resource: "holiday_muslim_hijri_new_year",
        amharic: "የሙስሊም አዲስ ዓመት",
        month: 1,
        day: 1,
        correction: Correction::None,
    },
    Observance {
        id: "ashura",
        resource: "holiday_muslim_ashura",
        amharic: "አሹራ",
        month: 1,
        day: 10,
        correction: Correction::None,
    },
    Observance {
        id: "ramadan",
        resource: "holiday_muslim_ramadan_start",
        amharic: "የረመዳን መጀመሪያ",
        month: 9,
        day: 1,
        correction: Correction::RamadanStart,
    },
    Observance {
        id: "mid_shaban",
        resource: "holiday_muslim_mid_shaban",
        amharic: "መካከለኛ ሻዕባን",
        month: 8,
        day: 15,
        correction: Correction::None,
    },
];

/// Computes the Muslim holidays of an Ethiopian year.
#[derive(Clone)]
pub struct MuslimHolidayCalculator {
    resources: Arc<dyn ResourceProvider>,
    offsets: Arc<dyn ConfigOffsetSource>,
    hijri: Arc<dyn HijriCalendar>,
    evaluation_date: Option<EthiopicDate>,
    verification_window: i64,
}

impl MuslimHolidayCalculator {
    /// Create a calculator over the Friday-epoch tabular Hijri calendar with
    /// no corrections.
    pub fn new(resources: Arc<dyn ResourceProvider>) -> Self {
        Self {
            resources,
            offsets: Arc::new(NoOffsets),
            hijri: Arc::new(TabularHijri::default()),
            evaluation_date: None,
            verification_window: DEFAULT_VERIFICATION_WINDOW,
        }
    }

    /// Apply corrections from `offsets`.
    pub fn with_offsets(mut self, offsets: Arc<dyn ConfigOffsetSource>) -> Self {
        self.offsets = offsets;
        self
    }

    /// Convert Hijri dates with `hijri`.
    pub fn with_hijri_calendar(mut self, hijri: Arc<dyn HijriCalendar>) -> Self {
        self.hijri = hijri;
        self
    }

    /// Judge verification against `date` instead of today.
    pub fn with_evaluation_date(mut self, date: EthiopicDate) -> Self {
        self.evaluation_date = Some(date);
        self
    }

    /// Set how many days ahead of the evaluation date a confirmed correction
    /// still verifies a holiday.
    pub fn with_verification_window(mut self, days: i64) -> Self {
        self.verification_window = days;
        self
    }

    /// The Hijri calendar in use.
    pub fn hijri_calendar(&self) -> &dyn HijriCalendar {
        self.hijri.as_ref()
    }

    /// Muslim holidays whose (corrected) date falls within Ethiopian `year`.
    ///
    /// Ids carry the Hijri year, e.g. `"muslim_eid_fitr_1446"`.  Every holiday
    /// has `is_verified` set: `true` only when a confirmed correction for this
    /// year applies to it and its date is no later than the evaluation date
    /// plus the verification window.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`](ethio_core::Error::InvalidDate) if
    /// `year` is outside the supported range.
    pub fn muslim_holidays_for_ethiopian_year(
        &self,
        year: i32,
        include_day_off: bool,
        include_working: bool,
    ) -> Result<Vec<Holiday>> {
        let start = EthiopicDate::of(year, 1, 1)?;
        let start_ed = start.to_epoch_day();
        let end_ed = start_ed + i64::from(start.length_of_year());

        let first_hijri = self.hijri.from_epoch_day(start_ed).year;
        let last_hijri = self.hijri.from_epoch_day(end_ed - 1).year;
        debug!(target: "ethiocal::muslim", year, first_hijri, last_hijri, hijri = self.hijri.name(), "Hijri range");

        let today = self
            .evaluation_date
            .unwrap_or_else(EthiopicDate::now)
            .to_epoch_day();
        let ctx = YearContext {
            year,
            offsets: self.offsets.current_offsets(year),
            start: start_ed,
            end: end_ed,
            verify_until: today.saturating_add(self.verification_window),
        };

        let mut holidays = Vec::new();
        if include_day_off {
            for hijri_year in first_hijri..=last_hijri {
                let applies = ctx.offsets.applies_to(year, hijri_year);
                for obs in &DAY_OFF {
                    holidays.extend(self.place(&ctx, obs, hijri_year, applies, HolidayType::MuslimDayOff)?);
                }
            }
        }
        if include_working {
            let applies = ctx.offsets.applies_to_year(year);
            for hijri_year in first_hijri..=last_hijri {
                for obs in &WORKING {
                    holidays.extend(self.place(&ctx, obs, hijri_year, applies, HolidayType::MuslimWorking)?);
                }
            }
        }

        debug!(target: "ethiocal::muslim", year = ctx.year, count = holidays.len(), "Muslim holidays generated");
        Ok(holidays)
    }

    fn place(
        &self,
        ctx: &YearContext,
        obs: &Observance,
        hijri_year: i32,
        applies: bool,
        holiday_type: HolidayType,
    ) -> Result<Option<Holiday>> {
        let shift = if applies {
            obs.correction.days(&ctx.offsets)
        } else {
            0
        };
        let epoch_day = self.hijri.to_epoch_day(hijri_year, obs.month, obs.day)? + shift;
        if epoch_day < ctx.start || epoch_day >= ctx.end {
            return Ok(None);
        }
        let date = EthiopicDate::of_epoch_day(epoch_day)?;
        let verified = ctx.offsets.is_confirmed() && applies && epoch_day <= ctx.verify_until;
        let holiday = Holiday::new(
            format!("muslim_{}_{hijri_year}", obs.id),
            HolidayText::lookup(self.resources.as_ref(), obs.resource),
            obs.amharic,
            holiday_type,
            date,
            false,
        )
        .verified(verified);
        Ok(Some(holiday))
    }
}

/// Per-call state: the year's correction entry and its epoch-day window.
struct YearContext {
    year: i32,
    offsets: ConfigHolidayOffset,
    start: EpochDay,
    end: EpochDay,
    verify_until: EpochDay,
}

impl Default for MuslimHolidayCalculator {
    fn default() -> Self {
        Self::new(Arc::new(DefaultResources))
    }
}

impl std::fmt::Debug for MuslimHolidayCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MuslimHolidayCalculator")
            .field("hijri", &self.hijri)
            .field("evaluation_date", &self.evaluation_date)
            .field("verification_window", &self.verification_window)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethio_time::HijriEpoch;

    fn date(y: i32, m: u8, d: u8) -> EthiopicDate {
        EthiopicDate::of(y, m, d).unwrap()
    }

    fn find<'a>(holidays: &'a [Holiday], id: &str) -> Option<&'a Holiday> {
        holidays.iter().find(|h| h.id == id)
    }

    fn on(h: &Holiday) -> EthiopicDate {
        h.date().unwrap()
    }

    #[test]
    fn year_2017_spans_two_hijri_years() {
        let calc = MuslimHolidayCalculator::default().with_evaluation_date(date(2017, 1, 1));
        let all = calc.muslim_holidays_for_ethiopian_year(2017, true, true).unwrap();
        assert_eq!(all.len(), 8);
        assert_eq!(on(find(&all, "muslim_eid_fitr_1446").unwrap()), date(2017, 7, 22));
        assert_eq!(on(find(&all, "muslim_eid_adha_1446").unwrap()), date(2017, 9, 30));
        assert_eq!(on(find(&all, "muslim_mawlid_1446").unwrap()), date(2017, 1, 6));
        assert_eq!(on(find(&all, "muslim_mawlid_1447").unwrap()), date(2017, 12, 30));
        assert_eq!(on(find(&all, "muslim_new_year_1447").unwrap()), date(2017, 10, 20));
        assert_eq!(on(find(&all, "muslim_ashura_1447").unwrap()), date(2017, 10, 29));
        assert_eq!(on(find(&all, "muslim_ramadan_1446").unwrap()), date(2017, 6, 22));
        assert_eq!(on(find(&all, "muslim_mid_shaban_1446").unwrap()), date(2017, 6, 7));
        assert!(find(&all, "muslim_new_year_1446").is_none());
        assert!(all.iter().all(|h| h.is_verified == Some(false) && !h.is_fixed_date));
    }

    #[test]
    fn groups_are_independent() {
        let calc = MuslimHolidayCalculator::default().with_evaluation_date(date(2017, 1, 1));
        let off = calc.muslim_holidays_for_ethiopian_year(2017, true, false).unwrap();
        let work = calc.muslim_holidays_for_ethiopian_year(2017, false, true).unwrap();
        assert_eq!(off.len(), 4);
        assert_eq!(work.len(), 4);
        assert!(off.iter().all(|h| h.holiday_type == HolidayType::MuslimDayOff && h.is_day_off));
        assert!(work.iter().all(|h| h.holiday_type == HolidayType::MuslimWorking && !h.is_day_off));
        assert!(calc.muslim_holidays_for_ethiopian_year(2017, false, false).unwrap().is_empty());
    }

    #[test]
    fn thursday_epoch_moves_dates_back() {
        let calc = MuslimHolidayCalculator::default()
            .with_hijri_calendar(Arc::new(TabularHijri::new(HijriEpoch::Thursday)))
            .with_evaluation_date(date(2017, 1, 1));
        let all = calc.muslim_holidays_for_ethiopian_year(2017, true, false).unwrap();
        assert_eq!(on(find(&all, "muslim_eid_fitr_1446").unwrap()), date(2017, 7, 21));
    }

    fn confirmed_2017() -> Arc<dyn ConfigOffsetSource> {
        Arc::new(|_year: i32| ConfigHolidayOffset {
            ethio_year: 2017,
            hijri_year: 1446,
            eid_al_fitr: -1,
            mawlid: 1,
            update_timestamp: 1_743_379_200,
            ..Default::default()
        })
    }

    #[test]
    fn corrections_apply_to_matching_hijri_year_only() {
        let calc = MuslimHolidayCalculator::default()
            .with_offsets(confirmed_2017())
            .with_evaluation_date(date(2017, 1, 1));
        let all = calc.muslim_holidays_for_ethiopian_year(2017, true, false).unwrap();
        assert_eq!(on(find(&all, "muslim_eid_fitr_1446").unwrap()), date(2017, 7, 21));
        assert_eq!(on(find(&all, "muslim_mawlid_1446").unwrap()), date(2017, 1, 7));
        assert_eq!(on(find(&all, "muslim_mawlid_1447").unwrap()), date(2017, 12, 30));
    }

    #[test]
    fn corrections_for_another_year_are_ignored() {
        let calc = MuslimHolidayCalculator::default()
            .with_offsets(confirmed_2017())
            .with_evaluation_date(date(2017, 1, 1));
        let all = calc.muslim_holidays_for_ethiopian_year(2016, true, true).unwrap();
        assert_eq!(on(find(&all, "muslim_eid_fitr_1445").unwrap()), date(2016, 8, 2));
        assert!(all.iter().all(|h| h.is_verified == Some(false)));
    }

    #[test]
    fn verification_window() {
        let calc = MuslimHolidayCalculator::default()
            .with_offsets(confirmed_2017())
            .with_evaluation_date(date(2017, 7, 19));
        let all = calc.muslim_holidays_for_ethiopian_year(2017, true, true).unwrap();
        let verified = |id: &str| find(&all, id).unwrap().is_verified;
        // Corrected Eid al-Fitr falls on 7/21, two days ahead.
        assert_eq!(verified("muslim_eid_fitr_1446"), Some(true));
        assert_eq!(verified("muslim_mawlid_1446"), Some(true));
        assert_eq!(verified("muslim_ramadan_1446"), Some(true));
        assert_eq!(verified("muslim_eid_adha_1446"), Some(false));
        assert_eq!(verified("muslim_mawlid_1447"), Some(false));
        assert_eq!(verified("muslim_new_year_1447"), Some(false));

        let narrow = calc.with_verification_window(1);
        let all = narrow.muslim_holidays_for_ethiopian_year(2017, true, false).unwrap();
        assert_eq!(find(&all, "muslim_eid_fitr_1446").unwrap().is_verified, Some(false));
    }

    #[test]
    fn shifted_out_of_year_is_dropped() {
        let source: Arc<dyn ConfigOffsetSource> = Arc::new(|_year: i32| ConfigHolidayOffset {
            ethio_year: 2017,
            hijri_year: 1447,
            mawlid: 7,
            ..Default::default()
        });
        let calc = MuslimHolidayCalculator::default()
            .with_offsets(source)
            .with_evaluation_date(date(2017, 1, 1));
        let all = calc.muslim_holidays_for_ethiopian_year(2017, true, false).unwrap();
        assert!(find(&all, "muslim_mawlid_1447").is_none());
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn extreme_years_are_total() {
        let calc = MuslimHolidayCalculator::default().with_evaluation_date(date(2017, 1, 1));
        assert!(calc.muslim_holidays_for_ethiopian_year(ethio_time::MAX_YEAR, true, true).is_ok());
        assert!(calc.muslim_holidays_for_ethiopian_year(ethio_time::MIN_YEAR, true, true).is_ok());
        assert!(calc.muslim_holidays_for_ethiopian_year(ethio_time::MAX_YEAR + 1, true, true).is_err());
    }
}
