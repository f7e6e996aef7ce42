//! Ethiopian Orthodox holidays.
//!
//! Movable feasts are fixed day offsets from the Fast of Nineveh, which is
//! located with the Bahire Hasab reckoning:
//!
//! 1. **Metqi** (epact) from the year's place in the 19-year lunar cycle.
//! 2. Beale Metqi is Meskerem `metqi`, or Tikimt `metqi` for small values.
//! 3. **Tewusak** from the weekday of Beale Metqi.
//! 4. **Mebaja Hamer** = Metqi + Tewusak locates Nineveh in Tir or Yekatit.

use std::sync::Arc;

use ethio_core::errors::Result;
use ethio_time::{EthiopicDate, EthiopicMonth};
use tracing::debug;

use crate::holiday::{Holiday, HolidayType};
use crate::resources::{DefaultResources, HolidayText, ResourceProvider};

/// Which month Beale Metqi falls in for a given Metqi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MetqiRule {
    /// Tikimt when `metqi <= 8`, otherwise Meskerem.
    #[default]
    Standard,
    /// Tikimt when `metqi <= 14`, otherwise Meskerem.  Agrees with the
    /// Julian computus for Easter in every year; differs from
    /// [`MetqiRule::Standard`] by a lunar month when Metqi is 10, 12, or 13.
    Computus,
}

impl MetqiRule {
    /// The month of Beale Metqi.
    pub fn metqi_month(&self, metqi: u8) -> EthiopicMonth {
        let threshold = match self {
            MetqiRule::Standard => 8,
            MetqiRule::Computus => 14,
        };
        if metqi <= threshold {
            EthiopicMonth::Tikimt
        } else {
            EthiopicMonth::Meskerem
        }
    }
}

/// Metqi for an Ethiopian year.
///
/// Never one of 1, 3, 6, 9, 11, 14, 17, 20, 22, 25, 28.
pub fn metqi(year: i32) -> u8 {
    let years_since_creation = 5500 + i64::from(year);
    let medeb = years_since_creation.rem_euclid(19);
    let wember = (medeb - 1 + 19) % 19;
    let abikete = (wember * 11) % 30;
    (30 - abikete) as u8
}

/// Tewusak for Beale Metqi on `metqi_month`/`metqi` of `year`: 2 to 8.
pub fn tewusak(year: i32, metqi_month: EthiopicMonth, metqi: u8) -> Result<u8> {
    let day_of_week = EthiopicDate::of(year, metqi_month.number(), metqi)?
        .weekday()
        .ordinal();
    let mut tewusak = (128 - day_of_week - 2) % 7;
    if tewusak <= 1 {
        tewusak += 7;
    }
    Ok(tewusak)
}

/// Date of the Fast of Nineveh.
pub fn nineveh(year: i32, rule: MetqiRule) -> Result<EthiopicDate> {
    let metqi = metqi(year);
    let metqi_month = rule.metqi_month(metqi);
    let tewusak = tewusak(year, metqi_month, metqi)?;
    let mebaja_hamer = metqi + tewusak;
    let month = if mebaja_hamer > 30 || metqi_month == EthiopicMonth::Tikimt {
        EthiopicMonth::Yekatit
    } else {
        EthiopicMonth::Tir
    };
    let day = match mebaja_hamer % 30 {
        0 => 30,
        d => d,
    };
    let date = EthiopicDate::of(year, month.number(), day)?;
    debug!(target: "ethiocal::orthodox", year, metqi, tewusak, mebaja_hamer, nineveh = %date, "Nineveh located");
    Ok(date)
}

/// Day of Tahsas on which Genna falls: 29 in the year before a leap year,
/// otherwise 28.
pub fn christmas_day(year: i32) -> u8 {
    if year.rem_euclid(4) == 3 {
        29
    } else {
        28
    }
}

// ── Feast tables ──────────────────────────────────────────────────────────────

struct FixedFeast {
    key: &'static str,
    amharic: &'static str,
    month: u8,
    day: u8,
}

const FIXED_WORKING: [FixedFeast; 5] = [
    FixedFeast { key: "ghad", amharic: "ገሃድ", month: 5, day: 10 },
    FixedFeast { key: "kana_zegelila", amharic: "ቃና ዘገሊላ", month: 5, day: 12 },
    FixedFeast { key: "lideta_mariam", amharic: "ልደተ ማርያም", month: 9, day: 1 },
    FixedFeast { key: "filseta", amharic: "ፍልሰታ", month: 12, day: 1 },
    FixedFeast { key: "debre_tabor", amharic: "ደብረ ታቦር", month: 12, day: 13 },
];

struct MovableFeast {
    key: &'static str,
    amharic: &'static str,
    days_after_nineveh: i64,
}

const MOVABLE_WORKING: [MovableFeast; 9] = [
    MovableFeast { key: "nineveh", amharic: "ጾመ ነነዌ", days_after_nineveh: 0 },
    MovableFeast { key: "abiy_tsom", amharic: "አብይ ጾም", days_after_nineveh: 14 },
    MovableFeast { key: "debre_zeit", amharic: "ደብረ ዘይት", days_after_nineveh: 41 },
    MovableFeast { key: "hosanna", amharic: "ሆሣእና", days_after_nineveh: 62 },
    MovableFeast { key: "rikbe_kahinat", amharic: "ርክበ ካህናት", days_after_nineveh: 93 },
    MovableFeast { key: "erget", amharic: "እርገት", days_after_nineveh: 108 },
    MovableFeast { key: "peraklitos", amharic: "ጴራቅሊጦስ", days_after_nineveh: 118 },
    MovableFeast { key: "tsome_hawariat", amharic: "ጾመ ሐዋርያት", days_after_nineveh: 119 },
    MovableFeast { key: "tsome_dihnet", amharic: "ጾመ ድኅነት", days_after_nineveh: 121 },
];

const MOVABLE_DAY_OFF: [MovableFeast; 2] = [
    MovableFeast { key: "siklet", amharic: "ስቅለት", days_after_nineveh: 67 },
    MovableFeast { key: "fasika", amharic: "ፋሲካ", days_after_nineveh: 69 },
];

// ── Calculator ────────────────────────────────────────────────────────────────

/// Computes the Orthodox holidays of an Ethiopian year.
#[derive(Clone)]
pub struct OrthodoxHolidayCalculator {
    resources: Arc<dyn ResourceProvider>,
    rule: MetqiRule,
}

impl OrthodoxHolidayCalculator {
    /// Create a calculator drawing text from `resources`.
    pub fn new(resources: Arc<dyn ResourceProvider>) -> Self {
        Self {
            resources,
            rule: MetqiRule::default(),
        }
    }

    /// Use `rule` to place Beale Metqi.
    pub fn with_metqi_rule(mut self, rule: MetqiRule) -> Self {
        self.rule = rule;
        self
    }

    /// The rule in use.
    pub fn metqi_rule(&self) -> MetqiRule {
        self.rule
    }

    /// Date of the Fast of Nineveh under this calculator's rule.
    pub fn nineveh(&self, year: i32) -> Result<EthiopicDate> {
        nineveh(year, self.rule)
    }

    /// Orthodox holidays of `year`: fixed days off, fixed working days,
    /// movable working days, then movable days off.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`](ethio_core::Error::InvalidDate) if
    /// `year` is outside the supported range.
    pub fn orthodox_holidays_for_year(
        &self,
        year: i32,
        include_day_off: bool,
        include_working: bool,
    ) -> Result<Vec<Holiday>> {
        EthiopicDate::of(year, 1, 1)?;
        let mut holidays = Vec::new();

        if include_day_off {
            holidays.push(self.fixed_day_off(year, "meskel", "holiday_public_christian_meskel", "መስቀል", 1, 17, true)?);
            holidays.push(self.fixed_day_off(
                year,
                "christmas",
                "holiday_public_christian_genna",
                "ገና",
                4,
                christmas_day(year),
                false,
            )?);
            holidays.push(self.fixed_day_off(year, "timkat", "holiday_public_christian_timket", "ጥምቀት", 5, 11, true)?);
        }

        if include_working {
            for feast in &FIXED_WORKING {
                let date = EthiopicDate::of(year, feast.month, feast.day)?;
                holidays.push(self.holiday(feast.key, feast.amharic, HolidayType::OrthodoxWorking, date, true));
            }
        }

        if include_day_off || include_working {
            let nineveh = self.nineveh(year)?;
            if include_working {
                for feast in &MOVABLE_WORKING {
                    let date = nineveh.plus_days(feast.days_after_nineveh)?;
                    holidays.push(self.holiday(feast.key, feast.amharic, HolidayType::OrthodoxWorking, date, false));
                }
            }
            if include_day_off {
                for feast in &MOVABLE_DAY_OFF {
                    let date = nineveh.plus_days(feast.days_after_nineveh)?;
                    holidays.push(self.holiday(feast.key, feast.amharic, HolidayType::OrthodoxDayOff, date, false));
                }
            }
        }

        debug!(target: "ethiocal::orthodox", year, count = holidays.len(), "Orthodox holidays generated");
        Ok(holidays)
    }

    fn holiday(
        &self,
        key: &str,
        amharic: &str,
        holiday_type: HolidayType,
        date: EthiopicDate,
        is_fixed_date: bool,
    ) -> Holiday {
        let text = HolidayText::lookup(self.resources.as_ref(), &format!("holiday_orthodox_{key}"));
        Holiday::new(
            format!("orthodox_{key}_{}", date.year()),
            text,
            amharic,
            holiday_type,
            date,
            is_fixed_date,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn fixed_day_off(
        &self,
        year: i32,
        key: &str,
        resource: &str,
        amharic: &str,
        month: u8,
        day: u8,
        is_fixed_date: bool,
    ) -> Result<Holiday> {
        let date = EthiopicDate::of(year, month, day)?;
        Ok(Holiday::new(
            format!("orthodox_day_off_{key}_{year}"),
            HolidayText::lookup(self.resources.as_ref(), resource),
            amharic,
            HolidayType::OrthodoxDayOff,
            date,
            is_fixed_date,
        ))
    }
}

impl Default for OrthodoxHolidayCalculator {
    fn default() -> Self {
        Self::new(Arc::new(DefaultResources))
    }
}

impl std::fmt::Debug for OrthodoxHolidayCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrthodoxHolidayCalculator")
            .field("rule", &self.rule)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> EthiopicDate {
        EthiopicDate::of(y, m, d).unwrap()
    }

    #[test]
    fn metqi_values() {
        assert_eq!(metqi(2017), 29);
        assert_eq!(metqi(2016), 10);
        assert_eq!(metqi(2018), 18);
        assert_eq!(metqi(2015), 21);
        assert_eq!(metqi(2012), 24);
    }

    #[test]
    fn tewusak_range() {
        for year in 1900..2100 {
            let m = metqi(year);
            let t = tewusak(year, MetqiRule::Computus.metqi_month(m), m).unwrap();
            assert!((2..=8).contains(&t), "tewusak {t} for {year}");
        }
    }

    #[test]
    fn nineveh_2017() {
        assert_eq!(nineveh(2017, MetqiRule::Computus).unwrap(), date(2017, 6, 3));
        assert_eq!(nineveh(2017, MetqiRule::Standard).unwrap(), date(2017, 6, 3));
    }

    #[test]
    fn rules_differ_for_small_metqi() {
        // Metqi 10: Beale Metqi is Meskerem 10 under the standard rule and
        // Tikimt 10 under the computus rule.
        assert_eq!(nineveh(2016, MetqiRule::Standard).unwrap(), date(2016, 5, 13));
        assert_eq!(nineveh(2016, MetqiRule::Computus).unwrap(), date(2016, 6, 18));
        // Metqi 18 and 24 are unaffected.
        assert_eq!(nineveh(2018, MetqiRule::Computus).unwrap(), date(2018, 5, 25));
        assert_eq!(nineveh(2012, MetqiRule::Standard).unwrap(), date(2012, 6, 2));
    }

    #[test]
    fn christmas_shift() {
        assert_eq!(christmas_day(2015), 29);
        assert_eq!(christmas_day(2016), 28);
        assert_eq!(christmas_day(-1), 29);
    }

    #[test]
    fn ids_and_types() {
        let calc = OrthodoxHolidayCalculator::default();
        let all = calc.orthodox_holidays_for_year(2017, true, true).unwrap();
        assert_eq!(all.len(), 3 + 5 + 9 + 2);
        assert_eq!(all[0].id, "orthodox_day_off_meskel_2017");
        assert_eq!(all[1].id, "orthodox_day_off_christmas_2017");
        assert!(!all[1].is_fixed_date);
        assert_eq!(all[3].id, "orthodox_ghad_2017");
        assert_eq!(all[8].id, "orthodox_nineveh_2017");
        assert_eq!(all[17].id, "orthodox_siklet_2017");
        assert_eq!(all[18].id, "orthodox_fasika_2017");
        assert!(all.iter().all(|h| h.is_verified.is_none()));
    }

    #[test]
    fn default_calculator_uses_standard_rule() {
        let calc = OrthodoxHolidayCalculator::default();
        assert_eq!(calc.metqi_rule(), MetqiRule::Standard);
        let all = calc.orthodox_holidays_for_year(2016, true, true).unwrap();
        let find = |id: &str| all.iter().find(|h| h.id == id).unwrap().date().unwrap();
        assert_eq!(find("orthodox_nineveh_2016"), date(2016, 5, 13));
        assert_eq!(find("orthodox_fasika_2016"), date(2016, 7, 22));
    }

    #[test]
    fn invalid_year_propagates() {
        let calc = OrthodoxHolidayCalculator::default();
        assert!(calc.orthodox_holidays_for_year(1_000_000, true, true).is_err());
    }
}
