//! Smoke tests through the façade paths.

use chrono::NaiveDate;
use ethiocal::holidays::{HolidaySelection, MuslimHolidayCalculator};
use ethiocal::time::BusinessDayConvention;
use ethiocal::{Calendar, Error, EthiopianHolidayCalendar, EthiopicDate, HolidayType};

#[test]
fn gregorian_round_trip() {
    let greg = NaiveDate::from_ymd_opt(2024, 9, 11).unwrap();
    let date = EthiopicDate::from_gregorian(greg);
    assert_eq!(date, EthiopicDate::of(2017, 1, 1).unwrap());
    assert_eq!(date.to_gregorian().unwrap(), greg);
}

#[test]
fn errors_are_shared() {
    assert!(matches!(EthiopicDate::of(2016, 13, 6), Err(Error::InvalidDate(_))));
}

#[test]
fn enkutatash_moves_to_next_business_day() {
    let muslim = MuslimHolidayCalculator::default()
        .with_evaluation_date(EthiopicDate::of(2017, 1, 1).unwrap());
    let cal = EthiopianHolidayCalendar::default()
        .with_muslim(muslim)
        .with_selection(HolidaySelection::DAYS_OFF);
    let new_year = EthiopicDate::of(2017, 1, 1).unwrap();
    let holidays = cal.holidays_on(new_year).unwrap();
    assert_eq!(holidays[0].holiday_type, HolidayType::NationalDayOff);
    assert_eq!(
        cal.adjust(new_year, BusinessDayConvention::Following),
        EthiopicDate::of(2017, 1, 2).unwrap()
    );
}
