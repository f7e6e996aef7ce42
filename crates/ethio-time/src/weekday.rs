//! `Weekday`, ISO-numbered with English and Amharic names.

use ethio_core::EpochDay;

/// Day of the week, numbered 1 (Monday, ሰኞ) to 7 (Sunday, እሑድ).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    /// ሰኞ.
    Monday = 1,
    /// ማክሰኞ.
    Tuesday,
    /// ረቡዕ.
    Wednesday,
    /// ሐሙስ.
    Thursday,
    /// ዓርብ.
    Friday,
    /// ቅዳሜ.
    Saturday,
    /// እሑድ.
    Sunday,
}

const ALL: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

const NAMES: [(&str, &str); 7] = [
    ("Monday", "ሰኞ"),
    ("Tuesday", "ማክሰኞ"),
    ("Wednesday", "ረቡዕ"),
    ("Thursday", "ሐሙስ"),
    ("Friday", "ዓርብ"),
    ("Saturday", "ቅዳሜ"),
    ("Sunday", "እሑድ"),
];

impl Weekday {
    /// The weekday numbered `n`, or `None` outside 1..=7.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// The weekday of an epoch day; day 0 (1970-01-01) is a Thursday.
    pub fn from_epoch_day(epoch_day: EpochDay) -> Self {
        ALL[(epoch_day + 3).rem_euclid(7) as usize]
    }

    /// The ordinal, 1 (Monday) to 7 (Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// The weekday `n` days later.
    pub fn plus(&self, n: i64) -> Self {
        ALL[(i64::from(self.ordinal()) - 1 + n).rem_euclid(7) as usize]
    }

    /// Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// English name.
    pub fn name(&self) -> &'static str {
        NAMES[usize::from(self.ordinal() - 1)].0
    }

    /// Amharic name.
    pub fn amharic_name(&self) -> &'static str {
        NAMES[usize::from(self.ordinal() - 1)].1
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
