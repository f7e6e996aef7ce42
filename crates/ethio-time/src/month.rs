//! `EthiopicMonth` — month-of-year enum.

/// Month of the Ethiopian year.
///
/// Variants are numbered 1–13 (Meskerem = 1, Pagume = 13).  Months 1–12 have
/// 30 days; Pagume has 5, or 6 in a leap year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum EthiopicMonth {
    /// Meskerem (1).
    Meskerem = 1,
    /// Tikimt (2).
    Tikimt = 2,
    /// Hidar (3).
    Hidar = 3,
    /// Tahsas (4).
    Tahsas = 4,
    /// Tir (5).
    Tir = 5,
    /// Yekatit (6).
    Yekatit = 6,
    /// Megabit (7).
    Megabit = 7,
    /// Miyazya (8).
    Miyazya = 8,
    /// Ginbot (9).
    Ginbot = 9,
    /// Sene (10).
    Sene = 10,
    /// Hamle (11).
    Hamle = 11,
    /// Nehase (12).
    Nehase = 12,
    /// Pagume (13), the short epagomenal month.
    Pagume = 13,
}

impl EthiopicMonth {
    /// Construct from a number (1 = Meskerem … 13 = Pagume).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(EthiopicMonth::Meskerem),
            2 => Some(EthiopicMonth::Tikimt),
            3 => Some(EthiopicMonth::Hidar),
            4 => Some(EthiopicMonth::Tahsas),
            5 => Some(EthiopicMonth::Tir),
            6 => Some(EthiopicMonth::Yekatit),
            7 => Some(EthiopicMonth::Megabit),
            8 => Some(EthiopicMonth::Miyazya),
            9 => Some(EthiopicMonth::Ginbot),
            10 => Some(EthiopicMonth::Sene),
            11 => Some(EthiopicMonth::Hamle),
            12 => Some(EthiopicMonth::Nehase),
            13 => Some(EthiopicMonth::Pagume),
            _ => None,
        }
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the transliterated name (`"Meskerem"`, `"Tikimt"`, …).
    pub fn name(&self) -> &'static str {
        match self {
            EthiopicMonth::Meskerem => "Meskerem",
            EthiopicMonth::Tikimt => "Tikimt",
            EthiopicMonth::Hidar => "Hidar",
            EthiopicMonth::Tahsas => "Tahsas",
            EthiopicMonth::Tir => "Tir",
            EthiopicMonth::Yekatit => "Yekatit",
            EthiopicMonth::Megabit => "Megabit",
            EthiopicMonth::Miyazya => "Miyazya",
            EthiopicMonth::Ginbot => "Ginbot",
            EthiopicMonth::Sene => "Sene",
            EthiopicMonth::Hamle => "Hamle",
            EthiopicMonth::Nehase => "Nehase",
            EthiopicMonth::Pagume => "Pagume",
        }
    }

    /// Number of days in this month for a year with the given leap status.
    pub fn length(&self, leap_year: bool) -> u8 {
        match self {
            EthiopicMonth::Pagume if leap_year => 6,
            EthiopicMonth::Pagume => 5,
            _ => 30,
        }
    }
}

impl std::fmt::Display for EthiopicMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<EthiopicMonth> for u8 {
    fn from(m: EthiopicMonth) -> u8 {
        m as u8
    }
}
