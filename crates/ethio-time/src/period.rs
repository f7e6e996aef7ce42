//! `EthiopicPeriod` — a date-based amount of years, months, and days.

/// A span of Ethiopian calendar time.
///
/// Produced by [`EthiopicDate::period_until`](crate::date::EthiopicDate::period_until).
/// A year holds 13 months, so `months` is always in `-12..=12` for a period
/// obtained from two dates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EthiopicPeriod {
    /// Whole years.
    pub years: i64,
    /// Whole months.
    pub months: i64,
    /// Remaining days.
    pub days: i64,
}

impl EthiopicPeriod {
    /// The zero-length period.
    pub const ZERO: EthiopicPeriod = EthiopicPeriod {
        years: 0,
        months: 0,
        days: 0,
    };

    /// Create a new period.
    pub fn new(years: i64, months: i64, days: i64) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Return `true` if all three components are zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Return `true` if any component is negative.
    pub fn is_negative(&self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }

    /// Years and months expressed in months (13 per year).
    pub fn total_months(&self) -> i64 {
        self.years * 13 + self.months
    }

    /// Negate every component.
    pub fn negated(self) -> Self {
        Self {
            years: -self.years,
            months: -self.months,
            days: -self.days,
        }
    }
}

impl std::ops::Neg for EthiopicPeriod {
    type Output = Self;
    fn neg(self) -> Self {
        self.negated()
    }
}

impl std::fmt::Display for EthiopicPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "P0D");
        }
        write!(f, "P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for EthiopicPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EthiopicPeriod({self})")
    }
}
