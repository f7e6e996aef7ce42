//! `EthiopicEra` — the two eras of the Amete Mihret reckoning.

use ethio_core::errors::{Error, Result};

/// Era of an Ethiopic date.
///
/// Proleptic year 1 is the first year of [`EthiopicEra::Incarnation`]; year 0
/// is year 1 of [`EthiopicEra::BeforeIncarnation`], year -1 is its year 2, and
/// so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum EthiopicEra {
    /// Years before the Incarnation (value 0).
    BeforeIncarnation = 0,
    /// Years from the Incarnation onward (value 1).
    Incarnation = 1,
}

impl EthiopicEra {
    /// Construct from the numeric era value (0 or 1).
    pub fn of(value: i64) -> Result<Self> {
        match value {
            0 => Ok(EthiopicEra::BeforeIncarnation),
            1 => Ok(EthiopicEra::Incarnation),
            _ => Err(Error::InvalidArgument(format!(
                "era value {value} out of range [0, 1]"
            ))),
        }
    }

    /// The era containing a proleptic year.
    pub fn of_year(proleptic_year: i32) -> Self {
        if proleptic_year >= 1 {
            EthiopicEra::Incarnation
        } else {
            EthiopicEra::BeforeIncarnation
        }
    }

    /// The numeric era value (0 or 1).
    pub fn value(&self) -> i64 {
        *self as i64
    }
}

impl std::fmt::Display for EthiopicEra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EthiopicEra::BeforeIncarnation => write!(f, "BEFORE_INCARNATION"),
            EthiopicEra::Incarnation => write!(f, "INCARNATION"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_of_year() {
        assert_eq!(EthiopicEra::of_year(2017), EthiopicEra::Incarnation);
        assert_eq!(EthiopicEra::of_year(1), EthiopicEra::Incarnation);
        assert_eq!(EthiopicEra::of_year(0), EthiopicEra::BeforeIncarnation);
        assert_eq!(EthiopicEra::of_year(-40), EthiopicEra::BeforeIncarnation);
    }

    #[test]
    fn numeric_value() {
        assert_eq!(EthiopicEra::of(1).unwrap(), EthiopicEra::Incarnation);
        assert_eq!(EthiopicEra::BeforeIncarnation.value(), 0);
        assert!(EthiopicEra::of(2).is_err());
    }
}
