//! Units accepted by `EthiopicDate::plus`, `minus`, and `until`.

/// A unit of time.
///
/// The time-of-day units exist only so that callers get
/// [`Error::UnsupportedUnit`](ethio_core::Error::UnsupportedUnit) rather than a
/// silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeUnit {
    /// Days.
    Days,
    /// Seven days.
    Weeks,
    /// Ethiopian months; Pagume counts as one.
    Months,
    /// Thirteen months.
    Years,
    /// Ten years.
    Decades,
    /// A hundred years.
    Centuries,
    /// A thousand years.
    Millennia,
    /// Steps between the two eras.
    Eras,
    #[allow(missing_docs)]
    Hours,
    #[allow(missing_docs)]
    Minutes,
    #[allow(missing_docs)]
    Seconds,
}

impl TimeUnit {
    /// Return `true` for every unit except hours, minutes, and seconds.
    pub fn is_date_based(&self) -> bool {
        !matches!(self, TimeUnit::Hours | TimeUnit::Minutes | TimeUnit::Seconds)
    }

    /// Length in years for the year multiples, `None` otherwise.
    pub fn years(&self) -> Option<i64> {
        match self {
            TimeUnit::Years => Some(1),
            TimeUnit::Decades => Some(10),
            TimeUnit::Centuries => Some(100),
            TimeUnit::Millennia => Some(1000),
            _ => None,
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_multiples() {
        assert_eq!(TimeUnit::Centuries.years(), Some(100));
        assert_eq!(TimeUnit::Months.years(), None);
        assert!(!TimeUnit::Minutes.is_date_based());
        assert_eq!(TimeUnit::Millennia.to_string(), "Millennia");
    }
}
