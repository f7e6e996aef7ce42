//! Rolling rules for dates that land on non-business days.

/// How [`Calendar::adjust`](crate::Calendar::adjust) moves a non-business day.
///
/// "Month" always means the Ethiopian month, so a modified roll out of Pagume
/// turns back rather than spilling into Meskerem of the next year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BusinessDayConvention {
    /// Roll forward.
    #[default]
    Following,
    /// Roll forward, or backward if that leaves the month.
    ModifiedFollowing,
    /// Roll backward.
    Preceding,
    /// Roll backward, or forward if that leaves the month.
    ModifiedPreceding,
    /// Leave the date alone.
    Unadjusted,
}

impl BusinessDayConvention {
    /// The unmodified convention this one starts from.
    pub fn base(&self) -> Self {
        match self {
            Self::ModifiedFollowing => Self::Following,
            Self::ModifiedPreceding => Self::Preceding,
            other => *other,
        }
    }

    /// The convention to fall back on when the roll leaves the month.
    pub fn fallback(&self) -> Option<Self> {
        match self {
            Self::ModifiedFollowing => Some(Self::Preceding),
            Self::ModifiedPreceding => Some(Self::Following),
            _ => None,
        }
    }
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Following => "Following",
            Self::ModifiedFollowing => "Modified Following",
            Self::Preceding => "Preceding",
            Self::ModifiedPreceding => "Modified Preceding",
            Self::Unadjusted => "Unadjusted",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modified_conventions_pair_up() {
        let mf = BusinessDayConvention::ModifiedFollowing;
        assert_eq!(mf.base(), BusinessDayConvention::Following);
        assert_eq!(mf.fallback(), Some(BusinessDayConvention::Preceding));
        assert_eq!(BusinessDayConvention::Preceding.base(), BusinessDayConvention::Preceding);
        assert_eq!(BusinessDayConvention::Unadjusted.fallback(), None);
        assert_eq!(BusinessDayConvention::default(), BusinessDayConvention::Following);
        assert_eq!(mf.to_string(), "Modified Following");
    }
}
