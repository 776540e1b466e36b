//! Comfort range and status derivation.
//!
//! A [`ComfortRange`] is a pair of Celsius bounds. Evaluating a temperature
//! against it yields a [`ComfortStatus`], which maps onto one of three badge
//! levels ([`StatusLevel`]).
//!
//! # Example
//!
//! ```
//! use comfort_types::{ComfortRange, ComfortStatus, StatusLevel};
//!
//! let range = ComfortRange::default();
//! assert_eq!(range.evaluate(22), ComfortStatus::Comfort);
//! assert_eq!(range.evaluate(10), ComfortStatus::TooCold);
//! assert_eq!(range.evaluate(10).level(), StatusLevel::Bad);
//!
//! let inverted = ComfortRange::new(26, 18);
//! assert_eq!(inverted.evaluate(22).label(), "Fix comfort range");
//! ```

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_MAX_C, DEFAULT_MIN_C};

/// Visual level of the status badge.
///
/// Ordered by severity: `Ok < Warn < Bad`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StatusLevel {
    /// Temperature is within the comfort range.
    Ok,
    /// The comfort range itself is unusable.
    Warn,
    /// Temperature is outside the comfort range.
    Bad,
}

impl StatusLevel {
    /// Short lowercase name (`"ok"`, `"warn"`, `"bad"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StatusLevel::Ok => "ok",
            StatusLevel::Warn => "warn",
            StatusLevel::Bad => "bad",
        }
    }
}

/// Comfort status of a temperature relative to a [`ComfortRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ComfortStatus {
    /// Within the range (boundaries included).
    Comfort,
    /// Below the lower bound.
    TooCold,
    /// Above the upper bound.
    TooHot,
    /// A bound is missing or `min >= max`.
    InvalidRange,
}

impl ComfortStatus {
    /// Badge label shown to the user.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ComfortStatus::Comfort => "Comfort",
            ComfortStatus::TooCold => "Too cold",
            ComfortStatus::TooHot => "Too hot",
            ComfortStatus::InvalidRange => "Fix comfort range",
        }
    }

    /// Badge level for this status.
    #[must_use]
    pub fn level(&self) -> StatusLevel {
        match self {
            ComfortStatus::Comfort => StatusLevel::Ok,
            ComfortStatus::InvalidRange => StatusLevel::Warn,
            ComfortStatus::TooCold | ComfortStatus::TooHot => StatusLevel::Bad,
        }
    }
}

impl fmt::Display for ComfortStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Comfort bounds in Celsius.
///
/// A bound is `None` when it came from input that was not a number. Ranges are
/// stored as given; [`ComfortRange::evaluate`] reports unusable ranges as
/// [`ComfortStatus::InvalidRange`] instead of rejecting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComfortRange {
    /// Lower bound.
    pub min: Option<i32>,
    /// Upper bound.
    pub max: Option<i32>,
}

impl Default for ComfortRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_C, DEFAULT_MAX_C)
    }
}

impl ComfortRange {
    /// Create a range from two numeric bounds.
    #[must_use]
    pub fn new(min: i32, max: i32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Both bounds, if the range is usable (`min < max`).
    #[must_use]
    pub fn bounds(&self) -> Option<(i32, i32)> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min < max => Some((min, max)),
            _ => None,
        }
    }

    /// Whether the range can be used for a comfort determination.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.bounds().is_some()
    }

    /// Evaluate a Celsius temperature against this range.
    #[must_use]
    pub fn evaluate(&self, celsius: i32) -> ComfortStatus {
        let Some((min, max)) = self.bounds() else {
            return ComfortStatus::InvalidRange;
        };

        if celsius < min {
            ComfortStatus::TooCold
        } else if celsius > max {
            ComfortStatus::TooHot
        } else {
            ComfortStatus::Comfort
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range() {
        let range = ComfortRange::default();
        assert_eq!(range.min, Some(18));
        assert_eq!(range.max, Some(26));
        assert!(range.is_valid());
    }

    #[test]
    fn test_evaluate_default_range() {
        let range = ComfortRange::default();
        assert_eq!(range.evaluate(22), ComfortStatus::Comfort);
        assert_eq!(range.evaluate(10), ComfortStatus::TooCold);
        assert_eq!(range.evaluate(30), ComfortStatus::TooHot);
    }

    #[test]
    fn test_boundaries_are_comfortable() {
        let range = ComfortRange::new(18, 26);
        assert_eq!(range.evaluate(18), ComfortStatus::Comfort);
        assert_eq!(range.evaluate(26), ComfortStatus::Comfort);
        assert_eq!(range.evaluate(17), ComfortStatus::TooCold);
        assert_eq!(range.evaluate(27), ComfortStatus::TooHot);
    }

    #[test]
    fn test_inverted_range_warns_regardless_of_temperature() {
        let range = ComfortRange::new(26, 18);
        for t in [-50, 10, 18, 22, 26, 30, 100] {
            assert_eq!(range.evaluate(t), ComfortStatus::InvalidRange);
        }
    }

    #[test]
    fn test_equal_bounds_warn() {
        let range = ComfortRange::new(20, 20);
        assert!(!range.is_valid());
        assert_eq!(range.evaluate(20), ComfortStatus::InvalidRange);
    }

    #[test]
    fn test_missing_bound_warns() {
        let range = ComfortRange {
            min: None,
            max: Some(26),
        };
        assert_eq!(range.evaluate(22), ComfortStatus::InvalidRange);

        let range = ComfortRange {
            min: Some(18),
            max: None,
        };
        assert_eq!(range.evaluate(22), ComfortStatus::InvalidRange);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ComfortStatus::Comfort.label(), "Comfort");
        assert_eq!(ComfortStatus::TooCold.label(), "Too cold");
        assert_eq!(ComfortStatus::TooHot.label(), "Too hot");
        assert_eq!(ComfortStatus::InvalidRange.label(), "Fix comfort range");
        assert_eq!(ComfortStatus::TooHot.to_string(), "Too hot");
    }

    #[test]
    fn test_status_levels() {
        assert_eq!(ComfortStatus::Comfort.level(), StatusLevel::Ok);
        assert_eq!(ComfortStatus::InvalidRange.level(), StatusLevel::Warn);
        assert_eq!(ComfortStatus::TooCold.level(), StatusLevel::Bad);
        assert_eq!(ComfortStatus::TooHot.level(), StatusLevel::Bad);
        assert!(StatusLevel::Bad > StatusLevel::Warn);
        assert_eq!(StatusLevel::Warn.as_str(), "warn");
    }
}
