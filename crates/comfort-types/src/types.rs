//! Core types for the comfort widget.

use core::fmt;
use core::str::FromStr;
use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Default canonical temperature in Celsius.
pub const DEFAULT_TEMPERATURE_C: i32 = 22;

/// Default lower comfort bound in Celsius.
pub const DEFAULT_MIN_C: i32 = 18;

/// Default upper comfort bound in Celsius.
pub const DEFAULT_MAX_C: i32 = 26;

/// Maximum number of saved readings kept in [`History`].
pub const HISTORY_CAPACITY: usize = 8;

/// Temperature display unit.
///
/// Only affects formatting. Temperatures are always held in Celsius.
///
/// # Display vs storage code
///
/// `Display` renders the symbol shown next to a value (`"°C"`), while
/// [`Unit::code`] is the single-letter form written to storage (`"C"`).
///
/// ```
/// use comfort_types::Unit;
///
/// assert_eq!(Unit::Fahrenheit.to_string(), "°F");
/// assert_eq!(Unit::Fahrenheit.code(), "F");
/// assert_eq!("C".parse::<Unit>().unwrap(), Unit::Celsius);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unit {
    /// Degrees Celsius (canonical).
    #[default]
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

impl Unit {
    /// Storage code, `"C"` or `"F"`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Unit::Celsius => "C",
            Unit::Fahrenheit => "F",
        }
    }

    /// Display symbol, `"°C"` or `"°F"`.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
        }
    }

    /// Convert a canonical Celsius value into this unit for display.
    ///
    /// ```
    /// use comfort_types::Unit;
    ///
    /// assert_eq!(Unit::Celsius.display_value(22), 22);
    /// assert_eq!(Unit::Fahrenheit.display_value(22), 72);
    /// ```
    #[must_use]
    pub fn display_value(self, celsius: i32) -> i32 {
        match self {
            Unit::Celsius => celsius,
            Unit::Fahrenheit => celsius_to_fahrenheit(celsius),
        }
    }
}

impl FromStr for Unit {
    type Err = ParseError;

    /// Parse a storage code. Only the exact strings `"C"` and `"F"` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Unit::Celsius),
            "F" => Ok(Unit::Fahrenheit),
            other => Err(ParseError::InvalidUnit(other.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Convert Celsius to Fahrenheit, rounding half up to the nearest integer.
///
/// ```
/// use comfort_types::celsius_to_fahrenheit;
///
/// assert_eq!(celsius_to_fahrenheit(22), 72);
/// assert_eq!(celsius_to_fahrenheit(-40), -40);
/// ```
#[must_use]
pub fn celsius_to_fahrenheit(celsius: i32) -> i32 {
    // C * 9/5 + 32 == (9C + 160) / 5
    saturate(round_half_up(9 * i64::from(celsius) + 160, 5))
}

/// Convert Fahrenheit to Celsius, rounding half up to the nearest integer.
///
/// ```
/// use comfort_types::fahrenheit_to_celsius;
///
/// assert_eq!(fahrenheit_to_celsius(72), 22);
/// assert_eq!(fahrenheit_to_celsius(32), 0);
/// ```
#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: i32) -> i32 {
    saturate(round_half_up(5 * (i64::from(fahrenheit) - 32), 9))
}

/// `round(num / den)` with ties toward positive infinity. `den` must be positive.
fn round_half_up(num: i64, den: i64) -> i64 {
    (2 * num + den).div_euclid(2 * den)
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Parse a decimal string into an integer temperature.
///
/// Surrounding whitespace is ignored. Fractional values are rounded half up.
/// Empty strings, non-numeric text, non-finite values and values outside the
/// `i32` range are rejected.
///
/// ```
/// use comfort_types::parse_temperature;
///
/// assert_eq!(parse_temperature("22").unwrap(), 22);
/// assert_eq!(parse_temperature(" 21.5 ").unwrap(), 22);
/// assert!(parse_temperature("warm").is_err());
/// assert!(parse_temperature("").is_err());
/// ```
pub fn parse_temperature(s: &str) -> Result<i32, ParseError> {
    let trimmed = s.trim();
    let invalid = || ParseError::InvalidNumber(s.to_string());

    if trimmed.is_empty() {
        return Err(invalid());
    }

    let value: f64 = trimmed.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }

    let rounded = (value + 0.5).floor();
    if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
        return Err(invalid());
    }

    // In range and integral after the checks above.
    #[allow(clippy::cast_possible_truncation)]
    Ok(rounded as i32)
}

/// A saved reading as shown in the history list.
///
/// `value` is the temperature as displayed when it was saved (already converted
/// to `unit`), and `unit` is the display label (`"°C"` / `"°F"`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryEntry {
    /// Displayed temperature value.
    pub value: i32,
    /// Unit label, e.g. `"°C"`.
    pub unit: String,
    /// Human-readable timestamp.
    pub time: String,
}

impl HistoryEntry {
    /// Create an entry for a Celsius reading displayed in `unit`.
    #[must_use]
    pub fn new(celsius: i32, unit: Unit, time: impl Into<String>) -> Self {
        Self {
            value: unit.display_value(celsius),
            unit: unit.symbol().to_string(),
            time: time.into(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} — {}", self.value, self.unit, self.time)
    }
}

/// Bounded list of saved readings, oldest first.
///
/// Holds at most [`HISTORY_CAPACITY`] entries. Pushing onto a full history
/// evicts the oldest entry.
///
/// ```
/// use comfort_types::{History, HistoryEntry, Unit};
///
/// let mut history = History::new();
/// for t in 0..10 {
///     history.push(HistoryEntry::new(t, Unit::Celsius, "now"));
/// }
/// assert_eq!(history.len(), 8);
/// assert_eq!(history.last().unwrap().value, 9);
/// assert_eq!(history.recent().next().unwrap().value, 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<HistoryEntry>", into = "Vec<HistoryEntry>")
)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, evicting the oldest one when full.
    ///
    /// Returns the evicted entry, if any.
    pub fn push(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        self.entries.push_back(entry);
        if self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_front()
        } else {
            None
        }
    }

    /// Most recently saved entry.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Entries newest first, as listed in the view.
    pub fn recent(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl From<Vec<HistoryEntry>> for History {
    /// Build a history from stored entries, keeping only the newest
    /// [`HISTORY_CAPACITY`].
    fn from(entries: Vec<HistoryEntry>) -> Self {
        let skip = entries.len().saturating_sub(HISTORY_CAPACITY);
        Self {
            entries: entries.into_iter().skip(skip).collect(),
        }
    }
}

impl From<History> for Vec<HistoryEntry> {
    fn from(history: History) -> Self {
        history.entries.into()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::collections::vec_deque::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
