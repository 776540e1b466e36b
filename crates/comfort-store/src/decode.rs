//! Per-field decoders for persisted values.
//!
//! Each decoder takes the raw stored string (or `None` when the key is absent)
//! and returns the validated value, or `None` when the value is absent or
//! malformed. Decoders never fail: callers fall back to the field's default.

use tracing::warn;

use comfort_types::{History, Unit, parse_temperature};

/// Decode a unit code. Only `"C"` and `"F"` are accepted.
pub fn decode_unit(raw: Option<&str>) -> Option<Unit> {
    let raw = raw?;
    match raw.parse() {
        Ok(unit) => Some(unit),
        Err(e) => {
            warn!("Ignoring stored unit: {}", e);
            None
        }
    }
}

/// Decode a decimal temperature string.
pub fn decode_number(raw: Option<&str>) -> Option<i32> {
    let raw = raw?;
    match parse_temperature(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring stored number: {}", e);
            None
        }
    }
}

/// Decode a JSON-encoded history array.
///
/// Anything other than a well-formed array of `{value, unit, time}` objects is
/// discarded as a whole.
pub fn decode_history(raw: Option<&str>) -> Option<History> {
    let raw = raw?;
    match serde_json::from_str::<History>(raw) {
        Ok(history) => Some(history),
        Err(e) => {
            warn!("Ignoring stored history: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_unit() {
        assert_eq!(decode_unit(Some("C")), Some(Unit::Celsius));
        assert_eq!(decode_unit(Some("F")), Some(Unit::Fahrenheit));
        assert_eq!(decode_unit(Some("f")), None);
        assert_eq!(decode_unit(Some("°F")), None);
        assert_eq!(decode_unit(None), None);
    }

    #[test]
    fn test_decode_number() {
        assert_eq!(decode_number(Some("22")), Some(22));
        assert_eq!(decode_number(Some("-3")), Some(-3));
        assert_eq!(decode_number(Some("19.5")), Some(20));
        assert_eq!(decode_number(Some("NaN")), None);
        assert_eq!(decode_number(Some("warm")), None);
        assert_eq!(decode_number(Some("")), None);
        assert_eq!(decode_number(None), None);
    }

    #[test]
    fn test_decode_history() {
        let raw = r#"[{"value":22,"unit":"°C","time":"2026-10-18 09:00:00"}]"#;
        let history = decode_history(Some(raw)).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().value, 22);

        assert_eq!(decode_history(Some("[]")), Some(History::new()));
        assert_eq!(decode_history(Some("[{")), None);
        assert_eq!(decode_history(Some("{}")), None);
        assert_eq!(decode_history(Some("null")), None);
        assert_eq!(decode_history(None), None);
    }
}
