use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The disability percentage a body of evidence supports.
///
/// Front-ends hand this over as `null`, a number, a numeric string or a
/// `"low-high"` range string. It is normalized once, here, so downstream code
/// matches on variants instead of inspecting runtime types.
///
/// A bound of `None` is a value that failed to parse as a base-10 integer.
/// It never compares equal to, below or above anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SupportedRating {
    #[default]
    Absent,
    Exact(Option<i64>),
    Range(Option<i64>, Option<i64>),
}

impl SupportedRating {
    /// Normalize a string value. Anything containing `-` is a range whose
    /// bounds are the first two `-`-separated pieces; bounds are not
    /// reordered, so `"50-10"` covers nothing.
    pub fn parse(raw: &str) -> Self {
        if raw.contains('-') {
            let mut pieces = raw.split('-');
            let low = pieces.next().and_then(parse_int);
            let high = pieces.next().and_then(parse_int);
            SupportedRating::Range(low, high)
        } else {
            SupportedRating::Exact(parse_int(raw))
        }
    }

    /// Normalize an arbitrary JSON value. Types other than null, number and
    /// string carry no rating.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => SupportedRating::Absent,
            serde_json::Value::Number(n) => SupportedRating::Exact(integral(n)),
            serde_json::Value::String(s) => SupportedRating::parse(s),
            _ => SupportedRating::Absent,
        }
    }

    /// The exact percentage, when this is a single well-formed value.
    pub fn percent(&self) -> Option<i64> {
        match self {
            SupportedRating::Exact(value) => *value,
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, SupportedRating::Absent)
    }
}

impl From<i64> for SupportedRating {
    fn from(value: i64) -> Self {
        SupportedRating::Exact(Some(value))
    }
}

impl From<&str> for SupportedRating {
    fn from(value: &str) -> Self {
        SupportedRating::parse(value)
    }
}

impl<T: Into<SupportedRating>> From<Option<T>> for SupportedRating {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SupportedRating::Absent)
    }
}

impl fmt::Display for SupportedRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupportedRating::Absent => f.write_str("none"),
            SupportedRating::Exact(value) => write_bound(f, *value),
            SupportedRating::Range(low, high) => {
                write_bound(f, *low)?;
                f.write_str("-")?;
                write_bound(f, *high)
            }
        }
    }
}

fn write_bound(f: &mut fmt::Formatter<'_>, bound: Option<i64>) -> fmt::Result {
    match bound {
        Some(n) => write!(f, "{n}"),
        None => f.write_str("NaN"),
    }
}

impl Serialize for SupportedRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SupportedRating::Absent => serializer.serialize_none(),
            SupportedRating::Exact(Some(n)) => serializer.serialize_i64(*n),
            other => serializer.collect_str(other),
        }
    }
}

impl<'de> Deserialize<'de> for SupportedRating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(SupportedRating::from_json(&value))
    }
}

/// Base-10 integer prefix parse: leading whitespace is skipped, an optional
/// sign is honoured, and the longest run of ASCII digits is taken. Trailing
/// garbage is ignored; no digits at all yields `None`.
pub fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn integral(n: &serde_json::Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    // Whole floats like 30.0 still compare equal to 30.
    n.as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
        .map(|f| f as i64)
}
