use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Human-facing date format, e.g. `Aug 18, 1962`.
pub const PREFERRED_DATE_FORMAT: &str = "%b %d, %Y";

/// Date format used in JSON records.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

const UNKNOWN: &str = "unknown";

/// A date known exactly, only by year, or not at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PartialDate {
  Exact(NaiveDate),
  Year(i32),
  #[default]
  Unknown,
}

impl PartialDate {
  /// Earliest day the value can stand for: the date itself, January 1st of
  /// the year, or nothing when unknown.
  pub fn earliest(&self) -> Option<NaiveDate> {
    match self {
      PartialDate::Exact(d) => Some(*d),
      PartialDate::Year(y) => NaiveDate::from_ymd_opt(*y, 1, 1),
      PartialDate::Unknown => None,
    }
  }

  pub fn year(&self) -> Option<i32> {
    match self {
      PartialDate::Exact(d) => Some(d.year()),
      PartialDate::Year(y) => Some(*y),
      PartialDate::Unknown => None,
    }
  }

  pub fn exact(&self) -> Option<NaiveDate> {
    match self {
      PartialDate::Exact(d) => Some(*d),
      _ => None,
    }
  }

  /// Orders the earliest day of `self` against `date`, `None` when unknown.
  ///
  /// Works on any `i32` year, including years too large for
  /// [`PartialDate::earliest`] to represent.
  pub fn cmp_date(&self, date: NaiveDate) -> Option<Ordering> {
    let start = match self {
      PartialDate::Exact(d) => (d.year(), d.ordinal()),
      PartialDate::Year(y) => (*y, 1),
      PartialDate::Unknown => return None,
    };
    Some(start.cmp(&(date.year(), date.ordinal())))
  }

  pub fn is_known(&self) -> bool {
    !matches!(self, PartialDate::Unknown)
  }
}

impl From<NaiveDate> for PartialDate {
  fn from(d: NaiveDate) -> Self {
    PartialDate::Exact(d)
  }
}

impl fmt::Display for PartialDate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PartialDate::Exact(d) => write!(f, "{}", d.format(ISO_DATE_FORMAT)),
      PartialDate::Year(y) => write!(f, "{y}"),
      PartialDate::Unknown => f.write_str(UNKNOWN),
    }
  }
}

// JSON shape: "1962-08-18" | 1962 | "unknown"
impl Serialize for PartialDate {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      PartialDate::Exact(d) => serializer.serialize_str(&date_to_json(*d)),
      PartialDate::Year(y) => serializer.serialize_i32(*y),
      PartialDate::Unknown => serializer.serialize_str(UNKNOWN),
    }
  }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PartialDateRepr {
  Year(i32),
  Text(String),
}

impl<'de> Deserialize<'de> for PartialDate {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    match PartialDateRepr::deserialize(deserializer)? {
      PartialDateRepr::Year(y) => Ok(PartialDate::Year(y)),
      PartialDateRepr::Text(s) if s == UNKNOWN => Ok(PartialDate::Unknown),
      PartialDateRepr::Text(s) => date_from_json(&s).map(PartialDate::Exact).map_err(serde::de::Error::custom),
    }
  }
}

/// Formats a date as `Aug 18, 1962`, or `unknown` when there is none.
pub fn format_date(date: Option<NaiveDate>) -> String {
  match date {
    Some(d) => d.format(PREFERRED_DATE_FORMAT).to_string(),
    None => UNKNOWN.to_string(),
  }
}

/// Parses a date written with [`PREFERRED_DATE_FORMAT`].
pub fn parse_preferred(s: &str) -> Result<NaiveDate, chrono::ParseError> {
  NaiveDate::parse_from_str(s.trim(), PREFERRED_DATE_FORMAT)
}

pub fn date_to_json(date: NaiveDate) -> String {
  date.format(ISO_DATE_FORMAT).to_string()
}

/// Parses a `YYYY-mm-dd` string.
pub fn date_from_json(iso_date: &str) -> Result<NaiveDate, chrono::ParseError> {
  NaiveDate::parse_from_str(iso_date.trim(), ISO_DATE_FORMAT)
}

/// Today's date in local time.
pub fn today() -> NaiveDate {
  chrono::Local::now().date_naive()
}
