use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

use crate::dates::PartialDate;
use crate::domain::band::Band;

/// Rejections raised while booking bands into a studio.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StudioError {
  /// The recording sessions start after they end.
  #[error("session start date ({start}) after session end date ({end}).")]
  RecordingDate { start: NaiveDate, end: NaiveDate },

  /// A band formed on or after the last session day.
  #[error("band started performing together {formed}, after the end of the recording sessions ({end})")]
  BandStartDate { band: String, formed: PartialDate, end: NaiveDate },
}

/// A recording studio with the bands booked for one run of sessions.
///
/// The session window and the band start dates are checked once, in
/// [`Studio::new`]; fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StudioRecord", into = "StudioRecord")]
pub struct Studio {
  name: String,
  location: String,
  start_date: NaiveDate,
  end_date: NaiveDate,
  bands: Vec<Band>,
}

impl Studio {
  pub fn new(
    name: impl Into<String>,
    location: impl Into<String>,
    bands: impl IntoIterator<Item = Band>,
    start_date: NaiveDate,
    end_date: NaiveDate,
  ) -> Result<Self, StudioError> {
    if start_date > end_date {
      return Err(StudioError::RecordingDate { start: start_date, end: end_date });
    }

    let bands: Vec<Band> = bands.into_iter().collect();
    if let Some(late) = bands.iter().find(|b| !formed_before(b, end_date)) {
      return Err(StudioError::BandStartDate { band: late.name.clone(), formed: late.formed, end: end_date });
    }

    Ok(Self { name: name.into(), location: location.into(), start_date, end_date, bands })
  }

  /// Sessions from Jan 1, 1962 to Dec 31, 1970.
  pub fn with_default_sessions(
    name: impl Into<String>,
    location: impl Into<String>,
    bands: impl IntoIterator<Item = Band>,
  ) -> Result<Self, StudioError> {
    let (start, end) = default_sessions();
    Self::new(name, location, bands, start, end)
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn location(&self) -> &str {
    &self.location
  }

  pub fn start_date(&self) -> NaiveDate {
    self.start_date
  }

  pub fn end_date(&self) -> NaiveDate {
    self.end_date
  }

  pub fn bands(&self) -> &[Band] {
    &self.bands
  }
}

fn default_sessions() -> (NaiveDate, NaiveDate) {
  let start = NaiveDate::from_ymd_opt(1962, 1, 1).unwrap_or(NaiveDate::MIN);
  let end = NaiveDate::from_ymd_opt(1970, 12, 31).unwrap_or(NaiveDate::MAX);
  (start, end)
}

// Unknown formation dates cannot contradict the session window.
fn formed_before(band: &Band, end: NaiveDate) -> bool {
  band.formed.cmp_date(end).is_none_or(|o| o == Ordering::Less)
}

/// True when the band formed strictly inside `(start, end)`.
pub fn band_formed_within(band: &Band, start: NaiveDate, end: NaiveDate) -> bool {
  band.formed.cmp_date(start) == Some(Ordering::Greater) && band.formed.cmp_date(end) == Some(Ordering::Less)
}

impl fmt::Display for Studio {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let bands: Vec<&str> = self.bands.iter().map(|b| b.name.as_str()).collect();
    writeln!(f, "\"{}\" studio, {}", self.name, self.location)?;
    writeln!(f, "Recording sessions: {} - {}", self.start_date, self.end_date)?;
    write!(f, "Bands: {}", bands.join(", "))
  }
}

/// Wire shape of a studio; decoding goes back through [`Studio::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StudioRecord {
  name: String,
  location: String,
  start_date: NaiveDate,
  end_date: NaiveDate,
  #[serde(default)]
  bands: Vec<Band>,
}

impl TryFrom<StudioRecord> for Studio {
  type Error = StudioError;

  fn try_from(r: StudioRecord) -> Result<Self, Self::Error> {
    Studio::new(r.name, r.location, r.bands, r.start_date, r.end_date)
  }
}

impl From<Studio> for StudioRecord {
  fn from(s: Studio) -> Self {
    StudioRecord {
      name: s.name,
      location: s.location,
      start_date: s.start_date,
      end_date: s.end_date,
      bands: s.bands,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::musician::Musician;

  fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn beatles() -> Band {
    Band::new(
      "The Beatles",
      [Musician::new("John Lennon"), Musician::new("Paul McCartney")],
      ymd(1962, 8, 18),
      Some(PartialDate::Exact(ymd(1970, 4, 10))),
    )
  }

  fn pink_floyd() -> Band {
    Band::new(
      "Pink Floyd",
      [Musician::new("Roger Waters"), Musician::new("Nick Mason")],
      ymd(1965, 2, 12),
      Some(PartialDate::Exact(ymd(1995, 3, 14))),
    )
  }

  #[test]
  fn builds_and_renders() {
    let abbey_road = Studio::new("Abbey Road", "London", [beatles(), pink_floyd()], ymd(1967, 1, 1), ymd(1967, 12, 31))
      .unwrap();

    assert_eq!(
      abbey_road.to_string(),
      "\"Abbey Road\" studio, London\nRecording sessions: 1967-01-01 - 1967-12-31\nBands: The Beatles, Pink Floyd"
    );
    assert_eq!(abbey_road.bands().len(), 2);
  }

  #[test]
  fn rejects_inverted_sessions() {
    let err = Studio::new("Abbey Road", "London", [beatles()], ymd(1968, 1, 1), ymd(1967, 1, 1)).unwrap_err();

    assert_eq!(err, StudioError::RecordingDate { start: ymd(1968, 1, 1), end: ymd(1967, 1, 1) });
    assert_eq!(err.to_string(), "session start date (1968-01-01) after session end date (1967-01-01).");
  }

  #[test]
  fn rejects_first_band_formed_after_sessions() {
    let err = Studio::new("Abbey Road", "London", [beatles(), pink_floyd()], ymd(1963, 1, 1), ymd(1963, 12, 31))
      .unwrap_err();

    assert_eq!(
      err,
      StudioError::BandStartDate {
        band: "Pink Floyd".into(),
        formed: PartialDate::Exact(ymd(1965, 2, 12)),
        end: ymd(1963, 12, 31)
      }
    );
    assert_eq!(
      err.to_string(),
      "band started performing together 1965-02-12, after the end of the recording sessions (1963-12-31)"
    );
  }

  #[test]
  fn formed_on_end_date_is_rejected() {
    let err = Studio::new("Abbey Road", "London", [beatles()], ymd(1962, 1, 1), ymd(1962, 8, 18));
    assert!(matches!(err, Err(StudioError::BandStartDate { .. })));
  }

  #[test]
  fn year_and_unknown_formation_dates() {
    let by_year = Band::new("Stones", [], PartialDate::Year(1962), None);
    let unknown = Band::new("Ghosts", [], PartialDate::Unknown, None);

    assert!(Studio::new("Olympic", "London", [by_year.clone(), unknown], ymd(1962, 6, 1), ymd(1962, 6, 2)).is_ok());
    assert!(Studio::new("Olympic", "London", [by_year], ymd(1961, 6, 1), ymd(1962, 1, 1)).is_err());
  }

  #[test]
  fn far_future_formation_year_is_rejected() {
    let future = Band::new("Time Travellers", [], PartialDate::Year(300_000), None);

    let err = Studio::with_default_sessions("Abbey Road", "London", [future.clone()]).unwrap_err();
    assert!(matches!(err, StudioError::BandStartDate { formed: PartialDate::Year(300_000), .. }));
    assert!(!band_formed_within(&future, ymd(1962, 1, 1), ymd(1970, 12, 31)));
  }

  #[test]
  fn json_with_out_of_range_year_is_rejected() {
    let json = r#"{"name":"Abbey Road","location":"London","start_date":"1962-01-01","end_date":"1970-12-31",
      "bands":[{"name":"Time Travellers","members":[],"formed":2147483647,"split":null}]}"#;
    let err = serde_json::from_str::<Studio>(json).unwrap_err();
    assert!(err.to_string().contains("after the end of the recording sessions"));
  }

  #[test]
  fn default_sessions_cover_the_sixties() {
    let studio = Studio::with_default_sessions("Abbey Road", "London", [beatles()]).unwrap();
    assert_eq!(studio.start_date(), ymd(1962, 1, 1));
    assert_eq!(studio.end_date(), ymd(1970, 12, 31));
  }

  #[test]
  fn formed_within_is_strict() {
    assert!(band_formed_within(&beatles(), ymd(1962, 1, 1), ymd(1963, 1, 1)));
    assert!(!band_formed_within(&beatles(), ymd(1962, 8, 18), ymd(1963, 1, 1)));
    assert!(!band_formed_within(&Band::new("Ghosts", [], PartialDate::Unknown, None), ymd(1900, 1, 1), ymd(2000, 1, 1)));
  }

  #[test]
  fn json_decoding_revalidates() {
    let json = r#"{"name":"Abbey Road","location":"London","start_date":"1970-01-01","end_date":"1969-01-01","bands":[]}"#;
    let err = serde_json::from_str::<Studio>(json).unwrap_err();
    assert!(err.to_string().contains("session start date"));
  }
}
