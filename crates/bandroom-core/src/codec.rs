//! JSON records.
//!
//! Every entity travels inside a single-key envelope naming its type:
//!
//! ```json
//! { "__Band__": { "name": "The Beatles", "members": [...], "formed": "1962-08-18", "split": "1970-04-10" } }
//! ```
//!
//! A file may hold one envelope or an array of them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Band, Musician, Studio};

#[derive(Debug, Error)]
pub enum CodecError {
  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("expected a {expected} record, found a {found} record")]
  UnexpectedRecord { expected: &'static str, found: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Record {
  #[serde(rename = "__Musician__")]
  Musician(Musician),
  #[serde(rename = "__Band__")]
  Band(Band),
  #[serde(rename = "__Studio__")]
  Studio(Studio),
}

impl Record {
  pub fn kind(&self) -> &'static str {
    match self {
      Record::Musician(_) => "musician",
      Record::Band(_) => "band",
      Record::Studio(_) => "studio",
    }
  }

  pub fn name(&self) -> &str {
    match self {
      Record::Musician(m) => &m.name,
      Record::Band(b) => &b.name,
      Record::Studio(s) => s.name(),
    }
  }
}

impl From<Musician> for Record {
  fn from(m: Musician) -> Self {
    Record::Musician(m)
  }
}

impl From<Band> for Record {
  fn from(b: Band) -> Self {
    Record::Band(b)
  }
}

impl From<Studio> for Record {
  fn from(s: Studio) -> Self {
    Record::Studio(s)
  }
}

fn to_string<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, CodecError> {
  let json = if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
  Ok(json)
}

pub fn encode(record: &Record, pretty: bool) -> Result<String, CodecError> {
  to_string(record, pretty)
}

pub fn decode(json: &str) -> Result<Record, CodecError> {
  Ok(serde_json::from_str(json)?)
}

/// Encodes a list of records as a JSON array.
pub fn encode_all(records: &[Record], pretty: bool) -> Result<String, CodecError> {
  to_string(records, pretty)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
  Many(Vec<Record>),
  One(Record),
}

/// Decodes a JSON array of records, or a single record.
pub fn decode_all(json: &str) -> Result<Vec<Record>, CodecError> {
  // Untagged enums swallow the inner error, so retry the single form to
  // surface a useful message.
  match serde_json::from_str::<OneOrMany>(json) {
    Ok(OneOrMany::Many(records)) => Ok(records),
    Ok(OneOrMany::One(record)) => Ok(vec![record]),
    Err(_) if json.trim_start().starts_with('[') => Ok(serde_json::from_str::<Vec<Record>>(json)?),
    Err(_) => Ok(vec![decode(json)?]),
  }
}

pub fn musician_to_json(musician: &Musician, pretty: bool) -> Result<String, CodecError> {
  to_string(&Record::Musician(musician.clone()), pretty)
}

pub fn musician_from_json(json: &str) -> Result<Musician, CodecError> {
  match decode(json)? {
    Record::Musician(m) => Ok(m),
    other => Err(CodecError::UnexpectedRecord { expected: "musician", found: other.kind() }),
  }
}

pub fn band_to_json(band: &Band, pretty: bool) -> Result<String, CodecError> {
  to_string(&Record::Band(band.clone()), pretty)
}

pub fn band_from_json(json: &str) -> Result<Band, CodecError> {
  match decode(json)? {
    Record::Band(b) => Ok(b),
    other => Err(CodecError::UnexpectedRecord { expected: "band", found: other.kind() }),
  }
}

pub fn studio_to_json(studio: &Studio, pretty: bool) -> Result<String, CodecError> {
  to_string(&Record::Studio(studio.clone()), pretty)
}

pub fn studio_from_json(json: &str) -> Result<Studio, CodecError> {
  match decode(json)? {
    Record::Studio(s) => Ok(s),
    other => Err(CodecError::UnexpectedRecord { expected: "studio", found: other.kind() }),
  }
}
