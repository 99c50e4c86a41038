use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::dates::{PartialDate, format_date, parse_preferred};
use crate::errors::ParseError;

const BORN_ON: &str = ", born on ";
const BORN_IN: &str = ", born in ";
const BIRTH_UNKNOWN: &str = ", birth date unknown";

/// A person playing in one or more bands.
///
/// The one-line text form is
/// `John Lennon [rhythm guitar] (British), born on Oct 09, 1940`; the
/// bracketed instrument and the parenthesised nationality are optional.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Musician {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub instrument: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub nationality: Option<String>,
  #[serde(default)]
  pub born: PartialDate,
}

impl Musician {
  #[must_use]
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), instrument: None, nationality: None, born: PartialDate::Unknown }
  }

  #[must_use]
  pub fn with_instrument(mut self, instrument: impl Into<String>) -> Self {
    self.instrument = Some(instrument.into());
    self
  }

  #[must_use]
  pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
    self.nationality = Some(nationality.into());
    self
  }

  #[must_use]
  pub fn born(mut self, born: impl Into<PartialDate>) -> Self {
    self.born = born.into();
    self
  }
}

impl fmt::Display for Musician {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.name)?;
    if let Some(instrument) = &self.instrument {
      write!(f, " [{instrument}]")?;
    }
    if let Some(nationality) = &self.nationality {
      write!(f, " ({nationality})")?;
    }
    match self.born {
      PartialDate::Exact(d) => write!(f, "{BORN_ON}{}", format_date(Some(d))),
      PartialDate::Year(y) => write!(f, "{BORN_IN}{y}"),
      PartialDate::Unknown => f.write_str(BIRTH_UNKNOWN),
    }
  }
}

/// Splits a trailing `<open>...<close>` group off `head`.
fn take_group(head: &str, open: char, close: char) -> (&str, Option<String>) {
  let Some(body) = head.strip_suffix(close) else {
    return (head, None);
  };
  match body.rfind(open) {
    Some(idx) => (body[..idx].trim_end(), Some(body[idx + open.len_utf8()..].trim().to_string())),
    None => (head, None),
  }
}

impl FromStr for Musician {
  type Err = ParseError;

  /// Parses the text form produced by `Display`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let line = s.trim();
    if line.is_empty() {
      return Err(ParseError::Empty);
    }

    let (head, born) = if let Some((head, date)) = line.rsplit_once(BORN_ON) {
      let d = parse_preferred(date).map_err(|source| ParseError::Date { value: date.to_string(), source })?;
      (head, PartialDate::Exact(d))
    } else if let Some((head, year)) = line.rsplit_once(BORN_IN) {
      let y = year.trim().parse::<i32>().map_err(|_| ParseError::Year(year.to_string()))?;
      (head, PartialDate::Year(y))
    } else if let Some(head) = line.strip_suffix(BIRTH_UNKNOWN) {
      (head, PartialDate::Unknown)
    } else {
      return Err(ParseError::Musician(line.to_string()));
    };

    let (head, nationality) = take_group(head.trim_end(), '(', ')');
    let (head, instrument) = take_group(head, '[', ']');

    let name = head.trim();
    if name.is_empty() {
      return Err(ParseError::Musician(line.to_string()));
    }

    Ok(Self { name: name.to_string(), instrument, nationality, born })
  }
}
