use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::dates::{PartialDate, format_date, parse_preferred};
use crate::domain::musician::Musician;
use crate::errors::ParseError;

const FORMED_ON: &str = "The band was formed on ";
const FORMED_IN: &str = "The band was formed in ";
const FORMED_ON_STILL_TOGETHER: &str = "The band has been formed on ";
const FORMED_IN_STILL_TOGETHER: &str = "The band has been formed in ";
const FORMED_UNKNOWN: &str = "It is unknown when the band has been formed.";
const SPLIT_ON: &str = "The band split up on ";
const SPLIT_IN: &str = "The band split up in ";
const STILL_TOGETHER: &str = "The band is still together.";
const SPLIT_UNKNOWN: &str = "It is unknown if the band is still together.";
const MEMBERS_UNKNOWN: &str = "members unknown";

/// A music group: its members in order plus when it formed and split up.
///
/// `split == None` means the band is still together, which is different from
/// `Some(PartialDate::Unknown)` (nobody knows whether it split).
///
/// Text form, one item per line:
///
/// ```text
/// The Beatles
/// <TAB>John Lennon [rhythm guitar] (British), born on Oct 09, 1940
/// <TAB>...
/// The band was formed on Aug 18, 1962
/// The band split up on Apr 10, 1970
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Band {
  pub name: String,
  #[serde(default)]
  pub members: Vec<Musician>,
  #[serde(default)]
  pub formed: PartialDate,
  #[serde(default)]
  pub split: Option<PartialDate>,
}

/// Bands are the same band when name and line-up match; dates are not
/// compared.
impl PartialEq for Band {
  fn eq(&self, other: &Self) -> bool {
    self.name == other.name && self.members == other.members
  }
}

impl Eq for Band {}

impl Band {
  pub fn new(
    name: impl Into<String>,
    members: impl IntoIterator<Item = Musician>,
    formed: impl Into<PartialDate>,
    split: Option<PartialDate>,
  ) -> Self {
    Self { name: name.into(), members: members.into_iter().collect(), formed: formed.into(), split }
  }

  pub fn is_still_together(&self) -> bool {
    self.split.is_none()
  }

  /// Members in line-up order.
  pub fn iter(&self) -> std::slice::Iter<'_, Musician> {
    self.members.iter()
  }

  /// Career dates are accepted strictly between Jan 1, 1960 and `today`.
  pub fn is_career_date_valid(date: NaiveDate, today: NaiveDate) -> bool {
    let earliest = NaiveDate::from_ymd_opt(1960, 1, 1).unwrap_or(NaiveDate::MIN);
    earliest < date && date < today
  }

  /// Parses the text form, additionally requiring exact formed and split
  /// dates inside the accepted career range.
  pub fn parse_dated(text: &str, today: NaiveDate) -> Result<Self, ParseError> {
    let band: Band = text.parse()?;

    let formed = band.formed.exact().ok_or(ParseError::NotDated("formed"))?;
    let split = band.split.and_then(|s| s.exact()).ok_or(ParseError::NotDated("split"))?;

    for (field, date) in [("formed", formed), ("split", split)] {
      if !Self::is_career_date_valid(date, today) {
        return Err(ParseError::DateOutOfRange { field, date });
      }
    }

    Ok(band)
  }

  fn formed_line(&self) -> String {
    let together = self.is_still_together();
    match self.formed {
      PartialDate::Exact(d) => {
        let phrase = if together { FORMED_ON_STILL_TOGETHER } else { FORMED_ON };
        format!("{phrase}{}", format_date(Some(d)))
      }
      PartialDate::Year(y) => {
        let phrase = if together { FORMED_IN_STILL_TOGETHER } else { FORMED_IN };
        format!("{phrase}{y}")
      }
      PartialDate::Unknown => FORMED_UNKNOWN.to_string(),
    }
  }

  fn split_line(&self) -> String {
    match self.split {
      Some(PartialDate::Exact(d)) => format!("{SPLIT_ON}{}", format_date(Some(d))),
      Some(PartialDate::Year(y)) => format!("{SPLIT_IN}{y}"),
      Some(PartialDate::Unknown) => SPLIT_UNKNOWN.to_string(),
      None => STILL_TOGETHER.to_string(),
    }
  }
}

impl<'a> IntoIterator for &'a Band {
  type Item = &'a Musician;
  type IntoIter = std::slice::Iter<'a, Musician>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl fmt::Display for Band {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", self.name)?;
    if self.members.is_empty() {
      writeln!(f, "{MEMBERS_UNKNOWN}")?;
    }
    for m in &self.members {
      writeln!(f, "\t{m}")?;
    }
    writeln!(f, "{}", self.formed_line())?;
    f.write_str(&self.split_line())
  }
}

fn parse_exact(value: &str) -> Result<PartialDate, ParseError> {
  parse_preferred(value)
    .map(PartialDate::Exact)
    .map_err(|source| ParseError::Date { value: value.to_string(), source })
}

fn parse_year(value: &str) -> Result<PartialDate, ParseError> {
  value.trim().parse::<i32>().map(PartialDate::Year).map_err(|_| ParseError::Year(value.to_string()))
}

fn parse_formed_line(line: &str) -> Result<PartialDate, ParseError> {
  if line == FORMED_UNKNOWN {
    return Ok(PartialDate::Unknown);
  }
  if let Some(d) = line.strip_prefix(FORMED_ON).or_else(|| line.strip_prefix(FORMED_ON_STILL_TOGETHER)) {
    return parse_exact(d);
  }
  if let Some(y) = line.strip_prefix(FORMED_IN).or_else(|| line.strip_prefix(FORMED_IN_STILL_TOGETHER)) {
    return parse_year(y);
  }
  Err(ParseError::UnexpectedLine(line.to_string()))
}

fn parse_split_line(line: &str) -> Result<Option<PartialDate>, ParseError> {
  match line {
    STILL_TOGETHER => Ok(None),
    SPLIT_UNKNOWN => Ok(Some(PartialDate::Unknown)),
    _ => {
      if let Some(d) = line.strip_prefix(SPLIT_ON) {
        parse_exact(d).map(Some)
      } else if let Some(y) = line.strip_prefix(SPLIT_IN) {
        parse_year(y).map(Some)
      } else {
        Err(ParseError::UnexpectedLine(line.to_string()))
      }
    }
  }
}

impl FromStr for Band {
  type Err = ParseError;

  /// Parses the text form produced by `Display`; member lines become
  /// [`Musician`]s. Whether the formed line says "was" or "has been" is not
  /// checked against the split line.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
      lines.pop();
    }

    let (name, rest) = lines.split_first().ok_or(ParseError::Empty)?;
    let name = name.trim();
    if name.is_empty() {
      return Err(ParseError::Empty);
    }

    let (split_line, rest) = rest.split_last().ok_or(ParseError::MissingLine("split"))?;
    let (formed_line, member_lines) = rest.split_last().ok_or(ParseError::MissingLine("formed"))?;

    let members = match member_lines {
      [only] if only.trim() == MEMBERS_UNKNOWN => Vec::new(),
      _ => member_lines
        .iter()
        .map(|line| match line.strip_prefix('\t') {
          Some(m) => m.parse::<Musician>(),
          None => Err(ParseError::UnexpectedLine(line.to_string())),
        })
        .collect::<Result<Vec<_>, _>>()?,
    };

    Ok(Self {
      name: name.to_string(),
      members,
      formed: parse_formed_line(formed_line.trim())?,
      split: parse_split_line(split_line.trim())?,
    })
  }
}
