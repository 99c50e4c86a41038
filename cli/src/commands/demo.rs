use std::path::{Path, PathBuf};

use anyhow::Context;
use bandroom_core::codec::{self, Record};
use bandroom_core::domain::{Band, Studio};
use bandroom_scanner::ScannerConfig;
use bandroom_storage::roster::write_roster;
use chrono::NaiveDate;
use tracing::{info, warn};

use crate::samples::{pink_floyd, the_beatles};

fn ymd(y: i32, m: u32, d: u32) -> anyhow::Result<NaiveDate> {
  NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| anyhow::anyhow!("invalid date {y}-{m}-{d}"))
}

/// Writes the Beatles line-up to `<dir>/the_beatles.txt`.
pub fn write_sample_roster(dir: &Path) -> anyhow::Result<PathBuf> {
  let path = dir.join("the_beatles.txt");
  write_roster(&path, &the_beatles().members).with_context(|| format!("writing roster {}", path.display()))?;
  Ok(path)
}

pub fn run(out: Option<PathBuf>) -> anyhow::Result<()> {
  let beatles = the_beatles();
  let floyd = pink_floyd();

  // Text form and back.
  println!("{beatles}\n");
  let reparsed: Band = beatles.to_string().parse()?;
  println!("parsed back equal: {}\n", reparsed == beatles);

  // Members, in order.
  for (i, member) in beatles.iter().enumerate() {
    println!("member {}: {}", i + 1, member.name);
  }
  println!();

  // JSON, single record and list.
  let json = codec::band_to_json(&beatles, true)?;
  println!("{json}\n");
  println!("{}\n", codec::band_from_json(&json)?);

  let list = codec::encode_all(&[Record::from(beatles.clone()), Record::from(floyd.clone())], true)?;
  println!("{list}\n");

  // Studios.
  let abbey_road = Studio::new("Abbey Road", "London", [beatles.clone(), floyd.clone()], ymd(1967, 1, 1)?, ymd(1967, 12, 31)?)?;
  println!("{abbey_road}\n");

  match Studio::new("Abbey Road", "London", [beatles, floyd], ymd(1963, 1, 1)?, ymd(1963, 12, 31)?) {
    Ok(studio) => println!("{studio}"),
    Err(e) => warn!(error = %e, "studio rejected"),
  }

  // Roster file, picked up by `import` when written to a record root.
  let dir = match out {
    Some(dir) => dir,
    None => ScannerConfig::load()?.roots.into_iter().next().context("no record roots configured")?,
  };
  let roster = write_sample_roster(&dir)?;
  info!(path = %roster.display(), "roster written");

  Ok(())
}
