use std::fs;
use std::path::Path;

use anyhow::Context;
use bandroom_core::codec;
use bandroom_core::dates;
use bandroom_core::domain::Band;

pub fn show(file: &Path) -> anyhow::Result<()> {
  let json = fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
  let band = codec::band_from_json(&json).with_context(|| format!("decoding {}", file.display()))?;

  println!("{band}");
  Ok(())
}

pub fn parse(file: &Path, strict: bool) -> anyhow::Result<()> {
  let text = fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;

  let parsed = if strict { Band::parse_dated(&text, dates::today()) } else { text.parse::<Band>() };
  let band = parsed.with_context(|| format!("parsing {}", file.display()))?;

  println!("{}", codec::band_to_json(&band, true)?);
  Ok(())
}
