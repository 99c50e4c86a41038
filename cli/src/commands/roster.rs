use std::path::Path;

use anyhow::Context;
use bandroom_storage::roster::read_roster;

pub fn show(file: &Path) -> anyhow::Result<()> {
  let musicians = read_roster(file).with_context(|| format!("reading roster {}", file.display()))?;

  for m in &musicians {
    println!("{m}");
  }
  Ok(())
}
