use bandroom_config::PATHS;
use bandroom_scanner::ScannerConfig;
use bandroom_storage::StorageConfig;

pub fn show() -> anyhow::Result<()> {
  let storage = StorageConfig::load()?;
  let scanner = ScannerConfig::load()?;

  println!("project: {}", PATHS.project_dir().display());
  println!("config:  {}", PATHS.config_file().display());
  println!("data:    {}", PATHS.data_dir()?.display());
  println!("catalog: {}", storage.catalog_dir.display());
  for root in &scanner.roots {
    println!("records: {}", root.display());
  }
  Ok(())
}
