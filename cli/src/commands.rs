pub mod band;
pub mod catalog;
pub mod demo;
pub mod paths;
pub mod roster;
pub mod studio;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bandroom")]
#[command(about = "Keep track of musicians, bands and recording studios.")]
pub struct CommandLine {
  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
  /// Walk through the sample bands: text, JSON and studio checks
  Demo {
    /// Directory for the sample roster instead of the first record root
    #[arg(long)]
    out: Option<PathBuf>,
  },
  /// Work with band files
  #[command(alias = "b")]
  Band {
    #[command(subcommand)]
    action: BandCommand,
  },
  /// Validate or register recording studios
  #[command(alias = "s")]
  Studio {
    #[command(subcommand)]
    action: StudioCommand,
  },
  /// Print the musicians of a roster file (one per line)
  #[command(alias = "r")]
  Roster { file: PathBuf },
  /// Import record files into the catalog
  #[command(alias = "i")]
  Import {
    /// Directory to import instead of the configured roots
    #[arg(long)]
    dir: Option<PathBuf>,
  },
  /// List the bands and studios in the catalog
  #[command(alias = "l")]
  List,
  /// Show where bandroom keeps its files
  Paths,
}

#[derive(Subcommand)]
pub enum BandCommand {
  /// Print a band JSON record as text
  Show { file: PathBuf },
  /// Parse a band text file and print it as JSON
  Parse {
    file: PathBuf,
    /// Require exact formed/split dates between 1960 and today
    #[arg(long)]
    strict: bool,
  },
}

#[derive(Args)]
pub struct Sessions {
  #[arg(long)]
  pub name: String,
  #[arg(long)]
  pub location: String,
  /// First session day (YYYY-MM-DD)
  #[arg(long)]
  pub start: NaiveDate,
  /// Last session day (YYYY-MM-DD)
  #[arg(long)]
  pub end: NaiveDate,
}

#[derive(Subcommand)]
pub enum StudioCommand {
  /// Check a studio built from band JSON files
  Check {
    #[command(flatten)]
    sessions: Sessions,
    /// Band JSON records
    bands: Vec<PathBuf>,
  },
  /// Book catalog bands into a studio and save it
  Register {
    #[command(flatten)]
    sessions: Sessions,
    /// Band names as stored in the catalog
    #[arg(long = "band", required = true)]
    bands: Vec<String>,
  },
}

impl CommandLine {
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
