mod commands;
mod logging;
mod reporter;
mod samples;

use commands::{BandCommand, CommandLine, Commands, StudioCommand, band, catalog, demo, paths, roster, studio};

fn main() -> anyhow::Result<()> {
  let commands = CommandLine::parse_args();

  logging::init_logging();

  match commands.command {
    Commands::Demo { out } => demo::run(out),
    Commands::Band { action } => match action {
      BandCommand::Show { file } => band::show(&file),
      BandCommand::Parse { file, strict } => band::parse(&file, strict),
    },
    Commands::Studio { action } => match action {
      StudioCommand::Check { sessions, bands } => studio::check(&sessions, &bands),
      StudioCommand::Register { sessions, bands } => studio::register(&sessions, &bands),
    },
    Commands::Roster { file } => roster::show(&file),
    Commands::Import { dir } => catalog::import(dir),
    Commands::List => catalog::list(),
    Commands::Paths => paths::show(),
  }
}
