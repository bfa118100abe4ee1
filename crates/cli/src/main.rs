//! add-scan-inclusions - ensure .zed/settings.json scans the files we need

use anyhow::Result;
use clap::{ArgAction, Parser};
use cli::{LogConfig, run};
use inclusions_core::UpdaterConfig;

#[derive(Parser, Debug)]
#[command(name = "add-scan-inclusions", version)]
#[command(about = "Add scan inclusions to .zed/settings.json")]
#[command(after_help = "\
EXAMPLES:
  add-scan-inclusions         # Update quietly (warnings only)
  add-scan-inclusions -v      # Report added entries
  add-scan-inclusions -vv     # Also report entries that already exist")]
struct Cli {
  /// Increase verbosity (-v for INFO, -vv for DEBUG)
  #[arg(short, long, action = ArgAction::Count)]
  verbose: u8,
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  let log = LogConfig::from_verbosity(cli.verbose);

  run(&UpdaterConfig::default(), &log)?;
  Ok(())
}
