//! NameSync CLI - renames Factorio mod folders to match their info.json

pub mod console;

use clap::Parser;

use crate::mods::{LocatorConfig, locate_mods_directory, process_mods_directory};
use crate::report::Reporter;

use console::{ConsoleReporter, StdinPrompt};

#[derive(Parser)]
#[command(name = "namesync")]
#[command(about = "Renames Factorio mod folders to match their info.json", long_about = None)]
struct Cli {
    /// Skip the default mods directory probe and enter a path manually
    #[arg(long, visible_alias = "no-auto")]
    manual: bool,
}

/// Run the NameSync CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let reporter = ConsoleReporter;

    reporter.info("Welcome to the directory Name Synchronizer for Factorio, or NameSync for short.");
    reporter.info(
        "This tool will rename mod folders based on the 'name' and 'version' fields in their 'info.json' files.",
    );
    reporter.info("It is recommended to run this tool with Factorio closed to avoid issues.");

    let config = LocatorConfig {
        force_manual: cli.manual,
        default_path: None,
    };

    let mods_dir = match locate_mods_directory(&config, &mut StdinPrompt, &reporter) {
        Ok(dir) => dir,
        Err(err) => {
            // Fatal for the run; diagnostics only, no distinct exit code.
            reporter.error(&err.to_string());
            return Ok(());
        }
    };

    let summary = process_mods_directory(&mods_dir, &reporter)?;
    reporter.info(&format!(
        "Done: {} renamed, {} already correct, {} skipped, {} failed.",
        summary.renamed(),
        summary.up_to_date(),
        summary.skipped(),
        summary.failed()
    ));

    Ok(())
}
