#![forbid(unsafe_code)]

use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use lanekit_args::{Environment, LaneCommand, UpdateConfig};
use lanekit_config::{Lanefile, ToolSection};
use lanekit_runner::{HostPlatform, Runner, ToolSettings, TOOL_NAME};

type CliResult = Result<(), Box<dyn Error>>;

#[derive(Debug, Parser)]
#[command(name = "lanekit", about = "Typed fastlane invocations for build pipelines")]
#[command(version)]
struct Cli {
    /// Path to the lanekit.toml holding the subcommand configurations
    #[arg(long, global = true, default_value = "lanekit.toml")]
    config: PathBuf,

    /// Print the command line instead of running fastlane
    #[arg(long, global = true)]
    dry_run: bool,

    /// Override the fastlane executable path
    #[arg(long, global = true)]
    tool_path: Option<PathBuf>,

    /// Override the working directory
    #[arg(long, global = true)]
    working_directory: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sync certificates and provisioning profiles ([match] section)
    Match,
    /// Generate a push-notification certificate ([pem] section)
    Pem,
    /// Upload a build to TestFlight ([pilot] section)
    Pilot,
    /// Push metadata and binaries to the App Store ([deliver] section)
    Deliver,
    /// Upload a listing to Google Play ([supply] section)
    Supply,
    /// Update the fastlane installation itself
    Update,
}

fn main() {
    if let Err(msg) = real_main() {
        eprintln!("error: {msg}");
        process::exit(1);
    }
}

fn real_main() -> CliResult {
    let cli = Cli::parse();

    // `update` needs no section, so a missing lanefile only fails once a
    // subcommand actually asks for its configuration.
    let lanefile = if cli.config.exists() {
        Lanefile::from_path(&cli.config)?
    } else {
        Lanefile::default()
    };

    let settings = tool_settings(&lanefile.tool, &cli);

    match &cli.command {
        Command::Match => execute(lanefile.match_section()?, settings, cli.dry_run),
        Command::Pem => execute(lanefile.pem_section()?, settings, cli.dry_run),
        Command::Pilot => execute(lanefile.pilot_section()?, settings, cli.dry_run),
        Command::Deliver => execute(lanefile.deliver_section()?, settings, cli.dry_run),
        Command::Supply => execute(lanefile.supply_section()?, settings, cli.dry_run),
        Command::Update => execute(&UpdateConfig::default(), settings, cli.dry_run),
    }
}

/// Merge the `[tool]` section with command-line overrides; flags win.
fn tool_settings(section: &ToolSection, cli: &Cli) -> ToolSettings {
    ToolSettings {
        tool_path: cli.tool_path.clone().or_else(|| section.tool_path.clone()),
        working_directory: cli
            .working_directory
            .clone()
            .or_else(|| section.working_directory.clone()),
        environment: section.environment.clone(),
    }
}

fn execute(command: &dyn LaneCommand, settings: ToolSettings, dry_run: bool) -> CliResult {
    if dry_run {
        // A dry run skips the host gate and tool resolution: it only shows
        // what would be passed to fastlane.
        let env = match &settings.working_directory {
            Some(dir) => Environment::new(dir.clone()),
            None => Environment::current()?,
        };
        println!("{TOOL_NAME} {}", command.args(&env).render());
        return Ok(());
    }

    let runner = Runner::new(settings, &HostPlatform::current())?;
    runner.run(command)?;
    Ok(())
}
