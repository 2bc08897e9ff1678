use std::path::PathBuf;

use clap::{ArgAction, Parser};
use nuke_version_parser::collector::{RunOptions, run};

#[derive(Parser)]
#[command(name = "nuke-version-parser")]
#[command(version, about = "Fetch all Nuke versions and write the result to JSON")]
struct Cli {
    /// Directory the JSON catalogs are written to
    #[arg(long, alias = "write_dir", env = "JSON_WRITE_DIRECTORY")]
    write_dir: PathBuf,

    /// JSON file overriding the discovery settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also log to a file (default location when no path is given)
    #[arg(long, num_args = 0..=1)]
    log_file: Option<Option<PathBuf>>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = RunOptions {
        write_dir: cli.write_dir,
        config_path: cli.config,
        log_file: cli.log_file,
        json_logs: cli.json_logs,
        verbose: cli.verbose,
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(options))
}
