//! CAV CLI - Command line tool for inspecting climate anomaly map data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cav-cli",
    version,
    about = "Climate anomaly viewer data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: cav_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("starting cav-cli");
    cav_cmd::run(cli.command)
}
