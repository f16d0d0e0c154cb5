use anyhow::Result;
use clap::{Parser, ValueEnum};

mod commands;
mod cowrie;
mod utils;

#[derive(Parser)]
#[command(name = "cowrie-log")]
#[command(about = "Cowrie honeypot log analysis tools", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the Cowrie log file (.gz and .zst are decompressed automatically)
    logfile: String,

    /// Which analysis to run
    #[arg(long, value_enum)]
    task: Task,

    /// Minimum failed attempts for an IP to be reported (failed-logins only)
    #[arg(long, default_value_t = 1)]
    min_count: usize,

    /// Minimum distinct IPs for a fingerprint to be reported (identify-bots only)
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u64).range(1..))]
    min_ips: u64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Task {
    /// Rank source IPs by failed login attempts
    FailedLogins,
    /// Count new connections per minute
    Connections,
    /// List credential pairs that worked, with distinct IP counts
    SuccessfulCreds,
    /// Flag hassh fingerprints shared across many source IPs
    IdentifyBots,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.task {
        Task::FailedLogins => commands::failed_logins::run(&cli.logfile, cli.min_count),
        Task::Connections => commands::connections::run(&cli.logfile),
        Task::SuccessfulCreds => commands::successful_creds::run(&cli.logfile),
        Task::IdentifyBots => commands::identify_bots::run(&cli.logfile, cli.min_ips as usize),
    }
}
