use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "sailsim")]
#[command(about = "Headless sailing vessel simulation", long_about = None)]
pub struct Args {
    /// Path to a TOML scenario; built-in defaults when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Override the number of ticks to run
    #[arg(long)]
    pub ticks: Option<u64>,
    /// Write a bincode telemetry recording to this path
    #[arg(long)]
    pub record: Option<PathBuf>,
    /// Run ticks back to back instead of pacing at tick_hz
    #[arg(long, default_value_t = false)]
    pub fast: bool,
}
