use anyhow::Result;
use clap::Parser;
use tracing::info;

use sim::{build_sim_app, load_config, run_ticks, Args, Config};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut cfg = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    if let Some(ticks) = args.ticks {
        cfg.ticks = ticks;
    }
    if let Some(path) = &args.record {
        cfg.record = Some(path.clone());
    }
    info!(?cfg, "Simulation config loaded");

    let ticks = cfg.ticks;
    let mut app = build_sim_app(cfg)?;
    if args.fast {
        run_ticks(&mut app, ticks);
    } else {
        app.run();
    }
    Ok(())
}
