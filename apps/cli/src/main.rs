mod commands;
mod main_lib;
mod render;

use clap::Parser;
use commands::Cli;
use finmate_api::cancel_pair;
use finmate_core::AppConfig;
use main_lib::{build_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    init_tracing(&config);
    let state = build_state(&config)?;

    // Ctrl-C drops whatever request is in flight.
    let (cancel_handle, cancel_token) = cancel_pair();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupted, cancelling request");
            cancel_handle.cancel();
        }
    });

    let lines = commands::run(cli, &state, &cancel_token).await?;
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
