// The inference wrapper (ml) has no CLI surface — it is
// constructed by downstream training code with fitted objects —
// so the binary itself never calls it.
#![allow(dead_code)]

mod application;
mod cli;
mod data;
mod domain;
mod infra;
mod ml;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("phishnet_pipeline=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
