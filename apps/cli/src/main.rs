//! munsort CLI — committee-document classification and link rewriting.
//!
//! Infers document types from plain-text layout signals, rebuilds and
//! formats resolution clause trees, and rewrites packaged-document
//! hyperlinks into citations.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
