//! Onboard CLI Application
//!
//! Command-line interface for replacing onboarding steps on stored company
//! documents.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use onboard_core::MigratorBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        collection,
        no_color,
        command,
    } = Args::parse();

    let migrator = MigratorBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize document store")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Onboard started");

    let cli = Cli::new(migrator, renderer, collection);
    match command {
        Migrate(args) => cli.migrate(args).await,
        Steps { command } => cli.handle_step_command(command).await,
        Doc { command } => cli.handle_doc_command(command).await,
    }
}
