mod cli;
mod config;
mod db;
mod location;
mod models;
mod timetable;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use rusqlite::Connection;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use db::migrations::run_migrations;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    // First run: materialize the default config so users have a file to edit
    if !AppConfig::config_path()?.exists() {
        config.save().context("Writing default config")?;
    }

    // Ensure data directory exists and open DB
    AppConfig::ensure_data_dir()?;
    let db_path = AppConfig::db_path()?;
    let conn =
        Connection::open(&db_path).with_context(|| format!("Opening database at {:?}", db_path))?;

    // Run migrations on every startup
    run_migrations(&conn)?;

    match cli.command {
        Some(Commands::Times { json }) => {
            handlers::handle_times(&config, json)?;
        }
        Some(Commands::Qibla) => {
            handlers::handle_qibla(&config)?;
        }
        Some(Commands::Theme { value }) => {
            handlers::handle_theme(&conn, value.as_deref())?;
        }

        // No subcommand → launch the TUI
        None => {
            tui::app::run(conn, config)?;
        }
    }

    Ok(())
}
