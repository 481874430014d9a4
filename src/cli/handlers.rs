use anyhow::Result;
use chrono::Local;
use rusqlite::Connection;
use std::str::FromStr;

use crate::config::AppConfig;
use crate::db::repository::ThemeRepo;
use crate::location::{qibla_report, ConfigLocation};
use crate::models::ThemeName;
use crate::timetable::{current_and_next, kadapa, minutes_until};
use crate::utils::format::{display_value, format_duration_mins};
use crate::utils::hijri;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(config: &AppConfig, json: bool) -> Result<()> {
    let table = kadapa();

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    let now = Local::now().naive_local();
    let status = current_and_next(&table, now.time());

    println!();
    println_colored!(
        GOLD,
        "  Prayer Times — {} ({})",
        config.location.name,
        now.format("%Y-%m-%d")
    );
    println_colored!(DIM, "  {}", hijri::approximate_date());
    println!();

    for record in table.records() {
        if status.current == Some(record.key) {
            println_colored!(GREEN, "  {} · now", record.key.display_name());
        } else if status.next == record.key {
            println_colored!(AMBER, "  {} · next", record.key.display_name());
        } else {
            println_colored!(BOLD, "  {}", record.key.display_name());
        }
        for field in &record.fields {
            println_colored!(DIM, "    {:<16}{}", field.label, display_value(field.value));
        }
        println!();
    }

    if let Some(mins) = minutes_until(&table, status.next, now.time()) {
        println_colored!(
            AMBER,
            "  Next: {} in {}",
            status.next.display_name(),
            format_duration_mins(mins)
        );
        println!();
    }
    Ok(())
}

// ─── Qibla ───────────────────────────────────────────────────────────────────

pub fn handle_qibla(config: &AppConfig) -> Result<()> {
    let source = ConfigLocation::from_config(&config.location);
    println!();
    for line in qibla_report(Some(&source)).lines() {
        println_colored!(BOLD, "  {}", line);
    }
    println!();
    Ok(())
}

// ─── Theme ───────────────────────────────────────────────────────────────────

pub fn handle_theme(conn: &Connection, value: Option<&str>) -> Result<()> {
    match value {
        None => {
            let theme = ThemeRepo::load(conn)?;
            println!("{} {}", theme.as_str(), theme.icon());
        }
        Some(v) => {
            let theme = ThemeName::from_str(v)?;
            ThemeRepo::store(conn, theme)?;
            println_colored!(GREEN, "Theme set to {} {}", theme.as_str(), theme.icon());
        }
    }
    Ok(())
}
