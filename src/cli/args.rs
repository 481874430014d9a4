use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "mihrab",
    version,
    about = "Prayer times, live clock and qibla helper for Kadapa"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print today's timetable with the current and next prayer
    Times {
        /// Emit the timetable as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show your coordinates and the Kaaba reference point
    Qibla,
    /// Show or set the persisted color theme
    Theme {
        /// "light" or "dark"; prints the active theme when omitted
        value: Option<String>,
    },
}
