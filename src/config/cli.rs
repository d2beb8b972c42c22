use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "maritime")]
#[command(about = "Maritime assistant: Q&A, port weather and voyage estimates")]
pub struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "maritime.toml")]
    pub config: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Ask a maritime question
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Check weather at a port or city
    Weather {
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,
    },

    /// Estimate distance and sailing time between two ports
    Voyage {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        /// Speed over ground in knots (defaults to voyage.default_speed_knots)
        #[arg(long)]
        speed: Option<f64>,

        /// Use the built-in port table instead of the geocoding API
        #[arg(long)]
        offline: bool,
    },
}
