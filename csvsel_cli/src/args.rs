//! Command-line arguments
//!
//! csvsel [-f <file>] [-d] [--legacy-quoting] [--lenient-quotes] <query...>

use clap::Parser;
use csvsel_core::config::{EngineConfig, QuoteMode, QuoteStyle};
use std::path::PathBuf;

/// Run SQL-like queries over CSV data
#[derive(Parser, Debug)]
#[command(name = "csvsel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file (default: standard input)
    #[arg(short = 'f', long = "file", env = "CSVSEL_FILE")]
    pub file: Option<PathBuf>,

    /// Print the parsed query and per-row decisions to stderr
    #[arg(short = 'd', long, env = "CSVSEL_DEBUG")]
    pub debug: bool,

    /// Quote output fields containing spaces instead of double quotes
    #[arg(long, env = "CSVSEL_LEGACY_QUOTING")]
    pub legacy_quoting: bool,

    /// Keep stray quotes as data instead of failing
    #[arg(long, env = "CSVSEL_LENIENT_QUOTES")]
    pub lenient_quotes: bool,

    /// Query words, joined with single spaces
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub query: Vec<String>,
}

impl Cli {
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }

    pub fn engine_config(&self) -> EngineConfig {
        let style = if self.legacy_quoting {
            QuoteStyle::Legacy
        } else {
            QuoteStyle::Rfc4180
        };
        let mode = if self.lenient_quotes {
            QuoteMode::Lenient
        } else {
            QuoteMode::Strict
        };
        EngineConfig::default()
            .with_debug(self.debug)
            .with_quote_style(style)
            .with_quote_mode(mode)
    }
}
