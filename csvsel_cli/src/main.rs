mod args;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use csvsel_core::Engine;
use csvsel_core::error::CsvselError;
use std::fs::File;
use std::io::{self, BufWriter, Seek, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

const EX_USAGE: u8 = 64;
const EX_NOINPUT: u8 = 66;
const EX_OSERR: u8 = 71;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("unable to open input file {}: {source}", .path.display())]
    NoInput { path: PathBuf, source: io::Error },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EX_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("csvsel: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(e) = err.downcast_ref::<CsvselError>() {
        return u8::try_from(e.exit_code()).unwrap_or(EX_OSERR);
    }
    if err.downcast_ref::<CliError>().is_some() {
        return EX_NOINPUT;
    }
    EX_OSERR
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let engine = Engine::new(cli.engine_config());
    let text = cli.query_text();
    debug!(query = %text, "query text");

    let query = engine.parse(&text)?;
    if cli.debug {
        let tree = serde_json::to_string_pretty(&query).context("rendering parsed query")?;
        eprintln!("{tree}");
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let summary = match &cli.file {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::NoInput {
                path: path.clone(),
                source,
            })?;
            engine.run(&query, file, &mut out)?
        }
        None if query.order.is_some() => {
            // ORDER BY re-reads rows by offset, so stdin goes to a temp file first
            let mut spool = tempfile::tempfile().context("creating spool file for stdin")?;
            let copied = io::copy(&mut io::stdin().lock(), &mut spool)
                .context("spooling stdin")?;
            spool.rewind().context("rewinding spool file")?;
            debug!(bytes = copied, "spooled stdin for ORDER BY");
            engine.run(&query, spool, &mut out)?
        }
        None => engine.run_streaming(&query, io::stdin().lock(), &mut out)?,
    };

    out.flush()?;
    debug!(
        rows_read = summary.rows_read,
        rows_matched = summary.rows_matched,
        rows_written = summary.rows_written,
        "query complete"
    );
    Ok(())
}
