use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use relmatch_cli::render::{write_csv, write_json, write_table};
use relmatch_cli::{commands, Cli, Command, Format};
use relmatch_core::config::Config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load_from(&cli.config_dir, &cli.env_name).map_err(|e| {
        eprintln!("Error loading config: {e}");
        e
    })?;
    let kb = relmatch_kb::builtin();

    match &cli.command {
        Command::Score(args) => {
            let results = commands::score(&config, kb, args)?;
            let mut out: Box<dyn Write> = match &args.output {
                Some(path) => Box::new(BufWriter::new(
                    File::create(path).with_context(|| format!("creating {}", path.display()))?,
                )),
                None => Box::new(io::stdout().lock()),
            };
            match args.format {
                Format::Table => write_table(&mut out, &results)?,
                Format::Json => write_json(&mut out, &results)?,
                Format::Csv => write_csv(&mut out, &results)?,
            }
            out.flush()?;
            if let Some(path) = &args.output {
                info!(path = %path.display(), "results written");
            }
        }
        Command::Lookup { resource_type } => {
            commands::lookup(&mut io::stdout().lock(), kb, resource_type)?;
        }
    }
    Ok(())
}
