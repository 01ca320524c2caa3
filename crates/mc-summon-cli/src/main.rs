//! `mc-summon`: run summon payloads through the extractor from a shell.
//!
//! ```text
//! mc-summon entity '{"CustomName": "Bob", "NoGravity": true}'
//! mc-summon item --format json @sword.json
//! mc-summon command --origin 0,64,0 zombie world ~ ~ ~ '{"Glowing": true}'
//! ```

mod cli;
mod config;
mod output;

use std::fs;
use std::io::{self, Read, Write};

use clap::Parser;
use eyre::{Result, WrapErr, bail};
use mc_summon::{Extractor, parse_summon_args};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use output::{Report, write_report};

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("mc_summon=info".parse()?)
                .add_directive("mc_summon_cli=info".parse()?),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = config::load_options(&cli)?;
    let extractor = Extractor::with_options(options);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Entity { json } => {
            let entity = extractor.entity_from_str(&read_payload(json)?)?;
            write_report(&mut out, cli.format, &Report::Entity(&entity))?;
        }

        Commands::Item { json } => {
            let item = extractor.item_from_str(&read_payload(json)?)?;
            write_report(&mut out, cli.format, &Report::Item(&item))?;
        }

        Commands::Command { origin, args } => {
            let origin = match origin.as_deref() {
                None => [0.0; 3],
                Some(&[x, y, z]) => [x, y, z],
                Some(other) => bail!("--origin takes x,y,z, got {} values", other.len()),
            };

            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            let command = parse_summon_args(&args)?;
            let position = command.location.resolve(origin);
            info!(entity = %command.entity, world = ?command.location.world(), "parsed summon command");

            if command.is_item() {
                let item = command.extract_item(&extractor)?;
                let report = Report::Command {
                    command: &command,
                    position,
                    summoned: Box::new(Report::Item(&item)),
                };
                write_report(&mut out, cli.format, &report)?;
            } else {
                let entity = command.extract_entity(&extractor)?;
                let report = Report::Command {
                    command: &command,
                    position,
                    summoned: Box::new(Report::Entity(&entity)),
                };
                write_report(&mut out, cli.format, &report)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// The payload argument itself, `@PATH` for a file, or stdin for `-`.
fn read_payload(arg: &str) -> Result<String> {
    if let Some(path) = arg.strip_prefix('@') {
        return fs::read_to_string(path).wrap_err_with(|| format!("failed to read payload from {path}"));
    }
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut payload = String::new();
    io::stdin()
        .read_to_string(&mut payload)
        .wrap_err("failed to read payload from stdin")?;
    Ok(payload)
}
