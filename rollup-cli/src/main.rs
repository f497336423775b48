/*!
  Binary for the CLI of rollup
*/

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences
)]

mod cli;
mod error;
mod input;

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufRead, BufReader},
};

use clap::Parser;
use cli::{CliApp, Command, RecordArgs};
use colored::Colorize;
use error::CliError;
use input::{read_records, Record};
use rollup::{
    grouping::{gather_by, tally},
    number::Number,
    summary::{summarize, summarize_by, Summary},
};

/// Pairs the key column with the result of `value` for every record.
fn keyed<T>(
    records: &[Record],
    key_column: usize,
    mut value: impl FnMut(&Record) -> Result<T, CliError>,
) -> Result<Vec<(String, T)>, CliError> {
    records
        .iter()
        .map(|record| -> Result<(String, T), CliError> {
            Ok((record.field(key_column)?.to_string(), value(record)?))
        })
        .collect()
}

fn summary(records: &[Record], args: &RecordArgs) -> Result<serde_json::Value, CliError> {
    let value_column = args.value_column;

    let Some(key_column) = args.key_column else {
        let values = records
            .iter()
            .map(|record| record.number(value_column))
            .collect::<Result<Vec<Number>, _>>()?;

        return Ok(serde_json::to_value(summarize(values)?)?);
    };

    let pairs = keyed(records, key_column, |record| record.number(value_column))?;

    let summaries = summarize_by(pairs, |pair| pair.0.clone(), |pair| pair.1)?;
    let summaries: BTreeMap<String, Summary> = summaries.into_iter().collect();

    Ok(serde_json::to_value(summaries)?)
}

fn tally_keys(records: &[Record], args: &RecordArgs) -> Result<serde_json::Value, CliError> {
    let column = args.key_column.unwrap_or(args.value_column);
    let keys = records
        .iter()
        .map(|record| record.field(column).map(str::to_string))
        .collect::<Result<Vec<String>, _>>()?;

    let counts: BTreeMap<String, usize> = tally(keys, String::clone).into_iter().collect();

    Ok(serde_json::to_value(counts)?)
}

fn gather(records: &[Record], args: &RecordArgs) -> Result<serde_json::Value, CliError> {
    let key_column = args.key_column.ok_or(CliError::MissingKeyColumn {
        command: Command::Gather.name(),
    })?;
    let value_column = args.value_column;

    let pairs = keyed(records, key_column, |record| {
        record.field(value_column).map(str::to_string)
    })?;

    let groups: BTreeMap<String, Vec<String>> = gather_by(pairs, |pair| pair.0.clone())?
        .into_iter()
        .map(|(key, group)| (key, group.into_iter().map(|(_, value)| value).collect()))
        .collect();

    Ok(serde_json::to_value(groups)?)
}

fn run(cli: CliApp) -> Result<(), CliError> {
    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let file = File::open(path).map_err(|error| CliError::IoReading {
                error,
                filename: path.display().to_string(),
            })?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(std::io::stdin().lock()),
    };

    let records = read_records(reader, cli.records.delimiter, cli.records.skip_header)?;

    log::info!("running {}", cli.command.name());

    let result = match cli.command {
        Command::Summary => summary(&records, &cli.records)?,
        Command::Tally => tally_keys(&records, &cli.records)?,
        Command::Gather => gather(&records, &cli.records)?,
    };

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

fn main() {
    let cli = cli::CliApp::parse();

    cli.logging.initialize_logging();
    log::info!("Version: {}", clap::crate_version!());
    log::debug!("Input: {:?}", cli.input);

    run(cli).unwrap_or_else(|err| {
        log::error!("{} {err}", "error:".red().bold());
        std::process::exit(1)
    })
}
