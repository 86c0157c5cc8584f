pub mod catalog;
pub mod cli;
pub mod config;
pub mod ddl;
pub mod detect;
pub mod engine;
pub mod enum_tracker;
pub mod error;
pub mod infer;
pub mod io_utils;
pub mod keywords;
pub mod naming;
pub mod quote;
pub mod resolve;
pub mod row_source;
pub mod type_set;

use std::{env, io::Write, sync::OnceLock};

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, debug, info};

use crate::{
    cli::Cli,
    config::InferConfig,
    ddl::{CopyCommand, DdlScript},
    row_source::CsvRowSource,
};

pub use crate::{
    config::{DetectionRule, TypeSpec},
    error::InferError,
    infer::{InferenceStats, infer_schema, infer_schema_with_stats},
    resolve::{EnumType, ResolvedColumn, ResolvedSchema},
    row_source::{MemoryRows, RowSource},
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("csv_pgschema", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    handle_infer(&cli)
}

fn handle_infer(cli: &Cli) -> Result<()> {
    let delimiter = io_utils::resolve_input_delimiter(&cli.input, cli.delimiter);
    let encoding = io_utils::resolve_encoding(cli.input_encoding.as_deref())?;
    info!(
        "Inferring schema for '{}' with delimiter '{}' and encoding {}",
        cli.input.display(),
        printable_delimiter(delimiter),
        encoding.name()
    );

    let config = config_from_cli(cli);
    debug!("Inference configuration: {config:?}");
    let reader = io_utils::open_csv_reader_from_path(&cli.input, delimiter)?;
    let mut source = CsvRowSource::new(reader, encoding);
    let (schema, stats) = infer_schema_with_stats(&mut source, &config)
        .with_context(|| format!("Inferring schema from {:?}", cli.input))?;

    let copy = cli.copy.then(|| CopyCommand {
        source: cli.input.display().to_string(),
        header: cli.header,
        delimiter,
    });
    let script = DdlScript::new(&schema, copy.as_ref());
    let mut writer = io_utils::open_text_writer(cli.output.as_deref())?;
    writer
        .write_all(script.render().as_bytes())
        .context("Writing DDL output")?;
    writer.flush().context("Flushing DDL output")?;

    if let Some(meta) = &cli.meta {
        schema
            .save(meta)
            .with_context(|| format!("Writing schema to {meta:?}"))?;
    }
    info!(
        "Inferred {} column(s) for table '{}' from {} row(s)",
        schema.columns.len(),
        schema.table_name,
        stats.rows_read()
    );
    Ok(())
}

fn config_from_cli(cli: &Cli) -> InferConfig {
    let non_empty = |values: &[String]| {
        values
            .iter()
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
    };
    InferConfig {
        snake_case: cli.snake,
        sample: (cli.sample > 0).then_some(cli.sample),
        column_names: non_empty(&cli.columns),
        detect_nulls: cli.notnull,
        read_header: cli.header,
        enum_count: if cli.enums { cli.enum_count } else { 0 },
        enum_length: cli.enum_length,
        exclude: non_empty(&cli.exclude),
        table_name: Some(
            cli.table
                .clone()
                .unwrap_or_else(|| naming::table_name_for(&cli.input)),
        ),
        ..InferConfig::default()
    }
}

pub(crate) fn printable_delimiter(delimiter: u8) -> String {
    match delimiter {
        b',' => ",".to_string(),
        b'\t' => "\\t".to_string(),
        b'\n' => "\\n".to_string(),
        other => (other as char).to_string(),
    }
}
