use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::enum_tracker::{DEFAULT_ENUM_COUNT, DEFAULT_ENUM_LENGTH};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Infer a PostgreSQL table definition from a CSV file",
    long_about = None
)]
pub struct Cli {
    /// Input CSV file to inspect (`-` reads stdin)
    pub input: PathBuf,
    /// Convert header names to snake_case
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub snake: bool,
    /// Consider only this many data rows of the input (0 means full scan)
    #[arg(long, default_value_t = 0)]
    pub sample: usize,
    /// Comma-separated column names, used when the input has no header
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,
    /// Treat the first row of the file as a header
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub header: bool,
    /// Exclude this comma-separated list of SQL types from consideration
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,
    /// Name of the generated table (defaults to the input file name)
    #[arg(long)]
    pub table: Option<String>,
    /// Consider enum as a type
    #[arg(long)]
    pub enums: bool,
    /// Maximum distinct values for an enum column
    #[arg(long, default_value_t = DEFAULT_ENUM_COUNT)]
    pub enum_count: usize,
    /// Maximum length of an enum value
    #[arg(long, default_value_t = DEFAULT_ENUM_LENGTH)]
    pub enum_length: usize,
    /// Mark columns with empty fields as nullable
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub notnull: bool,
    /// Include a psql \copy command after the table definition
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub copy: bool,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Output file for the generated DDL (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// Also write the resolved schema (.json for JSON, YAML otherwise)
    #[arg(short, long)]
    pub meta: Option<PathBuf>,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}
