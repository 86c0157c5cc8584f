//! Runs a full inference pass over a row source.
//!
//! The first row is the header when `read_header` is set; the next row fixes
//! the column count. Row numbers used in errors are 1-based and include the
//! header row.

use log::{info, warn};

use crate::{
    catalog::Catalog,
    config::InferConfig,
    engine::Engine,
    error::InferError,
    naming::{positional_names, snake_case},
    resolve::{ResolvedSchema, resolve},
    row_source::RowSource,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InferenceStats {
    rows_read: usize,
    header_read: bool,
    sample_exhausted: bool,
}

impl InferenceStats {
    /// Data rows fed to the engine; the header is not counted.
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    pub fn header_read(&self) -> bool {
        self.header_read
    }

    /// True when the scan stopped because the sample limit was reached.
    pub fn sample_exhausted(&self) -> bool {
        self.sample_exhausted
    }
}

pub fn infer_schema<S: RowSource>(
    source: &mut S,
    config: &InferConfig,
) -> Result<ResolvedSchema, InferError> {
    infer_schema_with_stats(source, config).map(|(schema, _)| schema)
}

pub fn infer_schema_with_stats<S: RowSource>(
    source: &mut S,
    config: &InferConfig,
) -> Result<(ResolvedSchema, InferenceStats), InferError> {
    let catalog = Catalog::finalize(config)?;
    let mut row_number = 0usize;

    let header = if config.read_header {
        row_number += 1;
        let header = read_row(source, row_number)?
            .ok_or(InferError::EmptyInput { row: row_number })?;
        if !config.column_names.is_empty() {
            warn!("Ignoring explicit column names because a header row was read");
        }
        Some(header)
    } else {
        None
    };

    row_number += 1;
    let first_row =
        read_row(source, row_number)?.ok_or(InferError::EmptyInput { row: row_number })?;

    let names: Vec<String> = match header {
        Some(header) if config.snake_case => {
            header.iter().map(|name| snake_case(name)).collect()
        }
        Some(header) => header,
        None if !config.column_names.is_empty() => config.column_names.clone(),
        None => positional_names(first_row.len()),
    };
    if names.len() != first_row.len() {
        return Err(InferError::RowShape {
            row: row_number,
            expected: names.len(),
            found: first_row.len(),
        });
    }

    let mut engine = Engine::new(&catalog, names, config.detect_nulls);
    let mut sample_exhausted = false;
    engine.process_row(&first_row, row_number)?;
    loop {
        if config
            .sample
            .is_some_and(|limit| engine.rows_processed() >= limit)
        {
            sample_exhausted = true;
            break;
        }
        row_number += 1;
        let Some(row) = read_row(source, row_number)? else {
            break;
        };
        engine.process_row(&row, row_number)?;
    }

    let stats = InferenceStats {
        rows_read: engine.rows_processed(),
        header_read: config.read_header,
        sample_exhausted,
    };
    info!(
        "Scanned {} data row(s) across {} column(s)",
        stats.rows_read,
        engine.column_count()
    );
    let schema = resolve(&catalog, engine.columns(), config.table_name());
    Ok((schema, stats))
}

fn read_row<S: RowSource>(source: &mut S, row: usize) -> Result<Option<Vec<String>>, InferError> {
    source
        .read_row()
        .map_err(|err| InferError::row_read(row, err))
}
