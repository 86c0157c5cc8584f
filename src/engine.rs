//! Candidate elimination: narrows each column's possible types row by row.

use log::trace;

use crate::{catalog::Catalog, enum_tracker::EnumTracker, error::InferError, type_set::TypeSet};

#[derive(Debug, Clone)]
pub struct ColumnState {
    pub name: String,
    pub possible: TypeSet,
    pub nullable: bool,
    pub enum_values: EnumTracker,
}

impl ColumnState {
    fn new(name: String, possible: TypeSet) -> Self {
        Self {
            name,
            possible,
            nullable: false,
            enum_values: EnumTracker::default(),
        }
    }
}

/// Owns the per-column state of one inference run.
///
/// Rows must be fed in source order: enum detection depends on the values
/// already seen, so reordering rows can change the outcome.
#[derive(Debug)]
pub struct Engine<'a> {
    catalog: &'a Catalog,
    detect_nulls: bool,
    columns: Vec<ColumnState>,
    rows_processed: usize,
}

impl<'a> Engine<'a> {
    pub fn new(catalog: &'a Catalog, column_names: Vec<String>, detect_nulls: bool) -> Self {
        let all = catalog.all();
        let columns = column_names
            .into_iter()
            .map(|name| ColumnState::new(name, all))
            .collect();
        Self {
            catalog,
            detect_nulls,
            columns,
            rows_processed: 0,
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn rows_processed(&self) -> usize {
        self.rows_processed
    }

    pub fn columns(&self) -> &[ColumnState] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<ColumnState> {
        self.columns
    }

    /// Narrows every column with one row. `row_number` is only used for
    /// error reporting and tracing.
    pub fn process_row<S: AsRef<str>>(
        &mut self,
        row: &[S],
        row_number: usize,
    ) -> Result<(), InferError> {
        if row.len() != self.columns.len() {
            return Err(InferError::RowShape {
                row: row_number,
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        for (column, value) in self.columns.iter_mut().zip(row) {
            let value = value.as_ref();
            if value.is_empty() && self.detect_nulls {
                column.nullable = true;
                continue;
            }
            // Snapshot first: a type is only tested if it survived earlier rows.
            for idx in column.possible.iter() {
                let Some(descriptor) = self.catalog.get(idx) else {
                    continue;
                };
                if !descriptor.detector.accepts(value, &mut column.enum_values) {
                    trace!(
                        "Row {row_number}: column '{}' rules out {} on '{value}'",
                        column.name, descriptor.name
                    );
                    column.possible.remove(idx);
                }
            }
        }
        self.rows_processed += 1;
        Ok(())
    }
}
