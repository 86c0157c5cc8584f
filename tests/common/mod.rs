#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv_pgschema::{InferError, MemoryRows, ResolvedSchema, config::InferConfig, infer_schema};
use tempfile::{TempDir, tempdir};

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }
}

/// Runs inference over in-memory rows (header first when the config reads one).
pub fn infer_rows(config: &InferConfig, rows: &[&[&str]]) -> Result<ResolvedSchema, InferError> {
    let mut source = MemoryRows::new(rows.iter().map(|row| row.iter().copied()));
    infer_schema(&mut source, config)
}

/// Resolved type of `column`, panicking when the column is missing.
pub fn sql_type<'a>(schema: &'a ResolvedSchema, column: &str) -> &'a str {
    &schema
        .column(column)
        .unwrap_or_else(|| panic!("column {column} present"))
        .sql_type
}
