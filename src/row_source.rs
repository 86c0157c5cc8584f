//! Row producers consumed by an inference run.

use std::{collections::VecDeque, convert::Infallible, io::Read};

use encoding_rs::Encoding;

use crate::{error::SourceError, io_utils};

/// Produces rows one at a time, in source order.
///
/// `Ok(None)` signals the end of input. The caller owns the underlying
/// resource; an inference run only calls `read_row`.
pub trait RowSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn read_row(&mut self) -> Result<Option<Vec<String>>, Self::Error>;
}

/// Rows read from a `csv::Reader` and decoded with a fixed encoding.
pub struct CsvRowSource<R: Read> {
    reader: csv::Reader<R>,
    encoding: &'static Encoding,
    record: csv::ByteRecord,
    at_start: bool,
}

impl<R: Read> CsvRowSource<R> {
    pub fn new(reader: csv::Reader<R>, encoding: &'static Encoding) -> Self {
        Self {
            reader,
            encoding,
            record: csv::ByteRecord::new(),
            at_start: true,
        }
    }
}

impl<R: Read> RowSource for CsvRowSource<R> {
    type Error = SourceError;

    fn read_row(&mut self) -> Result<Option<Vec<String>>, SourceError> {
        if !self.reader.read_byte_record(&mut self.record)? {
            return Ok(None);
        }
        let at_start = std::mem::replace(&mut self.at_start, false);
        self.record
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                let decoded = if at_start && idx == 0 {
                    io_utils::decode_leading_bytes(field, self.encoding)
                } else {
                    io_utils::decode_bytes(field, self.encoding)
                };
                decoded.ok_or(SourceError::Decode {
                    field: idx + 1,
                    encoding: self.encoding.name(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

/// Rows held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRows {
    rows: VecDeque<Vec<String>>,
}

impl MemoryRows {
    pub fn new<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl RowSource for MemoryRows {
    type Error = Infallible;

    fn read_row(&mut self) -> Result<Option<Vec<String>>, Infallible> {
        Ok(self.rows.pop_front())
    }
}
