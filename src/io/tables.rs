//! CSV/TSV readers for differential data tables
//!
//! Tables need an `id` column, a `log_fc` column, and a `p_value` column;
//! any further columns are ignored. Duplicate ids keep the last row.

use std::path::Path;

use log::warn;
use serde::Deserialize;
use thiserror::Error;

use crate::data::{DifferentialRecord, DifferentialTable};

#[derive(Deserialize)]
struct TableRow {
    id: String,
    log_fc: f64,
    p_value: f64,
}

impl DifferentialTable {
    /// Read a comma-separated differential table
    pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<DifferentialTable, TableError> {
        Self::read_delimited(path, b',')
    }

    /// Read a tab-separated differential table
    pub fn read_tsv<P: AsRef<Path>>(path: P) -> Result<DifferentialTable, TableError> {
        Self::read_delimited(path, b'\t')
    }

    fn read_delimited<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<DifferentialTable, TableError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .from_path(path)?;
        let mut table = DifferentialTable::new();
        for row in reader.deserialize() {
            let row: TableRow = row?;
            if !(0.0..=1.0).contains(&row.p_value) {
                return Err(TableError::InvalidPValue {
                    id: row.id,
                    value: row.p_value,
                });
            }
            let record = DifferentialRecord::new(row.log_fc, row.p_value);
            if table.insert(&row.id, record).is_some() {
                warn!("duplicate id '{}' in differential table, keeping last row", row.id);
            }
        }
        Ok(table)
    }
}

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Unable to read differential table")]
    ReadError(#[from] csv::Error),
    #[error("p-value for '{id}' is {value}, outside [0, 1]")]
    InvalidPValue { id: String, value: f64 },
}
