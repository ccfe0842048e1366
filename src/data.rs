//! Differential data tables joined onto the network during graph construction
//!
//! A table maps gene or metabolite identifiers to a signed effect magnitude
//! (log-fold-change) and a significance value (p-value). Tables are optional
//! inputs; a graph element without a matching row carries no record, which is
//! a distinct state from carrying a non-significant one.

use indexmap::map;
use indexmap::IndexMap;

/// One row of differential data for a gene or metabolite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifferentialRecord {
    /// Signed effect magnitude (log-fold-change)
    pub log_fc: f64,
    /// Significance of the effect
    pub p_value: f64,
}

impl DifferentialRecord {
    pub fn new(log_fc: f64, p_value: f64) -> DifferentialRecord {
        DifferentialRecord { log_fc, p_value }
    }

    /// Whether the effect is an increase (zero counts as up)
    pub fn is_up(&self) -> bool {
        self.log_fc >= 0.0
    }
}

/// Differential data keyed by identifier, identifiers unique per table
#[derive(Debug, Clone, Default)]
pub struct DifferentialTable {
    records: IndexMap<String, DifferentialRecord>,
}

impl DifferentialTable {
    pub fn new() -> Self {
        DifferentialTable::default()
    }

    /// Insert a record, replacing any previous record for the same id
    pub fn insert(&mut self, id: &str, record: DifferentialRecord) -> Option<DifferentialRecord> {
        self.records.insert(id.to_string(), record)
    }

    pub fn get(&self, id: &str) -> Option<&DifferentialRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> map::Iter<'_, String, DifferentialRecord> {
        self.records.iter()
    }
}
