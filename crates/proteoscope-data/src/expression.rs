//! The differential expression table (`S4B limma results` sheet).

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use proteoscope_common::config::DatasetConfig;
use proteoscope_common::error::Result;

use crate::workbook::{cell_to_f64, cell_to_string, load_sheet, Sheet};

const SYMBOL_COLUMN: &str = "EntrezGeneSymbol";
const LOGFC_COLUMN: &str = "logFC";
const ADJ_P_COLUMN: &str = "adj.P.Val";

/// One limma result row. `neglog_p` is derived once at load time; an
/// adjusted p-value at or below zero produces a non-finite value, which is
/// retained but excluded from plotting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpressionRecord {
    pub symbol: String,
    pub log_fc: f64,
    pub adj_p_val: f64,
    pub neglog_p: f64,
}

impl ExpressionRecord {
    pub fn new(symbol: String, log_fc: f64, adj_p_val: f64) -> Self {
        let neglog_p = -adj_p_val.log10();
        Self { symbol, log_fc, adj_p_val, neglog_p }
    }

    /// False when the adjusted p-value could not be log-transformed.
    pub fn is_finite(&self) -> bool {
        self.neglog_p.is_finite()
    }
}

/// Immutable table of limma results, loaded once per process.
#[derive(Debug, Clone)]
pub struct ExpressionTable {
    records: Vec<ExpressionRecord>,
}

impl ExpressionTable {
    /// Construct directly from records (fixture data in tests).
    pub fn new(records: Vec<ExpressionRecord>) -> Self {
        Self { records }
    }

    /// Load the limma sheet from the configured workbook.
    pub fn load(cfg: &DatasetConfig) -> Result<Self> {
        let sheet = load_sheet(Path::new(&cfg.workbook), &cfg.limma_sheet, cfg.header_row)?;
        Self::from_sheet(&sheet)
    }

    pub fn from_sheet(sheet: &Sheet) -> Result<Self> {
        let symbol_idx = sheet.require_column(SYMBOL_COLUMN)?;
        let logfc_idx = sheet.require_column(LOGFC_COLUMN)?;
        let adj_p_idx = sheet.require_column(ADJ_P_COLUMN)?;

        let mut records = Vec::with_capacity(sheet.rows.len());
        for (row_no, row) in sheet.rows.iter().enumerate() {
            let symbol = row.get(symbol_idx).map(cell_to_string).unwrap_or_default();
            let log_fc = row.get(logfc_idx).and_then(cell_to_f64);
            let adj_p_val = row.get(adj_p_idx).and_then(cell_to_f64);

            match (symbol.is_empty(), log_fc, adj_p_val) {
                (false, Some(log_fc), Some(adj_p_val)) => {
                    records.push(ExpressionRecord::new(symbol, log_fc, adj_p_val));
                }
                _ => warn!(row = row_no, "skipping limma row with blank or malformed cells"),
            }
        }

        let flagged = records.iter().filter(|r| !r.is_finite()).count();
        if flagged > 0 {
            warn!(
                flagged,
                "limma rows with non-positive adjusted p-values; their neglogP is non-finite and excluded from the volcano trace"
            );
        }

        debug!(records = records.len(), flagged, "expression table loaded");

        Ok(Self { records })
    }

    pub fn records(&self) -> &[ExpressionRecord] {
        &self.records
    }

    /// Records safe to plot.
    pub fn finite(&self) -> impl Iterator<Item = &ExpressionRecord> {
        self.records.iter().filter(|r| r.is_finite())
    }

    /// Number of records whose log transform produced a non-finite value.
    pub fn flagged_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_finite()).count()
    }
}
