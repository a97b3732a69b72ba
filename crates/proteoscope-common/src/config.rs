//! Application configuration.
//!
//! Loaded from a TOML file; every field has a default so a missing or
//! partial config file still yields a runnable configuration. The dataset
//! section pins the workbook layout (sheet names, header offset, anchor
//! column) so it can be adjusted without a rebuild if the supplement is
//! re-exported.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ProteoscopeError, Result};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server binding
    #[serde(default)]
    pub server: ServerConfig,

    /// Source workbook and sheet layout
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Publication lookup services
    #[serde(default)]
    pub publications: PublicationsConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file, or fall back to defaults when
    /// no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            None => Ok(Self::default()),
            Some(p) => {
                let raw = std::fs::read_to_string(p)?;
                toml::from_str(&raw)
                    .map_err(|e| ProteoscopeError::Config(format!("{}: {}", p.display(), e)))
            }
        }
    }
}

// ── Server ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host (e.g. "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

// ── Dataset ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the supplementary xlsx workbook
    #[serde(default = "default_workbook")]
    pub workbook: String,

    /// Sheet holding per-sample concentration values
    #[serde(default = "default_values_sheet")]
    pub values_sheet: String,

    /// Sheet holding the limma differential expression results
    #[serde(default = "default_limma_sheet")]
    pub limma_sheet: String,

    /// Zero-based row index of the header row (two title rows precede it)
    #[serde(default = "default_header_row")]
    pub header_row: usize,

    /// First sample column; selection starts here
    #[serde(default = "default_anchor_column")]
    pub anchor_column: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            workbook: default_workbook(),
            values_sheet: default_values_sheet(),
            limma_sheet: default_limma_sheet(),
            header_row: default_header_row(),
            anchor_column: default_anchor_column(),
        }
    }
}

fn default_workbook() -> String {
    "data/NIHMS1635539-supplement-1635539_Sup_tab_4.xlsx".to_string()
}

fn default_values_sheet() -> String {
    "S4A values".to_string()
}

fn default_limma_sheet() -> String {
    "S4B limma results".to_string()
}

fn default_header_row() -> usize {
    2
}

fn default_anchor_column() -> String {
    "Set002.H4.OD12.dup".to_string()
}

// ── Publications ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationsConfig {
    /// Gene annotation service base URL (generif records)
    #[serde(default = "default_annotation_base")]
    pub annotation_base: String,

    /// PubMed summary service base URL (title resolution)
    #[serde(default = "default_summary_base")]
    pub summary_base: String,

    /// Maximum generif entries considered per gene
    #[serde(default = "default_max_generifs")]
    pub max_generifs: usize,

    /// Title lookups allowed in flight at once
    #[serde(default = "default_lookup_concurrency")]
    pub lookup_concurrency: usize,
}

impl Default for PublicationsConfig {
    fn default() -> Self {
        Self {
            annotation_base: default_annotation_base(),
            summary_base: default_summary_base(),
            max_generifs: default_max_generifs(),
            lookup_concurrency: default_lookup_concurrency(),
        }
    }
}

fn default_annotation_base() -> String {
    "https://mygene.info/v3".to_string()
}

fn default_summary_base() -> String {
    "https://eutils.ncbi.nlm.nih.gov/entrez/eutils".to_string()
}

fn default_max_generifs() -> usize {
    10
}

fn default_lookup_concurrency() -> usize {
    4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_supplement_layout() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.dataset.values_sheet, "S4A values");
        assert_eq!(cfg.dataset.limma_sheet, "S4B limma results");
        assert_eq!(cfg.dataset.header_row, 2);
        assert_eq!(cfg.dataset.anchor_column, "Set002.H4.OD12.dup");
        assert_eq!(cfg.publications.max_generifs, 10);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 8080

            [dataset]
            workbook = "fixtures/small.xlsx"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.dataset.workbook, "fixtures/small.xlsx");
        assert_eq!(cfg.dataset.values_sheet, "S4A values");
        assert_eq!(cfg.publications.lookup_concurrency, 4);
    }
}
