//! The gene concentration table (`S4A values` sheet).

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use proteoscope_common::config::DatasetConfig;
use proteoscope_common::error::{ProteoscopeError, Result};

use crate::samples::{select_sample_columns, AgeGroup};
use crate::workbook::{cell_to_f64, cell_to_i64, cell_to_string, load_sheet, Sheet};

const ID_COLUMN: &str = "EntrezGeneID";
const SYMBOL_COLUMN: &str = "EntrezGeneSymbol";
const ORGANISM_COLUMN: &str = "Organism";

/// One protein/gene row: identifiers plus one concentration per sample
/// column. `values` is parallel to [`GeneTable::sample_ids`]; blank or
/// malformed cells load as `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneRecord {
    pub entrez_id: i64,
    pub symbol: String,
    pub organism: String,
    pub values: Vec<Option<f64>>,
}

/// One concentration measurement, labeled for the boxplot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleObservation {
    pub sample_id: String,
    pub age_group: AgeGroup,
    pub value: f64,
}

/// Immutable table of gene records, loaded once per process.
#[derive(Debug, Clone)]
pub struct GeneTable {
    sample_ids: Vec<String>,
    records: Vec<GeneRecord>,
}

impl GeneTable {
    /// Construct directly from parts (fixture data in tests).
    pub fn new(sample_ids: Vec<String>, records: Vec<GeneRecord>) -> Self {
        Self { sample_ids, records }
    }

    /// Load the values sheet from the configured workbook.
    pub fn load(cfg: &DatasetConfig) -> Result<Self> {
        let sheet = load_sheet(Path::new(&cfg.workbook), &cfg.values_sheet, cfg.header_row)?;
        Self::from_sheet(&sheet, &cfg.anchor_column)
    }

    /// Build the table from a sheet: the three identifier columns by exact
    /// name, plus every sample column from the anchor onward.
    pub fn from_sheet(sheet: &Sheet, anchor: &str) -> Result<Self> {
        let sample_idx = select_sample_columns(&sheet.headers, anchor)?;
        let id_idx = sheet.require_column(ID_COLUMN)?;
        let symbol_idx = sheet.require_column(SYMBOL_COLUMN)?;
        let organism_idx = sheet.require_column(ORGANISM_COLUMN)?;

        let sample_ids: Vec<String> = sample_idx.iter().map(|&i| sheet.headers[i].clone()).collect();

        let mut records = Vec::with_capacity(sheet.rows.len());
        for (row_no, row) in sheet.rows.iter().enumerate() {
            let entrez_id = row.get(id_idx).and_then(cell_to_i64);
            let symbol = row.get(symbol_idx).map(cell_to_string).unwrap_or_default();

            let entrez_id = match entrez_id {
                Some(id) if !symbol.is_empty() => id,
                _ => {
                    warn!(row = row_no, "skipping row with blank identifier cells");
                    continue;
                }
            };

            let values = sample_idx
                .iter()
                .map(|&i| row.get(i).and_then(cell_to_f64))
                .collect();

            records.push(GeneRecord {
                entrez_id,
                symbol,
                organism: row.get(organism_idx).map(cell_to_string).unwrap_or_default(),
                values,
            });
        }

        debug!(genes = records.len(), samples = sample_ids.len(), "gene table loaded");

        Ok(Self { sample_ids, records })
    }

    pub fn sample_ids(&self) -> &[String] {
        &self.sample_ids
    }

    pub fn records(&self) -> &[GeneRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-sensitive exact symbol lookup. Zero matches is a not-found
    /// error and more than one an ambiguity error, so callers never hit a
    /// downstream coercion failure.
    pub fn lookup(&self, symbol: &str) -> Result<&GeneRecord> {
        let mut matches = self.records.iter().filter(|r| r.symbol == symbol);
        let first = matches
            .next()
            .ok_or_else(|| ProteoscopeError::GeneNotFound(symbol.to_string()))?;
        if matches.next().is_some() {
            return Err(ProteoscopeError::AmbiguousGene(symbol.to_string()));
        }
        Ok(first)
    }

    /// All concentration measurements for one gene, paired with their
    /// sample id and age group. Missing values are dropped.
    pub fn observations(&self, symbol: &str) -> Result<Vec<SampleObservation>> {
        let record = self.lookup(symbol)?;

        Ok(self
            .sample_ids
            .iter()
            .zip(&record.values)
            .filter_map(|(sample_id, value)| {
                value.map(|value| SampleObservation {
                    sample_id: sample_id.clone(),
                    age_group: AgeGroup::from_sample_id(sample_id),
                    value,
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::Data;

    const ANCHOR: &str = "Set002.H4.OD12.dup";

    fn fixture_sheet() -> Sheet {
        Sheet {
            headers: vec![
                "EntrezGeneID".into(),
                "EntrezGeneSymbol".into(),
                "Organism".into(),
                ANCHOR.into(),
                "Set002.H4.YD3".into(),
            ],
            rows: vec![
                vec![
                    Data::Float(10273.0),
                    Data::String("STUB1".into()),
                    Data::String("Human".into()),
                    Data::Float(11.2),
                    Data::Float(9.8),
                ],
                vec![
                    Data::Float(2023.0),
                    Data::String("ENO1".into()),
                    Data::String("Human".into()),
                    Data::Float(15.0),
                    Data::String("bad cell".into()),
                ],
            ],
        }
    }

    #[test]
    fn stub1_yields_one_old_and_one_young_observation() {
        let table = GeneTable::from_sheet(&fixture_sheet(), ANCHOR).unwrap();
        let obs = table.observations("STUB1").unwrap();

        assert_eq!(obs.len(), 2);
        assert_eq!(obs[0].age_group, AgeGroup::Old);
        assert_eq!(obs[0].value, 11.2);
        assert_eq!(obs[1].age_group, AgeGroup::Young);
        assert_eq!(obs[1].value, 9.8);
    }

    #[test]
    fn malformed_numeric_cells_are_dropped_from_observations() {
        let table = GeneTable::from_sheet(&fixture_sheet(), ANCHOR).unwrap();
        let obs = table.observations("ENO1").unwrap();

        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].age_group, AgeGroup::Old);
    }

    #[test]
    fn unknown_symbol_is_not_found() {
        let table = GeneTable::from_sheet(&fixture_sheet(), ANCHOR).unwrap();
        assert!(matches!(
            table.lookup("NOPE"),
            Err(ProteoscopeError::GeneNotFound(s)) if s == "NOPE"
        ));
    }

    #[test]
    fn duplicate_symbol_is_ambiguous() {
        let mut sheet = fixture_sheet();
        sheet.rows.push(vec![
            Data::Float(1.0),
            Data::String("STUB1".into()),
            Data::String("Human".into()),
            Data::Float(1.0),
            Data::Float(2.0),
        ]);
        let table = GeneTable::from_sheet(&sheet, ANCHOR).unwrap();
        assert!(matches!(
            table.lookup("STUB1"),
            Err(ProteoscopeError::AmbiguousGene(_))
        ));
    }

    #[test]
    fn rows_with_blank_identifiers_are_skipped() {
        let mut sheet = fixture_sheet();
        sheet.rows.push(vec![
            Data::Empty,
            Data::String("ORPHAN".into()),
            Data::String("Human".into()),
            Data::Float(1.0),
            Data::Float(2.0),
        ]);
        let table = GeneTable::from_sheet(&sheet, ANCHOR).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.lookup("ORPHAN").is_err());
    }

    #[test]
    fn entrez_id_survives_float_cells() {
        let table = GeneTable::from_sheet(&fixture_sheet(), ANCHOR).unwrap();
        assert_eq!(table.lookup("STUB1").unwrap().entrez_id, 10273);
    }
}
