//! Sample-column selection and age-group tagging.
//!
//! Sample identifiers embed a donor age token: "OD" marks old donors, "YD"
//! young donors. Selection and labeling are standalone predicates so they
//! stay testable independent of the workbook.

use serde::{Deserialize, Serialize};

use proteoscope_common::error::{ProteoscopeError, Result};

/// Donor age group, derived from the sample identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    Old,
    Young,
}

impl AgeGroup {
    /// "Old" iff the sample identifier contains the old-donor token.
    pub fn from_sample_id(sample_id: &str) -> Self {
        if sample_id.contains("OD") {
            AgeGroup::Old
        } else {
            AgeGroup::Young
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Old => "Old",
            AgeGroup::Young => "Young",
        }
    }
}

/// A column holds sample measurements when its name carries either age token.
pub fn is_sample_column(name: &str) -> bool {
    name.contains("YD") || name.contains("OD")
}

/// Indices of all sample columns: every column at or after the anchor whose
/// name satisfies [`is_sample_column`]. Columns before the anchor never
/// participate, so the selection is invariant under their reordering.
pub fn select_sample_columns(headers: &[String], anchor: &str) -> Result<Vec<usize>> {
    let anchor_idx = headers
        .iter()
        .position(|h| h == anchor)
        .ok_or_else(|| ProteoscopeError::ColumnNotFound(anchor.to_string()))?;

    Ok((anchor_idx..headers.len())
        .filter(|&i| is_sample_column(&headers[i]))
        .collect())
}
