//! proteoscope-data — Spreadsheet ingestion for the plasma proteome dataset.
//!
//! Loads two sheets of the supplementary workbook into immutable tables:
//!   - `S4A values`: per-sample protein concentrations (the gene table)
//!   - `S4B limma results`: differential expression statistics
//!
//! Both tables are loaded once at startup and shared read-only afterwards.

pub mod expression;
pub mod genes;
pub mod samples;
pub mod workbook;

pub use expression::{ExpressionRecord, ExpressionTable};
pub use genes::{GeneRecord, GeneTable, SampleObservation};
pub use samples::AgeGroup;
