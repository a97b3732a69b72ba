//! proteoscope-charts — Plotly fragment generation.
//!
//! Charts are emitted as embeddable markup: a container div plus a
//! `Plotly.newPlot` script over JSON traces. The page embedding a fragment
//! is responsible for loading plotly.js (CDN); fragments never inline it.

pub mod boxplot;
pub mod fragment;
pub mod volcano;

pub use boxplot::gene_boxplot;
pub use fragment::ChartFragment;
pub use volcano::volcano_plot;
