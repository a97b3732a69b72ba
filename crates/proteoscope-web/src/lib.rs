//! proteoscope-web — Web front end for Proteoscope
//! Provides:
//!   - the landing page with the embedded volcano plot
//!   - the per-gene boxplot + publication endpoint consumed by the page

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
