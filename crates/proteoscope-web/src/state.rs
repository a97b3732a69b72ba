//! Shared application state for the web server.

use std::sync::Arc;

use minijinja::Environment;

use proteoscope_common::config::AppConfig;
use proteoscope_common::error::{ProteoscopeError, Result};
use proteoscope_data::{ExpressionTable, GeneTable};
use proteoscope_pubs::PublicationFetcher;

/// Shared state injected into every Axum handler. Both tables are loaded
/// once at startup and never mutated afterwards, so handlers read them
/// concurrently without locking.
pub struct AppState {
    pub genes: GeneTable,
    pub expression: ExpressionTable,
    pub pubs: PublicationFetcher,
    pub templates: Environment<'static>,
}

impl AppState {
    /// Load tables from the configured workbook and wire up the
    /// publication fetcher. Any load error here is fatal at startup.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let genes = GeneTable::load(&config.dataset)?;
        let expression = ExpressionTable::load(&config.dataset)?;
        let pubs = PublicationFetcher::from_config(&config.publications)?;
        Self::with_tables(genes, expression, pubs)
    }

    /// State over pre-built tables (fixture data in tests).
    pub fn with_tables(
        genes: GeneTable,
        expression: ExpressionTable,
        pubs: PublicationFetcher,
    ) -> Result<Self> {
        Ok(Self { genes, expression, pubs, templates: build_templates()? })
    }
}

fn build_templates() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.add_template("main.html", include_str!("../templates/main.html"))
        .map_err(|e| ProteoscopeError::Template(e.to_string()))?;
    Ok(env)
}

pub type SharedState = Arc<AppState>;
