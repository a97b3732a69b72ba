//! Per-gene boxplot + publication endpoint.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use tracing::warn;

use proteoscope_charts::gene_boxplot;
use proteoscope_pubs::{render_publication_list, render_unavailable_notice};

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct BoxplotResponse {
    pub boxplot_html: String,
    pub publication_html: String,
}

/// GET /boxplot/{gene} - boxplot markup and the publication list for one
/// gene symbol (case-sensitive, exact). Lookup errors map to 404/409; a
/// failing publication service degrades to a visible notice instead of
/// failing the request.
pub async fn show_boxplot(
    State(state): State<SharedState>,
    Path(gene): Path<String>,
) -> Result<Json<BoxplotResponse>, ApiError> {
    let record = state.genes.lookup(&gene)?;
    let boxplot = gene_boxplot(&state.genes, &gene)?;

    let publication_html = match state.pubs.publications(record.entrez_id).await {
        Ok(publications) => render_publication_list(&publications),
        Err(e) => {
            warn!(gene = %gene, error = %e, "publication lookup degraded to notice");
            render_unavailable_notice()
        }
    };

    Ok(Json(BoxplotResponse {
        boxplot_html: boxplot.html,
        publication_html,
    }))
}
