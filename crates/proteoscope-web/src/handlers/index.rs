//! Landing page with the embedded volcano plot.

use axum::extract::State;
use axum::response::Html;
use minijinja::context;

use proteoscope_charts::volcano_plot;
use proteoscope_common::error::ProteoscopeError;

use crate::error::ApiError;
use crate::state::SharedState;

/// GET / - the page embedding the volcano chart. The chart's container id
/// is handed to the template so the page can wire its click handler
/// without inspecting the fragment markup.
pub async fn index(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let volcano = volcano_plot(&state.expression);

    let page = state
        .templates
        .get_template("main.html")
        .and_then(|tmpl| {
            tmpl.render(context! {
                volcano_plot => volcano.html,
                volcano_id => volcano.div_id,
            })
        })
        .map_err(|e| ProteoscopeError::Template(e.to_string()))?;

    Ok(Html(page))
}
