//! Embeddable chart markup.

use serde_json::Value;
use uuid::Uuid;

/// A self-contained chart fragment: one container div and the script that
/// renders into it. The container id is generated at construction time and
/// carried alongside the markup, so consumers wiring click handlers never
/// have to recover it by parsing the fragment.
#[derive(Debug, Clone)]
pub struct ChartFragment {
    pub div_id: String,
    pub html: String,
}

impl ChartFragment {
    /// Assemble a fragment from Plotly traces and a layout.
    pub fn from_plot(slug: &str, data: &Value, layout: &Value) -> Self {
        let div_id = format!("{}-{}", slug, Uuid::new_v4().simple());
        let html = format!(
            "<div id=\"{div_id}\" class=\"chart\"></div>\n\
             <script>\n\
             Plotly.newPlot('{div_id}', {data}, {layout}, {{\"displayModeBar\": false}});\n\
             </script>"
        );
        Self { div_id, html }
    }
}
