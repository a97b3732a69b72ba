//! Per-gene young-vs-old concentration boxplot.

use serde_json::{json, Value};

use proteoscope_common::error::Result;
use proteoscope_data::{AgeGroup, GeneTable, SampleObservation};

use crate::fragment::ChartFragment;

/// Grouped box plot for one gene symbol: one box per age group, all points
/// overlaid with horizontal jitter. Unknown or ambiguous symbols surface as
/// typed lookup errors before any value coercion happens.
pub fn gene_boxplot(table: &GeneTable, gene: &str) -> Result<ChartFragment> {
    let observations = table.observations(gene)?;

    let traces: Vec<Value> = [AgeGroup::Old, AgeGroup::Young]
        .iter()
        .map(|group| box_trace(*group, &observations))
        .collect();

    let layout = json!({
        "title": { "text": format!("Boxplot for {} gene", gene) },
        "xaxis": { "title": { "text": "age_group" } },
        "yaxis": { "title": { "text": "value" } },
        "showlegend": false,
    });

    Ok(ChartFragment::from_plot("boxplot", &json!(traces), &layout))
}

fn box_trace(group: AgeGroup, observations: &[SampleObservation]) -> Value {
    let mut y = Vec::new();
    let mut text = Vec::new();
    for obs in observations.iter().filter(|o| o.age_group == group) {
        y.push(obs.value);
        text.push(obs.sample_id.clone());
    }

    json!({
        "type": "box",
        "name": group.label(),
        "y": y,
        "text": text,
        "boxpoints": "all",
        "jitter": 0.3,
        "pointpos": 0,
    })
}
