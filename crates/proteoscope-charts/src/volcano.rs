//! Volcano plot of the limma differential expression results.

use serde_json::json;
use tracing::warn;

use proteoscope_data::ExpressionTable;

use crate::fragment::ChartFragment;

/// Scatter of effect size vs. significance, hover-keyed by gene symbol.
/// Records whose `neglogP` is non-finite are excluded from the trace; they
/// stay in the table and their count is logged.
pub fn volcano_plot(table: &ExpressionTable) -> ChartFragment {
    let excluded = table.flagged_count();
    if excluded > 0 {
        warn!(excluded, "volcano trace excludes records with non-finite neglogP");
    }

    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut text = Vec::new();
    for record in table.finite() {
        x.push(record.log_fc);
        y.push(record.neglog_p);
        text.push(record.symbol.clone());
    }

    let data = json!([{
        "type": "scatter",
        "mode": "markers",
        "x": x,
        "y": y,
        "text": text,
        "hovertemplate": "%{text}<br>logFC %{x:.3f}<br>-log10 p %{y:.3f}<extra></extra>",
        "marker": { "size": 6, "opacity": 0.7 },
    }]);

    let layout = json!({
        "title": { "text": "Volcano Plot of Differential Protein Expression" },
        "xaxis": { "title": { "text": "log2 Fold Change" } },
        "yaxis": { "title": { "text": "-log10 Adjusted P-Value" } },
        "hovermode": "closest",
    });

    ChartFragment::from_plot("volcano", &data, &layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proteoscope_data::ExpressionRecord;

    #[test]
    fn finite_records_are_plotted_with_symbol_hover() {
        let table = ExpressionTable::new(vec![
            ExpressionRecord::new("STUB1".into(), 1.4, 0.001),
            ExpressionRecord::new("ENO1".into(), -0.6, 0.2),
        ]);
        let frag = volcano_plot(&table);

        assert!(frag.html.contains("STUB1"));
        assert!(frag.html.contains("ENO1"));
        assert!(frag.html.contains("Volcano Plot of Differential Protein Expression"));
        assert!(frag.html.contains("log2 Fold Change"));
        assert!(frag.html.contains("-log10 Adjusted P-Value"));
    }

    #[test]
    fn non_finite_records_are_left_out_of_the_trace() {
        let table = ExpressionTable::new(vec![
            ExpressionRecord::new("GOOD".into(), 1.0, 0.01),
            ExpressionRecord::new("ZEROP".into(), 2.0, 0.0),
        ]);
        let frag = volcano_plot(&table);

        assert!(frag.html.contains("GOOD"));
        assert!(!frag.html.contains("ZEROP"));
    }
}
