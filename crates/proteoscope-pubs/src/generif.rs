//! Gene annotation service client (generif records).
//!
//! Endpoint: GET {base}/gene/{gene_id}?fields=generif

use serde_json::Value;
use tracing::{debug, instrument};

use proteoscope_common::client::AllowlistClient;
use proteoscope_common::error::Result;

pub struct GeneAnnotationClient {
    client: AllowlistClient,
    base: String,
}

impl GeneAnnotationClient {
    pub fn new(client: AllowlistClient, base: impl Into<String>) -> Self {
        Self { client, base: base.into() }
    }

    /// PMIDs of up to `max` generif entries for a gene, in service order.
    /// A gene without a `generif` field simply has no annotations.
    #[instrument(skip(self))]
    pub async fn generif_pmids(&self, gene_id: i64, max: usize) -> Result<Vec<u64>> {
        let url = format!("{}/gene/{}", self.base, gene_id);

        let resp: Value = self
            .client
            .get(&url)?
            .query(&[("fields", "generif")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let pmids = parse_generif_pmids(&resp, max);
        debug!(gene_id, count = pmids.len(), "generif lookup returned PMIDs");
        Ok(pmids)
    }
}

/// Extract PMIDs from a gene annotation response. An absent, `null` or
/// empty `generif` field yields an empty list, not an error.
pub fn parse_generif_pmids(body: &Value, max: usize) -> Vec<u64> {
    body["generif"]
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|e| {
                    let pubmed = &e["pubmed"];
                    pubmed
                        .as_u64()
                        .or_else(|| pubmed.as_str().and_then(|s| s.parse().ok()))
                })
                .take(max)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pmids_come_back_in_service_order() {
        let body = json!({
            "generif": [
                { "pubmed": 11146632, "text": "first" },
                { "pubmed": 12150907, "text": "second" },
                { "pubmed": "15337766", "text": "string id" },
            ]
        });
        assert_eq!(parse_generif_pmids(&body, 10), vec![11146632, 12150907, 15337766]);
    }

    #[test]
    fn list_is_bounded_to_max_entries() {
        let entries: Vec<Value> = (1..=25).map(|i| json!({ "pubmed": i })).collect();
        let body = json!({ "generif": entries });
        let pmids = parse_generif_pmids(&body, 10);
        assert_eq!(pmids.len(), 10);
        assert_eq!(pmids[0], 1);
        assert_eq!(pmids[9], 10);
    }

    #[test]
    fn absent_null_or_empty_generif_means_no_publications() {
        assert!(parse_generif_pmids(&json!({ "symbol": "STUB1" }), 10).is_empty());
        assert!(parse_generif_pmids(&json!({ "generif": null }), 10).is_empty());
        assert!(parse_generif_pmids(&json!({ "generif": [] }), 10).is_empty());
    }

    #[test]
    fn entries_without_a_pubmed_id_are_skipped() {
        let body = json!({
            "generif": [
                { "text": "no id" },
                { "pubmed": 123 },
            ]
        });
        assert_eq!(parse_generif_pmids(&body, 10), vec![123]);
    }
}
