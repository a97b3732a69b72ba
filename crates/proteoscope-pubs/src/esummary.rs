//! PubMed summary service client (title resolution).
//!
//! Endpoint: GET {base}/esummary.fcgi?db=pubmed&id={pmid}&retmode=json

use serde_json::Value;
use tracing::instrument;

use proteoscope_common::client::AllowlistClient;
use proteoscope_common::error::Result;

/// Substituted whenever a summary response carries no title.
pub const TITLE_FALLBACK: &str = "Title not found";

#[derive(Clone)]
pub struct SummaryClient {
    client: AllowlistClient,
    base: String,
}

impl SummaryClient {
    pub fn new(client: AllowlistClient, base: impl Into<String>) -> Self {
        Self { client, base: base.into() }
    }

    /// Resolve one PMID to its article title, falling back to
    /// [`TITLE_FALLBACK`] when the response has none.
    #[instrument(skip(self))]
    pub async fn title(&self, pmid: u64) -> Result<String> {
        let url = format!("{}/esummary.fcgi", self.base);
        let params = [
            ("db", "pubmed".to_string()),
            ("id", pmid.to_string()),
            ("retmode", "json".to_string()),
        ];

        let resp: Value = self
            .client
            .get(&url)?
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(parse_summary_title(&resp, pmid))
    }
}

/// Pull the title for `pmid` out of an esummary response; missing keys
/// resolve to the fallback so one bad citation never aborts the list.
pub fn parse_summary_title(body: &Value, pmid: u64) -> String {
    let key = pmid.to_string();
    body["result"][key.as_str()]["title"]
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| TITLE_FALLBACK.to_string())
}
