//! Publication list assembly.

use futures_util::{stream, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use proteoscope_common::client::AllowlistClient;
use proteoscope_common::config::PublicationsConfig;
use proteoscope_common::error::{ProteoscopeError, Result};

use crate::esummary::SummaryClient;
use crate::generif::GeneAnnotationClient;

/// One linked citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub pmid: u64,
    pub title: String,
}

/// Composes the annotation and summary clients: generif PMIDs first, then
/// one title lookup per citation. Title lookups run with bounded
/// concurrency but the returned list preserves generif order.
pub struct PublicationFetcher {
    annotation: GeneAnnotationClient,
    summary: SummaryClient,
    max_generifs: usize,
    concurrency: usize,
}

impl PublicationFetcher {
    pub fn from_config(cfg: &PublicationsConfig) -> Result<Self> {
        let client = AllowlistClient::new()?;
        Ok(Self {
            annotation: GeneAnnotationClient::new(client.clone(), cfg.annotation_base.clone()),
            summary: SummaryClient::new(client, cfg.summary_base.clone()),
            max_generifs: cfg.max_generifs,
            concurrency: cfg.lookup_concurrency.max(1),
        })
    }

    /// Fetch the publication list for a gene. Any transport or decoding
    /// failure converts into the typed publications-unavailable error;
    /// a gene without generif entries is an empty list, not an error.
    #[instrument(skip(self))]
    pub async fn publications(&self, gene_id: i64) -> Result<Vec<Publication>> {
        self.fetch(gene_id)
            .await
            .map_err(|e| ProteoscopeError::PublicationsUnavailable(e.to_string()))
    }

    async fn fetch(&self, gene_id: i64) -> Result<Vec<Publication>> {
        let pmids = self.annotation.generif_pmids(gene_id, self.max_generifs).await?;
        if pmids.is_empty() {
            return Ok(Vec::new());
        }

        let resolved: Vec<Result<Publication>> = stream::iter(pmids)
            .map(|pmid| async move {
                let title = self.summary.title(pmid).await?;
                Ok(Publication { pmid, title })
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut publications = Vec::with_capacity(resolved.len());
        for publication in resolved {
            publications.push(publication?);
        }

        info!(gene_id, count = publications.len(), "publication list assembled");
        Ok(publications)
    }
}
