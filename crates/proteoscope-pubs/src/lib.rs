//! proteoscope-pubs — Publication lookups for a gene.
//!
//! Two external JSON services are consulted per boxplot request:
//!   - the gene annotation service, for up to 10 "generif" records
//!     (curated gene-to-publication links), and
//!   - the PubMed summary service, to resolve each PMID to a title.
//!
//! No caching and no retries; every request re-issues the lookups. Failures
//! convert into a typed publications-unavailable error so callers can
//! degrade to a visible notice instead of failing the whole request.

pub mod esummary;
pub mod fetcher;
pub mod generif;
pub mod render;

pub use esummary::SummaryClient;
pub use fetcher::{Publication, PublicationFetcher};
pub use generif::GeneAnnotationClient;
pub use render::{render_publication_list, render_unavailable_notice};
