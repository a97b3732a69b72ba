use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

use crate::error::ProteoscopeError;

/// An allowlist-capped HTTP client that only permits requests to the
/// biomedical services this application consumes. Every request carries a
/// hard timeout so a hanging upstream cannot stall a boxplot request
/// indefinitely.
#[derive(Debug, Clone)]
pub struct AllowlistClient {
    client: Client,
    allowlist: HashSet<String>,
}

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

impl AllowlistClient {
    /// Creates a new client with the default allowlist of required domains.
    pub fn new() -> Result<Self, ProteoscopeError> {
        let mut allowlist = HashSet::new();
        let domains = vec![
            "mygene.info",            // gene annotation / generif
            "eutils.ncbi.nlm.nih.gov", // PubMed esummary
            "localhost",              // integration tests
            "127.0.0.1",              // localhost alt
        ];

        for d in domains {
            allowlist.insert(d.to_string());
        }

        let client = ClientBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ProteoscopeError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Validates if a URL is permitted under the current allowlist.
    pub fn is_allowed(&self, url: &str) -> bool {
        if let Ok(parsed) = Url::parse(url) {
            if let Some(host) = parsed.host_str() {
                // Exact match or a subdomain of an allowed domain
                for allowed in &self.allowlist {
                    if host == allowed || host.ends_with(&format!(".{}", allowed)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Exposes the inner `reqwest::Client` builder pattern for GET requests.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, ProteoscopeError> {
        if !self.is_allowed(url) {
            return Err(ProteoscopeError::Security(format!(
                "domain not in allowlist for URL {}",
                url
            )));
        }

        Ok(self.client.get(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allowlist_admits_both_services() {
        let client = AllowlistClient::new().unwrap();
        assert!(client.is_allowed("https://mygene.info/v3/gene/10273?fields=generif"));
        assert!(client.is_allowed(
            "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi?db=pubmed&id=1"
        ));
        assert!(client.is_allowed("http://127.0.0.1:9/esummary.fcgi"));
    }

    #[test]
    fn unknown_domains_are_rejected() {
        let client = AllowlistClient::new().unwrap();
        assert!(!client.is_allowed("https://example.com/"));
        assert!(client.get("https://example.com/").is_err());
    }

    #[test]
    fn allow_domain_extends_the_list() {
        let mut client = AllowlistClient::new().unwrap();
        assert!(!client.is_allowed("https://api.example.org/x"));
        client.allow_domain("api.example.org");
        assert!(client.is_allowed("https://api.example.org/x"));
    }
}
