use std::time::Instant;

use log::{debug, warn};
use reqwest::blocking::Client;

use crate::document::{CardPage, HtmlDocument, NodePath};
use crate::error::CardError;
use crate::utilities::constants::{CATALOG_LANGUAGE, USER_AGENT};

/// Where page bodies come from. The catalog is reached over HTTP; tests hand
/// out pages from disk.
pub trait PageSource: Send + Sync {
    fn fetch_page(&self, url: &str) -> Result<String, CardError>;
}

pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new() -> reqwest::Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl PageSource for HttpPageSource {
    fn fetch_page(&self, url: &str) -> Result<String, CardError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| CardError::transport(url, e))?;

        // The catalog serves its "not found" page with an error status, so the
        // body is still handed over for validation.
        if !response.status().is_success() {
            warn!("{} answered with status {}", url, response.status());
        }

        response.text().map_err(|e| CardError::transport(url, e))
    }
}

pub struct PageFetcher<S: PageSource> {
    base_url: String,
    source: S,
}

impl<S: PageSource> PageFetcher<S> {
    pub fn new(base_url: &str, source: S) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            source,
        }
    }

    pub fn build_detail_url(&self, set_code: &str, card_number: &str) -> String {
        format!(
            "{}/{}/{}/{}.html",
            self.base_url, set_code, CATALOG_LANGUAGE, card_number
        )
    }

    pub fn build_scan_url(&self, set_code: &str, card_number: &str) -> String {
        format!(
            "{}/scans/{}/{}/{}.jpg",
            self.base_url, CATALOG_LANGUAGE, set_code, card_number
        )
    }

    pub fn fetch(&self, url: &str) -> Result<HtmlDocument, CardError> {
        let start = Instant::now();
        let body = self.source.fetch_page(url)?;
        debug!("fetching {} took {:?}", url, start.elapsed());
        Ok(HtmlDocument::parse(&body))
    }

    /// Rejects the catalog's "not found" page, recognisable by the text in
    /// its top level heading.
    pub fn validate(&self, page: &dyn CardPage) -> Result<(), CardError> {
        let banner = page.text_at(NodePath::NotFoundBanner).join(" ");
        let banner = banner.trim();
        if banner.is_empty() {
            Ok(())
        } else {
            Err(CardError::NotFound(banner.to_string()))
        }
    }
}
