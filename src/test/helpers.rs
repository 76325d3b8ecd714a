use std::collections::HashMap;
use std::fs;

use crate::cards::card::Card;
use crate::catalog::page_fetcher::PageSource;
use crate::document::HtmlDocument;
use crate::error::CardError;

pub static FIXTURE_CATALOG_URL: &str = "http://magiccards.info";

pub fn fixture(name: &str) -> String {
    let path = format!("{}/testcards/{}.html", env!("CARGO_MANIFEST_DIR"), name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("missing fixture {}: {}", path, e))
}

pub fn fixture_document(name: &str) -> HtmlDocument {
    HtmlDocument::parse(&fixture(name))
}

/// Serves fixture pages by url and fails every other url like an unreachable
/// catalog would.
#[derive(Default)]
pub struct FixtureSource {
    pages: HashMap<String, String>,
}

impl FixtureSource {
    pub fn with_page(mut self, url: &str, fixture_name: &str) -> Self {
        self.pages.insert(url.to_string(), fixture_name.to_string());
        self
    }

    pub fn with_card(self, set_code: &str, card_number: &str, fixture_name: &str) -> Self {
        let url = format!(
            "{}/{}/en/{}.html",
            FIXTURE_CATALOG_URL, set_code, card_number
        );
        self.with_page(&url, fixture_name)
    }
}

impl PageSource for FixtureSource {
    fn fetch_page(&self, url: &str) -> Result<String, CardError> {
        self.pages
            .get(url)
            .map(|name| fixture(name))
            .ok_or_else(|| CardError::transport(url, "no fixture for this url"))
    }
}

pub fn khalni_hydra_card() -> Card {
    Card {
        title: "Khalni Hydra".to_string(),
        cost: "GGGGGGGG".to_string(),
        converted_cost: "8".to_string(),
        color_identity: "G".to_string(),
        type_line: "Creature".to_string(),
        subtype: "Hydra".to_string(),
        edition: "roe".to_string(),
        scan_url: "http://magiccards.info/scans/en/roe/192.jpg".to_string(),
        artist: "Todd Lockwood".to_string(),
        rules_text: vec![
            "Khalni Hydra costs {G} less to cast for each green creature you control."
                .to_string(),
            "Trample".to_string(),
        ],
        flavor_text: "\"In ages past, bargains were struck and promises were made. Now we must collect on our debt. Begin the hymns.\" —Moruul, Khalni druid".to_string(),
        rarity: "Mythic Rare".to_string(),
        collector_number: "192".to_string(),
        power: "8".to_string(),
        toughness: "8".to_string(),
        loyalty: String::new(),
    }
}
