use std::env;

use log::error;
use url::Url;

use crate::utilities::constants::{CATALOG_URL, DEFAULT_FETCH_CONCURRENCY};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub catalog_url: String,
    pub fetch_concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_url: CATALOG_URL.to_string(),
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.update_from_env();
        config
    }

    fn update_from_env(&mut self) {
        if let Ok(catalog_url) = env::var("CARDBASE_URL") {
            self.set_catalog_url(&catalog_url);
        }
        if let Ok(concurrency) = env::var("CARDBASE_CONCURRENCY") {
            self.set_fetch_concurrency(&concurrency);
        }
    }

    fn set_catalog_url(&mut self, raw: &str) {
        match Url::parse(raw) {
            Ok(_) => self.catalog_url = raw.trim_end_matches('/').to_string(),
            Err(e) => error!("Supplied incorrect catalog url {}: {}", raw, e),
        }
    }

    fn set_fetch_concurrency(&mut self, raw: &str) {
        match raw.trim().parse::<usize>() {
            Ok(limit) if limit > 0 => self.fetch_concurrency = limit,
            _ => error!(
                "Supplied incorrect fetch concurrency {}, keeping {}",
                raw, self.fetch_concurrency
            ),
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: Config = Config::new();
}
