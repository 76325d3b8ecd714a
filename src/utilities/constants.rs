pub const CATALOG_URL: &str = "http://magiccards.info";
pub const CATALOG_LANGUAGE: &str = "en";

pub const DEFAULT_FETCH_CONCURRENCY: usize = 4;

pub const USER_AGENT: &str = "cardbase/0.1";
