use serde::{Deserialize, Serialize};

/// A snapshot of one catalog card.
///
/// Every attribute is kept as the literal text the catalog displays, so costs
/// like `4{U/B}` or a power of `*` survive untouched. Attributes that do not
/// apply to a card are empty rather than missing.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub title: String,
    pub cost: String,
    pub converted_cost: String,
    pub color_identity: String,
    pub type_line: String,
    pub subtype: String,
    pub edition: String,
    pub scan_url: String,
    pub artist: String,
    pub rules_text: Vec<String>,
    pub flavor_text: String,
    pub rarity: String,
    pub collector_number: String,
    pub power: String,
    pub toughness: String,
    pub loyalty: String,
}

impl Card {
    /// Builds the shell of a card from its identifiers. Only the fields that
    /// follow from the identifiers are filled in.
    pub fn new(edition: &str, collector_number: &str, scan_url: String) -> Self {
        Card {
            edition: edition.to_string(),
            collector_number: collector_number.to_string(),
            scan_url,
            ..Default::default()
        }
    }
}
