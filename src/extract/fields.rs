use regex::Regex;

use crate::document::{CardPage, NodePath};
use crate::extract::subtitle::{Subtitle, SubtitleField};
use crate::utilities::string_manipulators::collapse_whitespace;

const ARTIST_PREFIXES: [&str; 2] = ["Illustrated by ", "Illus. "];

lazy_static::lazy_static! {
    static ref RARITY_PATTERN: Regex = Regex::new(r"\(([A-Za-z ]*)\)").unwrap();
}

fn first_text(page: &dyn CardPage, path: NodePath) -> String {
    page.first_text_at(path).unwrap_or_default()
}

pub fn subtitle(page: &dyn CardPage) -> Subtitle {
    Subtitle::new(&first_text(page, NodePath::Subtitle))
}

pub fn title(page: &dyn CardPage) -> String {
    first_text(page, NodePath::Title).trim().to_string()
}

pub fn cost(page: &dyn CardPage) -> String {
    subtitle(page).field(SubtitleField::Cost)
}

pub fn converted_cost(page: &dyn CardPage) -> String {
    subtitle(page).field(SubtitleField::ConvertedCost)
}

pub fn color_identity(page: &dyn CardPage) -> String {
    subtitle(page).field(SubtitleField::ColorIdentity)
}

pub fn type_line(page: &dyn CardPage) -> String {
    subtitle(page).field(SubtitleField::TypeLine)
}

pub fn subtype(page: &dyn CardPage) -> String {
    subtitle(page).field(SubtitleField::Subtype)
}

pub fn power_toughness(page: &dyn CardPage) -> (String, String) {
    subtitle(page).power_toughness()
}

pub fn loyalty(page: &dyn CardPage) -> String {
    subtitle(page).field(SubtitleField::Loyalty)
}

pub fn artist(page: &dyn CardPage) -> String {
    let artist = first_text(page, NodePath::Artist);
    let artist = artist.trim();
    ARTIST_PREFIXES
        .iter()
        .find_map(|prefix| artist.strip_prefix(*prefix))
        .unwrap_or(artist)
        .trim()
        .to_string()
}

/// Rules text paragraphs in catalog order. Blank text nodes left over from
/// the markup are skipped.
pub fn rules_text(page: &dyn CardPage) -> Vec<String> {
    page.text_at(NodePath::RulesText)
        .iter()
        .map(|paragraph| paragraph.trim())
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn flavor_text(page: &dyn CardPage) -> String {
    collapse_whitespace(&page.text_at(NodePath::FlavorText).join(" "))
}

/// The rarity name out of a printing line such as `Magic 2015 (Rare)`.
pub fn rarity(page: &dyn CardPage) -> String {
    let printing = first_text(page, NodePath::Rarity);
    RARITY_PATTERN
        .captures(&printing)
        .and_then(|captures| captures.get(1))
        .map(|rarity| rarity.as_str().trim().to_string())
        .unwrap_or_default()
}
