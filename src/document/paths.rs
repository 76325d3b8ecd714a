use scraper::Selector;

use super::NodePath;

// The catalog lays a card out as the third top level table: the scan in the
// first cell, the card text in the second and the printings in the third.
// The HTML5 parser adds the implicit tbody.
const CARD_ROW: &str = "body > table:nth-of-type(3) > tbody > tr";

lazy_static::lazy_static! {
    static ref TITLE: Selector = card_selector("td:nth-of-type(2) > span > a");
    static ref SUBTITLE: Selector = card_selector("td:nth-of-type(2) > p:nth-of-type(1)");
    static ref RULES_TEXT: Selector = card_selector("td:nth-of-type(2) > p:nth-of-type(2) > b");
    static ref FLAVOR_TEXT: Selector = card_selector("td:nth-of-type(2) > p:nth-of-type(3) > i");
    static ref ARTIST: Selector = card_selector("td:nth-of-type(2) > p:nth-of-type(4)");
    static ref RARITY: Selector = card_selector("td:nth-of-type(3) > small > b:nth-of-type(2)");
    static ref NOT_FOUND_BANNER: Selector = Selector::parse("body > h1").unwrap();
}

fn card_selector(cell_path: &str) -> Selector {
    Selector::parse(&format!("{} > {}", CARD_ROW, cell_path)).unwrap()
}

pub fn selector_for(path: NodePath) -> &'static Selector {
    match path {
        NodePath::Title => &*TITLE,
        NodePath::Subtitle => &*SUBTITLE,
        NodePath::RulesText => &*RULES_TEXT,
        NodePath::FlavorText => &*FLAVOR_TEXT,
        NodePath::Artist => &*ARTIST,
        NodePath::Rarity => &*RARITY,
        NodePath::NotFoundBanner => &*NOT_FOUND_BANNER,
    }
}
