use log::{info, warn};

use crate::cards::card::Card;
use crate::catalog::page_fetcher::{PageFetcher, PageSource};
use crate::document::CardPage;
use crate::error::CardError;
use crate::extract::fields;

pub struct CardAssembler<S: PageSource> {
    fetcher: PageFetcher<S>,
}

impl<S: PageSource> CardAssembler<S> {
    pub fn new(fetcher: PageFetcher<S>) -> Self {
        Self { fetcher }
    }

    /// Fetches the detail page of `card_number` in `set_code` and reads every
    /// attribute off it.
    ///
    /// Either all attributes are extracted or an error is returned; a card is
    /// never handed out half filled.
    pub fn assemble(&self, set_code: &str, card_number: &str) -> Result<Card, CardError> {
        let mut card = Card::new(
            set_code,
            card_number,
            self.fetcher.build_scan_url(set_code, card_number),
        );

        let url = self.fetcher.build_detail_url(set_code, card_number);
        info!("Fetching card {} from {}", card_number, url);

        let document = self.fetcher.fetch(&url)?;
        if let Err(e) = self.fetcher.validate(&document) {
            warn!("No card {} in set {}: {}", card_number, set_code, e);
            return Err(e);
        }

        extract_into(&mut card, &document);
        Ok(card)
    }
}

fn extract_into(card: &mut Card, page: &dyn CardPage) {
    let (power, toughness) = fields::power_toughness(page);

    card.title = fields::title(page);
    card.cost = fields::cost(page);
    card.converted_cost = fields::converted_cost(page);
    card.color_identity = fields::color_identity(page);
    card.type_line = fields::type_line(page);
    card.subtype = fields::subtype(page);
    card.artist = fields::artist(page);
    card.rules_text = fields::rules_text(page);
    card.flavor_text = fields::flavor_text(page);
    card.rarity = fields::rarity(page);
    card.power = power;
    card.toughness = toughness;
    card.loyalty = fields::loyalty(page);
}
