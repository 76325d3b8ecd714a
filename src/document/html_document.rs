use std::ops::Deref;

use scraper::Html;

use super::{paths::selector_for, CardPage, NodePath};

/// A card page parsed with `scraper`.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }
}

impl CardPage for HtmlDocument {
    fn text_at(&self, path: NodePath) -> Vec<String> {
        self.html
            .select(selector_for(path))
            .flat_map(|element| {
                element
                    .children()
                    .filter_map(|child| child.value().as_text().map(|text| text.deref().to_string()))
            })
            .collect()
    }
}
