//! Read-only access to a parsed card page.
//!
//! Extractors only ever see the [`CardPage`] trait, so the markup library and
//! the page coordinates can change without touching them.

pub mod html_document;
pub mod paths;

pub use html_document::HtmlDocument;

/// The fixed places on a card page that hold something worth reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodePath {
    Title,
    Subtitle,
    RulesText,
    FlavorText,
    Artist,
    Rarity,
    NotFoundBanner,
}

pub trait CardPage {
    /// All text nodes sitting directly under the elements at `path`, in
    /// document order.
    fn text_at(&self, path: NodePath) -> Vec<String>;

    fn first_text_at(&self, path: NodePath) -> Option<String> {
        self.text_at(path).into_iter().next()
    }
}
