//! Decoding of the subtitle, the single free text line under a card's title.
//!
//! The catalog packs several attributes into that line, e.g.
//!
//! ```text
//! Creature — Hydra 8/8, GGGGGGGG (8)
//! Planeswalker — Sorin (Loyalty: 4), 3BBB (6)
//! Sorcery, 4{U/B} (5)
//! Basic Land — Island
//! ```
//!
//! Each attribute is described by one [`SubtitleRule`] in [`SUBTITLE_RULES`]:
//! a pattern, the capture group holding the value and a finishing step. A line
//! the pattern does not match yields an empty string.

use regex::Regex;

use crate::utilities::string_manipulators::collapse_whitespace;

/// One cost symbol: a generic amount, `X`, a colored mana letter or a braced
/// hybrid/phyrexian symbol such as `{U/B}`.
const COST_SYMBOL: &str = r"(?:\d+|X|[WUBRG]|\{[^{}\s]+\})";

/// A run of words. It has to end at a space, a comma or the end of the line,
/// so the `X` of an `X/X` power/toughness pair is never taken for a word.
const WORDS: &str = r"([A-Za-z'’-]+(?: [A-Za-z'’-]+)*)(?:$|[ ,])";

pub const COLORS: [char; 5] = ['W', 'U', 'B', 'R', 'G'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleField {
    Cost,
    ConvertedCost,
    ColorIdentity,
    TypeLine,
    Subtype,
    Power,
    Toughness,
    Loyalty,
}

pub struct SubtitleRule {
    pub field: SubtitleField,
    pattern: Regex,
    group: usize,
    finish: fn(&str) -> String,
}

impl SubtitleRule {
    fn new(field: SubtitleField, pattern: &str, group: usize, finish: fn(&str) -> String) -> Self {
        Self {
            field,
            pattern: Regex::new(pattern).unwrap(),
            group,
            finish,
        }
    }

    pub fn apply(&self, subtitle: &str) -> String {
        self.pattern
            .captures(subtitle)
            .and_then(|captures| captures.get(self.group))
            .map(|value| (self.finish)(value.as_str()))
            .unwrap_or_default()
    }
}

fn verbatim(value: &str) -> String {
    value.to_string()
}

/// Keeps the color letters of a cost, each once, in order of first appearance.
/// `GGGGGGGG` becomes `G` and `4{U/B}` becomes `UB`.
pub fn color_identity(cost: &str) -> String {
    let mut colors = String::new();
    for color in cost.chars().filter(|c| COLORS.contains(c)) {
        if !colors.contains(color) {
            colors.push(color);
        }
    }
    colors
}

lazy_static::lazy_static! {
    static ref COST_PATTERN: String = format!(r"(?:^| )({}+)(?: |$)", COST_SYMBOL);
    static ref TYPE_LINE_PATTERN: String = format!(r"^(?:{}+ )?{}", COST_SYMBOL, WORDS);
    static ref SUBTYPE_PATTERN: String = format!(r"— {}", WORDS);

    pub static ref SUBTITLE_RULES: Vec<SubtitleRule> = vec![
        SubtitleRule::new(SubtitleField::Cost, &COST_PATTERN, 1, verbatim),
        SubtitleRule::new(SubtitleField::ConvertedCost, r"\((\d+)\)", 1, verbatim),
        SubtitleRule::new(SubtitleField::ColorIdentity, &COST_PATTERN, 1, color_identity),
        SubtitleRule::new(SubtitleField::TypeLine, &TYPE_LINE_PATTERN, 1, verbatim),
        SubtitleRule::new(SubtitleField::Subtype, &SUBTYPE_PATTERN, 1, verbatim),
        SubtitleRule::new(SubtitleField::Power, r"([0-9X*]+)/([0-9X*]+)", 1, verbatim),
        SubtitleRule::new(SubtitleField::Toughness, r"([0-9X*]+)/([0-9X*]+)", 2, verbatim),
        SubtitleRule::new(SubtitleField::Loyalty, r"\(Loyalty: ([0-9X*]+)\)", 1, verbatim),
    ];
}

/// A subtitle line with line breaks removed and whitespace collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtitle(String);

impl Subtitle {
    pub fn new(raw: &str) -> Self {
        Subtitle(collapse_whitespace(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn field(&self, field: SubtitleField) -> String {
        SUBTITLE_RULES
            .iter()
            .find(|rule| rule.field == field)
            .map(|rule| rule.apply(&self.0))
            .unwrap_or_default()
    }

    /// Power and toughness, read from the same `N/N` pair. Either both are
    /// present or both are empty.
    pub fn power_toughness(&self) -> (String, String) {
        let power = self.field(SubtitleField::Power);
        let toughness = self.field(SubtitleField::Toughness);
        if power.is_empty() || toughness.is_empty() {
            return (String::new(), String::new());
        }
        (power, toughness)
    }
}
