//! The interactive command shell that drives the catalog.
//!
//! A [`Session`] is never changed in place: applying a [`Command`] hands back
//! the session to use for the next line together with what should happen.

use std::path::{Path, PathBuf};

use crate::cards::card::Card;
use crate::cards::collection::{Collection, CollectionEntry};
use crate::error::CardError;
use crate::utilities::string_manipulators::clean_token;

pub const HELP: &str = "Commands:
  set <code>              select the set cards are fetched from
  <number> [...]          fetch cards from the selected set and add them
  remove <number> [count] remove copies of a card of the selected set (also rm)
  undo                    revert the last add or remove
  glance                  list the collection
  peruse [number]         show the collection, or one card of the selected set, in detail
  save [file]             write the collection to the data file, or to <file>
  help                    show this message
  exit                    leave cardbase";

const UNSAVED_WARNING: &str =
    "Don't forget to save. If you really wish to quit without saving, type \"exit\" again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Set(Option<String>),
    Save(Option<PathBuf>),
    Fetch(Vec<String>),
    Remove {
        card_number: Option<String>,
        count: u32,
    },
    Undo,
    Glance,
    Peruse(Option<String>),
    Invalid,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let mut args = line.split_whitespace();

        match args.next() {
            None => Command::Invalid,
            Some("help") => Command::Help,
            Some("exit") => Command::Exit,
            Some("undo") => Command::Undo,
            Some("glance") => Command::Glance,
            Some("set") => Command::Set(next_token(&mut args)),
            Some("save") => Command::Save(args.next().map(PathBuf::from)),
            Some("peruse") => Command::Peruse(next_token(&mut args)),
            Some("remove") | Some("rm") => {
                let card_number = next_token(&mut args);
                let count = args
                    .next()
                    .and_then(|count| count.parse::<u32>().ok())
                    .unwrap_or(1);
                Command::Remove { card_number, count }
            }
            Some(first) => {
                let card_numbers: Vec<String> = std::iter::once(first)
                    .chain(args)
                    .map(clean_token)
                    .filter(|number| !number.is_empty())
                    .collect();
                if card_numbers.is_empty() {
                    Command::Invalid
                } else {
                    Command::Fetch(card_numbers)
                }
            }
        }
    }
}

fn next_token<'a>(args: &mut impl Iterator<Item = &'a str>) -> Option<String> {
    args.next().map(clean_token).filter(|token| !token.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Message(String),
    Fetch {
        set_code: String,
        card_numbers: Vec<String>,
    },
    Save,
    Exit,
}

/// The last change made to the collection, kept so it can be undone once.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Added { card: Card, count: u32 },
    Removed { card: Card, count: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    set_code: Option<String>,
    data_file: PathBuf,
    collection: Collection,
    last_action: Option<Action>,
    unsaved: bool,
}

impl Session {
    pub fn new(data_file: PathBuf) -> Self {
        Self::with_collection(data_file, Collection::default())
    }

    pub fn with_collection(data_file: PathBuf, collection: Collection) -> Self {
        Self {
            set_code: None,
            data_file,
            collection,
            last_action: None,
            unsaved: false,
        }
    }

    pub fn set_code(&self) -> Option<&str> {
        self.set_code.as_deref()
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    pub fn prompt(&self) -> String {
        format!("({})> ", self.set_code().unwrap_or_default())
    }

    pub fn apply(&self, command: Command) -> (Session, Outcome) {
        match command {
            Command::Help => (self.clone(), Outcome::Message(HELP.to_string())),
            Command::Exit if self.unsaved => {
                let next = Session {
                    unsaved: false,
                    ..self.clone()
                };
                (next, Outcome::Message(UNSAVED_WARNING.to_string()))
            }
            Command::Exit => (self.clone(), Outcome::Exit),
            Command::Set(set_code) => {
                let message = match &set_code {
                    Some(code) => format!("Selected set {}", code),
                    None => "Cleared the selected set".to_string(),
                };
                // Undo does not reach across a set change.
                let next = Session {
                    set_code,
                    last_action: None,
                    ..self.clone()
                };
                (next, Outcome::Message(message))
            }
            Command::Save(Some(data_file)) => {
                let next = Session {
                    data_file,
                    ..self.clone()
                };
                (next, Outcome::Save)
            }
            Command::Save(None) => (self.clone(), Outcome::Save),
            Command::Fetch(card_numbers) => match &self.set_code {
                Some(set_code) => (
                    self.clone(),
                    Outcome::Fetch {
                        set_code: set_code.clone(),
                        card_numbers,
                    },
                ),
                None => (
                    self.clone(),
                    Outcome::Message(
                        "Select a set with the \"set\" command before adding cards.".to_string(),
                    ),
                ),
            },
            Command::Remove { card_number, count } => self.remove(card_number, count),
            Command::Undo => self.undo(),
            Command::Glance => (self.clone(), Outcome::Message(self.glance())),
            Command::Peruse(card_number) => (self.clone(), Outcome::Message(self.peruse(card_number))),
            Command::Invalid => (self.clone(), Outcome::Message("Invalid input".to_string())),
        }
    }

    /// Adds one copy of a fetched card to the collection.
    pub fn add(&self, card: Card) -> (Session, String) {
        self.add_copies(card, 1)
    }

    /// Writes the collection to the data file.
    pub fn save(&self) -> std::io::Result<Session> {
        self.collection.write(&self.data_file)?;
        Ok(Session {
            unsaved: false,
            ..self.clone()
        })
    }

    fn add_copies(&self, card: Card, count: u32) -> (Session, String) {
        let message = format!("Added {}x {}.", count, card.title);
        let mut collection = self.collection.clone();
        collection.add(card.clone(), count);
        let next = Session {
            collection,
            last_action: Some(Action::Added { card, count }),
            unsaved: true,
            ..self.clone()
        };
        (next, message)
    }

    fn remove_copies(&self, card: Card, count: u32) -> (Session, String) {
        let mut collection = self.collection.clone();
        let removed = collection.remove(&card.edition, &card.collector_number, count);
        if removed == 0 {
            return (
                self.clone(),
                format!("{} is not in the cardbase.", card.title),
            );
        }
        let message = format!("Removed {}x {}.", removed, card.title);
        let next = Session {
            collection,
            last_action: Some(Action::Removed {
                card,
                count: removed,
            }),
            unsaved: true,
            ..self.clone()
        };
        (next, message)
    }

    fn remove(&self, card_number: Option<String>, count: u32) -> (Session, Outcome) {
        let message = |text: String| (self.clone(), Outcome::Message(text));

        let Some(set_code) = &self.set_code else {
            return message("Select a set before removing cards.".to_string());
        };
        let Some(card_number) = card_number else {
            return message("Please specify a card number to remove.".to_string());
        };
        if count == 0 {
            return message("Can't remove 0 cards.".to_string());
        }
        match self.collection.get(set_code, &card_number) {
            Some(entry) => {
                let (next, text) = self.remove_copies(entry.card.clone(), count);
                (next, Outcome::Message(text))
            }
            None => message(format!("{} is not in the cardbase.", card_number)),
        }
    }

    fn undo(&self) -> (Session, Outcome) {
        let (next, text) = match &self.last_action {
            Some(Action::Added { card, count }) => self.remove_copies(card.clone(), *count),
            Some(Action::Removed { card, count }) => self.add_copies(card.clone(), *count),
            None => return (self.clone(), Outcome::Message("Nothing to undo.".to_string())),
        };
        // Only one step can be undone.
        let next = Session {
            last_action: None,
            ..next
        };
        (next, Outcome::Message(text))
    }

    fn glance(&self) -> String {
        let mut lines: Vec<String> = self.collection.entries().iter().map(glance_line).collect();
        lines.push(format!("Total: {}", self.collection.total()));
        lines.join("\n")
    }

    fn peruse(&self, card_number: Option<String>) -> String {
        let Some(card_number) = card_number else {
            let mut lines: Vec<String> = self.collection.entries().iter().map(perusal).collect();
            lines.push(format!("Total: {}", self.collection.total()));
            return lines.join("\n");
        };
        let Some(set_code) = &self.set_code else {
            return "Please select a set before perusing a specific card.".to_string();
        };
        match self.collection.get(set_code, &card_number) {
            Some(entry) => perusal(entry),
            None => "Card not in cardbase.".to_string(),
        }
    }
}

fn glance_line(entry: &CollectionEntry) -> String {
    format!(
        "{:<4} {} ({}, {})",
        entry.count, entry.card.title, entry.card.edition, entry.card.collector_number
    )
}

/// The glance line followed by the card's text, one indented line per
/// attribute the card has.
fn perusal(entry: &CollectionEntry) -> String {
    let card = &entry.card;
    let mut lines = vec![glance_line(entry)];

    if !card.type_line.is_empty() {
        if card.subtype.is_empty() {
            lines.push(format!("\t{}", card.type_line));
        } else {
            lines.push(format!("\t{} — {}", card.type_line, card.subtype));
        }
    }
    if !card.cost.is_empty() {
        lines.push(format!("\tCost: {}", card.cost));
    }
    if !card.power.is_empty() && !card.toughness.is_empty() {
        lines.push(format!("\t{}/{}", card.power, card.toughness));
    }
    if !card.loyalty.is_empty() {
        lines.push(format!("\tLoyalty: {}", card.loyalty));
    }
    lines.extend(card.rules_text.iter().map(|rule| format!("\t{}", rule)));
    if !card.flavor_text.is_empty() {
        lines.push(format!("\t{}", card.flavor_text));
    }
    if !card.rarity.is_empty() {
        lines.push(format!("\t{}", card.rarity));
    }
    if !card.artist.is_empty() {
        lines.push(format!("\tIllus. {}", card.artist));
    }

    lines.join("\n")
}

/// The line shown to the user for one fetch result.
pub fn describe(card_number: &str, result: &Result<Card, CardError>) -> String {
    match result {
        Ok(card) => format!("{} {}", card_number, card.title),
        Err(CardError::NotFound(_)) => format!("{} Card not found.", card_number),
        Err(CardError::Transport { message, .. }) => format!(
            "{} Could not reach the catalog ({}), try again later.",
            card_number, message
        ),
        Err(e) => format!("{} {}", card_number, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::helpers::khalni_hydra_card;
    use tempfile::tempdir;

    fn session() -> Session {
        Session::new(PathBuf::from("cards.json"))
    }

    fn card(edition: &str, collector_number: &str, title: &str) -> Card {
        Card {
            title: title.to_string(),
            edition: edition.to_string(),
            collector_number: collector_number.to_string(),
            ..Default::default()
        }
    }

    fn message(outcome: Outcome) -> String {
        match outcome {
            Outcome::Message(message) => message,
            other => panic!("expected a message, got {:?}", other),
        }
    }

    /// A session on set `dtk` holding the given cards, with nothing to undo.
    fn session_with(cards: &[(Card, u32)]) -> Session {
        let mut collection = Collection::default();
        for (card, count) in cards {
            collection.add(card.clone(), *count);
        }
        let session = Session::with_collection(PathBuf::from("cards.json"), collection);
        session.apply(Command::Set(Some("dtk".to_string()))).0
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("  exit  "), Command::Exit);
        assert_eq!(Command::parse("undo"), Command::Undo);
        assert_eq!(Command::parse("glance\n"), Command::Glance);
        assert_eq!(Command::parse(""), Command::Invalid);
        assert_eq!(Command::parse(" \t "), Command::Invalid);
        assert_eq!(
            Command::parse("save other.json"),
            Command::Save(Some(PathBuf::from("other.json")))
        );
        assert_eq!(Command::parse("save"), Command::Save(None));
        assert_eq!(Command::parse("peruse"), Command::Peruse(None));
        assert_eq!(
            Command::parse("peruse #253"),
            Command::Peruse(Some("253".to_string()))
        );
    }

    #[test]
    fn test_parse_remove() {
        assert_eq!(
            Command::parse("remove 253 3"),
            Command::Remove {
                card_number: Some("253".to_string()),
                count: 3
            }
        );
        assert_eq!(
            Command::parse("rm 253 lots"),
            Command::Remove {
                card_number: Some("253".to_string()),
                count: 1
            }
        );
        assert_eq!(
            Command::parse("rm"),
            Command::Remove {
                card_number: None,
                count: 1
            }
        );
    }

    #[test]
    fn test_parse_set_sanitizes_code() {
        assert_eq!(
            Command::parse("set\tm-15!"),
            Command::Set(Some("m15".to_string()))
        );
        assert_eq!(Command::parse("set"), Command::Set(None));
        assert_eq!(Command::parse("set ---"), Command::Set(None));
    }

    #[test]
    fn test_parse_card_numbers() {
        assert_eq!(
            Command::parse("31a"),
            Command::Fetch(vec!["31a".to_string()])
        );
        assert_eq!(
            Command::parse("276 #281  ?? 33"),
            Command::Fetch(vec!["276".to_string(), "281".to_string(), "33".to_string()])
        );
        assert_eq!(Command::parse("??"), Command::Invalid);
    }

    #[test]
    fn test_fetch_requires_a_set() {
        let (next, outcome) = session().apply(Command::Fetch(vec!["276".to_string()]));
        assert_eq!(next, session());
        assert_eq!(
            outcome,
            Outcome::Message("Select a set with the \"set\" command before adding cards.".to_string())
        );
    }

    #[test]
    fn test_session_is_threaded_through_commands() {
        let start = session();
        let (with_set, _) = start.apply(Command::Set(Some("m15".to_string())));
        assert_eq!(start.set_code(), None);
        assert_eq!(with_set.set_code(), Some("m15"));
        assert_eq!(with_set.prompt(), "(m15)> ");

        let (_, outcome) = with_set.apply(Command::Fetch(vec!["276".to_string(), "281".to_string()]));
        assert_eq!(
            outcome,
            Outcome::Fetch {
                set_code: "m15".to_string(),
                card_numbers: vec!["276".to_string(), "281".to_string()],
            }
        );

        let (saved, outcome) = with_set.apply(Command::Save(Some(PathBuf::from("other.json"))));
        assert_eq!(outcome, Outcome::Save);
        assert_eq!(saved.data_file(), Path::new("other.json"));
        assert_eq!(saved.set_code(), Some("m15"));

        let (cleared, _) = saved.apply(Command::Set(None));
        assert_eq!(cleared.set_code(), None);
        assert_eq!(cleared.prompt(), "()> ");
    }

    #[test]
    fn test_exit_and_help() {
        assert_eq!(session().apply(Command::Exit).1, Outcome::Exit);
        assert_eq!(
            session().apply(Command::Help).1,
            Outcome::Message(HELP.to_string())
        );
        assert_eq!(
            session().apply(Command::Invalid).1,
            Outcome::Message("Invalid input".to_string())
        );
    }

    #[test]
    fn test_adding_the_same_card_twice_counts_it() {
        let (once, first) = session().add(card("dtk", "253", "Island"));
        let (twice, second) = once.add(card("dtk", "253", "Island"));

        assert_eq!(first, "Added 1x Island.");
        assert_eq!(second, "Added 1x Island.");
        assert_eq!(twice.collection().entries().len(), 1);
        assert_eq!(twice.collection().count_of("dtk", "253"), 2);
        assert!(twice.has_unsaved_changes());
        assert!(session().collection().entries().is_empty());
    }

    #[test]
    fn test_remove_copies() {
        let session = session_with(&[(card("dtk", "253", "Island"), 3)]);

        let (next, outcome) = session.apply(Command::parse("rm 253 2"));
        assert_eq!(message(outcome), "Removed 2x Island.");
        assert_eq!(next.collection().count_of("dtk", "253"), 1);

        let (next, outcome) = next.apply(Command::parse("remove 253 5"));
        assert_eq!(message(outcome), "Removed 1x Island.");
        assert!(next.collection().entries().is_empty());

        let (_, outcome) = next.apply(Command::parse("remove 253"));
        assert_eq!(message(outcome), "253 is not in the cardbase.");
    }

    #[test]
    fn test_remove_preconditions() {
        let (_, outcome) = session().apply(Command::parse("rm 253"));
        assert_eq!(message(outcome), "Select a set before removing cards.");

        let with_set = session_with(&[(card("dtk", "253", "Island"), 1)]);
        let (_, outcome) = with_set.apply(Command::parse("rm"));
        assert_eq!(message(outcome), "Please specify a card number to remove.");

        let (next, outcome) = with_set.apply(Command::parse("rm 253 0"));
        assert_eq!(message(outcome), "Can't remove 0 cards.");
        assert_eq!(next, with_set);
    }

    #[test]
    fn test_undo_reverts_the_last_change_once() {
        let (added, _) = session_with(&[]).add(card("dtk", "253", "Island"));

        let (undone, outcome) = added.apply(Command::Undo);
        assert_eq!(message(outcome), "Removed 1x Island.");
        assert!(undone.collection().entries().is_empty());

        let (_, outcome) = undone.apply(Command::Undo);
        assert_eq!(message(outcome), "Nothing to undo.");

        let (removed, _) = added.apply(Command::parse("rm 253"));
        let (restored, outcome) = removed.apply(Command::Undo);
        assert_eq!(message(outcome), "Added 1x Island.");
        assert_eq!(restored.collection().count_of("dtk", "253"), 1);
    }

    #[test]
    fn test_set_change_clears_undo() {
        let (added, _) = session_with(&[]).add(card("dtk", "253", "Island"));
        let (moved, _) = added.apply(Command::Set(Some("roe".to_string())));

        let (_, outcome) = moved.apply(Command::Undo);
        assert_eq!(message(outcome), "Nothing to undo.");
    }

    #[test]
    fn test_glance_lists_counts_and_total() {
        let session = session_with(&[
            (card("dtk", "253", "Island"), 12),
            (card("m10", "276", "Nightmare"), 1),
        ]);

        let (_, outcome) = session.apply(Command::Glance);
        assert_eq!(
            message(outcome),
            "12   Island (dtk, 253)\n1    Nightmare (m10, 276)\nTotal: 13"
        );
    }

    #[test]
    fn test_peruse_shows_card_details() {
        let mut collection = Collection::default();
        collection.add(khalni_hydra_card(), 2);
        let session = Session::with_collection(PathBuf::from("cards.json"), collection);

        let (_, outcome) = session.apply(Command::Peruse(Some("192".to_string())));
        assert_eq!(
            message(outcome),
            "Please select a set before perusing a specific card."
        );

        let (on_roe, _) = session.apply(Command::Set(Some("roe".to_string())));
        let perusal = message(on_roe.apply(Command::parse("peruse 192")).1);
        let lines: Vec<&str> = perusal.lines().collect();
        assert_eq!(lines[0], "2    Khalni Hydra (roe, 192)");
        assert_eq!(lines[1], "\tCreature — Hydra");
        assert_eq!(lines[2], "\tCost: GGGGGGGG");
        assert_eq!(lines[3], "\t8/8");
        assert!(lines.contains(&"\tTrample"));
        assert_eq!(lines.last(), Some(&"\tIllus. Todd Lockwood"));

        let (_, outcome) = on_roe.apply(Command::parse("peruse 1"));
        assert_eq!(message(outcome), "Card not in cardbase.");

        let everything = message(on_roe.apply(Command::Peruse(None)).1);
        assert!(everything.starts_with("2    Khalni Hydra (roe, 192)"));
        assert!(everything.ends_with("Total: 2"));
    }

    #[test]
    fn test_exit_warns_once_about_unsaved_changes() {
        let (added, _) = session().add(card("dtk", "253", "Island"));

        let (warned, outcome) = added.apply(Command::Exit);
        assert_eq!(outcome, Outcome::Message(UNSAVED_WARNING.to_string()));
        assert_eq!(warned.apply(Command::Exit).1, Outcome::Exit);
    }

    #[test]
    fn test_save_writes_the_collection() {
        let temp_dir = tempdir().unwrap();
        let (added, _) =
            Session::new(temp_dir.path().join("cards.json")).add(card("dtk", "253", "Island"));
        let (added, _) = added.add(card("dtk", "253", "Island"));

        let saved = added.save().unwrap();
        assert!(!saved.has_unsaved_changes());
        assert_eq!(saved.apply(Command::Exit).1, Outcome::Exit);

        let loaded = Collection::load(saved.data_file()).unwrap();
        assert_eq!(loaded.entries().len(), 1);
        assert_eq!(loaded.count_of("dtk", "253"), 2);
    }

    #[test]
    fn test_describe_results() {
        let card = Card {
            title: "Nightmare".to_string(),
            ..Default::default()
        };
        assert_eq!(describe("276", &Ok(card)), "276 Nightmare");
        assert_eq!(
            describe("999", &Err(CardError::NotFound("No such card".to_string()))),
            "999 Card not found."
        );
        assert_eq!(
            describe("281", &Err(CardError::transport("http://x", "timed out"))),
            "281 Could not reach the catalog (timed out), try again later."
        );
    }
}
