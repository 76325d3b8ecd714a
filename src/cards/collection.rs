use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::card::Card;
use crate::utilities::file_management::{read_json, write_json};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub card: Card,
    pub count: u32,
}

/// The cards a user owns, one entry per (edition, collector number) with the
/// number of copies held.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    cards: Vec<CollectionEntry>,
}

impl Collection {
    /// Reads a collection written by [`Collection::write`]. A file that does
    /// not exist yet is an empty collection.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        if !path.exists() {
            debug!("No collection at {}, starting empty", path.display());
            return Ok(Collection::default());
        }
        read_json(path)
    }

    pub fn write(&self, path: &Path) -> std::io::Result<()> {
        write_json(path, self)
    }

    pub fn entries(&self) -> &[CollectionEntry] {
        &self.cards
    }

    pub fn get(&self, edition: &str, collector_number: &str) -> Option<&CollectionEntry> {
        self.cards.iter().find(|entry| {
            entry.card.edition == edition && entry.card.collector_number == collector_number
        })
    }

    pub fn count_of(&self, edition: &str, collector_number: &str) -> u32 {
        self.get(edition, collector_number)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }

    /// Total number of copies over all entries.
    pub fn total(&self) -> u32 {
        self.cards.iter().map(|entry| entry.count).sum()
    }

    /// Adds `count` copies of `card`. A card already held keeps its first
    /// snapshot and only its count grows.
    pub fn add(&mut self, card: Card, count: u32) {
        if count == 0 {
            return;
        }
        match self.cards.iter_mut().find(|entry| {
            entry.card.edition == card.edition
                && entry.card.collector_number == card.collector_number
        }) {
            Some(entry) => entry.count += count,
            None => self.cards.push(CollectionEntry { card, count }),
        }
    }

    /// Removes up to `count` copies and returns how many were removed. The
    /// entry is dropped once no copies are left.
    pub fn remove(&mut self, edition: &str, collector_number: &str, count: u32) -> u32 {
        let Some(index) = self.cards.iter().position(|entry| {
            entry.card.edition == edition && entry.card.collector_number == collector_number
        }) else {
            return 0;
        };

        let entry = &mut self.cards[index];
        if entry.count > count {
            entry.count -= count;
            count
        } else {
            let removed = entry.count;
            self.cards.remove(index);
            removed
        }
    }
}
