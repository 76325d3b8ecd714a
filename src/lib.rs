//! Fetches card detail pages from the magiccards.info catalog and reads them
//! into [`Card`](cards::card::Card) records.

pub mod cards;
pub mod catalog;
pub mod document;
pub mod error;
pub mod extract;
pub mod shell;
pub mod utilities;

#[cfg(test)]
mod test;
