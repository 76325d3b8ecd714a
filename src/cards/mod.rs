pub mod card;
pub mod collection;
