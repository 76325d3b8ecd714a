//! Field extractors: one pure function per card attribute, each reading a
//! [`CardPage`](crate::document::CardPage) and returning an empty value when
//! the attribute is not on the page.

pub mod fields;
pub mod subtitle;
