pub mod assembler;
pub mod batch;
pub mod page_fetcher;
