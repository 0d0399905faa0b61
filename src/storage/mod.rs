//! Storage implementations backing the views

pub mod in_memory;

pub use in_memory::{ActionLogEntry, InMemoryRecordStore};
