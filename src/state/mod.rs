/// State management module
///
/// This module handles all application state, including:
/// - The studio dataset and its data model (catalog.rs, data.rs)
/// - Search normalization and filtering (normalize.rs, filter.rs)
/// - The persisted shortlist and its storage (shortlist.rs, storage.rs)
/// - The album viewer state machine (album.rs)

pub mod album;
pub mod catalog;
pub mod data;
pub mod filter;
pub mod normalize;
pub mod shortlist;
pub mod storage;
