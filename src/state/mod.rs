/// State management module
///
/// This module handles all application state, including:
/// - Key/value persistence (storage.rs)
/// - Shared data structures (data.rs)
/// - The movie catalog (catalog.rs)
/// - Owner mode and the PIN dialog (access.rs)
/// - Category and search filtering (filter.rs)
/// - The upload form (upload.rs)
/// - The coordinator tying it together (studio.rs)

pub mod storage;
pub mod data;
pub mod catalog;
pub mod access;
pub mod filter;
pub mod upload;
pub mod studio;
