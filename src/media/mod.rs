/// Media collaborators
///
/// This module handles:
/// - Resolving thumbnail references and caching resized copies on disk
/// - Handing video references to the system media player

pub mod thumbnail;
pub mod player;
