//! Core types for dictionary lookups: entries, recent-lookup history, favorites, and theme.

/// Definition records returned by a lookup.
pub mod entry;
/// Favorited words in insertion order.
pub mod favorites;
/// Recent lookups, most recent first.
pub mod history;
/// Light/dark theme preference.
pub mod theme;

pub use entry::{Definition, Entry, Meaning, Phonetic};
pub use favorites::Favorites;
pub use history::{HISTORY_LIMIT, History};
pub use theme::{ParseThemeError, ThemePreference};
