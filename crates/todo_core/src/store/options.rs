//! Store construction options.

use crate::model::section::PLACEHOLDER_TODO_TITLE;

/// Initial dataset loaded by `TodoStore::with_options`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedData {
    /// `School` and `Fun` demo sections.
    #[default]
    Demo,
    /// No sections.
    Empty,
}

/// Options for constructing a `TodoStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Sections loaded at construction.
    pub seed: SeedData,
    /// Title of the todo seeded into sections created by `add_section`.
    pub placeholder_title: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            seed: SeedData::Demo,
            placeholder_title: PLACEHOLDER_TODO_TITLE.to_string(),
        }
    }
}

impl StoreOptions {
    /// Options for an empty store with the default placeholder title.
    pub fn empty() -> Self {
        Self {
            seed: SeedData::Empty,
            ..Self::default()
        }
    }
}
