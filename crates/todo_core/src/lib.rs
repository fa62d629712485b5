//! Core state for the todo walkthrough.
//! This crate is the single source of truth for sections, todos and their mutations.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, parse_log_level};
pub use model::section::{Section, SectionId, PLACEHOLDER_TODO_TITLE};
pub use model::seed::{demo_sections, demo_todos};
pub use model::todo::{Todo, TodoId};
pub use model::validation::ModelValidationError;
pub use store::events::{StoreEvent, SubscriptionId};
pub use store::options::{SeedData, StoreOptions};
pub use store::todo_store::{StoreSnapshot, TodoStore};

/// Minimal health-check API for wiring probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
