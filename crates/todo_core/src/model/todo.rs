//! Todo record.
//!
//! # Invariants
//! - `id` is never nil and never reused for another todo.
//! - A new todo always starts with `completed = false`.

use crate::model::validation::ModelValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a todo item.
pub type TodoId = Uuid;

/// Single task with a title and completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Todo {
    /// Stable ID, unique across the whole store.
    pub id: TodoId,
    /// User-entered text; never written to logs.
    pub title: String,
    /// Completion flag, flipped by `toggle`.
    pub completed: bool,
}

impl Todo {
    /// Creates an open todo with a generated ID.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            completed: false,
        }
    }

    /// Creates a todo with caller-provided identity and state.
    ///
    /// # Errors
    /// - Returns `ModelValidationError::NilId` when `id` is the nil UUID.
    pub fn with_id(
        id: TodoId,
        title: impl Into<String>,
        completed: bool,
    ) -> Result<Self, ModelValidationError> {
        if id.is_nil() {
            return Err(ModelValidationError::NilId);
        }
        Ok(Self {
            id,
            title: title.into(),
            completed,
        })
    }

    /// Flips `completed` and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    pub(crate) fn done(title: impl Into<String>) -> Self {
        let mut todo = Self::new(title);
        todo.completed = true;
        todo
    }
}
