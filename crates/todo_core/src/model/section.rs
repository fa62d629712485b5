//! Section record: a named, ordered group of todos.
//!
//! # Invariants
//! - Section identity is its `id`; equality ignores title and contents.
//! - A section created through `Section::new` holds exactly one placeholder todo.

use crate::model::todo::{Todo, TodoId};
use crate::model::validation::ModelValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a section.
pub type SectionId = Uuid;

/// Title of the todo seeded into every new section.
pub const PLACEHOLDER_TODO_TITLE: &str = "new";

/// Named grouping of todo items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Stable ID used for every lookup; never reused.
    pub id: SectionId,
    /// Display heading. Any text is accepted, including empty.
    pub title: String,
    /// Todos in display order; positions drive positional deletion.
    pub todos: Vec<Todo>,
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Section {}

impl Section {
    /// Creates a section seeded with one open `"new"` todo.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_placeholder(title, PLACEHOLDER_TODO_TITLE)
    }

    /// Creates a section seeded with one open todo titled `placeholder`.
    pub fn with_placeholder(title: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self::with_todos(title, vec![Todo::new(placeholder)])
    }

    /// Creates a section with a generated ID and an explicit todo list.
    pub fn with_todos(title: impl Into<String>, todos: Vec<Todo>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            todos,
        }
    }

    /// Creates a section with caller-provided identity.
    ///
    /// # Errors
    /// - `NilId` when `id` is nil.
    /// - `DuplicateId` when two todos in `todos` share an ID.
    pub fn with_id(
        id: SectionId,
        title: impl Into<String>,
        todos: Vec<Todo>,
    ) -> Result<Self, ModelValidationError> {
        if id.is_nil() {
            return Err(ModelValidationError::NilId);
        }
        let section = Self {
            id,
            title: title.into(),
            todos,
        };
        crate::model::validation::validate_sections(std::slice::from_ref(&section))?;
        Ok(section)
    }

    /// Compares ID, title and every todo, unlike `==` which compares IDs only.
    pub fn same_content(&self, other: &Self) -> bool {
        self.id == other.id && self.title == other.title && self.todos == other.todos
    }

    /// Number of todos in this section.
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Whether every todo has been deleted.
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Number of todos marked complete.
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }

    /// Finds a todo of this section by ID.
    pub fn todo(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Mutable variant of `todo`.
    pub fn todo_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == id)
    }

    /// Current position of the todo in display order.
    pub fn position_of(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::{Section, PLACEHOLDER_TODO_TITLE};
    use crate::model::todo::Todo;

    #[test]
    fn new_section_has_single_placeholder_todo() {
        let section = Section::new("Chores");
        assert_eq!(section.title, "Chores");
        assert_eq!(section.len(), 1);
        assert_eq!(section.todos[0].title, PLACEHOLDER_TODO_TITLE);
        assert!(!section.todos[0].completed);
    }

    #[test]
    fn equality_is_by_id_only() {
        let a = Section::with_todos("Same", Vec::new());
        let b = Section::with_todos("Same", Vec::new());
        assert_ne!(a, b);

        let mut renamed = a.clone();
        renamed.title = "Other".to_string();
        renamed.todos.push(Todo::new("extra"));
        assert_eq!(a, renamed);
        assert!(!a.same_content(&renamed));
        assert!(a.same_content(&a.clone()));
    }

    #[test]
    fn lookup_helpers_find_by_id() {
        let first = Todo::new("one");
        let second = Todo::done("two");
        let section = Section::with_todos("s", vec![first.clone(), second.clone()]);

        assert_eq!(section.position_of(second.id), Some(1));
        assert_eq!(section.todo(first.id).map(|t| t.title.as_str()), Some("one"));
        assert_eq!(section.completed_count(), 1);
        assert!(section.todo(uuid::Uuid::new_v4()).is_none());
    }
}
