//! Todo store: single source of truth for sections and todos.
//!
//! # Responsibility
//! - Provide add-section, add-todo, toggle-todo and delete-todos entry points.
//! - Publish a `StoreEvent` to observers after each effective mutation.
//!
//! # Invariants
//! - Section and todo order is insertion order.
//! - Deletion is positional: indices refer to positions at call time.
//! - Out-of-range and duplicate deletion indices are skipped, not errors.
//! - `revision` increments exactly once per effective mutation.

use crate::model::section::{Section, SectionId};
use crate::model::seed::demo_sections;
use crate::model::todo::{Todo, TodoId};
use crate::model::validation::{validate_sections, ModelValidationError};
use crate::store::events::{ObserverRegistry, StoreEvent, SubscriptionId};
use crate::store::options::{SeedData, StoreOptions};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Cloned, serializable view of store state.
///
/// Equality compares full section contents, not just section IDs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Store revision at the time the snapshot was taken.
    pub revision: u64,
    /// Deep copy of all sections in display order.
    pub sections: Vec<Section>,
}

impl PartialEq for StoreSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.revision == other.revision
            && self.sections.len() == other.sections.len()
            && self
                .sections
                .iter()
                .zip(&other.sections)
                .all(|(left, right)| left.same_content(right))
    }
}

impl Eq for StoreSnapshot {}

/// In-memory store of ordered sections.
pub struct TodoStore {
    sections: Vec<Section>,
    placeholder_title: String,
    revision: u64,
    observers: ObserverRegistry,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore")
            .field("sections", &self.sections)
            .field("revision", &self.revision)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl TodoStore {
    /// Creates a store seeded with the demo sections.
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    /// Creates a store from explicit options.
    pub fn with_options(options: StoreOptions) -> Self {
        let sections = match options.seed {
            SeedData::Demo => demo_sections(),
            SeedData::Empty => Vec::new(),
        };
        Self::from_parts(sections, options.placeholder_title)
    }

    /// Creates a store that owns caller-provided sections.
    ///
    /// # Errors
    /// - `NilId` or `DuplicateId` when section/todo identity is not unique.
    pub fn from_sections(sections: Vec<Section>) -> Result<Self, ModelValidationError> {
        validate_sections(&sections)?;
        Ok(Self::from_parts(
            sections,
            StoreOptions::default().placeholder_title,
        ))
    }

    fn from_parts(sections: Vec<Section>, placeholder_title: String) -> Self {
        debug!(
            "event=store_init module=store status=ok sections={}",
            sections.len()
        );
        Self {
            sections,
            placeholder_title,
            revision: 0,
            observers: ObserverRegistry::default(),
        }
    }

    /// All sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Finds a section by ID.
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Finds a todo in any section.
    pub fn todo(&self, id: TodoId) -> Option<&Todo> {
        self.sections.iter().find_map(|section| section.todo(id))
    }

    /// Section preselected when creating a todo: the first one.
    pub fn default_section(&self) -> Option<&Section> {
        self.sections.first()
    }

    /// Total number of todos across all sections.
    pub fn todo_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    /// Number of effective mutations applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Clones current state together with the revision.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            revision: self.revision,
            sections: self.sections.clone(),
        }
    }

    /// Registers an observer called after each effective mutation.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&StoreEvent, &[Section]) + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(Box::new(observer))
    }

    /// Removes an observer. Returns `false` when the ID is not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Number of active subscriptions.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Appends a section seeded with one open placeholder todo.
    ///
    /// Any title is accepted, including the empty string.
    pub fn add_section(&mut self, title: impl Into<String>) -> SectionId {
        let section = Section::with_placeholder(title, self.placeholder_title.as_str());
        let id = section.id;
        self.sections.push(section);
        self.publish(StoreEvent::SectionAdded { section: id });
        id
    }

    /// Appends an open todo to `to_section`.
    ///
    /// Returns `None` without notifying when the section does not exist.
    pub fn add_todo(&mut self, title: impl Into<String>, to_section: SectionId) -> Option<TodoId> {
        let Some(section) = self.section_mut(to_section) else {
            debug!(
                "event=todo_add module=store status=skipped reason=section_not_found section={}",
                to_section
            );
            return None;
        };
        let todo = Todo::new(title);
        let id = todo.id;
        section.todos.push(todo);
        self.publish(StoreEvent::TodoAdded {
            section: to_section,
            todo: id,
        });
        Some(id)
    }

    /// Flips `completed` on the todo in place and returns the new value.
    ///
    /// Returns `None` without notifying when the todo does not exist.
    pub fn toggle_todo(&mut self, todo: TodoId) -> Option<bool> {
        let toggled = self.sections.iter_mut().find_map(|section| {
            let section_id = section.id;
            section
                .todo_mut(todo)
                .map(|item| (section_id, item.toggle()))
        });
        let Some((section, completed)) = toggled else {
            debug!(
                "event=todo_toggle module=store status=skipped reason=todo_not_found todo={}",
                todo
            );
            return None;
        };
        self.publish(StoreEvent::TodoToggled {
            section,
            todo,
            completed,
        });
        Some(completed)
    }

    /// Removes the todos at `indices` from `from_section`.
    ///
    /// Indices are positions at call time. Duplicates count once and
    /// out-of-range positions are skipped. Returns the removed todos in
    /// ascending position order; an empty result means nothing changed.
    pub fn delete_todos(
        &mut self,
        indices: impl IntoIterator<Item = usize>,
        from_section: SectionId,
    ) -> Vec<Todo> {
        let Some(section) = self.section_mut(from_section) else {
            debug!(
                "event=todos_delete module=store status=skipped reason=section_not_found section={}",
                from_section
            );
            return Vec::new();
        };

        let len = section.todos.len();
        let (valid, out_of_range): (BTreeSet<usize>, BTreeSet<usize>) =
            indices.into_iter().partition(|index| *index < len);
        if !out_of_range.is_empty() {
            warn!(
                "event=todos_delete module=store status=partial reason=index_out_of_range section={} len={} ignored={:?}",
                from_section, len, out_of_range
            );
        }

        let mut removed: Vec<Todo> = valid
            .into_iter()
            .rev()
            .map(|index| section.todos.remove(index))
            .collect();
        removed.reverse();

        if removed.is_empty() {
            return removed;
        }
        self.publish(StoreEvent::TodosDeleted {
            section: from_section,
            removed: removed.iter().map(|todo| todo.id).collect(),
        });
        removed
    }

    fn section_mut(&mut self, id: SectionId) -> Option<&mut Section> {
        self.sections.iter_mut().find(|section| section.id == id)
    }

    fn publish(&mut self, event: StoreEvent) {
        self.revision += 1;
        info!(
            "event={} module=store status=ok section={} revision={}",
            event.name(),
            event.section(),
            self.revision
        );
        self.observers.notify(&event, &self.sections);
    }
}
