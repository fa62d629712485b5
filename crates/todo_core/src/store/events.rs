//! Change notification channel for `TodoStore`.
//!
//! # Invariants
//! - Observers are called in subscription order.
//! - Subscription IDs are never reused within one registry.

use crate::model::section::{Section, SectionId};
use crate::model::todo::TodoId;
use serde::Serialize;

/// Change applied to a store. Carries IDs only; read current values from
/// the sections slice handed to the observer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StoreEvent {
    SectionAdded {
        section: SectionId,
    },
    TodoAdded {
        section: SectionId,
        todo: TodoId,
    },
    TodoToggled {
        section: SectionId,
        todo: TodoId,
        completed: bool,
    },
    TodosDeleted {
        section: SectionId,
        removed: Vec<TodoId>,
    },
}

impl StoreEvent {
    /// Stable event name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SectionAdded { .. } => "section_added",
            Self::TodoAdded { .. } => "todo_added",
            Self::TodoToggled { .. } => "todo_toggled",
            Self::TodosDeleted { .. } => "todos_deleted",
        }
    }

    /// Section touched by this change.
    pub fn section(&self) -> SectionId {
        match self {
            Self::SectionAdded { section }
            | Self::TodoAdded { section, .. }
            | Self::TodoToggled { section, .. }
            | Self::TodosDeleted { section, .. } => *section,
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Callback invoked after each effective mutation.
pub type Observer = Box<dyn FnMut(&StoreEvent, &[Section])>;

#[derive(Default)]
pub(crate) struct ObserverRegistry {
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer)>,
}

impl ObserverRegistry {
    pub(crate) fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn notify(&mut self, event: &StoreEvent, sections: &[Section]) {
        for (_, observer) in &mut self.observers {
            observer(event, sections);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ObserverRegistry, StoreEvent};
    use crate::model::section::Section;
    use std::cell::RefCell;
    use std::rc::Rc;
    use uuid::Uuid;

    #[test]
    fn notify_runs_observers_in_subscription_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ObserverRegistry::default();
        for tag in ["first", "second"] {
            let calls = Rc::clone(&calls);
            registry.subscribe(Box::new(move |_: &StoreEvent, _: &[Section]| {
                calls.borrow_mut().push(tag)
            }));
        }

        let event = StoreEvent::SectionAdded {
            section: Uuid::new_v4(),
        };
        registry.notify(&event, &[]);
        assert_eq!(*calls.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn unsubscribe_is_reported_once() {
        let mut registry = ObserverRegistry::default();
        let id = registry.subscribe(Box::new(|_: &StoreEvent, _: &[Section]| {}));
        let other = registry.subscribe(Box::new(|_: &StoreEvent, _: &[Section]| {}));
        assert_ne!(id, other);

        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn event_serializes_with_tag() {
        let section = Uuid::new_v4();
        let json = serde_json::to_value(StoreEvent::SectionAdded { section }).unwrap();
        assert_eq!(json["event"], "section_added");
        assert_eq!(json["section"], section.to_string());
    }
}
