use std::cell::RefCell;
use std::rc::Rc;
use todo_core::{StoreEvent, TodoStore};
use uuid::Uuid;

fn recording_store() -> (TodoStore, Rc<RefCell<Vec<StoreEvent>>>) {
    let mut store = TodoStore::new();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    store.subscribe(move |event, _| sink.borrow_mut().push(event.clone()));
    (store, events)
}

#[test]
fn each_mutation_emits_one_matching_event() {
    let (mut store, events) = recording_store();
    let school = store.sections()[0].id;

    let section = store.add_section("Chores");
    let todo = store.add_todo("Test Todo", school).unwrap();
    store.toggle_todo(todo).unwrap();
    let removed = store.delete_todos([0], school);

    assert_eq!(
        *events.borrow(),
        vec![
            StoreEvent::SectionAdded { section },
            StoreEvent::TodoAdded {
                section: school,
                todo
            },
            StoreEvent::TodoToggled {
                section: school,
                todo,
                completed: true
            },
            StoreEvent::TodosDeleted {
                section: school,
                removed: vec![removed[0].id]
            },
        ]
    );
    assert_eq!(store.revision(), 4);
}

#[test]
fn noops_emit_nothing() {
    let (mut store, events) = recording_store();
    let fun = store.sections()[1].id;

    store.add_todo("nowhere", Uuid::new_v4());
    store.toggle_todo(Uuid::new_v4());
    store.delete_todos([0], Uuid::new_v4());
    store.delete_todos([9], fun);
    store.delete_todos(Vec::new(), fun);

    assert!(events.borrow().is_empty());
    assert_eq!(store.revision(), 0);
}

#[test]
fn observers_see_post_mutation_state() {
    let mut store = TodoStore::new();
    let school = store.sections()[0].id;
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |event, sections| {
        let section = sections
            .iter()
            .find(|s| s.id == event.section())
            .expect("event section should exist");
        sink.borrow_mut().push(section.len());
    });

    store.add_todo("one", school);
    store.add_todo("two", school);
    store.delete_todos([0, 1, 2], school);

    assert_eq!(*seen.borrow(), vec![4, 5, 2]);
}

#[test]
fn unsubscribe_stops_delivery() {
    let (mut store, events) = recording_store();
    let counter = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&counter);
    let id = store.subscribe(move |_, _| *sink.borrow_mut() += 1);
    assert_eq!(store.observer_count(), 2);

    store.add_section("first");
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.add_section("second");

    assert_eq!(*counter.borrow(), 1);
    assert_eq!(events.borrow().len(), 2);
    assert_eq!(store.observer_count(), 1);
}
