//! Demo dataset loaded into a freshly created store.

use crate::model::section::Section;
use crate::model::todo::Todo;

/// Two demo sections: `School` (3 todos) and `Fun` (2 todos).
pub fn demo_sections() -> Vec<Section> {
    vec![
        Section::with_todos(
            "School",
            vec![
                Todo::new("Homework"),
                Todo::new("Learn how to collaborate using git"),
                Todo::done("Learn SwiftUI SubViews"),
            ],
        ),
        Section::with_todos("Fun", vec![Todo::done("Code"), Todo::done("Sleep")]),
    ]
}

/// Flat demo list, used by row previews that need todos without sections.
pub fn demo_todos() -> Vec<Todo> {
    vec![
        Todo::new("Homework"),
        Todo::done("Code"),
        Todo::done("Sleep"),
        Todo::new("Learn how to collaborate using git"),
        Todo::done("Learn SwiftUI SubViews"),
    ]
}
