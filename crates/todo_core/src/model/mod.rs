//! Domain model for sections and todos.
//!
//! # Responsibility
//! - Define the records the store owns and mutates.
//! - Provide the demo seed dataset used by a freshly created store.
//!
//! # Invariants
//! - Every section and todo carries a generated, stable UUID.
//! - Todo order inside a section is insertion order and is significant.
//! - Sections own their todos exclusively; no todo is shared.

pub mod section;
pub mod seed;
pub mod todo;
pub mod validation;
