//! In-memory store of sections and todos.
//!
//! # Responsibility
//! - Own the ordered section list and apply the four mutators.
//! - Notify subscribed observers after every effective mutation.
//!
//! # Invariants
//! - Lookups go by `SectionId`/`TodoId`, never by structural equality.
//! - Lookup misses are silent no-ops: no error, no notification.
//! - Observers see post-mutation state, once per effective mutation.

pub mod events;
pub mod options;
pub mod todo_store;
