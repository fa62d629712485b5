//! Identity validation for caller-supplied sections and todos.

use crate::model::section::Section;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Validation errors for caller-supplied model identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelValidationError {
    /// Section or todo ID is the nil UUID.
    NilId,
    /// The same ID appears more than once across sections and todos.
    DuplicateId(Uuid),
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "id must not be nil"),
            Self::DuplicateId(id) => write!(f, "duplicate id: {id}"),
        }
    }
}

impl Error for ModelValidationError {}

/// Checks that every section and todo ID is non-nil and unique.
///
/// Section IDs and todo IDs share one namespace.
pub fn validate_sections(sections: &[Section]) -> Result<(), ModelValidationError> {
    let mut seen = HashSet::new();
    let ids = sections
        .iter()
        .flat_map(|section| std::iter::once(section.id).chain(section.todos.iter().map(|t| t.id)));
    for id in ids {
        if id.is_nil() {
            return Err(ModelValidationError::NilId);
        }
        if !seen.insert(id) {
            return Err(ModelValidationError::DuplicateId(id));
        }
    }
    Ok(())
}
