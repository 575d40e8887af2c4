//! Selectable option type.

use serde::{Deserialize, Serialize};

/// One selectable (value, label) pair in a filterable checklist.
///
/// `value` is the identity key: it must be unique within an option set, and
/// it is what selection state survives refreshes by. `label` is what the
/// filter matches against and what gets drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}
