//! List fields: a sequence of references or scalars
//!
//! The list and its element carry independent optionality, so all four
//! combinations `[T!]!`, `[T]!`, `[T!]` and `[T]` can be expressed.

use crate::{AuthDefinition, AuthRules, ReferenceDefinition, ScalarDefinition};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The element type wrapped by a list
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListElement {
    Reference(ReferenceDefinition),
    Scalar(ScalarDefinition),
}

impl ListElement {
    /// Whether the element itself may be absent
    pub fn is_optional(&self) -> bool {
        match self {
            Self::Reference(reference) => reference.is_optional(),
            Self::Scalar(scalar) => scalar.is_optional(),
        }
    }
}

impl From<ReferenceDefinition> for ListElement {
    fn from(reference: ReferenceDefinition) -> Self {
        Self::Reference(reference)
    }
}

impl From<ScalarDefinition> for ListElement {
    fn from(scalar: ScalarDefinition) -> Self {
        Self::Scalar(scalar)
    }
}

impl fmt::Display for ListElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference(reference) => fmt::Display::fmt(reference, f),
            Self::Scalar(scalar) => fmt::Display::fmt(scalar, f),
        }
    }
}

/// A list-of-elements field
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListDefinition {
    element: ListElement,
    is_optional: bool,
}

impl ListDefinition {
    /// Wrap an element; the list itself starts out required
    pub fn new(element: impl Into<ListElement>) -> Self {
        Self {
            element: element.into(),
            is_optional: false,
        }
    }

    /// The wrapped element, with its own optionality
    pub fn element(&self) -> &ListElement {
        &self.element
    }

    /// Whether the list itself may be absent
    pub fn is_optional(&self) -> bool {
        self.is_optional
    }

    /// Allow the list itself to be absent
    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    /// Attach authorization rules to the list
    pub fn auth<F>(self, rules: F) -> AuthDefinition
    where
        F: FnOnce(&mut AuthRules),
    {
        AuthDefinition::new(self, rules)
    }
}

impl fmt::Display for ListDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let required = if self.is_optional { "" } else { "!" };
        write!(f, "[{}]{}", self.element, required)
    }
}
