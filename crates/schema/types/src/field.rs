//! Field shapes: everything a type's field can be declared as

use crate::{AuthDefinition, ListDefinition, ReferenceDefinition, ScalarDefinition, ScalarType};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldShape {
    Reference(ReferenceDefinition),
    Scalar(ScalarDefinition),
    List(ListDefinition),
    Auth(AuthDefinition),
}

impl From<ReferenceDefinition> for FieldShape {
    fn from(reference: ReferenceDefinition) -> Self {
        Self::Reference(reference)
    }
}

impl From<ScalarDefinition> for FieldShape {
    fn from(scalar: ScalarDefinition) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<ScalarType> for FieldShape {
    fn from(scalar_type: ScalarType) -> Self {
        Self::Scalar(ScalarDefinition::new(scalar_type))
    }
}

impl From<ListDefinition> for FieldShape {
    fn from(list: ListDefinition) -> Self {
        Self::List(list)
    }
}

impl From<AuthDefinition> for FieldShape {
    fn from(auth: AuthDefinition) -> Self {
        Self::Auth(auth)
    }
}

impl fmt::Display for FieldShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference(reference) => fmt::Display::fmt(reference, f),
            Self::Scalar(scalar) => fmt::Display::fmt(scalar, f),
            Self::List(list) => fmt::Display::fmt(list, f),
            Self::Auth(auth) => fmt::Display::fmt(auth, f),
        }
    }
}

/// A named field on a type
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub shape: FieldShape,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, shape: impl Into<FieldShape>) -> Self {
        Self {
            name: name.into(),
            shape: shape.into(),
        }
    }
}

impl fmt::Display for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_rendering() {
        let field = FieldDefinition::new("age", ScalarType::Int);
        assert_eq!(field.to_string(), "age: Int!");

        let field = FieldDefinition::new("tags", ScalarDefinition::new(ScalarType::String).list());
        assert_eq!(field.to_string(), "tags: [String!]!");
    }
}
