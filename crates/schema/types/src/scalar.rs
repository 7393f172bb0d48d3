//! Built-in scalar field types

use crate::{AuthDefinition, AuthRules, ListDefinition};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar types understood by the schema language
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    ID,
    String,
    Int,
    Float,
    Boolean,
    Date,
    DateTime,
    Email,
    IPAddress,
    Timestamp,
    URL,
    JSON,
    PhoneNumber,
}

impl ScalarType {
    /// Name of the scalar in schema text
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ID => "ID",
            Self::String => "String",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Boolean => "Boolean",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::Email => "Email",
            Self::IPAddress => "IPAddress",
            Self::Timestamp => "Timestamp",
            Self::URL => "URL",
            Self::JSON => "JSON",
            Self::PhoneNumber => "PhoneNumber",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar-typed field, required unless relaxed with [`ScalarDefinition::optional`]
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScalarDefinition {
    scalar_type: ScalarType,
    is_optional: bool,
}

impl ScalarDefinition {
    /// Create a required scalar field
    pub fn new(scalar_type: ScalarType) -> Self {
        Self {
            scalar_type,
            is_optional: false,
        }
    }

    pub fn scalar_type(&self) -> ScalarType {
        self.scalar_type
    }

    pub fn is_optional(&self) -> bool {
        self.is_optional
    }

    /// Allow the scalar to be absent
    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    /// Wrap the scalar as the element of a list
    pub fn list(self) -> ListDefinition {
        ListDefinition::new(self)
    }

    /// Attach authorization rules to the scalar
    pub fn auth<F>(self, rules: F) -> AuthDefinition
    where
        F: FnOnce(&mut AuthRules),
    {
        AuthDefinition::new(self, rules)
    }
}

impl From<ScalarType> for ScalarDefinition {
    fn from(scalar_type: ScalarType) -> Self {
        Self::new(scalar_type)
    }
}

impl fmt::Display for ScalarDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let required = if self.is_optional { "" } else { "!" };
        write!(f, "{}{}", self.scalar_type, required)
    }
}
