//! References: a field pointing at another named type or enum
//!
//! A reference copies the target's name when it is built, so renaming the
//! source definition later never changes references that already exist.
//! References start out required and can only be relaxed to optional.

use crate::error::ensure_name;
use crate::{AuthDefinition, AuthRules, ListDefinition, Referenceable, SchemaError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference from one schema entity to another
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawReference")]
pub struct ReferenceDefinition {
    referenced_type: String,
    is_optional: bool,
}

/// Wire form of a reference, checked before it becomes a [`ReferenceDefinition`]
#[derive(Deserialize)]
struct RawReference {
    referenced_type: String,
    #[serde(default)]
    is_optional: bool,
}

impl TryFrom<RawReference> for ReferenceDefinition {
    type Error = SchemaError;

    fn try_from(raw: RawReference) -> Result<Self, Self::Error> {
        ensure_name("Reference", &raw.referenced_type)?;
        Ok(Self {
            referenced_type: raw.referenced_type,
            is_optional: raw.is_optional,
        })
    }
}

impl ReferenceDefinition {
    /// Create a required reference to the given type or enum
    pub fn new(source: &impl Referenceable) -> Self {
        Self {
            referenced_type: source.name().to_string(),
            is_optional: false,
        }
    }

    /// Name of the referenced type or enum
    pub fn referenced_type(&self) -> &str {
        &self.referenced_type
    }

    /// Whether the reference may be absent
    pub fn is_optional(&self) -> bool {
        self.is_optional
    }

    /// Allow the reference to be absent
    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    /// Wrap the reference as the element of a list
    pub fn list(self) -> ListDefinition {
        ListDefinition::new(self)
    }

    /// Attach authorization rules to the reference
    pub fn auth<F>(self, rules: F) -> AuthDefinition
    where
        F: FnOnce(&mut AuthRules),
    {
        AuthDefinition::new(self, rules)
    }
}

impl fmt::Display for ReferenceDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let required = if self.is_optional { "" } else { "!" };
        write!(f, "{}{}", self.referenced_type, required)
    }
}
