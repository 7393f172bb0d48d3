//! Type and enum definitions: the named entities references point at
//!
//! Both kinds expose their name through [`Referenceable`], which is all a
//! [`ReferenceDefinition`](crate::ReferenceDefinition) needs to be built.

use crate::error::ensure_name;
use crate::{FieldDefinition, FieldShape, SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything a field can reference by name
pub trait Referenceable {
    fn name(&self) -> &str;
}

// ── Type definition ──────────────────────────────────────────────────

/// A user-defined object type
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawType")]
pub struct TypeDefinition {
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    fields: Vec<FieldDefinition>,
}

/// Wire form of a type; replayed through [`TypeDefinition::add_field`]
#[derive(Deserialize)]
struct RawType {
    name: String,
    #[serde(default)]
    fields: Vec<FieldDefinition>,
}

impl TryFrom<RawType> for TypeDefinition {
    type Error = SchemaError;

    fn try_from(raw: RawType) -> Result<Self, Self::Error> {
        let mut definition = Self::new(raw.name)?;
        for field in raw.fields {
            definition.add_field(field.name, field.shape)?;
        }
        Ok(definition)
    }
}

impl TypeDefinition {
    /// Create a type with no fields
    pub fn new(name: impl Into<String>) -> SchemaResult<Self> {
        let name = name.into();
        ensure_name("Type", &name)?;
        Ok(Self {
            name,
            fields: Vec::new(),
        })
    }

    /// Rename the type; existing references keep the old name
    pub fn rename(&mut self, name: impl Into<String>) -> SchemaResult<()> {
        let name = name.into();
        ensure_name("Type", &name)?;
        self.name = name;
        Ok(())
    }

    /// Add a field, rejecting empty and repeated names
    pub fn add_field(
        &mut self,
        name: impl Into<String>,
        shape: impl Into<FieldShape>,
    ) -> SchemaResult<()> {
        let name = name.into();
        ensure_name("Field", &name)?;
        if self.fields.iter().any(|f| f.name == name) {
            return Err(SchemaError::DuplicateField {
                type_name: self.name.clone(),
                field: name,
            });
        }
        self.fields.push(FieldDefinition::new(name, shape));
        Ok(())
    }

    /// Chaining form of [`TypeDefinition::add_field`]
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        shape: impl Into<FieldShape>,
    ) -> SchemaResult<Self> {
        self.add_field(name, shape)?;
        Ok(self)
    }

    /// Get a field by name
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }
}

impl Referenceable for TypeDefinition {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TypeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "type {} {{", self.name)?;
        for field in &self.fields {
            writeln!(f, "  {}", field)?;
        }
        write!(f, "}}")
    }
}

// ── Enum definition ──────────────────────────────────────────────────

/// A user-defined enum
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEnum")]
pub struct EnumDefinition {
    name: String,
    variants: Vec<String>,
}

#[derive(Deserialize)]
struct RawEnum {
    name: String,
    #[serde(default)]
    variants: Vec<String>,
}

impl TryFrom<RawEnum> for EnumDefinition {
    type Error = SchemaError;

    fn try_from(raw: RawEnum) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.variants)
    }
}

impl EnumDefinition {
    /// Create an enum, rejecting empty names and repeated variants
    pub fn new<I, S>(name: impl Into<String>, variants: I) -> SchemaResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        ensure_name("Enum", &name)?;

        let mut collected: Vec<String> = Vec::new();
        for variant in variants {
            let variant = variant.into();
            ensure_name("Variant", &variant)?;
            if collected.contains(&variant) {
                return Err(SchemaError::DuplicateVariant {
                    enum_name: name,
                    variant,
                });
            }
            collected.push(variant);
        }

        Ok(Self {
            name,
            variants: collected,
        })
    }

    /// Rename the enum; existing references keep the old name
    pub fn rename(&mut self, name: impl Into<String>) -> SchemaResult<()> {
        let name = name.into();
        ensure_name("Enum", &name)?;
        self.name = name;
        Ok(())
    }

    /// Variants in declaration order
    pub fn variants(&self) -> &[String] {
        &self.variants
    }
}

impl Referenceable for EnumDefinition {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for EnumDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "enum {} {{", self.name)?;
        for variant in &self.variants {
            writeln!(f, "  {}", variant)?;
        }
        write!(f, "}}")
    }
}
