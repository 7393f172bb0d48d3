//! Schema registry: stores type and enum definitions by name
//!
//! Types and enums share one namespace. Registration order is kept and
//! drives the order of the rendered document.

use schema_types::{
    EnumDefinition, ReferenceDefinition, Referenceable, SchemaError, SchemaResult, TypeDefinition,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A registered definition
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaDefinition {
    Type(TypeDefinition),
    Enum(EnumDefinition),
}

impl SchemaDefinition {
    /// Schema keyword for this definition
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Type(_) => "type",
            Self::Enum(_) => "enum",
        }
    }

    /// The type definition, if this is one
    pub fn as_type(&self) -> Option<&TypeDefinition> {
        match self {
            Self::Type(definition) => Some(definition),
            _ => None,
        }
    }

    /// The enum definition, if this is one
    pub fn as_enum(&self) -> Option<&EnumDefinition> {
        match self {
            Self::Enum(definition) => Some(definition),
            _ => None,
        }
    }
}

impl Referenceable for SchemaDefinition {
    fn name(&self) -> &str {
        match self {
            Self::Type(definition) => definition.name(),
            Self::Enum(definition) => definition.name(),
        }
    }
}

impl fmt::Display for SchemaDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(definition) => fmt::Display::fmt(definition, f),
            Self::Enum(definition) => fmt::Display::fmt(definition, f),
        }
    }
}

impl From<TypeDefinition> for SchemaDefinition {
    fn from(definition: TypeDefinition) -> Self {
        Self::Type(definition)
    }
}

impl From<EnumDefinition> for SchemaDefinition {
    fn from(definition: EnumDefinition) -> Self {
        Self::Enum(definition)
    }
}

/// Registry of schema definitions
///
/// Serialized as the list of definitions in registration order; loading
/// replays [`SchemaRegistry::register`] so duplicates are rejected.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(
    into = "Vec<SchemaDefinition>",
    try_from = "Vec<SchemaDefinition>"
)]
pub struct SchemaRegistry {
    /// All registered definitions, keyed by name
    definitions: HashMap<String, SchemaDefinition>,
    /// Names in registration order
    order: Vec<String>,
}

impl SchemaRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type definition
    pub fn register_type(&mut self, definition: TypeDefinition) -> SchemaResult<()> {
        self.register(definition.into())
    }

    /// Register an enum definition
    pub fn register_enum(&mut self, definition: EnumDefinition) -> SchemaResult<()> {
        self.register(definition.into())
    }

    /// Register a definition under its current name
    pub fn register(&mut self, definition: SchemaDefinition) -> SchemaResult<()> {
        let name = definition.name().to_string();
        if self.definitions.contains_key(&name) {
            tracing::warn!(definition = %name, "Duplicate schema definition rejected");
            return Err(SchemaError::DuplicateDefinition(name));
        }

        tracing::info!(definition = %name, kind = definition.kind(), "Schema definition registered");
        self.definitions.insert(name.clone(), definition);
        self.order.push(name);
        Ok(())
    }

    /// Get a definition by name
    pub fn get(&self, name: &str) -> SchemaResult<&SchemaDefinition> {
        self.definitions
            .get(name)
            .ok_or_else(|| SchemaError::DefinitionNotFound(name.to_string()))
    }

    /// Get a type definition by name
    pub fn get_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.definitions.get(name).and_then(SchemaDefinition::as_type)
    }

    /// Get an enum definition by name
    pub fn get_enum(&self, name: &str) -> Option<&EnumDefinition> {
        self.definitions.get(name).and_then(SchemaDefinition::as_enum)
    }

    /// Build a required reference to a registered definition
    pub fn reference(&self, name: &str) -> SchemaResult<ReferenceDefinition> {
        self.get(name).map(ReferenceDefinition::new)
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Total number of registered definitions
    pub fn count(&self) -> usize {
        self.definitions.len()
    }

    /// Definitions in registration order
    pub fn list(&self) -> Vec<&SchemaDefinition> {
        self.order
            .iter()
            .filter_map(|name| self.definitions.get(name))
            .collect()
    }

    /// Remove a definition by name
    pub fn remove(&mut self, name: &str) -> SchemaResult<SchemaDefinition> {
        let definition = self
            .definitions
            .remove(name)
            .ok_or_else(|| SchemaError::DefinitionNotFound(name.to_string()))?;
        self.order.retain(|n| n != name);

        tracing::info!(definition = %name, "Schema definition removed");
        Ok(definition)
    }

    /// Render every definition, separated by blank lines
    pub fn render(&self) -> String {
        tracing::debug!(definitions = self.count(), "Rendering schema");
        self.to_string()
    }
}

impl From<SchemaRegistry> for Vec<SchemaDefinition> {
    fn from(registry: SchemaRegistry) -> Self {
        let SchemaRegistry {
            mut definitions,
            order,
        } = registry;
        order
            .iter()
            .filter_map(|name| definitions.remove(name))
            .collect()
    }
}

impl TryFrom<Vec<SchemaDefinition>> for SchemaRegistry {
    type Error = SchemaError;

    fn try_from(definitions: Vec<SchemaDefinition>) -> Result<Self, Self::Error> {
        let mut registry = Self::new();
        for definition in definitions {
            registry.register(definition)?;
        }
        Ok(registry)
    }
}

impl fmt::Display for SchemaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, definition) in self.list().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", definition)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema_types::ScalarType;

    fn user() -> TypeDefinition {
        TypeDefinition::new("User")
            .unwrap()
            .with_field("name", ScalarType::String)
            .unwrap()
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = SchemaRegistry::new();
        registry.register_type(user()).unwrap();

        assert!(registry.contains("User"));
        assert_eq!(registry.count(), 1);
        assert_eq!(registry.get_type("User").unwrap().fields().len(), 1);
        assert!(registry.get_enum("User").is_none());
    }

    #[test]
    fn test_shared_namespace() {
        let mut registry = SchemaRegistry::new();
        registry.register_type(user()).unwrap();

        let result = registry.register_enum(EnumDefinition::new("User", ["A"]).unwrap());
        assert_eq!(
            result,
            Err(SchemaError::DuplicateDefinition("User".to_string()))
        );
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_reference_from_registry() {
        let mut registry = SchemaRegistry::new();
        registry.register_type(user()).unwrap();

        assert_eq!(registry.reference("User").unwrap().to_string(), "User!");
        assert!(matches!(
            registry.reference("Missing"),
            Err(SchemaError::DefinitionNotFound(_))
        ));
    }

    #[test]
    fn test_remove() {
        let mut registry = SchemaRegistry::new();
        registry.register_type(user()).unwrap();
        registry
            .register_enum(EnumDefinition::new("Role", ["ADMIN"]).unwrap())
            .unwrap();

        let removed = registry.remove("User").unwrap();
        assert_eq!(removed.kind(), "type");
        assert!(!registry.contains("User"));
        assert_eq!(registry.list().len(), 1);
        assert!(matches!(
            registry.remove("User"),
            Err(SchemaError::DefinitionNotFound(_))
        ));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(SchemaRegistry::new().render(), "");
    }

    #[test]
    fn test_render_keeps_registration_order() {
        let mut registry = SchemaRegistry::new();
        registry.register_type(user()).unwrap();
        registry
            .register_enum(EnumDefinition::new("Role", ["ADMIN"]).unwrap())
            .unwrap();

        assert_eq!(
            registry.render(),
            "type User {\n  name: String!\n}\n\nenum Role {\n  ADMIN\n}\n"
        );
    }

    #[test]
    fn test_serialization() {
        let mut registry = SchemaRegistry::new();
        registry.register_type(user()).unwrap();

        let json = serde_json::to_string(&registry).unwrap();
        let back: SchemaRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.render(), registry.render());
    }

    #[test]
    fn test_serialized_in_registration_order() {
        let mut registry = SchemaRegistry::new();
        registry
            .register_enum(EnumDefinition::new("Role", ["ADMIN"]).unwrap())
            .unwrap();
        registry.register_type(user()).unwrap();

        let json = serde_json::to_value(&registry).unwrap();
        assert_eq!(json[0]["Enum"]["name"], "Role");
        assert_eq!(json[1]["Type"]["name"], "User");
    }

    #[test]
    fn test_deserialize_rejects_repeated_definitions() {
        let payload = r#"[{"Type":{"name":"B"}},{"Type":{"name":"B"}}]"#;
        let err = serde_json::from_str::<SchemaRegistry>(payload).unwrap_err();
        assert!(err.to_string().contains("Definition already registered: 'B'"));
    }

    #[test]
    fn test_deserialize_indexes_by_definition_name() {
        let payload = r#"[{"Type":{"name":"B"}}]"#;
        let registry: SchemaRegistry = serde_json::from_str(payload).unwrap();

        assert!(registry.contains("B"));
        assert_eq!(registry.count(), 1);
        assert_eq!(registry.render().matches("type B").count(), 1);
    }

    #[test]
    fn test_deserialize_rejects_invalid_definitions() {
        let payload = r#"[{"Enum":{"name":"Role","variants":[""]}}]"#;
        assert!(serde_json::from_str::<SchemaRegistry>(payload).is_err());
    }
}
