//! Schema error types

/// Errors raised while declaring schema definitions.
///
/// Reference, scalar, list and auth builders never fail; only descriptor
/// construction and registry operations return these.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("{kind} name must not be empty")]
    EmptyName { kind: &'static str },

    #[error("Duplicate field '{field}' on type '{type_name}'")]
    DuplicateField { type_name: String, field: String },

    #[error("Duplicate variant '{variant}' in enum '{enum_name}'")]
    DuplicateVariant { enum_name: String, variant: String },

    #[error("Definition already registered: '{0}'")]
    DuplicateDefinition(String),

    #[error("Definition not found: '{0}'")]
    DefinitionNotFound(String),
}

/// Result type alias for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Rejects empty and whitespace-only names.
pub(crate) fn ensure_name(kind: &'static str, name: &str) -> SchemaResult<()> {
    if name.trim().is_empty() {
        return Err(SchemaError::EmptyName { kind });
    }
    Ok(())
}
