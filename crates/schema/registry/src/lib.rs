//! Schema registry
//!
//! Collects the type and enum definitions of a schema and renders them as
//! one document:
//!
//! ```rust
//! use schema_registry::SchemaRegistry;
//! use schema_types::{EnumDefinition, ScalarType, TypeDefinition};
//!
//! let mut registry = SchemaRegistry::new();
//! registry
//!     .register_enum(EnumDefinition::new("Role", ["ADMIN", "USER"]).unwrap())
//!     .unwrap();
//!
//! let role = registry.reference("Role").unwrap();
//! let user = TypeDefinition::new("User")
//!     .unwrap()
//!     .with_field("role", role.optional())
//!     .unwrap()
//!     .with_field("email", ScalarType::Email)
//!     .unwrap();
//! registry.register_type(user).unwrap();
//!
//! assert_eq!(
//!     registry.render(),
//!     "enum Role {\n  ADMIN\n  USER\n}\n\ntype User {\n  role: Role\n  email: Email!\n}\n"
//! );
//! ```
//!
//! The registry does not check that referenced names are registered.

#![deny(unsafe_code)]

pub mod registry;

pub use registry::{SchemaDefinition, SchemaRegistry};
