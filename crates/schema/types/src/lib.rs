//! Schema definition builders
//!
//! Fluent builders for declaring data-model fields and rendering them as
//! schema-language text. The central piece is [`ReferenceDefinition`], a
//! field pointing at another named type or enum:
//!
//! ```rust
//! use schema_types::{ReferenceDefinition, TypeDefinition};
//!
//! let user = TypeDefinition::new("User").unwrap();
//!
//! assert_eq!(ReferenceDefinition::new(&user).to_string(), "User!");
//! assert_eq!(ReferenceDefinition::new(&user).optional().to_string(), "User");
//! assert_eq!(
//!     ReferenceDefinition::new(&user).optional().list().to_string(),
//!     "[User]!"
//! );
//! ```
//!
//! Builders consume `self` and hand back the updated value, so a chain
//! never leaves an alias behind. Optionality only moves one way: there is
//! no way back from optional to required.

#![deny(unsafe_code)]

mod auth;
mod definition;
mod error;
mod field;
mod list;
mod reference;
mod scalar;

pub use auth::*;
pub use definition::*;
pub use error::{SchemaError, SchemaResult};
pub use field::*;
pub use list::*;
pub use reference::*;
pub use scalar::*;
