//! Authorization rules attached to fields
//!
//! Rules are collected through an [`AuthRules`] value handed to a closure:
//!
//! ```rust
//! use schema_types::{ReferenceDefinition, TypeDefinition};
//!
//! let user = TypeDefinition::new("User").unwrap();
//! let field = ReferenceDefinition::new(&user).auth(|rules| {
//!     rules.owner();
//!     rules.groups(["admin"]).get().list();
//! });
//!
//! assert_eq!(
//!     field.to_string(),
//!     r#"User! @auth(rules: [{ allow: owner }, { allow: groups, groups: ["admin"], operations: [get, list] }])"#
//! );
//! ```
//!
//! Rules are rendered as declared. Whether they make sense together is for
//! the consumer of the schema to decide.

use crate::{ListDefinition, ReferenceDefinition, ScalarDefinition};
use serde::{Deserialize, Serialize};
use std::fmt;

// ── Operations and strategies ────────────────────────────────────────

/// An operation a rule grants access to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthOperation {
    Create,
    Read,
    Get,
    List,
    Update,
    Delete,
}

impl AuthOperation {
    /// Name of the operation in schema text
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Get => "get",
            Self::List => "list",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for AuthOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who a rule applies to
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthStrategy {
    /// Anyone, signed in or not
    Public,
    /// Any signed-in user
    Private,
    /// The user who created the entity
    Owner,
    /// Members of at least one of the listed groups
    Groups(Vec<String>),
}

// ── Rules ────────────────────────────────────────────────────────────

/// A single authorization rule
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthRule {
    strategy: AuthStrategy,
    /// Empty means every operation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    operations: Vec<AuthOperation>,
}

impl AuthRule {
    /// Create a rule covering every operation
    pub fn new(strategy: AuthStrategy) -> Self {
        Self {
            strategy,
            operations: Vec::new(),
        }
    }

    /// Who the rule applies to
    pub fn strategy(&self) -> &AuthStrategy {
        &self.strategy
    }

    /// Operations the rule is restricted to
    pub fn operations(&self) -> &[AuthOperation] {
        &self.operations
    }

    /// Restrict the rule to an operation. Repeats are ignored.
    pub fn operation(&mut self, operation: AuthOperation) -> &mut Self {
        if !self.operations.contains(&operation) {
            self.operations.push(operation);
        }
        self
    }

    pub fn create(&mut self) -> &mut Self {
        self.operation(AuthOperation::Create)
    }

    pub fn read(&mut self) -> &mut Self {
        self.operation(AuthOperation::Read)
    }

    pub fn get(&mut self) -> &mut Self {
        self.operation(AuthOperation::Get)
    }

    pub fn list(&mut self) -> &mut Self {
        self.operation(AuthOperation::List)
    }

    pub fn update(&mut self) -> &mut Self {
        self.operation(AuthOperation::Update)
    }

    pub fn delete(&mut self) -> &mut Self {
        self.operation(AuthOperation::Delete)
    }
}

impl fmt::Display for AuthRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.strategy {
            AuthStrategy::Public => write!(f, "{{ allow: public")?,
            AuthStrategy::Private => write!(f, "{{ allow: private")?,
            AuthStrategy::Owner => write!(f, "{{ allow: owner")?,
            AuthStrategy::Groups(groups) => {
                let groups: Vec<String> = groups.iter().map(|g| quote(g)).collect();
                write!(f, "{{ allow: groups, groups: [{}]", groups.join(", "))?
            }
        }

        if !self.operations.is_empty() {
            let operations: Vec<&str> = self.operations.iter().map(|o| o.as_str()).collect();
            write!(f, ", operations: [{}]", operations.join(", "))?;
        }

        write!(f, " }}")
    }
}

/// Quote a string literal with schema-language escapes
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Collector the auth closure declares rules into
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthRules {
    rules: Vec<AuthRule>,
}

impl AuthRules {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules in declaration order
    pub fn rules(&self) -> &[AuthRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Declare a rule and return it for operation chaining
    pub fn rule(&mut self, strategy: AuthStrategy) -> &mut AuthRule {
        self.rules.push(AuthRule::new(strategy));
        let last = self.rules.len() - 1;
        &mut self.rules[last]
    }

    /// Allow anyone
    pub fn public(&mut self) -> &mut AuthRule {
        self.rule(AuthStrategy::Public)
    }

    /// Allow any signed-in user
    pub fn private(&mut self) -> &mut AuthRule {
        self.rule(AuthStrategy::Private)
    }

    /// Allow the entity's owner
    pub fn owner(&mut self) -> &mut AuthRule {
        self.rule(AuthStrategy::Owner)
    }

    /// Allow members of any of the groups. Repeated names are kept once.
    pub fn groups<I, S>(&mut self, groups: I) -> &mut AuthRule
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for group in groups {
            let group = group.into();
            if !names.contains(&group) {
                names.push(group);
            }
        }
        self.rule(AuthStrategy::Groups(names))
    }
}

impl fmt::Display for AuthRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rules: Vec<String> = self.rules.iter().map(|r| r.to_string()).collect();
        write!(f, "[{}]", rules.join(", "))
    }
}

// ── Auth definition ──────────────────────────────────────────────────

/// A field that can carry authorization rules
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthField {
    Reference(ReferenceDefinition),
    Scalar(ScalarDefinition),
    List(ListDefinition),
}

impl From<ReferenceDefinition> for AuthField {
    fn from(reference: ReferenceDefinition) -> Self {
        Self::Reference(reference)
    }
}

impl From<ScalarDefinition> for AuthField {
    fn from(scalar: ScalarDefinition) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<ListDefinition> for AuthField {
    fn from(list: ListDefinition) -> Self {
        Self::List(list)
    }
}

impl fmt::Display for AuthField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference(reference) => fmt::Display::fmt(reference, f),
            Self::Scalar(scalar) => fmt::Display::fmt(scalar, f),
            Self::List(list) => fmt::Display::fmt(list, f),
        }
    }
}

/// A field paired with the authorization rules that guard it
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthDefinition {
    field: AuthField,
    rules: AuthRules,
}

impl AuthDefinition {
    /// Pair a field with rules; `configure` runs once, immediately
    pub fn new<F>(field: impl Into<AuthField>, configure: F) -> Self
    where
        F: FnOnce(&mut AuthRules),
    {
        let mut rules = AuthRules::new();
        configure(&mut rules);

        let field = field.into();
        tracing::debug!(field = %field, rules = rules.len(), "Auth rules attached");

        Self { field, rules }
    }

    pub fn field(&self) -> &AuthField {
        &self.field
    }

    pub fn rules(&self) -> &AuthRules {
        &self.rules
    }
}

impl fmt::Display for AuthDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @auth(rules: {})", self.field, self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ScalarType, TypeDefinition};

    #[test]
    fn test_rule_rendering() {
        let mut rules = AuthRules::new();
        rules.public();
        rules.private().create().update();
        rules.groups(vec!["admin".to_string(), "ops".to_string()]);

        assert_eq!(rules.len(), 3);
        assert_eq!(
            rules.to_string(),
            r#"[{ allow: public }, { allow: private, operations: [create, update] }, { allow: groups, groups: ["admin", "ops"] }]"#
        );
    }

    #[test]
    fn test_group_names_are_escaped() {
        let mut rules = AuthRules::new();
        rules.groups(["say \"hi\"", "back\\slash", "line\nbreak", "bell\u{7}"]);
        assert_eq!(
            rules.to_string(),
            r#"[{ allow: groups, groups: ["say \"hi\"", "back\\slash", "line\nbreak", "bell\u0007"] }]"#
        );
    }

    #[test]
    fn test_quote_control_characters() {
        assert_eq!(quote("tab\there"), r#""tab\there""#);
        assert_eq!(quote("\u{7f}"), r#""\u007F""#);
        assert_eq!(quote("plain"), r#""plain""#);
    }

    #[test]
    fn test_repeated_groups_kept_once() {
        let mut rules = AuthRules::new();
        rules.groups(["admin", "ops", "admin"]);
        assert_eq!(
            rules.rules()[0].strategy(),
            &AuthStrategy::Groups(vec!["admin".to_string(), "ops".to_string()])
        );
    }

    #[test]
    fn test_repeated_operation_kept_once() {
        let mut rule = AuthRule::new(AuthStrategy::Owner);
        rule.read().read().delete();
        assert_eq!(rule.operations(), &[AuthOperation::Read, AuthOperation::Delete]);
    }

    #[test]
    fn test_empty_rules() {
        let user = TypeDefinition::new("User").unwrap();
        let definition = ReferenceDefinition::new(&user).optional().auth(|_| {});
        assert!(definition.rules().is_empty());
        assert_eq!(definition.to_string(), "User @auth(rules: [])");
    }

    #[test]
    fn test_closure_runs_once() {
        let mut calls = 0;
        let definition = ScalarDefinition::new(ScalarType::String).auth(|rules| {
            calls += 1;
            rules.owner().get();
        });
        assert_eq!(calls, 1);
        assert_eq!(
            definition.to_string(),
            "String! @auth(rules: [{ allow: owner, operations: [get] }])"
        );
    }

    #[test]
    fn test_serialization() {
        let definition = ScalarDefinition::new(ScalarType::Int).auth(|rules| {
            rules.groups(["billing"]).read();
        });
        let json = serde_json::to_value(&definition).unwrap();
        assert_eq!(json["rules"]["rules"][0]["strategy"]["Groups"][0], "billing");

        let back: AuthDefinition = serde_json::from_value(json).unwrap();
        assert_eq!(back, definition);
    }
}
