//! The component being scaffolded.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::{error::DomainError, value_objects::DesignLevel};

/// Immutable input to content generation.
///
/// `children` keeps the order the user gave; generated include directives and
/// story imports follow it exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSpec {
    name: String,
    level: DesignLevel,
    children: Vec<String>,
}

impl ComponentSpec {
    pub fn new(name: impl Into<String>, level: DesignLevel) -> Self {
        Self {
            name: name.into(),
            level,
            children: Vec::new(),
        }
    }

    /// Parse the level key (case-insensitive) and build a spec.
    pub fn parse<I, S>(name: impl Into<String>, level: &str, children: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let level = DesignLevel::from_str(level)?;
        Ok(Self::new(name, level).with_children(children))
    }

    pub fn with_child(mut self, child: impl Into<String>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> DesignLevel {
        self.level
    }

    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Split a comma-separated child list (`"Heading, Subheading"`).
    ///
    /// Whitespace around entries is trimmed and empty entries are dropped.
    pub fn split_child_list(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(reason) = name_violation(&self.name) {
            return Err(DomainError::InvalidComponentName {
                name: self.name.clone(),
                reason,
            });
        }

        let mut seen = HashSet::new();
        for child in &self.children {
            if let Some(reason) = name_violation(child) {
                return Err(DomainError::InvalidChildName {
                    name: child.clone(),
                    reason,
                });
            }
            if *child == self.name {
                return Err(DomainError::InvalidChildName {
                    name: child.clone(),
                    reason: "a component cannot include itself".into(),
                });
            }
            if !seen.insert(child.as_str()) {
                return Err(DomainError::DuplicateChild {
                    name: child.clone(),
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for ComponentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.level, self.name)
    }
}

/// Story bindings every generated story declares besides the imports.
const STORY_BINDINGS: &[&str] = &["data", "Default"];

const JS_RESERVED: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Names become directory names, file names, and JS import bindings, so they
/// must be JS identifiers: `[A-Za-z_$][A-Za-z0-9_$]*`.
fn name_violation(name: &str) -> Option<String> {
    let mut chars = name.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return Some("name cannot be empty".into()),
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return Some(format!("name cannot start with '{first}'"));
    }
    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '$')) {
        return Some(format!("character '{bad}' is not allowed"));
    }
    if JS_RESERVED.contains(&name) {
        return Some(format!("'{name}' is a reserved JavaScript word"));
    }
    if STORY_BINDINGS.contains(&name) {
        return Some(format!("'{name}' clashes with a binding in the generated story"));
    }
    None
}
