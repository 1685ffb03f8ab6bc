//! Domain value objects: DesignLevel.
//!
//! # Design
//!
//! Pure value types: `Copy`, equality-by-value, no identity. They hold NO
//! hierarchy logic. Directory prefixes and child resolution live in
//! `hierarchy.rs`. This file's only job is to define the type, its string
//! representations, and its `FromStr` parser.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here and to [`DesignLevel::ALL`]
//! 2. Add the `as_str` arm here
//! 3. Add a `LevelDef` entry in `hierarchy.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── DesignLevel ──────────────────────────────────────────────────────────────

/// A level of the atomic design hierarchy, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignLevel {
    Base,
    Atoms,
    Molecules,
    Organisms,
    Templates,
    Pages,
}

impl DesignLevel {
    /// Every level, in hierarchy order.
    pub const ALL: [DesignLevel; 6] = [
        Self::Base,
        Self::Atoms,
        Self::Molecules,
        Self::Organisms,
        Self::Templates,
        Self::Pages,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Atoms => "atoms",
            Self::Molecules => "molecules",
            Self::Organisms => "organisms",
            Self::Templates => "templates",
            Self::Pages => "pages",
        }
    }

    /// Capitalised key, used as the Storybook title prefix.
    pub fn title(&self) -> String {
        let key = self.as_str();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Comma-separated list of valid keys, in hierarchy order.
    pub fn valid_keys() -> String {
        Self::ALL
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Directory (relative to the namespace root) where this level's
    /// components live.
    ///
    /// Delegates to `hierarchy::level_def`.
    pub fn directory(self) -> &'static str {
        crate::domain::hierarchy::level_def(self).directory
    }

    /// Level where children of a component at this level are resolved.
    pub fn child_level(self) -> DesignLevel {
        crate::domain::hierarchy::level_def(self).child_level
    }
}

impl fmt::Display for DesignLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DesignLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == key)
            .ok_or_else(|| DomainError::InvalidLevel {
                input: s.to_string(),
                valid: Self::valid_keys(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_key() {
        for level in DesignLevel::ALL {
            assert_eq!(DesignLevel::from_str(level.as_str()).unwrap(), level);
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(
            DesignLevel::from_str("Organisms").unwrap(),
            DesignLevel::Organisms
        );
        assert_eq!(DesignLevel::from_str("ATOMS").unwrap(), DesignLevel::Atoms);
    }

    #[test]
    fn unknown_key_lists_valid_levels() {
        let err = DesignLevel::from_str("widgets").unwrap_err();
        match err {
            DomainError::InvalidLevel { input, valid } => {
                assert_eq!(input, "widgets");
                assert_eq!(
                    valid,
                    "base, atoms, molecules, organisms, templates, pages"
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn title_capitalises_key() {
        assert_eq!(DesignLevel::Organisms.title(), "Organisms");
        assert_eq!(DesignLevel::Base.title(), "Base");
    }

    #[test]
    fn ordering_follows_hierarchy() {
        assert!(DesignLevel::Base < DesignLevel::Atoms);
        assert!(DesignLevel::Templates < DesignLevel::Pages);
    }
}
