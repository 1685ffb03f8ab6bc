//! Design level registry.
//!
//! Each level is described exactly once by its [`LevelDef`]: where its
//! components live and where the children it includes are resolved from.
//! Every lookup derives from [`LEVEL_REGISTRY`]; there are no `match` arms on
//! levels anywhere else in the crate.
//!
//! # Adding a New Level
//!
//! 1. Add a variant to `DesignLevel` in `value_objects.rs`
//! 2. Add one [`LevelDef`] entry to [`LEVEL_REGISTRY`] at the variant's position
//! 3. The `registry_integrity` test checks the rest

use crate::domain::value_objects::DesignLevel;

/// Default namespace root that level directories are joined under.
pub const NAMESPACE_ROOT: &str = "components";

/// Describes one level of the hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct LevelDef {
    /// The level this definition describes.
    pub level: DesignLevel,

    /// Directory under the namespace root, prefixed with the level's
    /// two-digit position (`"02-molecules"`).
    pub directory: &'static str,

    /// Level whose directory children of this level are imported from.
    ///
    /// One level down the hierarchy; `base` has nothing below it and
    /// resolves to itself.
    pub child_level: DesignLevel,
}

/// Single source of truth for the level hierarchy.
///
/// Ordered by hierarchy position: entry `i` describes `DesignLevel::ALL[i]`.
pub static LEVEL_REGISTRY: &[LevelDef] = &[
    LevelDef {
        level: DesignLevel::Base,
        directory: "00-base",
        child_level: DesignLevel::Base,
    },
    LevelDef {
        level: DesignLevel::Atoms,
        directory: "01-atoms",
        child_level: DesignLevel::Base,
    },
    LevelDef {
        level: DesignLevel::Molecules,
        directory: "02-molecules",
        child_level: DesignLevel::Atoms,
    },
    LevelDef {
        level: DesignLevel::Organisms,
        directory: "03-organisms",
        child_level: DesignLevel::Molecules,
    },
    LevelDef {
        level: DesignLevel::Templates,
        directory: "04-templates",
        child_level: DesignLevel::Organisms,
    },
    LevelDef {
        level: DesignLevel::Pages,
        directory: "05-pages",
        child_level: DesignLevel::Templates,
    },
];

/// Look up the definition for a level.
pub fn level_def(level: DesignLevel) -> &'static LevelDef {
    &LEVEL_REGISTRY[level as usize]
}
