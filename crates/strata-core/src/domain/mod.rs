// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Strata.
//!
//! This module contains pure business logic: the design level hierarchy and
//! the rules that turn a component name, level, and child list into file
//! content. All I/O is handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod fragment;
pub mod hierarchy;
pub mod scaffolder;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    artifact::{ArtifactKind, ComponentArtifacts, GeneratedArtifact},
    component::ComponentSpec,
    layout::{ComponentLayout, FileToWrite},
};

pub use error::{DomainError, ErrorCategory};
pub use fragment::{Document, Fragment};
pub use hierarchy::{LEVEL_REGISTRY, LevelDef, NAMESPACE_ROOT};
pub use scaffolder::ComponentScaffolder;
pub use value_objects::DesignLevel;

pub use entities::common::{Permissions, RelativePath};
pub use validation::DomainValidator;
