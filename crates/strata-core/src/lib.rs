//! Strata Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Strata
//! component scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           strata-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (Driven: Filesystem)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     strata-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (DesignLevel, ComponentSpec, Scaffolder)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use strata_core::domain::{ComponentScaffolder, ComponentSpec, DesignLevel};
//!
//! let spec = ComponentSpec::new("NameTitleBlock", DesignLevel::Organisms)
//!     .with_children(["Heading", "Subheading"]);
//!
//! let artifacts = ComponentScaffolder::default().generate(&spec).unwrap();
//! assert!(artifacts.story_content().contains("../../02-molecules/Heading/Heading.twig"));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{LevelInfo, ScaffoldReport, ScaffoldService, ports::Filesystem};
    pub use crate::domain::{
        ArtifactKind, ComponentArtifacts, ComponentScaffolder, ComponentSpec, DesignLevel,
        GeneratedArtifact, Permissions,
    };
    pub use crate::error::{StrataError, StrataResult};
}
