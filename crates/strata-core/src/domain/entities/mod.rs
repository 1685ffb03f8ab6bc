pub mod artifact;
pub mod common;
pub mod component;
pub mod layout;

pub use artifact::{ArtifactKind, ComponentArtifacts, GeneratedArtifact};
pub use component::ComponentSpec;
pub use layout::ComponentLayout;
