//! Component content generation.
//!
//! [`ComponentScaffolder`] maps a [`ComponentSpec`] to the three artifacts of a
//! component (Twig template, YAML sample data, Storybook story) plus the
//! directory they belong in. It is pure: no I/O, no clock, no randomness, so
//! identical specs always produce byte-identical content.
//!
//! ## Generated files
//!
//! | File | Content |
//! |------|---------|
//! | `{Name}.twig` | one include per child, or a wrapper `<div>` when childless |
//! | `{Name}.yml` | `text: 'Hello World'` |
//! | `{Name}.stories.js` | imports, Storybook meta, `Default` story |

use std::path::PathBuf;

use crate::domain::{
    entities::{ArtifactKind, ComponentArtifacts, ComponentSpec, GeneratedArtifact, common::RelativePath},
    error::DomainError,
    fragment::{Document, Fragment},
    hierarchy::{self, NAMESPACE_ROOT},
};

/// Key of the shared text field every template renders.
pub const TEXT_FIELD: &str = "text";

/// Placeholder value written to every data file.
pub const SAMPLE_TEXT: &str = "Hello World";

/// Generates component artifacts under a namespace root.
#[derive(Debug, Clone)]
pub struct ComponentScaffolder {
    namespace_root: PathBuf,
}

impl Default for ComponentScaffolder {
    fn default() -> Self {
        Self::new(NAMESPACE_ROOT)
    }
}

impl ComponentScaffolder {
    /// Scaffolder writing under `namespace_root` (`components` by default).
    pub fn new(namespace_root: impl Into<PathBuf>) -> Self {
        Self {
            namespace_root: namespace_root.into(),
        }
    }

    /// Parse `level` and generate in one step.
    pub fn generate_from<I, S>(
        &self,
        name: &str,
        level: &str,
        children: I,
    ) -> Result<ComponentArtifacts, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let spec = ComponentSpec::parse(name, level, children)?;
        self.generate(&spec)
    }

    /// Generate the three artifacts for `spec`.
    pub fn generate(&self, spec: &ComponentSpec) -> Result<ComponentArtifacts, DomainError> {
        spec.validate()?;

        Ok(ComponentArtifacts {
            output_dir: self.output_dir(spec),
            template: artifact(spec, ArtifactKind::Template, template_document(spec))?,
            data: artifact(spec, ArtifactKind::Data, data_document())?,
            story: artifact(spec, ArtifactKind::Story, story_document(spec))?,
        })
    }

    /// `<namespace root>/<level directory>/<name>`.
    pub fn output_dir(&self, spec: &ComponentSpec) -> PathBuf {
        self.namespace_root
            .join(hierarchy::level_def(spec.level()).directory)
            .join(spec.name())
    }
}

fn artifact(
    spec: &ComponentSpec,
    kind: ArtifactKind,
    document: Document,
) -> Result<GeneratedArtifact, DomainError> {
    Ok(GeneratedArtifact {
        kind,
        relative_path: RelativePath::try_new(kind.file_name(spec.name()))?,
        document,
    })
}

fn template_document(spec: &ComponentSpec) -> Document {
    let mut doc = Document::new();

    if spec.has_children() {
        doc.extend(spec.children().iter().map(|child| Fragment::Include {
            child: child.clone(),
        }));
    } else {
        doc.push(Fragment::Wrapper {
            class: spec.name().to_lowercase(),
        });
    }

    doc
}

fn data_document() -> Document {
    Document::new().with(Fragment::DataEntry {
        key: TEXT_FIELD.into(),
        value: SAMPLE_TEXT.into(),
    })
}

fn story_document(spec: &ComponentSpec) -> Document {
    let name = spec.name();
    let mut doc = Document::new()
        .with(Fragment::Import {
            binding: name.to_string(),
            path: format!("./{}", ArtifactKind::Template.file_name(name)),
        })
        .with(Fragment::Import {
            binding: "data".into(),
            path: format!("./{}", ArtifactKind::Data.file_name(name)),
        });

    // The story sits in <root>/<level dir>/<name>/, two levels below the root.
    let child_dir = spec.level().child_level().directory();
    doc.extend(spec.children().iter().map(|child| Fragment::Import {
        binding: child.clone(),
        path: format!(
            "../../{child_dir}/{child}/{}",
            ArtifactKind::Template.file_name(child)
        ),
    }));

    doc.with(Fragment::Blank)
        .with(Fragment::StoryMeta {
            title: format!("{}/{}", spec.level().title(), name),
        })
        .with(Fragment::Blank)
        .with(Fragment::DefaultStory {
            component: name.to_string(),
        })
}
