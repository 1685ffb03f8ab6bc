use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{entities::common::RelativePath, fragment::Document};

/// The three files generated per component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Template,
    Data,
    Story,
}

impl ArtifactKind {
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Template => "twig",
            Self::Data => "yml",
            Self::Story => "stories.js",
        }
    }

    /// `{name}.{extension}`.
    pub fn file_name(&self, component: &str) -> String {
        format!("{component}.{}", self.extension())
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Template => "template",
            Self::Data => "data",
            Self::Story => "story",
        })
    }
}

/// One generated file, path relative to the component's output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub relative_path: RelativePath,
    pub document: Document,
}

impl GeneratedArtifact {
    pub fn content(&self) -> String {
        self.document.render()
    }
}

/// Everything `ComponentScaffolder::generate` produces for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentArtifacts {
    /// `<namespace root>/<level directory>/<name>`.
    pub output_dir: PathBuf,
    pub template: GeneratedArtifact,
    pub data: GeneratedArtifact,
    pub story: GeneratedArtifact,
}

impl ComponentArtifacts {
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn template_content(&self) -> String {
        self.template.content()
    }

    pub fn data_content(&self) -> String {
        self.data.content()
    }

    pub fn story_content(&self) -> String {
        self.story.content()
    }

    /// Artifacts in write order: template, data, story.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedArtifact> {
        [&self.template, &self.data, &self.story].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_use_kind_extension() {
        assert_eq!(ArtifactKind::Template.file_name("Button"), "Button.twig");
        assert_eq!(ArtifactKind::Data.file_name("Button"), "Button.yml");
        assert_eq!(ArtifactKind::Story.file_name("Button"), "Button.stories.js");
    }
}
