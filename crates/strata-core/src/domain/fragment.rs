//! Typed content fragments.
//!
//! Generated files are composed as a [`Document`]: an ordered list of
//! [`Fragment`]s, each rendering to one or more complete lines. Keeping the
//! structure around until the last moment lets tests assert on *what* was
//! generated (which includes, which imports) independently of formatting.

use std::fmt;

/// One unit of generated text. Every variant renders newline-terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Twig include of a child component, passing the shared `text` field.
    Include { child: String },

    /// Generic wrapper element around the shared `text` field.
    Wrapper { class: String },

    /// Single-quoted YAML scalar entry.
    DataEntry { key: String, value: String },

    /// ES module default import.
    Import { binding: String, path: String },

    /// Storybook default export naming the story.
    StoryMeta { title: String },

    /// `Default` story rendering the component with the sample data.
    DefaultStory { component: String },

    Blank,
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Include { child } => {
                writeln!(f, "{{% include \"@{child}/{child}.twig\" with {{ text: text }} %}}")
            }
            Self::Wrapper { class } => writeln!(f, "<div class=\"{class}\">{{{{ text }}}}</div>"),
            Self::DataEntry { key, value } => {
                writeln!(f, "{key}: '{}'", value.replace('\'', "''"))
            }
            Self::Import { binding, path } => writeln!(f, "import {binding} from '{path}';"),
            Self::StoryMeta { title } => {
                writeln!(f, "export default {{")?;
                writeln!(f, "  title: '{title}',")?;
                writeln!(f, "}};")
            }
            Self::DefaultStory { component } => {
                writeln!(f, "export const Default = () => {component}(data);")
            }
            Self::Blank => writeln!(f),
        }
    }
}

/// Ordered sequence of fragments making up one generated file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    fragments: Vec<Fragment>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    pub fn with(mut self, fragment: Fragment) -> Self {
        self.push(fragment);
        self
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Extend<Fragment> for Document {
    fn extend<T: IntoIterator<Item = Fragment>>(&mut self, iter: T) {
        self.fragments.extend(iter);
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            write!(f, "{fragment}")?;
        }
        Ok(())
    }
}
