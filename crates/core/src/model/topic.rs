use serde::{Deserialize, Serialize};

use crate::model::ids::TopicId;

/// Glyph shown next to a topic in the grid and sidebar.
///
/// Content names icons by string; anything not listed here deserializes to
/// [`TopicIcon::HelpCircle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TopicIcon {
    Anchor,
    Zap,
    Layout,
    Atom,
    #[default]
    HelpCircle,
}

impl TopicIcon {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Anchor" => Self::Anchor,
            "Zap" => Self::Zap,
            "Layout" => Self::Layout,
            "Atom" => Self::Atom,
            _ => Self::HelpCircle,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Anchor => "Anchor",
            Self::Zap => "Zap",
            Self::Layout => "Layout",
            Self::Atom => "Atom",
            Self::HelpCircle => "HelpCircle",
        }
    }
}

impl From<String> for TopicIcon {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<TopicIcon> for String {
    fn from(value: TopicIcon) -> Self {
        value.name().to_owned()
    }
}

/// A named category grouping related questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    id: TopicId,
    slug: String,
    name: String,
    description: String,
    #[serde(default)]
    icon: TopicIcon,
}

impl Topic {
    #[must_use]
    pub fn new(
        id: TopicId,
        slug: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: TopicIcon,
    ) -> Self {
        Self {
            id,
            slug: slug.into(),
            name: name.into(),
            description: description.into(),
            icon,
        }
    }

    #[must_use]
    pub fn id(&self) -> &TopicId {
        &self.id
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn icon(&self) -> TopicIcon {
        self.icon
    }
}
