use serde::{Deserialize, Serialize};

/// Resolves a provider-relative resource path into something a renderer can load.
pub trait ResourcePathProvider {
    fn resolve(&self, path: &str) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "path", rename_all = "snake_case")]
pub enum IconResource {
    /// Relative to the producing provider's resource root.
    Resource(String),
    /// Used verbatim.
    Path(String),
}

impl IconResource {
    pub fn from_resource(path: impl Into<String>) -> Self {
        IconResource::Resource(path.into())
    }

    pub fn from_path(path: impl Into<String>) -> Self {
        IconResource::Path(path.into())
    }
}

/// Everything a renderer needs to draw one result row.
///
/// Only `title` takes part in scoring.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResultDisplay {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub icon: Option<IconResource>,
}

impl ResultDisplay {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn icon(mut self, icon: IconResource) -> Self {
        self.icon = Some(icon);
        self
    }
}
