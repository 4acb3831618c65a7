//! Content collections listed in the manifest

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, content::unknown_collection};

/// A manifest-driven list of content entries rendered into one page container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Education,
    Skills,
    Projects,
    Publications,
    Podcasts,
    Videos,
    Awards,
}

impl Collection {
    /// All collections in page order.
    pub const ALL: [Collection; 7] = [
        Collection::Education,
        Collection::Skills,
        Collection::Projects,
        Collection::Publications,
        Collection::Podcasts,
        Collection::Videos,
        Collection::Awards,
    ];

    /// Manifest key and content folder name.
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Education => "education",
            Collection::Skills => "skills",
            Collection::Projects => "projects",
            Collection::Publications => "publications",
            Collection::Podcasts => "podcasts",
            Collection::Videos => "videos",
            Collection::Awards => "awards",
        }
    }

    /// Id of the page element the rendered entries are appended to.
    pub fn container_id(self) -> &'static str {
        match self {
            Collection::Education => "educationList",
            Collection::Skills => "allSkills",
            Collection::Projects => "projectsGrid",
            Collection::Publications => "publicationsList",
            Collection::Podcasts => "podcastsList",
            Collection::Videos => "videosList",
            Collection::Awards => "awardsList",
        }
    }

    /// Section heading shown on the page and in listings.
    pub fn heading(self) -> &'static str {
        match self {
            Collection::Education => "Education",
            Collection::Skills => "Skills",
            Collection::Projects => "Projects",
            Collection::Publications => "Publications",
            Collection::Podcasts => "Podcasts",
            Collection::Videos => "Videos",
            Collection::Awards => "Awards",
        }
    }

    /// Frontmatter key that names an entry of this collection.
    pub fn title_key(self) -> &'static str {
        match self {
            Collection::Education => "degree",
            Collection::Skills => "name",
            _ => "title",
        }
    }

    /// Path of an entry file relative to the content root.
    pub fn entry_path(self, filename: &str) -> String {
        format!("{}/{}", self.as_str(), filename)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| unknown_collection(s))
    }
}
