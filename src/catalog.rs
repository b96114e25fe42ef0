// SPDX-License-Identifier: MPL-2.0
//! Project catalog: the read-only collection of portfolio entries the
//! gallery renders.
//!
//! The catalog is deserialized from TOML, either the embedded default
//! (`assets/projects.toml`) or a file passed on the command line. The only
//! structural invariant is that project ids are unique; everything else is
//! display data.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default catalog compiled into the binary so the application always has
/// something to show.
const EMBEDDED_CATALOG: &str = include_str!("../assets/projects.toml");

/// One portfolio entry's display data and demo reference.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectRecord {
    /// Unique key, stable across renders.
    pub id: u64,
    pub name: String,
    pub description: String,
    /// Thumbnail reference: an `http(s)` URL or a local path.
    pub image: String,
    /// Ordered sequence of short labels.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Resource locator for the embeddable live preview.
    pub demo_url: String,
}

impl ProjectRecord {
    /// Returns the description truncated to at most `max_chars` characters,
    /// with an ellipsis appended when anything was cut. Truncation is by
    /// character, never inside a multi-byte sequence.
    #[must_use]
    pub fn short_description(&self, max_chars: usize) -> String {
        if self.description.chars().count() <= max_chars {
            return self.description.clone();
        }
        let truncated: String = self.description.chars().take(max_chars).collect();
        format!("{}…", truncated.trim_end())
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

/// Ordered, read-only project collection.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// Parses a catalog from TOML text, enforcing id uniqueness.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;

        let mut seen = std::collections::HashSet::new();
        for project in &file.projects {
            if !seen.insert(project.id) {
                return Err(Error::Catalog(format!(
                    "duplicate project id: {}",
                    project.id
                )));
            }
        }

        Ok(Self {
            projects: file.projects,
        })
    }

    /// Loads the embedded default catalog.
    ///
    /// The embedded TOML is validated by tests, so a parse failure here is
    /// a packaging defect and surfaces as an empty catalog rather than a
    /// startup crash.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_toml(EMBEDDED_CATALOG).unwrap_or_default()
    }

    /// Loads a catalog from a TOML file on disk.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    #[must_use]
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Looks a project up by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }
}
