//! Project metadata registry backing tooltip content.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One portfolio project's tooltip-facing metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub title: String,
    pub description: String,
    /// Technology tags in display order.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
}

/// Read-only lookup from hotspot identifier to project metadata.
///
/// Serialized as a flat JSON object keyed by hotspot id, so a registry file
/// looks like `{ "proj-atlas": { "title": ..., ... }, ... }`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectRegistry {
    projects: HashMap<String, ProjectInfo>,
}

impl ProjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, info: ProjectInfo) {
        self.projects.insert(id.into(), info);
    }

    pub fn get(&self, id: &str) -> Option<&ProjectInfo> {
        self.projects.get(id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Load a registry from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
