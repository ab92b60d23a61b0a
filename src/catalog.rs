//! @acp:module "Catalog"
//! @acp:summary "Normalized master lists of projects, roles and skills"
//! @acp:domain curation
//! @acp:layer io
//!
//! The catalog is produced by the data layer (repository fetch, manual
//! entries). This module only reads the already-normalized result.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::load_document;
use crate::entry::{ContentCategory, Entry, Project, Role, RoleKind, Skill};
use crate::error::{FolioError, Result};

/// Every entry available to the site, per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Catalog {
    /// Load from a .json, .yaml or .yml file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_document(path.as_ref())
    }

    /// Roles of one kind, in catalog order.
    pub fn roles_of(&self, kind: RoleKind) -> Vec<Role> {
        self.roles.iter().filter(|r| r.kind == kind).cloned().collect()
    }

    /// Number of entries in a category.
    pub fn count(&self, category: ContentCategory) -> usize {
        match category {
            ContentCategory::Projects => self.projects.len(),
            ContentCategory::Skills => self.skills.len(),
            ContentCategory::Employment
            | ContentCategory::Education
            | ContentCategory::Volunteering => self
                .roles
                .iter()
                .filter(|r| Some(r.kind) == category.role_kind())
                .count(),
        }
    }

    /// Fail on the first category holding two entries with one id.
    pub fn check(&self) -> Result<()> {
        check_unique(ContentCategory::Projects, &self.projects)?;
        for category in [
            ContentCategory::Employment,
            ContentCategory::Education,
            ContentCategory::Volunteering,
        ] {
            if let Some(kind) = category.role_kind() {
                check_unique(category, &self.roles_of(kind))?;
            }
        }
        check_unique(ContentCategory::Skills, &self.skills)
    }
}

fn check_unique<T: Entry>(category: ContentCategory, entries: &[T]) -> Result<()> {
    let mut seen = HashSet::new();
    for entry in entries {
        let id = entry.entry_id();
        if !seen.insert(id.clone()) {
            return Err(FolioError::DuplicateEntryId {
                category: category.to_string(),
                id,
            });
        }
    }
    Ok(())
}
