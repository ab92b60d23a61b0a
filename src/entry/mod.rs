//! @acp:module "Entries"
//! @acp:summary "Normalized content entries: projects, roles and skills"
//! @acp:domain curation
//! @acp:layer types
//!
//! Entries arrive already normalized from the data layer (repository fetches,
//! hand-written config). Nothing here talks to the network or parses markdown.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::curate::auto::AutoClassifier;
use crate::curate::types::SortOrder;
use crate::error::FolioError;

/// A content item subject to visibility resolution.
pub trait Entry: Clone + Send + Sync {
    /// Order used when a page does not configure one.
    const DEFAULT_SORT: SortOrder;

    /// Stable identifier, unique within one category.
    fn entry_id(&self) -> String;

    /// Display name used by alphabetical ordering.
    fn sort_name(&self) -> &str;

    /// Date used by chronological ordering.
    fn sort_date(&self) -> Option<NaiveDate> {
        None
    }

    /// Automatic show/hide predicates for this kind of entry.
    fn classifier() -> AutoClassifier<Self> {
        AutoClassifier::none()
    }
}

/// Content categories a page can curate independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Projects,
    Employment,
    Education,
    Volunteering,
    Skills,
}

impl ContentCategory {
    pub const ALL: [ContentCategory; 5] = [
        ContentCategory::Projects,
        ContentCategory::Employment,
        ContentCategory::Education,
        ContentCategory::Volunteering,
        ContentCategory::Skills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentCategory::Projects => "projects",
            ContentCategory::Employment => "employment",
            ContentCategory::Education => "education",
            ContentCategory::Volunteering => "volunteering",
            ContentCategory::Skills => "skills",
        }
    }

    /// Role kind backing this category, if it is a role category.
    pub fn role_kind(&self) -> Option<RoleKind> {
        match self {
            ContentCategory::Employment => Some(RoleKind::Employment),
            ContentCategory::Education => Some(RoleKind::Education),
            ContentCategory::Volunteering => Some(RoleKind::Volunteering),
            ContentCategory::Projects | ContentCategory::Skills => None,
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentCategory {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "projects" | "project" => Ok(ContentCategory::Projects),
            "employment" | "work" => Ok(ContentCategory::Employment),
            "education" => Ok(ContentCategory::Education),
            "volunteering" | "volunteer" => Ok(ContentCategory::Volunteering),
            "skills" | "skill" => Ok(ContentCategory::Skills),
            _ => Err(FolioError::UnknownCategory(s.to_string())),
        }
    }
}

// =============================================================================
// Projects
// =============================================================================

/// A portfolio project, either backed by a GitHub repository or written by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Short identifier for manual projects; display fallback for repos.
    pub slug: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Known project category (e.g. "web", "tooling"). `None` when unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Last activity date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    #[serde(default)]
    pub source: ProjectSource,
}

/// Where a project came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProjectSource {
    /// Fetched from a GitHub repository.
    #[serde(rename = "github")]
    GitHub(RepoInfo),
    /// Authored directly in site content.
    #[default]
    Manual,
}

/// Repository attributes relevant to curation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoInfo {
    pub owner: String,
    pub repo: String,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub stars: u32,
}

impl Entry for Project {
    const DEFAULT_SORT: SortOrder = SortOrder::Catalog;

    fn entry_id(&self) -> String {
        match &self.source {
            ProjectSource::GitHub(repo) => format!("{}/{}", repo.owner, repo.repo),
            ProjectSource::Manual => self.slug.clone(),
        }
    }

    fn sort_name(&self) -> &str {
        &self.name
    }

    fn sort_date(&self) -> Option<NaiveDate> {
        self.date
    }

    fn classifier() -> AutoClassifier<Self> {
        AutoClassifier::for_projects()
    }
}

// =============================================================================
// Roles
// =============================================================================

/// Kind of resume role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleKind {
    Employment,
    Education,
    Volunteering,
}

/// An employment, education or volunteering role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub kind: RoleKind,
    pub organization: String,
    pub title: String,
    pub start: NaiveDate,
    /// `None` while the role is ongoing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Role {
    pub fn is_current(&self) -> bool {
        self.end.is_none()
    }
}

impl Entry for Role {
    const DEFAULT_SORT: SortOrder = SortOrder::ReverseChronological;

    fn entry_id(&self) -> String {
        format!("{}: {}", self.organization, self.title)
    }

    fn sort_name(&self) -> &str {
        &self.organization
    }

    fn sort_date(&self) -> Option<NaiveDate> {
        Some(self.start)
    }
}

// =============================================================================
// Skills
// =============================================================================

/// A skill tag, e.g. "JavaScript/TypeScript".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl Entry for Skill {
    const DEFAULT_SORT: SortOrder = SortOrder::Alphabetical;

    fn entry_id(&self) -> String {
        self.name.clone()
    }

    fn sort_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(owner: &str, name: &str) -> Project {
        Project {
            slug: name.to_string(),
            name: name.to_string(),
            description: None,
            category: Some("tooling".to_string()),
            url: None,
            date: None,
            source: ProjectSource::GitHub(RepoInfo {
                owner: owner.to_string(),
                repo: name.to_string(),
                fork: false,
                archived: false,
                stars: 0,
            }),
        }
    }

    #[test]
    fn test_project_id_github_uses_owner_and_repo() {
        assert_eq!(repo("octo", "folio").entry_id(), "octo/folio");
    }

    #[test]
    fn test_project_id_manual_uses_slug() {
        let project = Project {
            source: ProjectSource::Manual,
            slug: "thesis".to_string(),
            ..repo("octo", "ignored")
        };
        assert_eq!(project.entry_id(), "thesis");
    }

    #[test]
    fn test_role_id() {
        let role = Role {
            kind: RoleKind::Employment,
            organization: "Acme".to_string(),
            title: "Engineer".to_string(),
            start: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end: None,
            location: None,
            summary: None,
        };
        assert_eq!(role.entry_id(), "Acme: Engineer");
        assert!(role.is_current());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(
            "Projects".parse::<ContentCategory>().unwrap(),
            ContentCategory::Projects
        );
        assert_eq!(
            "volunteer".parse::<ContentCategory>().unwrap(),
            ContentCategory::Volunteering
        );
        assert!("hobbies".parse::<ContentCategory>().is_err());
    }

    #[test]
    fn test_project_source_deserialization() {
        let json = r#"{
            "slug": "folio",
            "name": "Folio",
            "source": { "kind": "github", "owner": "octo", "repo": "folio", "fork": true }
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        match &project.source {
            ProjectSource::GitHub(repo) => assert!(repo.fork),
            ProjectSource::Manual => panic!("expected a GitHub source"),
        }
        assert_eq!(project.entry_id(), "octo/folio");

        let manual: Project = serde_json::from_str(r#"{"slug": "x", "name": "X"}"#).unwrap();
        assert_eq!(manual.source, ProjectSource::Manual);
    }
}
