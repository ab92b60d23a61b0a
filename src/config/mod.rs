//! @acp:module "Configuration"
//! @acp:summary "Site content configuration: per-page curation settings"
//! @acp:domain cli
//! @acp:layer config
//!
//! The site config is static data: loaded once at startup, then passed by
//! reference to every resolution call.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::curate::{PageContentEntryConfig, VisibilityTier};
use crate::entry::ContentCategory;
use crate::error::{FolioError, Result};

fn default_version() -> String {
    "1.0.0".to_string()
}

/// @acp:summary "Site configuration: every page and its curation settings"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// JSON Schema URL for editor validation
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Config format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Pages keyed by route name (e.g. "about", "projects", "resume")
    #[serde(default)]
    pub pages: BTreeMap<String, PageConfig>,
}

/// @acp:summary "Curation settings for one page"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    /// Human-readable page title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<PageContentEntryConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment: Option<PageContentEntryConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<PageContentEntryConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volunteering: Option<PageContentEntryConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<PageContentEntryConfig>,
}

impl PageConfig {
    /// Config for one category; `None` means pass-through.
    pub fn entry_config(&self, category: ContentCategory) -> Option<&PageContentEntryConfig> {
        match category {
            ContentCategory::Projects => self.projects.as_ref(),
            ContentCategory::Employment => self.employment.as_ref(),
            ContentCategory::Education => self.education.as_ref(),
            ContentCategory::Volunteering => self.volunteering.as_ref(),
            ContentCategory::Skills => self.skills.as_ref(),
        }
    }

    /// Categories this page configures explicitly.
    pub fn configured_categories(&self) -> Vec<ContentCategory> {
        ContentCategory::ALL
            .into_iter()
            .filter(|c| self.entry_config(*c).is_some())
            .collect()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            schema: None,
            version: default_version(),
            pages: BTreeMap::new(),
        }
    }
}

impl SiteConfig {
    /// @acp:summary "Load site config from a .json, .yaml or .yml file"
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_document(path.as_ref())
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match DocumentFormat::from_path(path)? {
            DocumentFormat::Json => serde_json::to_string_pretty(self)?,
            DocumentFormat::Yaml => serde_yaml::to_string(self)?,
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn page(&self, name: &str) -> Result<&PageConfig> {
        self.pages
            .get(name)
            .ok_or_else(|| FolioError::UnknownPage(name.to_string()))
    }

    /// @acp:summary "Reject tier lists holding empty ids"
    ///
    /// An empty configured id is a substring of every entry id and would
    /// silently select the first catalog entry.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        for (page_name, page) in &self.pages {
            for category in page.configured_categories() {
                let Some(config) = page.entry_config(category) else {
                    continue;
                };
                for tier in VisibilityTier::ALL {
                    if config.tier(tier).iter().any(|id| id.trim().is_empty()) {
                        problems.push(format!("{page_name}.{category}.{tier} contains an empty id"));
                    }
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(FolioError::InvalidConfig(problems.join("; ")))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub(crate) fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(DocumentFormat::Json),
            Some("yaml") | Some("yml") => Ok(DocumentFormat::Yaml),
            _ => Err(FolioError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Read a JSON or YAML document, chosen by file extension.
pub(crate) fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = DocumentFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    Ok(match format {
        DocumentFormat::Json => serde_json::from_str(&content)?,
        DocumentFormat::Yaml => serde_yaml::from_str(&content)?,
    })
}
