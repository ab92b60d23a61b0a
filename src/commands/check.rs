//! @acp:module "Check Command"
//! @acp:summary "Validate site config against the catalog"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Surfaces configured ids that no longer match anything, typically after a
//! repository rename or a skill being reworded upstream.

use std::path::PathBuf;

use anyhow::{bail, Result};
use console::style;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::curate::VisibilityTier;
use crate::entry::ContentCategory;
use crate::site::explain;

use super::load_inputs;

/// Options for the check command
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Site config file
    pub config: PathBuf,
    /// Catalog file
    pub catalog: PathBuf,
    /// Output as JSON
    pub json: bool,
}

/// One configured id that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmatchedId {
    pub page: String,
    pub category: ContentCategory,
    pub tier: VisibilityTier,
    pub configured_id: String,
}

/// Result of checking a site.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSummary {
    pub pages: usize,
    pub unmatched: Vec<UnmatchedId>,
}

impl CheckSummary {
    pub fn is_clean(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// Dry-run every configured (page, category) pair and collect unmatched ids.
pub fn check_site(site: &SiteConfig, catalog: &Catalog) -> crate::Result<CheckSummary> {
    site.validate()?;
    catalog.check()?;

    let mut summary = CheckSummary {
        pages: site.pages.len(),
        ..Default::default()
    };

    for (name, page) in &site.pages {
        for category in page.configured_categories() {
            let report = explain(site, catalog, name, category)?;
            summary
                .unmatched
                .extend(report.unmatched().map(|(tier, id)| UnmatchedId {
                    page: name.clone(),
                    category,
                    tier,
                    configured_id: id.to_string(),
                }));
        }
    }

    Ok(summary)
}

/// Execute the check command
pub fn execute_check(options: CheckOptions) -> Result<()> {
    let (site, catalog) = load_inputs(&options.config, &options.catalog)?;
    let summary = check_site(&site, &catalog)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if summary.is_clean() {
        println!(
            "{} {} pages checked, every configured id matches",
            style("✓").green(),
            summary.pages
        );
    } else {
        for u in &summary.unmatched {
            eprintln!(
                "{} {}.{}.{}: {:?} matches no entry",
                style("✗").red(),
                u.page,
                u.category,
                u.tier,
                u.configured_id
            );
        }
    }

    if !summary.is_clean() {
        bail!("{} configured ids match no entry", summary.unmatched.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;
    use crate::curate::PageContentEntryConfig;
    use crate::entry::Skill;

    #[test]
    fn test_check_site_collects_unmatched() {
        let catalog = Catalog {
            skills: vec![Skill {
                name: "Rust".to_string(),
                group: None,
            }],
            ..Default::default()
        };
        let mut site = SiteConfig::default();
        site.pages.insert(
            "about".to_string(),
            PageConfig {
                skills: Some(PageContentEntryConfig {
                    pin: vec!["Rust".to_string(), "Haskell".to_string()],
                    ..Default::default()
                }),
                ..Default::default()
            },
        );

        let summary = check_site(&site, &catalog).unwrap();
        assert_eq!(summary.pages, 1);
        assert_eq!(
            summary.unmatched,
            vec![UnmatchedId {
                page: "about".to_string(),
                category: ContentCategory::Skills,
                tier: VisibilityTier::Pin,
                configured_id: "Haskell".to_string(),
            }]
        );
    }
}
