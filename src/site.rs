//! @acp:module "Site Resolution"
//! @acp:summary "Resolve every (page, category) pair of a site"
//! @acp:domain curation
//! @acp:layer service
//!
//! Each resolution is a pure function of the catalog and one page config, so
//! pages can be resolved in parallel without coordination.

use rayon::prelude::*;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::{PageConfig, SiteConfig};
use crate::curate::{curate, curate_with_report, ResolutionReport};
use crate::entry::{ContentCategory, Entry, Project, Role, RoleKind, Skill};
use crate::error::Result;

/// Visible entries of one page, per category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPage {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub projects: Vec<Project>,
    pub employment: Vec<Role>,
    pub education: Vec<Role>,
    pub volunteering: Vec<Role>,
    pub skills: Vec<Skill>,
}

impl ResolvedPage {
    /// Entry ids shown in one category, in display order.
    pub fn ids(&self, category: ContentCategory) -> Vec<String> {
        match category {
            ContentCategory::Projects => self.projects.iter().map(Entry::entry_id).collect(),
            ContentCategory::Employment => self.employment.iter().map(Entry::entry_id).collect(),
            ContentCategory::Education => self.education.iter().map(Entry::entry_id).collect(),
            ContentCategory::Volunteering => {
                self.volunteering.iter().map(Entry::entry_id).collect()
            }
            ContentCategory::Skills => self.skills.iter().map(Entry::entry_id).collect(),
        }
    }
}

/// Resolve one page against the catalog.
pub fn resolve_page(name: &str, page: &PageConfig, catalog: &Catalog) -> ResolvedPage {
    let _span = tracing::debug_span!("page", name).entered();

    ResolvedPage {
        name: name.to_string(),
        title: page.title.clone(),
        projects: curate(
            ContentCategory::Projects,
            &catalog.projects,
            page.entry_config(ContentCategory::Projects),
        ),
        employment: curate_roles(ContentCategory::Employment, RoleKind::Employment, page, catalog),
        education: curate_roles(ContentCategory::Education, RoleKind::Education, page, catalog),
        volunteering: curate_roles(
            ContentCategory::Volunteering,
            RoleKind::Volunteering,
            page,
            catalog,
        ),
        skills: curate(
            ContentCategory::Skills,
            &catalog.skills,
            page.entry_config(ContentCategory::Skills),
        ),
    }
}

fn curate_roles(
    category: ContentCategory,
    kind: RoleKind,
    page: &PageConfig,
    catalog: &Catalog,
) -> Vec<Role> {
    curate(category, &catalog.roles_of(kind), page.entry_config(category))
}

/// Resolve every page, in page-name order.
pub fn resolve_site(config: &SiteConfig, catalog: &Catalog) -> Vec<ResolvedPage> {
    tracing::info!(pages = config.pages.len(), "resolving site");
    config
        .pages
        .iter()
        .map(|(name, page)| resolve_page(name, page, catalog))
        .collect()
}

/// [`resolve_site`] on the rayon pool. Output order matches the sequential version.
pub fn resolve_site_parallel(config: &SiteConfig, catalog: &Catalog) -> Vec<ResolvedPage> {
    tracing::info!(pages = config.pages.len(), "resolving site in parallel");
    let pages: Vec<(&String, &PageConfig)> = config.pages.iter().collect();
    pages
        .par_iter()
        .map(|(name, page)| resolve_page(name, page, catalog))
        .collect()
}

/// Explain how one (page, category) pair resolves.
pub fn explain(
    config: &SiteConfig,
    catalog: &Catalog,
    page_name: &str,
    category: ContentCategory,
) -> Result<ResolutionReport> {
    let page = config.page(page_name)?;
    let entry_config = page.entry_config(category);

    let report = match category.role_kind() {
        Some(kind) => curate_with_report(category, &catalog.roles_of(kind), entry_config).1,
        None if category == ContentCategory::Projects => {
            curate_with_report(category, &catalog.projects, entry_config).1
        }
        None => curate_with_report(category, &catalog.skills, entry_config).1,
    };
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curate::{Decision, PageContentEntryConfig};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn skill(name: &str) -> Skill {
        Skill {
            name: name.to_string(),
            group: None,
        }
    }

    fn role(kind: RoleKind, org: &str, year: i32) -> Role {
        Role {
            kind,
            organization: org.to_string(),
            title: "Member".to_string(),
            start: NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            end: None,
            location: None,
            summary: None,
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            projects: vec![],
            roles: vec![
                role(RoleKind::Employment, "Acme", 2018),
                role(RoleKind::Volunteering, "Food Bank", 2019),
                role(RoleKind::Employment, "Globex", 2022),
            ],
            skills: vec![skill("Rust"), skill("Go"), skill("JavaScript/TypeScript")],
        }
    }

    fn site() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.pages.insert(
            "about".to_string(),
            PageConfig {
                skills: Some(PageContentEntryConfig {
                    show: vec!["JavaScript".to_string()],
                    hide: vec!["Go".to_string()],
                    ..Default::default()
                }),
                ..Default::default()
            },
        );
        config.pages.insert("resume".to_string(), PageConfig::default());
        config
    }

    #[test]
    fn test_roles_split_by_kind_and_sorted_newest_first() {
        let page = resolve_page("resume", &PageConfig::default(), &catalog());
        assert_eq!(
            page.ids(ContentCategory::Employment),
            vec!["Globex: Member", "Acme: Member"]
        );
        assert_eq!(page.ids(ContentCategory::Volunteering), vec!["Food Bank: Member"]);
        assert!(page.education.is_empty());
    }

    #[test]
    fn test_skills_curated_and_alphabetical() {
        let config = site();
        let page = resolve_page("about", config.page("about").unwrap(), &catalog());
        assert_eq!(
            page.ids(ContentCategory::Skills),
            vec!["JavaScript/TypeScript", "Rust"]
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let config = site();
        let catalog = catalog();
        assert_eq!(
            resolve_site_parallel(&config, &catalog),
            resolve_site(&config, &catalog)
        );
    }

    #[test]
    fn test_explain_skills() {
        let report = explain(&site(), &catalog(), "about", ContentCategory::Skills).unwrap();
        assert_eq!(report.decision("Go"), Some(Decision::HiddenByConfig));
        assert_eq!(report.decision("JavaScript/TypeScript"), Some(Decision::Shown));
        assert_eq!(report.decision("Rust"), Some(Decision::Listed));
    }

    #[test]
    fn test_explain_unknown_page() {
        assert!(explain(&site(), &catalog(), "blog", ContentCategory::Skills).is_err());
    }
}
