#![forbid(unsafe_code)]

//! @acp:module "Folio Library"
//! @acp:summary "Per-page content curation for portfolio and resume sites"
//! @acp:domain curation
//! @acp:layer api
//! @acp:stability stable
//!
//! # Folio
//!
//! Decides which projects, roles and skills each page of a portfolio site
//! displays, from a master catalog and a static per-page config.
//!
//! ## Features
//!
//! - **Pin / Show / Hide**: manual tiers matched by id substring
//! - **Automatic hiding**: forks and uncategorized repositories drop out unless configured back in
//! - **Limits and ordering**: prefix limit, then a stable per-category sort
//! - **Explain mode**: per-entry decisions and diagnostics for every resolution
//!
//! ## Example
//!
//! ```rust,no_run
//! use folio::{resolve_site, Catalog, SiteConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = SiteConfig::load("site.yaml")?;
//!     let catalog = Catalog::load("catalog.json")?;
//!
//!     for page in resolve_site(&config, &catalog) {
//!         println!("{}: {} projects", page.name, page.projects.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod commands;
pub mod config;
pub mod curate;
pub mod entry;
pub mod error;
pub mod site;

// Re-exports
pub use catalog::Catalog;
pub use config::{PageConfig, SiteConfig};
pub use curate::{
    curate, curate_with_report, resolve_visible_entries, resolve_with_report, AutoClassifier,
    Decision, Diagnostic, EntrySetsMap, PageContentEntryConfig, ResolutionReport, ResolveHooks,
    SortOrder, VisibilityTier,
};
pub use entry::{ContentCategory, Entry, Project, ProjectSource, RepoInfo, Role, RoleKind, Skill};
pub use error::{FolioError, Result};
pub use site::{explain, resolve_page, resolve_site, resolve_site_parallel, ResolvedPage};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
