//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog::Catalog;
use crate::config::SiteConfig;

pub mod check;
pub mod pages;
pub mod resolve;

pub use check::{check_site, execute_check, CheckOptions, CheckSummary, UnmatchedId};
pub use pages::{execute_pages, PagesOptions};
pub use resolve::{execute_resolve, ResolveOptions};

/// Load the site config and catalog every command starts from.
pub fn load_inputs(config: &Path, catalog: &Path) -> Result<(SiteConfig, Catalog)> {
    let site = SiteConfig::load(config)
        .with_context(|| format!("Failed to load site config from {:?}", config))?;
    let catalog = Catalog::load(catalog)
        .with_context(|| format!("Failed to load catalog from {:?}", catalog))?;
    Ok((site, catalog))
}
