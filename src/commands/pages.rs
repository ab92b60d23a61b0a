//! @acp:module "Pages Command"
//! @acp:summary "List configured pages and their curation settings"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::config::SiteConfig;
use crate::curate::VisibilityTier;

/// Options for the pages command
#[derive(Debug, Clone)]
pub struct PagesOptions {
    /// Site config file
    pub config: PathBuf,
    /// Output as JSON
    pub json: bool,
}

/// Execute the pages command
pub fn execute_pages(options: PagesOptions) -> Result<()> {
    let site = SiteConfig::load(&options.config)
        .with_context(|| format!("Failed to load site config from {:?}", options.config))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&site.pages)?);
        return Ok(());
    }

    println!("Configured pages ({}):\n", site.pages.len());
    for (name, page) in &site.pages {
        let title = page
            .title
            .as_deref()
            .map(|t| format!(" - {}", t))
            .unwrap_or_default();
        println!("  {}{}", style(name).bold(), title);

        let categories = page.configured_categories();
        if categories.is_empty() {
            println!("    {}", style("all categories pass through").dim());
        }
        for category in categories {
            let Some(config) = page.entry_config(category) else {
                continue;
            };
            let limit = config
                .limit
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string());
            let tiers: Vec<String> = VisibilityTier::ALL
                .iter()
                .map(|t| format!("{}={}", t, config.tier(*t).len()))
                .collect();
            println!(
                "    {:<14} limit={:<4} {}",
                category.as_str(),
                limit,
                tiers.join(" ")
            );
        }
        println!();
    }

    Ok(())
}
