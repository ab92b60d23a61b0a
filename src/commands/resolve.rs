//! @acp:module "Resolve Command"
//! @acp:summary "Print the entries a page displays, optionally with reasoning"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::curate::{Decision, Diagnostic, ResolutionReport};
use crate::entry::ContentCategory;
use crate::site::{explain, resolve_page, ResolvedPage};

use super::load_inputs;

/// Options for the resolve command
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Page to resolve
    pub page: String,
    /// Restrict output to one category
    pub category: Option<ContentCategory>,
    /// Site config file
    pub config: PathBuf,
    /// Catalog file
    pub catalog: PathBuf,
    /// Output as JSON
    pub json: bool,
    /// Show per-entry decisions
    pub explain: bool,
}

/// Execute the resolve command
pub fn execute_resolve(options: ResolveOptions) -> Result<()> {
    let (site, catalog) = load_inputs(&options.config, &options.catalog)?;
    let page_config = site.page(&options.page)?;

    let categories: Vec<ContentCategory> = match options.category {
        Some(c) => vec![c],
        None => ContentCategory::ALL.to_vec(),
    };

    if options.explain {
        let reports = categories
            .iter()
            .map(|c| Ok((*c, explain(&site, &catalog, &options.page, *c)?)))
            .collect::<crate::Result<Vec<_>>>()?;

        if options.json {
            let map: std::collections::BTreeMap<_, _> = reports.into_iter().collect();
            println!("{}", serde_json::to_string_pretty(&map)?);
        } else {
            for (category, report) in &reports {
                print_report(*category, report);
            }
        }
        return Ok(());
    }

    let resolved = resolve_page(&options.page, page_config, &catalog);

    if options.json {
        if let Some(category) = options.category {
            println!("{}", serde_json::to_string_pretty(&resolved.ids(category))?);
        } else {
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        }
        return Ok(());
    }

    print_page(&resolved, &categories);
    Ok(())
}

fn print_page(page: &ResolvedPage, categories: &[ContentCategory]) {
    let title = page.title.as_deref().unwrap_or(&page.name);
    println!("{} {}\n", style("→").cyan(), style(title).bold());

    for category in categories {
        let ids = page.ids(*category);
        println!("  {} ({})", style(category).bold(), ids.len());
        for id in ids {
            println!("    {}", id);
        }
        println!();
    }
}

fn print_report(category: ContentCategory, report: &ResolutionReport) {
    let mode = if report.configured {
        "configured"
    } else {
        "pass-through"
    };
    println!("{} {} [{}]", style("→").cyan(), style(category).bold(), mode);

    for entry in &report.decisions {
        let marker = if entry.decision.is_visible() {
            style("✓").green()
        } else if entry.decision == Decision::Truncated {
            style("…").yellow()
        } else {
            style("✗").red()
        };
        println!("  {} {:<40} {}", marker, entry.id, style(entry.decision.as_str()).dim());
    }

    for diagnostic in &report.diagnostics {
        match diagnostic {
            Diagnostic::UnmatchedConfigId {
                tier,
                configured_id,
            } => println!(
                "  {} {} id {:?} matches no entry",
                style("⚠").yellow(),
                tier,
                configured_id
            ),
            Diagnostic::DegenerateLimit { limit } => println!(
                "  {} limit {} leaves nothing to show",
                style("⚠").yellow(),
                limit
            ),
            Diagnostic::MissingPageConfig => {}
        }
    }
    println!();
}
