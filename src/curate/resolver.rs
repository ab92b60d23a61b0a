//! @acp:module "Visibility Resolver"
//! @acp:summary "Combine pin/show/hide config and automatic predicates into the visible entry list"
//! @acp:domain curation
//! @acp:layer logic

use std::collections::HashSet;

use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::entry::{ContentCategory, Entry};

use super::auto::{classify, AutoClassifier};
use super::identity::match_configured_id;
use super::order;
use super::report::{Decision, Diagnostic, EntryDecision, ResolutionReport};
use super::types::{Comparator, EntrySetsMap, PageContentEntryConfig, Predicate, VisibilityTier};

/// Caller-supplied behaviour for one resolution call.
pub struct ResolveHooks<'a, T> {
    /// Category being resolved, carried into logs and the report.
    pub category: Option<ContentCategory>,
    pub get_entry_id: &'a dyn Fn(&T) -> String,
    /// Final ordering. `None` keeps catalog order.
    pub sort_fn: Option<Comparator<'a, T>>,
    pub auto_show: Option<Predicate<'a, T>>,
    pub auto_hide: Option<Predicate<'a, T>>,
}

/// Entries visible for one page and category.
///
/// Without a page config the catalog passes through, sorted by `sort_fn` and
/// never truncated. With one, the visible set is built in this precedence,
/// each step overriding the previous:
///
/// 1. `base = (auto_show ∪ catalog) − auto_hide`
/// 2. `base ∪ config show`
/// 3. `... ∪ config pin`
/// 4. `... − config hide` (hide wins over pin)
///
/// The survivors are taken in catalog order, cut to `limit`, then sorted.
/// Unmatched configured ids are logged and skipped; this never fails.
pub fn resolve_visible_entries<T: Clone>(
    all_entries: &[T],
    page_config: Option<&PageContentEntryConfig>,
    get_entry_id: &dyn Fn(&T) -> String,
    sort_fn: Option<Comparator<'_, T>>,
    auto_show: Option<Predicate<'_, T>>,
    auto_hide: Option<Predicate<'_, T>>,
) -> Vec<T> {
    let hooks = ResolveHooks {
        category: None,
        get_entry_id,
        sort_fn,
        auto_show,
        auto_hide,
    };
    resolve_with_report(all_entries, page_config, &hooks).0
}

/// [`resolve_visible_entries`] plus a record of every decision it made.
pub fn resolve_with_report<T: Clone>(
    all_entries: &[T],
    page_config: Option<&PageContentEntryConfig>,
    hooks: &ResolveHooks<'_, T>,
) -> (Vec<T>, ResolutionReport) {
    let ids: Vec<String> = all_entries.iter().map(|e| (hooks.get_entry_id)(e)).collect();

    let Some(config) = page_config else {
        return pass_through(all_entries, &ids, hooks);
    };

    let mut diagnostics = Vec::new();
    let sets = build_sets(all_entries, &ids, config, hooks, &mut diagnostics);

    debug!(
        pin = ?sets.config_pin,
        show = ?sets.config_show,
        hide = ?sets.config_hide,
        auto_show = ?sets.auto_show,
        auto_hide = ?sets.auto_hide,
        "visibility sets"
    );

    let visible_ids = apply_precedence(&ids, &sets);

    // Candidates in catalog order, first occurrence of each id.
    let mut seen = HashSet::new();
    let candidates: Vec<usize> = (0..all_entries.len())
        .filter(|&i| visible_ids.contains(ids[i].as_str()) && seen.insert(ids[i].as_str()))
        .collect();

    let mut kept = match config.effective_limit() {
        Some(n) => {
            if n == 0 {
                diagnostics.push(Diagnostic::DegenerateLimit {
                    limit: config.limit.unwrap_or(0),
                });
            }
            order::limit(candidates, n)
        }
        None => candidates,
    };

    if let Some(cmp) = hooks.sort_fn {
        let by_entry = |a: &usize, b: &usize| cmp(&all_entries[*a], &all_entries[*b]);
        order::sort(&mut kept, &by_entry);
    }

    let kept_ids: HashSet<&str> = kept.iter().map(|&i| ids[i].as_str()).collect();
    let decisions = decide(&ids, &sets, &visible_ids, &kept_ids);

    let report = ResolutionReport {
        category: hooks.category,
        configured: true,
        visible: kept.iter().map(|&i| ids[i].clone()).collect(),
        sets,
        decisions,
        diagnostics,
    };

    let entries = kept.into_iter().map(|i| all_entries[i].clone()).collect();
    (entries, report)
}

/// Resolve a category of [`Entry`] values using its default ordering and
/// automatic predicates. A page's `sort` overrides the default ordering.
pub fn curate<T: Entry>(
    category: ContentCategory,
    all_entries: &[T],
    page_config: Option<&PageContentEntryConfig>,
) -> Vec<T> {
    curate_with_report(category, all_entries, page_config).0
}

/// [`curate`] plus the resolution report.
pub fn curate_with_report<T: Entry>(
    category: ContentCategory,
    all_entries: &[T],
    page_config: Option<&PageContentEntryConfig>,
) -> (Vec<T>, ResolutionReport) {
    let _span = tracing::debug_span!("curate", %category).entered();

    let sort_order = page_config
        .and_then(|c| c.sort)
        .unwrap_or(T::DEFAULT_SORT);
    let cmp = order::comparator::<T>(sort_order);
    let classifier: AutoClassifier<T> = T::classifier();
    let get_entry_id = |entry: &T| entry.entry_id();

    let hooks = ResolveHooks {
        category: Some(category),
        get_entry_id: &get_entry_id,
        sort_fn: Some(&cmp),
        auto_show: classifier.show_predicate(),
        auto_hide: classifier.hide_predicate(),
    };
    resolve_with_report(all_entries, page_config, &hooks)
}

fn pass_through<T: Clone>(
    all_entries: &[T],
    ids: &[String],
    hooks: &ResolveHooks<'_, T>,
) -> (Vec<T>, ResolutionReport) {
    // First occurrence of each id, as in configured mode.
    let mut seen = HashSet::new();
    let mut order_idx: Vec<usize> = (0..all_entries.len())
        .filter(|&i| seen.insert(ids[i].as_str()))
        .collect();

    let decisions = order_idx
        .iter()
        .map(|&i| EntryDecision {
            id: ids[i].clone(),
            decision: Decision::Listed,
        })
        .collect();

    if let Some(cmp) = hooks.sort_fn {
        let by_entry = |a: &usize, b: &usize| cmp(&all_entries[*a], &all_entries[*b]);
        order::sort(&mut order_idx, &by_entry);
    }

    debug!(
        category = ?hooks.category,
        entries = order_idx.len(),
        "no page config, catalog passes through"
    );

    let report = ResolutionReport {
        category: hooks.category,
        configured: false,
        sets: EntrySetsMap::default(),
        decisions,
        visible: order_idx.iter().map(|&i| ids[i].clone()).collect(),
        diagnostics: vec![Diagnostic::MissingPageConfig],
    };

    let entries = order_idx.into_iter().map(|i| all_entries[i].clone()).collect();
    (entries, report)
}

fn build_sets<T>(
    all_entries: &[T],
    ids: &[String],
    config: &PageContentEntryConfig,
    hooks: &ResolveHooks<'_, T>,
    diagnostics: &mut Vec<Diagnostic>,
) -> EntrySetsMap {
    let mut sets = EntrySetsMap::default();

    for tier in VisibilityTier::ALL {
        for configured_id in config.tier(tier) {
            match match_configured_id(ids, configured_id) {
                Some(index) => {
                    sets.config_mut(tier).insert(ids[index].clone());
                }
                None => {
                    warn!(
                        category = ?hooks.category,
                        %tier,
                        configured_id = %configured_id,
                        "configured id matches no entry"
                    );
                    diagnostics.push(Diagnostic::UnmatchedConfigId {
                        tier,
                        configured_id: configured_id.clone(),
                    });
                }
            }
        }
    }

    sets.auto_show = classify(all_entries, ids, hooks.auto_show);
    sets.auto_hide = classify(all_entries, ids, hooks.auto_hide);
    sets
}

fn apply_precedence<'a>(ids: &'a [String], sets: &'a EntrySetsMap) -> IndexSet<&'a str> {
    // auto_show is a subset of the catalog, so this union adds nothing.
    let base: IndexSet<&str> = sets
        .auto_show
        .iter()
        .chain(ids)
        .map(String::as_str)
        .filter(|id| !sets.auto_hide.contains(*id))
        .collect();

    let with_config_show: IndexSet<&str> = sets
        .config_show
        .iter()
        .map(String::as_str)
        .chain(base)
        .collect();

    let with_pin: IndexSet<&str> = sets
        .config_pin
        .iter()
        .map(String::as_str)
        .chain(with_config_show)
        .collect();

    with_pin
        .into_iter()
        .filter(|id| !sets.config_hide.contains(*id))
        .collect()
}

fn decide(
    ids: &[String],
    sets: &EntrySetsMap,
    visible_ids: &IndexSet<&str>,
    kept_ids: &HashSet<&str>,
) -> Vec<EntryDecision> {
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .map(|id| {
            let decision = if !visible_ids.contains(id.as_str()) {
                if sets.config_hide.contains(id) {
                    Decision::HiddenByConfig
                } else {
                    Decision::HiddenAutomatically
                }
            } else if !kept_ids.contains(id.as_str()) {
                Decision::Truncated
            } else if sets.config_pin.contains(id) {
                Decision::Pinned
            } else if sets.config_show.contains(id) {
                Decision::Shown
            } else {
                Decision::Listed
            };
            EntryDecision {
                id: id.clone(),
                decision,
            }
        })
        .collect()
}
