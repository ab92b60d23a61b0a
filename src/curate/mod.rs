//! @acp:module "Curation"
//! @acp:summary "Per-page visibility resolution for projects, roles and skills"
//! @acp:domain curation
//! @acp:layer feature
//!
//! Given a full catalog for one content category and an optional page config,
//! decides which entries the page displays and in what order.

pub mod auto;
pub mod identity;
pub mod order;
pub mod report;
pub mod resolver;
pub mod types;

pub use auto::AutoClassifier;
pub use identity::match_configured_id;
pub use report::{Decision, Diagnostic, EntryDecision, ResolutionReport};
pub use resolver::{
    curate, curate_with_report, resolve_visible_entries, resolve_with_report, ResolveHooks,
};
pub use types::{EntrySetsMap, PageContentEntryConfig, SortOrder, VisibilityTier};
