//! @acp:module "Resolution Report"
//! @acp:summary "Explain-mode record of how one resolution call decided each entry"
//! @acp:domain curation
//! @acp:layer types

use serde::Serialize;

use crate::entry::ContentCategory;

use super::types::{EntrySetsMap, VisibilityTier};

/// Recoverable conditions seen during resolution. None of them stop it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Diagnostic {
    /// A configured id matched no entry; it was skipped.
    UnmatchedConfigId {
        tier: VisibilityTier,
        configured_id: String,
    },
    /// No page config for the category; the catalog passed through unfiltered.
    MissingPageConfig,
    /// Limit of zero or below; the result is empty.
    DegenerateLimit { limit: i64 },
}

/// Final outcome for one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Decision {
    /// Included through the pin tier.
    Pinned,
    /// Included through the config show tier.
    Shown,
    /// Included as part of the catalog.
    Listed,
    /// Removed by the config hide tier. Wins over pin.
    HiddenByConfig,
    /// Removed by the automatic hide predicate.
    HiddenAutomatically,
    /// Survived filtering but fell outside the limit.
    Truncated,
}

impl Decision {
    pub fn is_visible(&self) -> bool {
        matches!(self, Decision::Pinned | Decision::Shown | Decision::Listed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Pinned => "pinned",
            Decision::Shown => "shown",
            Decision::Listed => "listed",
            Decision::HiddenByConfig => "hidden (config)",
            Decision::HiddenAutomatically => "hidden (auto)",
            Decision::Truncated => "truncated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDecision {
    pub id: String,
    pub decision: Decision,
}

/// Everything one resolution call decided, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionReport {
    /// Category resolved, when the caller named one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ContentCategory>,
    /// `false` when the call ran in pass-through mode.
    pub configured: bool,
    pub sets: EntrySetsMap,
    pub decisions: Vec<EntryDecision>,
    /// Ids of the returned entries, in output order.
    pub visible: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ResolutionReport {
    pub fn decision(&self, id: &str) -> Option<Decision> {
        self.decisions
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.decision)
    }

    /// Configured ids that matched nothing.
    pub fn unmatched(&self) -> impl Iterator<Item = (VisibilityTier, &str)> {
        self.diagnostics.iter().filter_map(|d| match d {
            Diagnostic::UnmatchedConfigId {
                tier,
                configured_id,
            } => Some((*tier, configured_id.as_str())),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_included_decisions_are_visible() {
        assert!(Decision::Pinned.is_visible());
        assert!(Decision::Shown.is_visible());
        assert!(Decision::Listed.is_visible());
        assert!(!Decision::Truncated.is_visible());
        assert!(!Decision::HiddenByConfig.is_visible());
        assert!(!Decision::HiddenAutomatically.is_visible());
    }
}
