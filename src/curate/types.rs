//! @acp:module "Curation Types"
//! @acp:summary "Per-page visibility configuration and intermediate entry sets"
//! @acp:domain curation
//! @acp:layer types

use std::cmp::Ordering;
use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Comparator over entries. Must be a total order for a deterministic result.
pub type Comparator<'a, T> = &'a dyn Fn(&T, &T) -> Ordering;

/// Predicate over entries, used by automatic show/hide.
pub type Predicate<'a, T> = &'a dyn Fn(&T) -> bool;

/// Manual visibility tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityTier {
    Pin,
    Show,
    Hide,
}

impl VisibilityTier {
    pub const ALL: [VisibilityTier; 3] = [
        VisibilityTier::Pin,
        VisibilityTier::Show,
        VisibilityTier::Hide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VisibilityTier::Pin => "pin",
            VisibilityTier::Show => "show",
            VisibilityTier::Hide => "hide",
        }
    }
}

impl fmt::Display for VisibilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializable ordering for config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    /// Keep catalog order.
    Catalog,
    /// By display name, case-insensitive.
    Alphabetical,
    ReverseAlphabetical,
    /// Oldest first; undated entries last.
    Chronological,
    /// Newest first; undated entries last.
    ReverseChronological,
}

/// Per-page, per-category visibility configuration.
///
/// The tier lists hold identifier substrings: `"JavaScript"` selects the
/// skill `"JavaScript/TypeScript"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContentEntryConfig {
    /// Maximum number of entries. Absent means unbounded; zero or negative
    /// yields nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Ordering applied after the limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pin: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub show: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hide: Vec<String>,
}

impl PageContentEntryConfig {
    /// Configured identifiers for a tier.
    pub fn tier(&self, tier: VisibilityTier) -> &[String] {
        match tier {
            VisibilityTier::Pin => &self.pin,
            VisibilityTier::Show => &self.show,
            VisibilityTier::Hide => &self.hide,
        }
    }

    /// Limit as a prefix length. `None` means no truncation.
    pub fn effective_limit(&self) -> Option<usize> {
        self.limit.map(|n| usize::try_from(n).unwrap_or(0))
    }
}

/// Intermediate sets computed by one resolution call, keyed by entry id.
///
/// Config sets keep the order their identifiers were configured in; automatic
/// sets keep catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySetsMap {
    pub config_pin: IndexSet<String>,
    pub config_show: IndexSet<String>,
    pub config_hide: IndexSet<String>,
    pub auto_show: IndexSet<String>,
    pub auto_hide: IndexSet<String>,
}

impl EntrySetsMap {
    pub fn config_mut(&mut self, tier: VisibilityTier) -> &mut IndexSet<String> {
        match tier {
            VisibilityTier::Pin => &mut self.config_pin,
            VisibilityTier::Show => &mut self.config_show,
            VisibilityTier::Hide => &mut self.config_hide,
        }
    }
}
