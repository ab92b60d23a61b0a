//! @acp:module "Identity Resolver"
//! @acp:summary "Substring matching of configured ids against entry ids"
//! @acp:domain curation
//! @acp:layer logic

/// Index of the first entry id containing `configured_id`.
///
/// Matching is a case-sensitive substring test in catalog order; the first
/// hit wins and later candidates are not ranked.
pub fn match_configured_id<S: AsRef<str>>(entry_ids: &[S], configured_id: &str) -> Option<usize> {
    entry_ids
        .iter()
        .position(|id| id.as_ref().contains(configured_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let ids = ["alpha", "beta", "gamma"];
        assert_eq!(match_configured_id(&ids, "beta"), Some(1));
    }

    #[test]
    fn test_substring_match() {
        let ids = ["Rust", "JavaScript/TypeScript", "Go"];
        assert_eq!(match_configured_id(&ids, "JavaScript"), Some(1));
        assert_eq!(match_configured_id(&["xabcx"], "abc"), Some(0));
    }

    #[test]
    fn test_first_catalog_match_wins() {
        let ids = ["octo/folio-old", "octo/folio"];
        assert_eq!(match_configured_id(&ids, "folio"), Some(0));
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(match_configured_id(&["Rust"], "rust"), None);
    }

    #[test]
    fn test_not_found() {
        let ids: [&str; 0] = [];
        assert_eq!(match_configured_id(&ids, "alpha"), None);
        assert_eq!(match_configured_id(&["alpha"], "delta"), None);
    }
}
