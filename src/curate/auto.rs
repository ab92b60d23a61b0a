//! @acp:module "Automatic Classifier"
//! @acp:summary "Attribute-derived show/hide predicates per content category"
//! @acp:domain curation
//! @acp:layer logic

use indexmap::IndexSet;

use crate::entry::{Project, ProjectSource};

use super::types::Predicate;

/// Optional automatic show/hide predicates for one category.
///
/// Predicates look only at entry attributes, never at page config.
pub struct AutoClassifier<T> {
    pub auto_show: Option<fn(&T) -> bool>,
    pub auto_hide: Option<fn(&T) -> bool>,
}

impl<T> AutoClassifier<T> {
    /// No automatic membership in either direction.
    pub fn none() -> Self {
        Self {
            auto_show: None,
            auto_hide: None,
        }
    }

    pub fn show_predicate(&self) -> Option<Predicate<'_, T>> {
        self.auto_show.as_ref().map(|f| f as Predicate<'_, T>)
    }

    pub fn hide_predicate(&self) -> Option<Predicate<'_, T>> {
        self.auto_hide.as_ref().map(|f| f as Predicate<'_, T>)
    }
}

impl<T> Clone for AutoClassifier<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AutoClassifier<T> {}

impl<T> Default for AutoClassifier<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl AutoClassifier<Project> {
    /// Projects: hide forks and repos with no known category.
    pub fn for_projects() -> Self {
        Self {
            auto_show: None,
            auto_hide: Some(project_auto_hidden),
        }
    }
}

/// Forked or uncategorized GitHub repositories. Manual projects are never
/// hidden automatically.
pub fn project_auto_hidden(project: &Project) -> bool {
    match &project.source {
        ProjectSource::GitHub(repo) => repo.fork || project.category.is_none(),
        ProjectSource::Manual => false,
    }
}

/// Ids of the entries satisfying `predicate`, in catalog order.
///
/// `ids[i]` must be the id of `entries[i]`.
pub fn classify<T>(
    entries: &[T],
    ids: &[String],
    predicate: Option<Predicate<'_, T>>,
) -> IndexSet<String> {
    let Some(predicate) = predicate else {
        return IndexSet::new();
    };

    entries
        .iter()
        .zip(ids)
        .filter(|(entry, _)| predicate(entry))
        .map(|(_, id)| id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::RepoInfo;

    fn project(slug: &str, category: Option<&str>, source: ProjectSource) -> Project {
        Project {
            slug: slug.to_string(),
            name: slug.to_string(),
            description: None,
            category: category.map(str::to_string),
            url: None,
            date: None,
            source,
        }
    }

    fn github(fork: bool) -> ProjectSource {
        ProjectSource::GitHub(RepoInfo {
            owner: "octo".to_string(),
            repo: "x".to_string(),
            fork,
            archived: false,
            stars: 0,
        })
    }

    #[test]
    fn test_fork_is_hidden() {
        assert!(project_auto_hidden(&project("a", Some("web"), github(true))));
    }

    #[test]
    fn test_uncategorized_repo_is_hidden() {
        assert!(project_auto_hidden(&project("a", None, github(false))));
    }

    #[test]
    fn test_categorized_repo_is_visible() {
        assert!(!project_auto_hidden(&project("a", Some("web"), github(false))));
    }

    #[test]
    fn test_manual_project_never_hidden() {
        assert!(!project_auto_hidden(&project("a", None, ProjectSource::Manual)));
    }

    #[test]
    fn test_classify_without_predicate_is_empty() {
        let entries = vec![1, 2, 3];
        let ids: Vec<String> = entries.iter().map(|n: &i32| n.to_string()).collect();
        assert!(classify(&entries, &ids, None).is_empty());
    }

    #[test]
    fn test_classify_keeps_catalog_order() {
        let entries = vec![5, 2, 8, 1];
        let ids: Vec<String> = entries.iter().map(|n: &i32| n.to_string()).collect();
        let even = |n: &i32| n % 2 == 0;
        let set = classify(&entries, &ids, Some(&even));
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec!["2", "8"]);
    }
}
