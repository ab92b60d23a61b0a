//! @acp:module "Orderer"
//! @acp:summary "Prefix limit and stable sort of resolved entries"
//! @acp:domain curation
//! @acp:layer logic

use std::cmp::Ordering;

use crate::entry::Entry;

use super::types::{Comparator, SortOrder};

/// First `n` items. A plain prefix take, not a priority selection.
pub fn limit<T>(mut items: Vec<T>, n: usize) -> Vec<T> {
    items.truncate(n);
    items
}

/// Stable sort: items comparing equal keep their current relative order.
pub fn sort<T>(items: &mut [T], cmp: Comparator<'_, T>) {
    items.sort_by(|a, b| cmp(a, b));
}

/// Comparator for a configured [`SortOrder`].
pub fn comparator<T: Entry>(order: SortOrder) -> fn(&T, &T) -> Ordering {
    match order {
        SortOrder::Catalog => |_, _| Ordering::Equal,
        SortOrder::Alphabetical => by_name::<T>,
        SortOrder::ReverseAlphabetical => |a, b| by_name::<T>(b, a),
        SortOrder::Chronological => |a, b| by_date::<T>(a, b, false),
        SortOrder::ReverseChronological => |a, b| by_date::<T>(a, b, true),
    }
}

fn by_name<T: Entry>(a: &T, b: &T) -> Ordering {
    a.sort_name()
        .to_lowercase()
        .cmp(&b.sort_name().to_lowercase())
        .then_with(|| a.sort_name().cmp(b.sort_name()))
}

// Undated entries go last in both directions.
fn by_date<T: Entry>(a: &T, b: &T, newest_first: bool) -> Ordering {
    match (a.sort_date(), b.sort_date()) {
        (Some(x), Some(y)) if newest_first => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Role, RoleKind, Skill};
    use chrono::NaiveDate;

    fn skill(name: &str) -> Skill {
        Skill {
            name: name.to_string(),
            group: None,
        }
    }

    fn role(org: &str, year: i32) -> Role {
        Role {
            kind: RoleKind::Employment,
            organization: org.to_string(),
            title: "Engineer".to_string(),
            start: NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            end: None,
            location: None,
            summary: None,
        }
    }

    fn names(skills: &[Skill]) -> Vec<&str> {
        skills.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_limit_is_prefix_take() {
        assert_eq!(limit(vec![1, 2, 3, 4], 2), vec![1, 2]);
        assert_eq!(limit(vec![1, 2], 5), vec![1, 2]);
        assert!(limit(vec![1, 2], 0).is_empty());
    }

    #[test]
    fn test_alphabetical_is_case_insensitive() {
        let mut skills = vec![skill("rust"), skill("Go"), skill("C")];
        let cmp = comparator::<Skill>(SortOrder::Alphabetical);
        sort(&mut skills, &cmp);
        assert_eq!(names(&skills), vec!["C", "Go", "rust"]);
    }

    #[test]
    fn test_catalog_order_is_stable() {
        let mut skills = vec![skill("b"), skill("a"), skill("c")];
        let cmp = comparator::<Skill>(SortOrder::Catalog);
        sort(&mut skills, &cmp);
        assert_eq!(names(&skills), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_reverse_chronological_roles() {
        let mut roles = vec![role("Old", 2010), role("New", 2022), role("Mid", 2016)];
        let cmp = comparator::<Role>(SortOrder::ReverseChronological);
        sort(&mut roles, &cmp);
        let orgs: Vec<_> = roles.iter().map(|r| r.organization.as_str()).collect();
        assert_eq!(orgs, vec!["New", "Mid", "Old"]);
    }

    #[test]
    fn test_equal_keys_keep_relative_order() {
        let mut roles = vec![role("First", 2020), role("Second", 2020)];
        let cmp = comparator::<Role>(SortOrder::Chronological);
        sort(&mut roles, &cmp);
        assert_eq!(roles[0].organization, "First");
        assert_eq!(roles[1].organization, "Second");
    }
}
