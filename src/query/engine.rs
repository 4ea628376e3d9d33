//! Filtering, listing and single-record lookup over one collection.
//!
//! Every function here is a pure function of its inputs.

use super::{paginate, Page, QueryError, QueryParams};
use crate::framework::Record;
use crate::model::{Character, Episode};

/// Characters matching the `name` and `status` filters, in their original order.
///
/// `name` is a case-insensitive substring match, taken literally (no trimming).
/// An unrecognized `status` is ignored.
pub fn filter_characters<'a>(
    characters: &'a [Character],
    params: &QueryParams,
) -> Vec<&'a Character> {
    let name = params.name().map(str::to_lowercase);
    let status = params.status();

    characters
        .iter()
        .filter(|c| {
            name.as_deref()
                .map_or(true, |term| c.name.to_lowercase().contains(term))
        })
        .filter(|c| {
            status.map_or(true, |wanted| {
                c.status().is_some_and(|value| wanted.matches(value))
            })
        })
        .collect()
}

/// Filtered, paginated character listing. Never fails: bad values fall back to defaults.
pub fn list_characters(characters: &[Character], params: &QueryParams) -> Page<Character> {
    let filtered = filter_characters(characters, params);
    paginate(&filtered, params.page(), params.limit())
}

/// Episode listing, optionally restricted to one season.
///
/// # Errors
/// [`QueryError::InvalidParameter`] when `season` is not an integer in `1..=11`.
pub fn list_episodes(
    episodes: &[Episode],
    params: &QueryParams,
) -> Result<Vec<Episode>, QueryError> {
    let listed = match params.season()? {
        Some(season) => episodes
            .iter()
            .filter(|e| e.season == Some(season))
            .cloned()
            .collect(),
        None => episodes.to_vec(),
    };
    Ok(listed)
}

/// Validates a raw identifier. Non-numeric and non-positive values are rejected.
pub fn parse_id(raw: &str, kind: &'static str) -> Result<u64, QueryError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id as u64),
        _ => Err(QueryError::invalid(
            "id",
            format!("{kind} ID must be a positive number"),
        )),
    }
}

/// Linear scan for an exact `id` match.
pub fn find_by_id<T: Record>(items: &[T], id: u64) -> Result<&T, QueryError> {
    items
        .iter()
        .find(|item| item.id() == id)
        .ok_or(QueryError::NotFound { kind: T::KIND, id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::PageLink;

    fn cast() -> Vec<Character> {
        vec![
            Character::new(1, "Rick Grimes", "Deceased"),
            Character::new(2, "Daryl Dixon", "Alive"),
            Character::new(3, "Carl Grimes", "deceased"),
            Character::new(4, "Maggie Greene", "ALIVE"),
            Character::new(5, "Negan", "Alive"),
            Character {
                id: 6,
                name: "Lori Grimes".to_string(),
                extra: Default::default(),
            },
        ]
    }

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        QueryParams::from_pairs(pairs.iter().copied())
    }

    fn ids(items: &[Character]) -> Vec<u64> {
        items.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_name_filter_is_case_insensitive_substring() {
        let cast = cast();
        let page = list_characters(&cast, &params(&[("name", "gRiMeS")]));
        assert_eq!(ids(&page.items), vec![1, 3, 6]);
        assert_eq!(page.total_items, 3);
    }

    #[test]
    fn test_whitespace_name_is_literal() {
        let cast = cast();
        let page = list_characters(&cast, &params(&[("name", " ")]));
        // Every name but "Negan" contains a space.
        assert_eq!(ids(&page.items), vec![1, 2, 3, 4, 6]);
    }

    #[test]
    fn test_status_filter_is_exact_and_case_insensitive() {
        let cast = cast();
        let alive = list_characters(&cast, &params(&[("status", "alive")]));
        assert_eq!(ids(&alive.items), vec![2, 4, 5]);
        let deceased = list_characters(&cast, &params(&[("status", "DECEASED")]));
        assert_eq!(ids(&deceased.items), vec![1, 3]);
    }

    #[test]
    fn test_unknown_status_equals_no_status() {
        let cast = cast();
        let unfiltered = list_characters(&cast, &params(&[("limit", "4")]));
        for status in ["zombie", "walker", "ali", "alive "] {
            let filtered = list_characters(&cast, &params(&[("status", status), ("limit", "4")]));
            assert_eq!(filtered, unfiltered, "status={status}");
        }
    }

    #[test]
    fn test_filters_combine_before_pagination() {
        let cast = cast();
        let page = list_characters(
            &cast,
            &params(&[("name", "grimes"), ("status", "deceased"), ("limit", "1"), ("page", "2")]),
        );
        assert_eq!(page.total_items, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(ids(&page.items), vec![3]);
        assert_eq!(page.prev, Some(PageLink { page: 1, limit: 1 }));
        assert_eq!(page.next, None);
    }

    #[test]
    fn test_season_filter() {
        let episodes: Vec<Episode> = (1..=30)
            .map(|id| Episode::new(id, (id as i64 - 1) / 3 + 1))
            .collect();

        for season in 1..=10i64 {
            let raw = season.to_string();
            let listed = list_episodes(&episodes, &params(&[("season", raw.as_str())])).unwrap();
            assert_eq!(listed.len(), 3);
            assert!(listed.iter().all(|e| e.season == Some(season)));
        }
        let eleven = list_episodes(&episodes, &params(&[("season", "11")])).unwrap();
        assert!(eleven.is_empty());

        for bad in ["0", "12"] {
            assert!(list_episodes(&episodes, &params(&[("season", bad)])).is_err());
        }
        assert_eq!(list_episodes(&episodes, &QueryParams::default()).unwrap().len(), 30);
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42", "Character"), Ok(42));
        assert_eq!(parse_id(" 7 ", "Episode"), Ok(7));
        for bad in ["-1", "0", "abc", "", "1.5"] {
            assert!(
                matches!(
                    parse_id(bad, "Episode"),
                    Err(QueryError::InvalidParameter { field: "id", .. })
                ),
                "id={bad}"
            );
        }
    }

    #[test]
    fn test_find_by_id() {
        let cast = cast();
        assert_eq!(find_by_id(&cast, 5).unwrap().name, "Negan");
        assert_eq!(
            find_by_id(&cast, 999_999),
            Err(QueryError::NotFound { kind: "Character", id: 999_999 })
        );
    }
}
