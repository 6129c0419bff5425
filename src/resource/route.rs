//! Path resolution against the configured mount prefix.

use crate::error::{CollectionError, CollectionResult};

/// Classification of the path remainder after prefix removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
    /// The path ends exactly at the prefix: the whole collection.
    Collection,
    /// One or more segments past the prefix: a single entity.
    Item {
        /// The first remaining segment, verbatim.
        id: String,
        /// Segments past the identifier; accepted but unused (no
        /// sub-resource routing).
        trailing: Vec<String>,
    },
}

impl Route {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Route::Collection => "collection",
            Route::Item { .. } => "item",
        }
    }
}

/// Reduce the request path against the mount prefix.
///
/// Removal is positional: the resolver drops `prefix.len() + 1` leading
/// `/`-separated segments (the extra one is the empty segment before the
/// leading slash) without comparing their text. Verifying the mount point
/// belongs to the embedding router.
pub(crate) fn resolve(path: Option<&str>, prefix: &[String]) -> CollectionResult<Route> {
    let path = path.ok_or(CollectionError::UrlNotFound)?;

    let mut segments = path.split('/').skip(prefix.len() + 1);
    match segments.next() {
        None => Ok(Route::Collection),
        Some(id) => Ok(Route::Item {
            id: id.to_owned(),
            trailing: segments.map(str::to_owned).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix() -> Vec<String> {
        vec!["api".to_owned(), "friends".to_owned()]
    }

    #[test]
    fn test_prefix_exact_is_collection_root() {
        let route = resolve(Some("/api/friends"), &prefix()).unwrap();
        assert_eq!(route, Route::Collection);
    }

    #[test]
    fn test_one_extra_segment_is_an_item() {
        let route = resolve(Some("/api/friends/123"), &prefix()).unwrap();
        assert_eq!(
            route,
            Route::Item {
                id: "123".to_owned(),
                trailing: vec![],
            }
        );
    }

    #[test]
    fn test_segments_past_the_id_are_kept_but_unused() {
        let route = resolve(Some("/api/friends/123/posts/7"), &prefix()).unwrap();
        assert_eq!(
            route,
            Route::Item {
                id: "123".to_owned(),
                trailing: vec!["posts".to_owned(), "7".to_owned()],
            }
        );
    }

    #[test]
    fn test_trailing_slash_yields_an_empty_id() {
        // "/api/friends/" splits into an empty final segment; it classifies
        // as an item with an empty identifier, not as the collection root.
        let route = resolve(Some("/api/friends/"), &prefix()).unwrap();
        assert_eq!(
            route,
            Route::Item {
                id: String::new(),
                trailing: vec![],
            }
        );
    }

    #[test]
    fn test_missing_path_is_url_not_found() {
        let err = resolve(None, &prefix()).unwrap_err();
        assert!(matches!(err, CollectionError::UrlNotFound));
    }

    #[test]
    fn test_prefix_removal_is_positional() {
        // Same segment count, different text: still resolves.
        let route = resolve(Some("/v2/things/9"), &prefix()).unwrap();
        assert_eq!(
            route,
            Route::Item {
                id: "9".to_owned(),
                trailing: vec![],
            }
        );
    }
}
