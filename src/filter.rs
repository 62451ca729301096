//! Filter pipeline: the single re-derivation from (store, query, index) to
//! the visible result set.

use tracing::warn;

use crate::search::{fallback_match, SearchIndex};
use crate::state::QueryState;
use crate::store::RecordStore;

/// Recompute the result set from scratch. Pure apart from logging: no
/// framework coupling, no caching, callers re-run it on every query change.
///
/// Text search comes first (fuzzy when the index has hits, otherwise the
/// exact fallback against the full store), then the category filter is
/// applied on top. Errors from the index degrade to the fallback; nothing
/// here ever propagates to the caller.
pub fn derive_results(
    store: &RecordStore,
    query: &QueryState,
    index: Option<&dyn SearchIndex>,
) -> Vec<usize> {
    let mut results: Vec<usize> = (0..store.len()).collect();

    let text = query.search_query.trim();
    if !text.is_empty() {
        results = match fuzzy_hits(index, text) {
            Some(hits) if !hits.is_empty() => hits,
            // No index, zero fuzzy hits, or the search failed: fall back to
            // exact matching over the full store, not the fuzzy result.
            _ => fallback_match(store.records(), text),
        };
    }

    if let Some(category) = &query.active_category {
        results.retain(|&i| {
            store.get(i).map(|r| r.category == *category).unwrap_or(false)
        });
    }

    results
}

fn fuzzy_hits(index: Option<&dyn SearchIndex>, query: &str) -> Option<Vec<usize>> {
    let index = index?;
    match index.search(query) {
        Ok(hits) => Some(hits.into_iter().map(|(i, _)| i).collect()),
        Err(e) => {
            warn!("fuzzy search failed, using fallback matcher: {e}");
            None
        }
    }
}
