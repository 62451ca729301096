//! Text matching: fuzzy index over the catalog plus the exact fallback.

use anyhow::Result;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::state::CommandRecord;

/// Queries shorter than this produce no fuzzy hits; the fallback matcher
/// handles them instead.
const MIN_QUERY_CHARS: usize = 2;

/// Approximate-matching engine behind the filter pipeline. The concrete
/// scorer is swappable; only the ranking contract matters.
pub trait SearchIndex {
    /// Ranked matches, best first, as (store index, relevance score).
    /// Never called with an empty query.
    fn search(&self, query: &str) -> Result<Vec<(usize, i64)>>;
}

/// Skim-based index: per-record lowercased haystacks over command,
/// description and joined tags, scored per field with the best field winning.
pub struct SkimIndex {
    matcher: SkimMatcherV2,
    /// One entry per store record: [command, description, tags].
    haystacks: Vec<[String; 3]>,
}

impl SkimIndex {
    pub fn build(records: &[CommandRecord]) -> Self {
        let haystacks = records
            .iter()
            .map(|r| {
                [
                    r.command.to_lowercase(),
                    r.description.to_lowercase(),
                    r.tags.join(" ").to_lowercase(),
                ]
            })
            .collect();
        Self { matcher: SkimMatcherV2::default(), haystacks }
    }
}

impl SearchIndex for SkimIndex {
    fn search(&self, query: &str) -> Result<Vec<(usize, i64)>> {
        let query = query.trim().to_lowercase();
        if query.chars().count() < MIN_QUERY_CHARS {
            return Ok(Vec::new());
        }
        let mut scored: Vec<(usize, i64)> = self
            .haystacks
            .iter()
            .enumerate()
            .filter_map(|(i, fields)| {
                fields
                    .iter()
                    .filter_map(|f| self.matcher.fuzzy_match(f, &query))
                    .max()
                    .map(|score| (i, score))
            })
            .collect();
        // Best first; ties keep store order.
        scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(scored)
    }
}

/// Exact multi-term containment search, used when the fuzzy index is absent
/// or finds nothing. Every whitespace-separated term must appear somewhere in
/// the record's combined command/description/tags text (case-insensitive).
/// Store order is preserved; no ranking.
pub fn fallback_match(records: &[CommandRecord], query: &str) -> Vec<usize> {
    let terms: Vec<String> = query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            let text = record.searchable_text();
            terms.iter().all(|term| text.contains(term.as_str()))
        })
        .map(|(i, _)| i)
        .collect()
}
