//! The fuzzy search index and its process-wide memoization.

use super::normalize;
use super::record::{Scope, SearchRecord};
use super::scoring::{
    self, DESCRIPTION_WEIGHT, KEYWORDS_WEIGHT, LOCALIZED_NAME_WEIGHT, MatchField, NAME_WEIGHT,
};
use crate::catalog::ApiCatalog;
use ahash::AHashSet;
use std::sync::{Arc, OnceLock};

/// Default result cap. The command-modal surface asks for 20 and the inline
/// dropdown for 10; anything that does not say otherwise gets this.
pub const DEFAULT_LIMIT: usize = 50;

/// Prepared match fields for one record.
struct IndexedRecord {
    name: MatchField,
    localized_name: Option<MatchField>,
    description: Option<MatchField>,
    keywords: Option<MatchField>,
}

impl IndexedRecord {
    fn prepare(record: &SearchRecord) -> Self {
        Self {
            name: MatchField::new(&record.name),
            localized_name: record.localized_name.as_deref().and_then(MatchField::try_new),
            description: record.description.as_deref().and_then(MatchField::try_new),
            keywords: record.keywords.as_deref().and_then(MatchField::try_new),
        }
    }

    fn score(&self, query: &str) -> Option<f64> {
        scoring::weighted_score(
            query,
            [
                (Some(&self.name), NAME_WEIGHT),
                (self.localized_name.as_ref(), LOCALIZED_NAME_WEIGHT),
                (self.description.as_ref(), DESCRIPTION_WEIGHT),
                (self.keywords.as_ref(), KEYWORDS_WEIGHT),
            ],
        )
    }
}

/// A fuzzy-searchable index over the full record set.
///
/// Read-only after construction, so it can be shared across presentation
/// surfaces without coordination. Queries are a synchronous scan scoring
/// every record; cost is bounded by the fixed corpus size.
pub struct SearchIndex {
    records: Vec<SearchRecord>,
    entries: Vec<IndexedRecord>,
}

impl SearchIndex {
    /// Build an index over `records`. An empty record set builds a valid,
    /// empty index rather than failing.
    pub fn build(records: Vec<SearchRecord>) -> Self {
        let start = std::time::Instant::now();

        // Target paths are the result identity; a duplicate means a broken
        // source capture.
        let mut seen = AHashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.target_path.as_str()) {
                tracing::warn!("Duplicate target path in record set: {}", record.target_path);
            }
        }

        let entries = records.iter().map(IndexedRecord::prepare).collect();
        let index = Self { records, entries };

        tracing::info!(
            "Built search index: {} records in {:?}",
            index.len(),
            start.elapsed()
        );
        index
    }

    /// Normalize the catalog and build the index over the result.
    pub fn from_catalog(catalog: &ApiCatalog) -> Self {
        Self::build(normalize::collect_records(catalog))
    }

    /// Execute a fuzzy query.
    ///
    /// Candidates are scored against the full corpus, ordered best-first
    /// (ties broken by `target_path` so results are deterministic), filtered
    /// by `scope` *after* ranking so cross-scope matches never distort
    /// scores, and truncated to `limit`. An empty or whitespace-only query
    /// short-circuits to no results without touching the index.
    pub fn search(&self, query: &str, scope: Option<Scope>, limit: usize) -> Vec<SearchRecord> {
        let query = query.trim();
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }
        let query = query.to_lowercase();

        let mut scored: Vec<(f64, usize)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| entry.score(&query).map(|score| (score, position)))
            .collect();

        scored.sort_by(|(score_a, pos_a), (score_b, pos_b)| {
            score_a.total_cmp(score_b).then_with(|| {
                self.records[*pos_a]
                    .target_path
                    .cmp(&self.records[*pos_b].target_path)
            })
        });

        scored
            .into_iter()
            .filter(|(_, position)| {
                scope.is_none_or(|wanted| self.records[*position].scope == wanted)
            })
            .take(limit)
            .map(|(_, position)| self.records[position].clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The full record set in insertion order.
    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }
}

/// Single-construction cell for the process-wide index.
///
/// The corpus is fixed for the process lifetime, so the index is built once
/// and shared; concurrent or repeated build requests coalesce into one build
/// and one cached handle. The cell is constructed and passed explicitly;
/// there is no ambient global for the query engine to reach for.
#[derive(Default)]
pub struct IndexCell {
    cell: OnceLock<Arc<SearchIndex>>,
}

impl IndexCell {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Return the cached index, building it from `catalog` on first call.
    pub fn get_or_build(&self, catalog: &ApiCatalog) -> Arc<SearchIndex> {
        self.cell
            .get_or_init(|| Arc::new(SearchIndex::from_catalog(catalog)))
            .clone()
    }

    /// The cached index, if one has been built.
    pub fn get(&self) -> Option<Arc<SearchIndex>> {
        self.cell.get().cloned()
    }
}
