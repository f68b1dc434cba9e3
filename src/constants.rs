/// Minimum trimmed query length before the store is consulted.
pub const MIN_QUERY_LEN: usize = 2;

/// Per-sub-query row cap when resolving a best match.
pub const SUBQUERY_LIMIT: usize = 5;

/// Default candidate cap for all-matches lookups.
pub const DEFAULT_MATCH_LIMIT: usize = 10;

/// Upper bound the HTTP layer clamps all-matches limits to.
pub const MAX_MATCH_LIMIT: usize = 50;

/// Maximum queries accepted per batch-test request.
pub const MAX_BATCH_QUERIES: usize = 20;
