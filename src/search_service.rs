use sqlx::PgPool;
use tracing::{debug, error, warn};

use crate::config::MatchThresholds;
use crate::constants::{MIN_QUERY_LEN, SUBQUERY_LIMIT};
use crate::database::MatchResult;
use crate::search_operations::{rank_matches, search_account_names, search_aliases};

/// Fuzzy account lookup layered on the store's trigram similarity
/// oracle. Request-scoped: construct one per lookup over the shared
/// pool.
pub struct FuzzySearchService {
    pool: PgPool,
    thresholds: MatchThresholds,
}

impl FuzzySearchService {
    pub fn new(pool: PgPool, thresholds: MatchThresholds) -> Self {
        Self { pool, thresholds }
    }

    pub fn confidence_threshold(&self) -> f32 {
        self.thresholds.best_match
    }

    /// Single best match for a raw customer name, or `None` when
    /// nothing clears the confidence threshold.
    pub async fn find_best_match(&self, raw_customer_name: &str) -> Option<MatchResult> {
        let cleaned = raw_customer_name.trim();
        if cleaned.len() < MIN_QUERY_LEN {
            return None;
        }

        let candidates = self.collect_candidates(cleaned, SUBQUERY_LIMIT).await;
        let best = rank_matches(candidates, 1).into_iter().next()?;

        if best.similarity_score >= self.thresholds.best_match {
            debug!(
                "Best match for '{}': account {} at {:.4}",
                cleaned, best.account_id, best.similarity_score
            );
            Some(best)
        } else {
            debug!(
                "Best candidate for '{}' below threshold: {:.4} < {:.4}",
                cleaned, best.similarity_score, self.thresholds.best_match
            );
            None
        }
    }

    /// Ranked candidate list regardless of threshold, for diagnostics
    /// and admin tooling.
    pub async fn find_all_matches(&self, raw_customer_name: &str, limit: usize) -> Vec<MatchResult> {
        let cleaned = raw_customer_name.trim();
        if cleaned.len() < MIN_QUERY_LEN {
            return Vec::new();
        }

        let candidates = self.collect_candidates(cleaned, limit).await;
        if candidates.is_empty() {
            warn!("No matches found for query: {}", cleaned);
        }
        rank_matches(candidates, limit)
    }

    /// Probe the store's trigram extension with a fixed pair.
    pub async fn trigram_support(&self) -> bool {
        match sqlx::query_scalar::<_, f32>("SELECT similarity('test', 'testing')")
            .fetch_one(&self.pool)
            .await
        {
            Ok(score) => (0.0..=1.0).contains(&score),
            Err(e) => {
                error!("Trigram support check failed: {}", e);
                false
            }
        }
    }

    /// Run both sub-queries. A failing sub-query is logged and treated
    /// as zero results; it never propagates to the caller.
    async fn collect_candidates(&self, cleaned: &str, limit: usize) -> Vec<MatchResult> {
        let mut candidates =
            match search_account_names(&self.pool, cleaned, limit, &self.thresholds).await {
                Ok(matches) => matches,
                Err(e) => {
                    error!("Account name fuzzy search failed: {}", e);
                    Vec::new()
                }
            };

        match search_aliases(&self.pool, cleaned, limit, &self.thresholds).await {
            Ok(matches) => candidates.extend(matches),
            Err(e) => error!("Alias fuzzy search failed: {}", e),
        }

        candidates
    }
}
