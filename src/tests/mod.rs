#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use sqlx::postgres::PgPoolOptions;

    use crate::config::MatchThresholds;
    use crate::database::{ConfidenceBand, MatchResult, MatchSource};
    use crate::search_operations::rank_matches;
    use crate::search_service::FuzzySearchService;

    fn candidate(account_id: i64, matched_text: &str, score: f32) -> MatchResult {
        let thresholds = MatchThresholds::default();
        MatchResult {
            account_id,
            account_name: format!("Account {account_id}"),
            matched_text: matched_text.to_string(),
            similarity_score: score,
            match_source: MatchSource::Alias,
            confidence_band: ConfidenceBand::from_score(score, &thresholds),
        }
    }

    /// A pool that points at a closed port. Queries against it fail at
    /// acquire time, which is exactly the degraded path under test.
    fn offline_service() -> FuzzySearchService {
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(200))
            .connect_lazy("postgresql://nobody@127.0.0.1:1/unreachable")
            .expect("lazy pool construction should not fail");
        FuzzySearchService::new(pool, MatchThresholds::default())
    }

    #[tokio::test]
    async fn short_queries_return_nothing_without_touching_the_store() {
        let service = offline_service();
        assert!(service.find_best_match("").await.is_none());
        assert!(service.find_best_match(" x ").await.is_none());
        assert!(service.find_all_matches("a", 10).await.is_empty());
        assert!(service.find_all_matches("   ", 10).await.is_empty());
    }

    #[tokio::test]
    async fn store_failure_degrades_to_empty_results() {
        let service = offline_service();
        assert!(service.find_best_match("USN").await.is_none());
        assert!(service.find_all_matches("xyz123", 10).await.is_empty());
        assert!(!service.trigram_support().await);
    }

    #[test]
    fn ranking_is_descending_and_truncated() {
        let candidates = vec![
            candidate(1, "USN", 0.55),
            candidate(2, "US Navy", 0.95),
            candidate(3, "NAVSEA", 0.75),
            candidate(4, "NAVAIR", 0.85),
        ];

        let ranked = rank_matches(candidates, 3);
        assert_eq!(ranked.len(), 3);
        let scores: Vec<f32> = ranked.iter().map(|r| r.similarity_score).collect();
        assert_eq!(scores, vec![0.95, 0.85, 0.75]);
    }

    #[test]
    fn ranking_collapses_duplicate_rows() {
        // Alias spelled exactly like the canonical name: same account,
        // same matched text, two sources.
        let mut duplicate = candidate(7, "United States Navy", 0.9);
        duplicate.match_source = MatchSource::CanonicalName;
        let candidates = vec![candidate(7, "United States Navy", 0.8), duplicate];

        let ranked = rank_matches(candidates, 10);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].similarity_score, 0.9);
        assert_eq!(ranked[0].match_source, MatchSource::CanonicalName);
    }

    #[test]
    fn ranking_keeps_distinct_matches_for_the_same_account() {
        let candidates = vec![
            candidate(7, "USN", 1.0),
            candidate(7, "US Navy", 0.62),
        ];

        let ranked = rank_matches(candidates, 10);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].matched_text, "USN");
    }

    #[test]
    fn response_serialization_uses_snake_case() {
        let result = candidate(1, "USN", 1.0);
        let value = serde_json::to_value(&result).expect("serializable");
        assert_eq!(value["match_source"], "alias");
        assert_eq!(value["confidence_band"], "high");
        assert_eq!(value["account_id"], 1);
        assert_eq!(value["similarity_score"], 1.0);
    }

    #[test]
    fn exact_alias_match_is_high_band() {
        // "USN" against a stored alias "USN" scores 1.0 at the oracle;
        // the classified result must land in the high band.
        let result = candidate(1, "USN", 1.0);
        assert_eq!(result.confidence_band, ConfidenceBand::High);
        assert!(result.similarity_score >= MatchThresholds::default().best_match);
    }
}
