use anyhow::Result as AnyhowResult;
use sqlx::{PgPool, Row};

use crate::config::MatchThresholds;
use crate::database::{ConfidenceBand, MatchResult, MatchSource};

/// Trigram lookup over canonical account names.
///
/// Relies on the store's `%` operator so the GIN trigram index is used;
/// `similarity()` only scores the survivors.
pub async fn search_account_names(
    pool: &PgPool,
    search_term: &str,
    limit: usize,
    thresholds: &MatchThresholds,
) -> AnyhowResult<Vec<MatchResult>> {
    let rows = sqlx::query(
        r#"
        SELECT
            a.account_id,
            a.account_name,
            similarity(a.account_name, $1) AS sim_score
        FROM accounts a
        WHERE a.account_name % $1
        ORDER BY sim_score DESC
        LIMIT $2
        "#,
    )
    .bind(search_term)
    .bind(limit as i64)
    .fetch_all(pool)
    .await?;

    let mut matches = Vec::with_capacity(rows.len());
    for row in rows {
        let account_name: String = row.try_get("account_name")?;
        let similarity_score: f32 = row.try_get("sim_score")?;
        matches.push(MatchResult {
            account_id: row.try_get("account_id")?,
            matched_text: account_name.clone(),
            account_name,
            similarity_score,
            match_source: MatchSource::CanonicalName,
            confidence_band: ConfidenceBand::from_score(similarity_score, thresholds),
        });
    }

    Ok(matches)
}
