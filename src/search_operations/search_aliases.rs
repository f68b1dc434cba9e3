use anyhow::Result as AnyhowResult;
use sqlx::{PgPool, Row};

use crate::config::MatchThresholds;
use crate::database::{ConfidenceBand, MatchResult, MatchSource};

/// Trigram lookup over customer-name aliases, joined back to accounts
/// so the response carries the canonical name.
pub async fn search_aliases(
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
            c.raw_name AS matched_alias,
            similarity(c.raw_name, $1) AS sim_score
        FROM customer_name_aliases c
        JOIN accounts a ON c.account_id = a.account_id
        WHERE c.raw_name % $1
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
        let similarity_score: f32 = row.try_get("sim_score")?;
        matches.push(MatchResult {
            account_id: row.try_get("account_id")?,
            account_name: row.try_get("account_name")?,
            matched_text: row.try_get("matched_alias")?,
            similarity_score,
            match_source: MatchSource::Alias,
            confidence_band: ConfidenceBand::from_score(similarity_score, thresholds),
        });
    }

    Ok(matches)
}
