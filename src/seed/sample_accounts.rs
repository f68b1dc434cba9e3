use anyhow::{Context, Result as AnyhowResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct SeedOutcome {
    pub message: String,
    pub action: &'static str,
    pub hierarchies_created: usize,
    pub accounts_created: usize,
    pub aliases_created: usize,
}

#[derive(Debug, Serialize)]
pub struct ClearOutcome {
    pub message: String,
    pub action: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DataStatus {
    pub accounts: i64,
    pub hierarchies: i64,
    pub aliases: i64,
    pub checked_at: DateTime<Utc>,
}

/// level_1..level_4 of each sample hierarchy.
const SAMPLE_HIERARCHIES: [(&str, &str, &str, &str); 4] = [
    (
        "US Public Sector",
        "US Federal Government",
        "Department of Defense",
        "United States Navy",
    ),
    (
        "US Public Sector",
        "US Federal Government",
        "Department of Defense",
        "United States Air Force",
    ),
    (
        "US Public Sector",
        "US Federal Government",
        "Department of Homeland Security",
        "Transportation Security Administration",
    ),
    (
        "Commercial",
        "Defense Contractors",
        "Prime Contractors",
        "Lockheed Martin Corporation",
    ),
];

/// (account_name, hierarchy index, account_type, url).
const SAMPLE_ACCOUNTS: [(&str, usize, &str, &str); 4] = [
    (
        "United States Navy",
        0,
        "Government",
        "https://www.navy.mil",
    ),
    (
        "United States Air Force",
        1,
        "Government",
        "https://www.af.mil",
    ),
    (
        "Transportation Security Administration",
        2,
        "Government",
        "https://www.tsa.gov",
    ),
    (
        "Lockheed Martin Corporation",
        3,
        "Defense Vendor",
        "https://www.lockheedmartin.com",
    ),
];

/// Alias spellings seen in raw point-of-sale exports, keyed to the
/// account index above. "CVN74" is the USS John C. Stennis.
const SAMPLE_ALIASES: [(&str, usize); 16] = [
    ("USN", 0),
    ("US Navy", 0),
    ("CVN74", 0),
    ("NAVSEA", 0),
    ("Naval Sea Systems Command", 0),
    ("NAVAIR", 0),
    ("USAF", 1),
    ("US Air Force", 1),
    ("AFSPC", 1),
    ("Air Force Space Command", 1),
    ("TSA", 2),
    ("Transport Security Admin", 2),
    ("LMT", 3),
    ("Lockheed", 3),
    ("LM", 3),
    ("Lockheed Martin Corp", 3),
];

/// Idempotent sample fixture for exercising the fuzzy search. Skips
/// when the accounts table already has rows.
pub async fn create_sample_accounts(pool: &PgPool) -> AnyhowResult<SeedOutcome> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
        .fetch_one(pool)
        .await
        .context("Failed to count existing accounts")?;
    if existing > 0 {
        return Ok(SeedOutcome {
            message: format!("Sample data already exists ({existing} accounts)"),
            action: "skipped",
            hierarchies_created: 0,
            accounts_created: 0,
            aliases_created: 0,
        });
    }

    let mut tx = pool.begin().await.context("Failed to open transaction")?;

    let mut hierarchy_ids = Vec::with_capacity(SAMPLE_HIERARCHIES.len());
    for (level_1, level_2, level_3, level_4) in SAMPLE_HIERARCHIES {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO hierarchies (level_1, level_2, level_3, level_4)
             VALUES ($1, $2, $3, $4)
             RETURNING hierarchy_id",
        )
        .bind(level_1)
        .bind(level_2)
        .bind(level_3)
        .bind(level_4)
        .fetch_one(&mut *tx)
        .await?;
        hierarchy_ids.push(id);
    }

    let mut account_ids = Vec::with_capacity(SAMPLE_ACCOUNTS.len());
    for (account_name, hierarchy_idx, account_type, url) in SAMPLE_ACCOUNTS {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO accounts (account_name, hierarchy_id, account_type, url)
             VALUES ($1, $2, $3, $4)
             RETURNING account_id",
        )
        .bind(account_name)
        .bind(hierarchy_ids[hierarchy_idx])
        .bind(account_type)
        .bind(url)
        .fetch_one(&mut *tx)
        .await?;
        account_ids.push(id);
    }

    for (raw_name, account_idx) in SAMPLE_ALIASES {
        sqlx::query("INSERT INTO customer_name_aliases (raw_name, account_id) VALUES ($1, $2)")
            .bind(raw_name)
            .bind(account_ids[account_idx])
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await.context("Failed to commit sample data")?;
    info!(
        "Sample data created: {} accounts, {} aliases",
        SAMPLE_ACCOUNTS.len(),
        SAMPLE_ALIASES.len()
    );

    Ok(SeedOutcome {
        message: "Sample data created successfully".to_string(),
        action: "created",
        hierarchies_created: SAMPLE_HIERARCHIES.len(),
        accounts_created: SAMPLE_ACCOUNTS.len(),
        aliases_created: SAMPLE_ALIASES.len(),
    })
}

/// Delete everything, in foreign-key order.
pub async fn clear_all_data(pool: &PgPool) -> AnyhowResult<ClearOutcome> {
    let mut tx = pool.begin().await.context("Failed to open transaction")?;
    sqlx::query("DELETE FROM customer_name_aliases")
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM accounts").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM hierarchies")
        .execute(&mut *tx)
        .await?;
    tx.commit().await.context("Failed to commit data clear")?;

    info!("All sample data cleared");
    Ok(ClearOutcome {
        message: "All data cleared successfully".to_string(),
        action: "cleared",
    })
}

pub async fn data_status(pool: &PgPool) -> AnyhowResult<DataStatus> {
    Ok(DataStatus {
        accounts: count_rows(pool, "accounts").await?,
        hierarchies: count_rows(pool, "hierarchies").await?,
        aliases: count_rows(pool, "customer_name_aliases").await?,
        checked_at: Utc::now(),
    })
}

async fn count_rows(pool: &PgPool, table: &str) -> AnyhowResult<i64> {
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .with_context(|| format!("Failed to count rows in {table}"))?;
    Ok(count)
}
