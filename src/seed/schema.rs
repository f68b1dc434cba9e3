use anyhow::{Context, Result as AnyhowResult};
use sqlx::PgPool;
use tracing::info;

/// Development schema bootstrap. Production deployments own their
/// schema through migrations; this exists so `--seed` works against an
/// empty database.
const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE EXTENSION IF NOT EXISTS pg_trgm",
    "CREATE TABLE IF NOT EXISTS hierarchies (
        hierarchy_id BIGSERIAL PRIMARY KEY,
        level_1 TEXT NOT NULL,
        level_2 TEXT,
        level_3 TEXT,
        level_4 TEXT
    )",
    "CREATE TABLE IF NOT EXISTS accounts (
        account_id BIGSERIAL PRIMARY KEY,
        account_name TEXT NOT NULL,
        hierarchy_id BIGINT REFERENCES hierarchies(hierarchy_id),
        account_type TEXT,
        url TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )",
    "CREATE TABLE IF NOT EXISTS customer_name_aliases (
        alias_id BIGSERIAL PRIMARY KEY,
        raw_name TEXT NOT NULL,
        account_id BIGINT NOT NULL REFERENCES accounts(account_id),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )",
    "CREATE INDEX IF NOT EXISTS idx_accounts_name_trgm
        ON accounts USING GIN (account_name gin_trgm_ops)",
    "CREATE INDEX IF NOT EXISTS idx_aliases_raw_name_trgm
        ON customer_name_aliases USING GIN (raw_name gin_trgm_ops)",
];

pub async fn init_schema(pool: &PgPool) -> AnyhowResult<()> {
    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement)
            .execute(pool)
            .await
            .with_context(|| format!("Failed to run schema statement: {statement}"))?;
    }
    info!("Schema initialized");
    Ok(())
}
