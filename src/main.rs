use std::sync::Arc;

use anyhow::Result as AnyhowResult;
use tracing_subscriber::EnvFilter;

use account_matcher::{
    connect_pool, create_sample_accounts, init_schema, parse_args, start_http_server,
    FuzzySearchService, MatchResult, Settings,
};

#[tokio::main]
async fn main() -> AnyhowResult<()> {
    dotenv::dotenv().ok();
    let args = parse_args();

    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = Arc::new(Settings::from_env()?);

    if args.seed {
        let pool = connect_pool(&settings).await?;
        init_schema(&pool).await?;
        let outcome = create_sample_accounts(&pool).await?;
        println!(
            "{} ({} accounts, {} aliases)",
            outcome.message, outcome.accounts_created, outcome.aliases_created
        );
        return Ok(());
    }

    if args.server {
        return start_http_server(settings).await;
    }

    let Some(query) = args.query else {
        anyhow::bail!("Either --server, --seed, or --query must be provided");
    };

    let pool = connect_pool(&settings).await?;
    let service = FuzzySearchService::new(pool, settings.thresholds());

    if args.all {
        let matches = service.find_all_matches(&query, args.limit).await;
        if matches.is_empty() {
            println!("No matches for '{}'", query);
        }
        for (i, result) in matches.iter().enumerate() {
            println!("{}. {}", i + 1, describe_match(result));
        }
    } else {
        match service.find_best_match(&query).await {
            Some(result) => println!("{}", describe_match(&result)),
            None => println!("No confident match for '{}'", query),
        }
    }

    Ok(())
}

fn describe_match(result: &MatchResult) -> String {
    format!(
        "{} (account {}) matched '{}' via {} - {:.4} [{}]",
        result.account_name,
        result.account_id,
        result.matched_text,
        result.match_source.as_str(),
        result.similarity_score,
        result.confidence_band.as_str()
    )
}
