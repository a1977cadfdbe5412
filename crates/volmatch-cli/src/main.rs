use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use volmatch_core::domain::{CandidateDocument, Request, RequestId};
use volmatch_core::impls::InMemoryMatchStore;
use volmatch_core::{MatcherBuilder, MatchingConfig};

/// Run the matching engine for one request against a JSON fixture.
#[derive(Debug, Parser)]
#[command(name = "volmatch", version)]
struct Args {
    /// Fixture file with `requests` and `candidates` arrays.
    fixture: PathBuf,

    /// Id of the request to match.
    request_id: String,

    /// Override the retention threshold (default: VOLMATCH_MIN_SCORE or 10).
    #[arg(long)]
    min_score: Option<u32>,
}

/// fixture ファイルの形（ストアのエクスポートと同じ camelCase ドキュメント）
#[derive(Debug, Deserialize)]
struct Fixture {
    #[serde(default)]
    requests: Vec<Request>,
    #[serde(default)]
    candidates: Vec<serde_json::Value>,
}

/// Load every fixture record into a fresh in-memory store.
async fn load_store(fixture: Fixture) -> Result<InMemoryMatchStore> {
    let store = InMemoryMatchStore::new();
    for request in fixture.requests {
        store.put_request(request).await;
    }

    for (index, data) in fixture.candidates.into_iter().enumerate() {
        // id が無いドキュメントはストア側でも存在し得ないので、ここで弾く
        let Some(id) = data.get("id").and_then(|id| id.as_str()).map(str::to_string) else {
            bail!("candidate #{index} has no string id");
        };
        let eligible = data
            .get("isVolunteer")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(true);

        let document = CandidateDocument::new(id, data);
        if eligible {
            store.add_document(document).await;
        } else {
            tracing::debug!(candidate_id = %document.id, "not a volunteer; kept out of the pool");
            store.add_ineligible_document(document).await;
        }
    }
    Ok(store)
}

#[tokio::main]
async fn main() -> Result<()> {
    // (A) .env と logging（stdout は結果 JSON 専用なので stderr に出す）
    let _ = dotenvy::dotenv();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,volmatch_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    // (B) 設定: 環境変数 → CLI 引数で上書き
    let mut config = MatchingConfig::from_env().context("invalid matching configuration")?;
    if let Some(min_score) = args.min_score {
        config.min_score = min_score;
    }

    // (C) fixture をストアに読み込む
    let raw = std::fs::read_to_string(&args.fixture)
        .with_context(|| format!("failed to read {}", args.fixture.display()))?;
    let fixture: Fixture = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", args.fixture.display()))?;
    let store = Arc::new(load_store(fixture).await?);
    tracing::info!(fixture = %args.fixture.display(), "fixture loaded");

    // (D) マッチング実行
    let matcher = MatcherBuilder::new(store)
        .config(config)
        .build()
        .context("failed to build matcher")?;
    let results = matcher
        .run_matching(&RequestId::new(args.request_id))
        .await
        .context("matching failed, no changes made")?;

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
