use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use assettrack_chaincode::config::ContractConfig;
use assettrack_chaincode::{host, AssetTrackingContract, Response};
use assettrack_ledger::MemoryLedger;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing (stderr; stdout carries responses) ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "assettrack_chaincode=debug,assettrack_ledger=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // --- Configuration ---
    let config = ContractConfig::from_env()?;
    tracing::info!(
        policy = ?config.validation_policy,
        snapshot = ?config.snapshot_path,
        seed_on_start = config.seed_on_start,
        "Loaded contract configuration"
    );

    // --- Ledger ---
    let mut ledger = match &config.snapshot_path {
        Some(path) if path.exists() => MemoryLedger::load_snapshot(path)?,
        _ => MemoryLedger::new(),
    };

    let contract = AssetTrackingContract::from_config(&config);

    if ledger.is_empty() && config.seed_on_start {
        if let Response::Failure(message) = contract.init(&mut ledger) {
            anyhow::bail!("Contract initialization failed: {message}");
        }
    }

    // --- Invocations ---
    let input: Box<dyn BufRead> = match std::env::args().nth(1) {
        Some(path) => Box::new(BufReader::new(
            File::open(&path).with_context(|| format!("cannot open invocation file {path}"))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let summary = host::run(&contract, &mut ledger, input, io::stdout().lock())?;
    tracing::info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        keys = ledger.len(),
        "Invocations processed"
    );

    if let Some(path) = &config.snapshot_path {
        ledger.save_snapshot(path)?;
    }

    Ok(())
}
