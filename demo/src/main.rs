//! fabriclite — Simulated Ledger Demo CLI
//!
//! Drives the `FabricService` facade through the full contract lifecycle
//! against the in-memory ledger: connect, create, update, query, audit
//! trail, network status.
//!
//! Usage:
//!   cargo run -p demo -- lifecycle
//!   cargo run -p demo -- lifecycle --fast
//!   cargo run -p demo -- status
//!   cargo run -p demo -- suggest-id
//!   cargo run -p demo -- --config fabriclite.toml lifecycle

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fabriclite_contracts::{
    error::FabricResult,
    network::NetworkStatus,
    record::{ContractDraft, ContractUpdate},
};
use fabriclite_service::{FabricService, LatencyConfig, ServiceConfig};

// ── CLI definition ────────────────────────────────────────────────────────────

/// fabriclite — simulated blockchain ledger for government contracts.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "fabriclite simulated ledger demo",
    long_about = "Runs the fabriclite contract lifecycle against the in-memory\n\
                  simulated ledger: connect, create, update, query, audit trail,\n\
                  and network status."
)]
struct Cli {
    /// Optional TOML config file (network profile + latency settings).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Zero out all simulated latency.
    #[arg(long, global = true)]
    fast: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Full lifecycle: create a contract, update it, read back the record
    /// and its audit trail.
    Lifecycle,
    /// Connect and print one network health snapshot.
    Status,
    /// Print a suggested contract id (HĐ-{year}-{sequence}).
    SuggestId,
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    // Structured logging; set RUST_LOG=debug for executor-level detail.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = run(cli).await;
    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> FabricResult<()> {
    let mut config = match &cli.config {
        Some(path) => ServiceConfig::from_file(path)?,
        None => ServiceConfig::default(),
    };
    if cli.fast {
        config.latency = LatencyConfig::zero();
    }

    print_banner(&config);

    let service = FabricService::new(config);

    match cli.command {
        Command::Lifecycle => run_lifecycle(&service).await,
        Command::Status => run_status(&service).await,
        Command::SuggestId => {
            println!("Suggested contract id: {}", service.generate_contract_id());
            Ok(())
        }
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

async fn run_lifecycle(service: &FabricService) -> FabricResult<()> {
    println!("[1] Connecting to simulated network...");
    service.initialize().await?;

    let contract_id = service.generate_contract_id();
    println!("[2] Creating contract {}...", contract_id);
    let created = service
        .create_contract(ContractDraft {
            id: contract_id.clone(),
            title: "Road maintenance package".to_string(),
            contractor: "ABC Construction".to_string(),
            value: 1_000_000.0,
            start_date: chrono::Utc::now().date_naive(),
            end_date: chrono::Utc::now().date_naive() + chrono::Days::new(365),
            status: "active".to_string(),
            created_by: "admin".to_string(),
        })
        .await?;
    println!(
        "    committed: tx {} in block {}",
        FabricService::format_tx_hash(&created.tx_id),
        created.block_number
    );

    println!("[3] Marking the contract completed...");
    let updated = service
        .update_contract(
            &contract_id,
            ContractUpdate {
                status: Some("completed".to_string()),
                ..Default::default()
            },
        )
        .await?;
    println!(
        "    committed: tx {} in block {}",
        FabricService::format_tx_hash(&updated.tx_id),
        updated.block_number
    );

    println!("[4] Reading the record back...");
    if let Some(record) = service.get_contract(&contract_id).await? {
        println!("    {}", serde_json::to_string_pretty(&record).unwrap_or_default());
    }

    println!("[5] Audit trail for {}:", contract_id);
    for log in service.get_audit_logs(Some(&contract_id)).await? {
        println!(
            "    {}  {}  by {}  (tx {})",
            log.created_at.format("%H:%M:%S%.3f"),
            log.action,
            log.user_id,
            FabricService::format_tx_hash(&log.tx_id)
        );
    }

    println!("[6] Network status:");
    print_status(service.get_network_status());

    service.disconnect();
    println!("Lifecycle complete.");
    Ok(())
}

async fn run_status(service: &FabricService) -> FabricResult<()> {
    service.initialize().await?;
    print_status(service.get_network_status());
    Ok(())
}

fn print_status(status: NetworkStatus) {
    match status {
        NetworkStatus::Connected(info) => {
            println!("    connected: block height {}", info.block_height);
            println!(
                "    peers {}, channels {}, chaincodes {}",
                info.peers, info.channels, info.chaincodes
            );
            println!(
                "    health {:.1}%, throughput {} tx/s",
                info.network_health, info.transaction_throughput
            );
        }
        NetworkStatus::Disconnected(outage) => {
            println!("    disconnected: {}", outage.error);
        }
    }
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner(config: &ServiceConfig) {
    println!();
    println!("fabriclite — Simulated Contract Ledger");
    println!("======================================");
    println!("network:   {}", config.network.network_name);
    println!("channel:   {}", config.network.channel_name);
    println!("chaincode: {}", config.network.chaincode_name);
    println!();
}
