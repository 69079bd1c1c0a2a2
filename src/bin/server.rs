//! Scheduler Server Binary
//!
//! Seeds the store and starts the TCP listener.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use scheduler::network::Server;
use scheduler::store::Fixtures;
use scheduler::{Config, MemoryStore};
use tracing_subscriber::{fmt, EnvFilter};

/// Scheduler Server
#[derive(Parser, Debug)]
#[command(name = "scheduler-server")]
#[command(about = "Lecturer and subject lookup service")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value_t = Config::default().listen_addr)]
    listen: String,

    /// Directory with lecturers.json and subjects.json (built-in data if omitted)
    #[arg(short, long)]
    fixtures: Option<PathBuf>,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,scheduler=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("Scheduler Server v{}", scheduler::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    let mut builder = Config::builder().listen_addr(&args.listen);
    if let Some(dir) = &args.fixtures {
        tracing::info!("Fixtures directory: {}", dir.display());
        builder = builder.fixtures_dir(dir);
    }
    let config = builder.build();

    let store = match Fixtures::load(config.fixtures_dir.as_deref())
        .and_then(|fixtures| MemoryStore::from_fixtures(&fixtures))
    {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!("Failed to seed store: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Store ready: {} lecturers, {} subjects",
        store.lecturer_count(),
        store.subject_count()
    );

    let server = match Server::bind(config, store) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
