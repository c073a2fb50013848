//! CLI command implementations
//!
//! Commands run against the bundled sample dataset with in-memory stores;
//! a deployment wires real implementations of the same traits and starts
//! the server from its own binary.

use std::sync::Arc;

use chrono::Utc;

use crate::attribute::PoolBuilder;
use crate::cache::InMemoryCacheStore;
use crate::dataset::{sample_dataset, Dataset};
use crate::http_server::{GridState, HttpServer, HttpServerConfig, TemplateState};
use crate::resolver::{GridResolver, ResolveOptions};
use crate::template::{InMemoryTemplateStore, TemplateService};
use crate::validator::GridValidator;

use super::args::Command;
use super::errors::CliResult;

struct Services {
    resolver: GridResolver,
    templates: TemplateService,
}

fn wire_services() -> Services {
    let dataset: Arc<dyn Dataset> = Arc::new(sample_dataset());
    let cache = Arc::new(InMemoryCacheStore::new());
    let template_store = Arc::new(InMemoryTemplateStore::new());

    let resolver = GridResolver::new(
        Arc::clone(&dataset),
        cache.clone(),
        template_store.clone(),
        PoolBuilder::new(),
        GridValidator::new(Arc::clone(&dataset)),
    );
    let templates = TemplateService::new(
        template_store,
        cache,
        GridValidator::new(dataset),
    );
    Services {
        resolver,
        templates,
    }
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    match command {
        Command::Serve { host, port } => runtime.block_on(serve(host, port)),
        Command::Generate {
            date,
            seed,
            force_refresh,
            skip_validation,
        } => runtime.block_on(generate(date, seed, force_refresh, skip_validation)),
        Command::Suggest { seed } => runtime.block_on(suggest(seed)),
    }
}

async fn serve(host: String, port: u16) -> CliResult<()> {
    let services = wire_services();
    let server = HttpServer::new(
        HttpServerConfig::with_addr(host, port),
        Arc::new(GridState::new(services.resolver)),
        Arc::new(TemplateState::new(services.templates)),
    );
    eprintln!("matchgrid listening on {}", server.socket_addr());
    Ok(server.start().await?)
}

async fn generate(
    date: Option<chrono::NaiveDate>,
    seed: Option<u64>,
    force_refresh: bool,
    skip_validation: bool,
) -> CliResult<()> {
    let services = wire_services();
    let date = date.unwrap_or_else(|| Utc::now().date_naive());
    let payload = services
        .resolver
        .resolve(
            date,
            ResolveOptions {
                force_refresh,
                skip_validation,
                seed,
            },
        )
        .await?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

async fn suggest(seed: Option<u64>) -> CliResult<()> {
    let services = wire_services();
    let seed = seed.unwrap_or_else(rand::random);
    let suggestion = services.resolver.suggest(seed).await?;
    println!("{}", serde_json::to_string_pretty(&suggestion)?);
    Ok(())
}
