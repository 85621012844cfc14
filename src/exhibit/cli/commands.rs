//! # CLI Layer
//!
//! The only place that knows about terminal I/O, logging setup and exit
//! codes. Handlers call the [`ExhibitApi`] and render its `CmdResult`.
//!
//! ## Structure
//!
//! - `run()`: parses arguments, builds the context, dispatches
//! - `until_interrupted()`: Ctrl-C handling around the dispatched command
//! - `init_context()`: resolves the data dir, loads config, builds gateways
//! - `handle_*()`: per-command handlers

use super::render::{
    print_messages, render_config, render_detail, render_exhibition, render_gallery,
    render_listed,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use exhibit::api::{ConfigAction, ExhibitApi, ExhibitPaths};
use exhibit::config::ExhibitConfig;
use exhibit::error::{ExhibitError, Result};
use exhibit::gateway::cleveland::ClevelandClient;
use exhibit::gateway::http_client;
use exhibit::gateway::met::MetClient;
use exhibit::liveness::Liveness;
use exhibit::model::Source;
use exhibit::store::fs_backend::FsBackend;
use std::future::Future;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

const DATA_DIR_ENV: &str = "EXHIBIT_HOME";
const LOG_ENV: &str = "EXHIBIT_LOG";

struct AppContext {
    api: ExhibitApi<FsBackend>,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;
    let liveness = ctx.api.liveness();

    let (tx, mut interrupts) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if tx.send(()).is_err() {
                break;
            }
        }
    });

    until_interrupted(dispatch(&mut ctx, cli.command), &liveness, &mut interrupts).await
}

/// Drive `work` to completion while watching for Ctrl-C.
///
/// The first interrupt cancels `liveness` and keeps polling, so a pending
/// fetch settles and its view reports `Cancelled` without touching the store.
/// A second interrupt abandons the work.
async fn until_interrupted<F>(
    work: F,
    liveness: &Liveness,
    interrupts: &mut mpsc::UnboundedReceiver<()>,
) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    tokio::pin!(work);
    let mut interrupted = false;
    loop {
        tokio::select! {
            result = &mut work => return result,
            Some(()) = interrupts.recv() => {
                if interrupted {
                    return Err(ExhibitError::Cancelled);
                }
                tracing::debug!("interrupted, waiting for in-flight work to settle");
                liveness.cancel();
                interrupted = true;
            }
        }
    }
}

async fn dispatch(ctx: &mut AppContext, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Browse {
            source,
            page,
            search,
            filter,
            all_images,
        }) => handle_browse(ctx, source, page, search, filter, all_images).await,
        Some(Commands::Show { source, id }) => handle_show(ctx, source, id).await,
        Some(Commands::Add { source, id }) => handle_add(ctx, source, id).await,
        Some(Commands::Remove { id, source }) => handle_remove(ctx, id, source),
        Some(Commands::Exhibition { json }) => handle_exhibition(ctx, json),
        Some(Commands::Highlights { count }) => handle_highlights(ctx, count).await,
        Some(Commands::Clear) => handle_clear(ctx),
        Some(Commands::Config { key, value }) => handle_config(ctx, key, value),
        None => handle_exhibition(ctx, false),
    }
}

/// Logs go to stderr so stdout stays clean for `--json`.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "exhibit=debug,warn" } else { "warn" };
    let filter = [LOG_ENV, "RUST_LOG"]
        .iter()
        .find_map(|var| {
            std::env::var(var)
                .ok()
                .and_then(|directives| EnvFilter::try_new(directives).ok())
        })
        .unwrap_or_else(|| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("org", "exhibit", "exhibit")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            ExhibitError::Config("Could not determine a data directory, use --data-dir".into())
        })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = ExhibitConfig::load(&data_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "unreadable config, using defaults");
        ExhibitConfig::default()
    });
    tracing::debug!(data_dir = %data_dir.display(), ?config, "starting");

    let http = http_client(&config)?;
    let met = MetClient::new(http.clone(), &config.met_base_url);
    let cleveland = ClevelandClient::new(http, &config.cleveland_base_url);

    let api = ExhibitApi::new(
        FsBackend::new(data_dir.clone()),
        Box::new(met),
        Box::new(cleveland),
        config,
        ExhibitPaths { data_dir },
    );
    Ok(AppContext { api })
}

async fn handle_browse(
    ctx: &mut AppContext,
    source: Source,
    page: Option<u32>,
    search: Option<String>,
    filter: Option<String>,
    all_images: bool,
) -> Result<()> {
    let result = ctx
        .api
        .browse(source, page, search, filter.as_deref(), all_images)
        .await?;
    if let Some(page) = &result.gallery {
        print!("{}", render_gallery(source, page));
    }
    print_messages(&result.messages);
    Ok(())
}

async fn handle_show(ctx: &mut AppContext, source: Source, id: u64) -> Result<()> {
    let result = ctx.api.show(source, id).await?;
    if let Some(artwork) = &result.detail {
        print!("{}", render_detail(artwork));
    }
    print_messages(&result.messages);
    Ok(())
}

async fn handle_add(ctx: &mut AppContext, source: Source, id: u64) -> Result<()> {
    let result = ctx.api.add(source, id).await?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: u64, source: Option<Source>) -> Result<()> {
    let result = ctx.api.remove(id, source)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_exhibition(ctx: &mut AppContext, json: bool) -> Result<()> {
    let result = ctx.api.exhibition()?;
    let Some(exhibition) = &result.exhibition else {
        print_messages(&result.messages);
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(exhibition)?);
        return Ok(());
    }
    print!("{}", render_exhibition(exhibition));
    print_messages(&result.messages);
    Ok(())
}

async fn handle_highlights(ctx: &mut AppContext, count: usize) -> Result<()> {
    let result = ctx.api.highlights(count).await?;
    print!("{}", render_listed(&result.listed));
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if key.is_none() {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}
