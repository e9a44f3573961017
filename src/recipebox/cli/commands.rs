//! # CLI Layer
//!
//! This module is **one possible UI client** for recipebox. It is the only
//! place that knows about stdout/stderr, exit codes, the wall clock, or where
//! data lives on disk.
//!
//! ## Structure
//!
//! - `run()`: logging setup, context wiring, dispatch (called by `main.rs`)
//! - `init_context()`: resolves the data dir, config and catalog, builds the API
//! - `handle_*()`: per-command handlers that call the API and print rendered output
//!
//! A CLI invocation is a single event, so search text is applied with
//! `flush_search` instead of waiting out the debounce window.

use super::render::{render_messages, render_recipe_detail, render_recipe_list};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use recipebox::api::RecipeApi;
use recipebox::catalog::Catalog;
use recipebox::commands::{FilterKey, SortKey};
use recipebox::config::RecipeConfig;
use recipebox::error::Result;
use recipebox::store::fs::FileStore;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "RECIPEBOX_HOME";

struct AppContext {
    api: RecipeApi<FileStore>,
    use_color: Option<bool>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            filter,
            sort,
            search,
        }) => handle_list(&mut ctx, filter, sort, search),
        Some(Commands::Search { terms }) => handle_list(&mut ctx, None, None, Some(terms.join(" "))),
        Some(Commands::Fav { id }) => handle_fav(&mut ctx, id),
        Some(Commands::Favorites) => handle_list(&mut ctx, Some(FilterKey::Favorites), None, None),
        Some(Commands::View { id }) => handle_view(&ctx, id),
        None => handle_list(&mut ctx, None, None, None),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli);
    debug!(data_dir = %data_dir.display(), "resolved data dir");

    let config = RecipeConfig::load(&data_dir)?;
    let catalog_path = cli.catalog.clone().or_else(|| config.catalog_path(&data_dir));
    let catalog = match catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };

    let store = FileStore::new(data_dir);
    let api = RecipeApi::with_state(catalog, store, config.initial_state());

    Ok(AppContext {
        api,
        use_color: if cli.no_color { Some(false) } else { None },
    })
}

fn resolve_data_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.data_dir {
        return dir.clone();
    }
    if let Some(dir) = std::env::var_os(HOME_ENV) {
        return PathBuf::from(dir);
    }
    match ProjectDirs::from("com", "recipebox", "recipebox") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => PathBuf::from(".recipebox"),
    }
}

fn handle_list(
    ctx: &mut AppContext,
    filter: Option<FilterKey>,
    sort: Option<SortKey>,
    search: Option<String>,
) -> Result<()> {
    if let Some(filter) = filter {
        ctx.api.set_filter(filter);
    }
    if let Some(sort) = sort {
        ctx.api.set_sort(sort);
    }
    if let Some(search) = search {
        ctx.api.set_search_text(search, Instant::now());
        ctx.api.flush_search();
    }

    let output = render_recipe_list(ctx.api.listing(), ctx.use_color);
    println!("{}", output.trim_end());
    Ok(())
}

fn handle_fav(ctx: &mut AppContext, id: u32) -> Result<()> {
    let result = ctx.api.toggle_favorite(id);
    print_messages(&render_messages(&result.messages, ctx.use_color));
    Ok(())
}

fn handle_view(ctx: &AppContext, id: u32) -> Result<()> {
    let recipe = ctx.api.recipe(id)?;
    let output = render_recipe_detail(recipe, ctx.api.is_favorite(id), ctx.use_color);
    println!("{}", output.trim_end());
    Ok(())
}

fn print_messages(output: &str) {
    if !output.is_empty() {
        println!("{}", output.trim_end());
    }
}
