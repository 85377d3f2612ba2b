//! # CLI Layer
//!
//! This module is **one possible client** for textdesk, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption (or JSON with `--json`)
//!
//! Exit codes come from `TextdeskError::exit_code` in `main.rs`, so validation,
//! not-found, bad-language, illegal-transition and internal failures are all
//! distinguishable by scripts.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data directory, loads config, builds the API
//! - `handle_*()`: Per-command handlers that call the API and format output

use super::print::{
    print_counts, print_frequent_word, print_json, print_listing, print_messages, print_text,
};
use super::setup::{Cli, Commands, ContentArgs};
use clap::Parser;
use directories::ProjectDirs;
use textdesk::api::{CmdResult, ConfigAction, TextdeskApi};
use textdesk::config::TextdeskConfig;
use textdesk::error::{Result, TextdeskError};
use textdesk::model::ContentInput;
use textdesk::store::fs::FileStore;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DATA_DIR_ENV: &str = "TEXTDESK_DATA_DIR";

struct AppContext {
    api: TextdeskApi<FileStore>,
    config: TextdeskConfig,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Create { content }) => handle_create(&mut ctx, content),
        Some(Commands::Get { id }) => handle_get(&ctx, &id),
        Some(Commands::List { page, limit }) => handle_list(&ctx, page, limit),
        Some(Commands::Update { id, content }) => handle_update(&mut ctx, &id, content),
        Some(Commands::Count {
            id,
            language,
            breakdown,
        }) => handle_count(&ctx, &id, language, breakdown),
        Some(Commands::Frequent) => handle_frequent(&ctx),
        Some(Commands::Submit { id }) => {
            let result = ctx.api.submit(&id)?;
            print_affected(&ctx, &result)
        }
        Some(Commands::Reject { id }) => {
            let result = ctx.api.reject(&id)?;
            print_affected(&ctx, &result)
        }
        Some(Commands::Approve { id }) => {
            let result = ctx.api.approve(&id)?;
            print_affected(&ctx, &result)
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, 1, None),
    }
}

fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "textdesk", "textdesk")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TextdeskError::Store("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = TextdeskConfig::load(&data_dir)?;
    debug!(data_dir = %data_dir.display(), default_limit = config.default_limit, "context ready");

    let store = FileStore::new(data_dir.clone());
    Ok(AppContext {
        api: TextdeskApi::new(store, data_dir),
        config,
        json: cli.json,
    })
}

fn content_input(args: ContentArgs) -> ContentInput {
    ContentInput {
        ar: args.ar,
        fr: args.fr,
        en: args.en,
    }
}

fn print_affected(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if ctx.json {
        if let Some(text) = result.affected_texts.first() {
            print_json(text)?;
        }
        return Ok(());
    }
    for text in &result.affected_texts {
        print_text(text);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_create(ctx: &mut AppContext, content: ContentArgs) -> Result<()> {
    let result = ctx.api.create_resource(content_input(content))?;
    print_affected(ctx, &result)
}

fn handle_get(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.get_resource(id)?;
    print_affected(ctx, &result)
}

fn handle_list(ctx: &AppContext, page: usize, limit: Option<usize>) -> Result<()> {
    let limit = limit.unwrap_or(ctx.config.default_limit);
    let result = ctx.api.list_resources(page, limit)?;
    let listing = result.listing.unwrap_or_default();
    if ctx.json {
        return print_json(&listing);
    }
    print_listing(&listing);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: &str, content: ContentArgs) -> Result<()> {
    let input = content_input(content);
    let result = if input.is_empty() {
        ctx.api.update_content(id, None)?
    } else {
        ctx.api.patch_content(id, input)?
    };
    print_affected(ctx, &result)
}

fn handle_count(
    ctx: &AppContext,
    id: &str,
    language: Option<String>,
    breakdown: bool,
) -> Result<()> {
    let result = match (&language, breakdown) {
        (Some(lang), _) => ctx.api.word_count_for_language(id, lang)?,
        (None, true) => ctx.api.word_count_breakdown(id)?,
        (None, false) => ctx.api.word_count_total(id)?,
    };
    let total = result.word_count.unwrap_or_default();

    if ctx.json {
        return if breakdown {
            print_json(&result.word_counts)
        } else {
            print_json(&total)
        };
    }
    print_counts(total, &result.word_counts);
    Ok(())
}

fn handle_frequent(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.most_frequent_word()?;
    if ctx.json {
        // An empty corpus prints an empty array, a winner prints a one-element array.
        let words: Vec<_> = result.frequent_word.iter().collect();
        return print_json(&words);
    }
    if let Some(word) = &result.frequent_word {
        print_frequent_word(word);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if ctx.json {
        if let Some(config) = &result.config {
            return print_json(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
