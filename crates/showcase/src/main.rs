// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Showcase - operator CLI for the site admin.
//!
//! Every subcommand drives the admin core against the configured backend
//! and reports through the console view.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod backend;
mod commands;
mod console;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use showcase_admin::Admin;
use showcase_config::model::ShowcaseConfig;
use showcase_core::{EntityKind, ShowcaseError};
use showcase_media::ImageIntake;

use crate::console::ConsoleView;

/// Showcase - manage the portfolio site's content.
#[derive(Parser, Debug)]
#[command(name = "showcase", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    /// Answer yes to confirmation prompts.
    #[arg(long, short = 'y', global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Show backend health, dashboard counts, and recent activity.
    Status {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the records of one entity kind.
    List {
        entity: EntityKind,
        /// Print the list as an HTML table.
        #[arg(long)]
        html: bool,
    },
    /// Print one record as JSON.
    Show { entity: EntityKind, id: String },
    /// Create a record.
    Add {
        entity: EntityKind,
        /// Field assignment, `name=value`. Repeatable.
        #[arg(long = "set", value_name = "NAME=VALUE")]
        sets: Vec<String>,
        /// Image file or URL. Repeatable.
        #[arg(long = "image", value_name = "PATH|URL")]
        images: Vec<String>,
        /// Save as a draft (blog posts only).
        #[arg(long)]
        draft: bool,
    },
    /// Replace the fields of an existing record.
    Edit {
        entity: EntityKind,
        id: String,
        #[arg(long = "set", value_name = "NAME=VALUE")]
        sets: Vec<String>,
        #[arg(long = "image", value_name = "PATH|URL")]
        images: Vec<String>,
        /// Drop the record's current images.
        #[arg(long)]
        clear_images: bool,
        #[arg(long)]
        draft: bool,
    },
    /// Delete a record.
    Delete { entity: EntityKind, id: String },
    /// Read or write a settings singleton.
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// List contact messages.
    Messages {
        /// Mark this message as read first.
        #[arg(long, value_name = "ID")]
        read: Option<String>,
    },
    /// Fill empty collections with the starter catalogue.
    Seed,
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    Get { name: String },
    Set {
        name: String,
        /// `name=value` pairs merged into the stored settings.
        #[arg(value_name = "NAME=VALUE")]
        pairs: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => showcase_config::load_and_validate_path(path),
        None => showcase_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            showcase_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.site.log_level);

    if let Err(e) = run(cli, &config).await {
        eprintln!("showcase: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &ShowcaseConfig) -> Result<(), ShowcaseError> {
    let store = backend::open(config).await?;
    let view = Arc::new(ConsoleView::new(!cli.plain, cli.yes));
    let admin = Admin::new(
        store.clone(),
        view,
        ImageIntake::new(config.media.clone()),
        config.dashboard.clone(),
    );

    let result = match cli.command {
        Commands::Status { json } => commands::status(&admin, config, json).await,
        Commands::List { entity, html } => commands::list(&admin, entity, html).await,
        Commands::Show { entity, id } => commands::show(&admin, entity, &id).await,
        Commands::Add {
            entity,
            sets,
            images,
            draft,
        } => commands::add(&admin, entity, &sets, &images, draft).await,
        Commands::Edit {
            entity,
            id,
            sets,
            images,
            clear_images,
            draft,
        } => {
            let edit = commands::EditArgs {
                sets: &sets,
                images: &images,
                clear_images,
                draft,
            };
            commands::edit(&admin, entity, &id, edit).await
        }
        Commands::Delete { entity, id } => commands::delete(&admin, entity, &id).await,
        Commands::Settings { action } => match action {
            SettingsAction::Get { name } => commands::settings_get(&admin, &name).await,
            SettingsAction::Set { name, pairs } => {
                commands::settings_set(&admin, &name, &pairs).await
            }
        },
        Commands::Messages { read } => commands::messages(&admin, read.as_deref()).await,
        Commands::Seed => commands::seed(&admin).await,
    };

    if let Err(e) = store.shutdown().await {
        tracing::warn!(error = %e, "backend shutdown failed");
    }
    result
}

/// Initialize the tracing subscriber with an env filter.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("showcase={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
