//! trisense-admin - Operator CLI for the TriSense sensor-data platform
//!
//! Scopes uploads to a competition, posts sensor data files to the backend's
//! modality-specific endpoints, tracks mapping coverage, and manages upload
//! batch history. Every operation is a single-shot request; nothing is
//! retried or queued.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use trisense_admin::client::ApiClient;
use trisense_admin::commands;
use trisense_common::{config, SensorKind};

/// Command-line arguments for trisense-admin
#[derive(Parser, Debug)]
#[command(name = "trisense-admin")]
#[command(about = "Operator CLI for the TriSense sensor-data platform")]
#[command(version)]
struct Cli {
    /// Backend API base URL (overrides TRISENSE_API_URL and config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Bearer token (overrides TRISENSE_TOKEN and stored credentials)
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Authenticate and store a bearer token in the config file
    Login {
        #[arg(long)]
        username: String,

        /// Prompted for interactively when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// List competitions available for scoping uploads
    Competitions,

    /// Upload sensor data files for a competition
    Upload {
        /// Sensor modality: skin-temperature, core-temperature, heart-rate,
        /// wbgt, mapping, or race-records
        kind: SensorKind,

        /// Competition id (see `competitions`)
        #[arg(long)]
        competition: String,

        /// Physical sensor id; required for heart-rate TCX uploads
        #[arg(long)]
        sensor_id: Option<String>,

        /// Data file(s); WBGT and mapping accept exactly one
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Mapping status and apply action
    Mapping {
        #[command(subcommand)]
        action: MappingAction,
    },

    /// Upload batch history
    Batches {
        #[command(subcommand)]
        action: BatchAction,
    },
}

#[derive(Subcommand, Debug)]
enum MappingAction {
    /// Show aggregate mapping counts and the unmapped-records breakdown
    Status {
        /// Competition id; omit for all competitions
        #[arg(long)]
        competition: Option<String>,
    },

    /// Bind sensor ids (and bib numbers) to user ids. Irreversible.
    Apply {
        #[arg(long)]
        competition: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum BatchAction {
    /// List upload batches for a competition
    List {
        #[arg(long)]
        competition: String,
    },

    /// Delete a batch and its derived sensor records
    Delete {
        batch_id: String,

        /// Competition id, used to refresh mapping status after deletion
        #[arg(long)]
        competition: Option<String>,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing before anything else
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trisense_admin=info,trisense_common=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let settings = config::resolve_settings(cli.api_url.as_deref(), cli.token.as_deref())
        .context("Failed to resolve configuration")?;

    let client = ApiClient::new(&settings.api_url, settings.token.clone())
        .context("Failed to construct API client")?;

    match cli.command {
        Command::Login { username, password } => {
            commands::login::run(&client, &username, password).await?;
        }

        Command::Competitions => {
            commands::competitions::run(&client).await?;
        }

        Command::Upload {
            kind,
            competition,
            sensor_id,
            files,
        } => {
            commands::upload::run(&client, kind, &competition, &files, sensor_id.as_deref())
                .await?;
        }

        Command::Mapping { action } => match action {
            MappingAction::Status { competition } => {
                commands::mapping::status(&client, competition.as_deref()).await?;
            }
            MappingAction::Apply { competition, yes } => {
                commands::mapping::apply(&client, &competition, |status| {
                    yes || commands::confirm(&format!(
                        "Apply {} mappings to competition {}? This cannot be undone.",
                        status.total_mappings, competition
                    ))
                    .unwrap_or(false)
                })
                .await?;
            }
        },

        Command::Batches { action } => match action {
            BatchAction::List { competition } => {
                commands::batches::list(&client, &competition).await?;
            }
            BatchAction::Delete {
                batch_id,
                competition,
                yes,
            } => {
                let confirmed = yes
                    || commands::confirm(&format!(
                        "Delete batch {} and all of its sensor records?",
                        batch_id
                    ))?;
                commands::batches::delete(&client, &batch_id, competition.as_deref(), confirmed)
                    .await?;
            }
        },
    }

    Ok(())
}
