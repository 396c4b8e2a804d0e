//! `client-ledger` is the command-line front end for the client store.
//!
//! Reads `config/default.yaml`, an optional `config/{APP_ENV}.yaml` and
//! `APP_*` environment variables, then runs a single command and prints the
//! result as JSON.

use std::env;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Parser, Subcommand};
use config::Config;
use dotenvy::dotenv;
use serde::Serialize;
use thiserror::Error;

use client_ledger::db::{establish_connection_pool, run_pending_migrations};
use client_ledger::derivation::{SortKey, StatusFilter};
use client_ledger::dto::client::ClientListQuery;
use client_ledger::forms::client::{AddClientForm, EditClientForm};
use client_ledger::models::config::AppConfig;
use client_ledger::repository::DieselRepository;
use client_ledger::services::{ServiceError, client as client_service, dashboard};

#[derive(Parser, Debug)]
#[command(name = "client-ledger", about = "Track clients, payments and follow-ups")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Totals plus overdue and due-soon panels.
    Dashboard,
    /// List clients with optional search, status filter and ordering.
    List {
        /// Matches name and email case-insensitively, phone literally.
        #[arg(short, long)]
        search: Option<String>,
        /// all, overdue, due-soon or upcoming.
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        /// name, amount or next-contact.
        #[arg(long, default_value = "name")]
        sort: SortKey,
    },
    /// Show a single client.
    Show { id: String },
    /// Add a client from a JSON document (`-` reads stdin).
    Add { input: PathBuf },
    /// Merge the fields of a JSON document into a client (`-` reads stdin).
    Update { id: String, input: PathBuf },
    /// Delete a client.
    Delete { id: String },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn read_input(path: &Path) -> Result<String, std::io::Error> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn run(command: Command, repo: &DieselRepository) -> Result<String, CliError> {
    let now = Utc::now().naive_utc();

    match command {
        Command::Dashboard => to_json(&dashboard::load_dashboard(repo, now)?),
        Command::List {
            search,
            status,
            sort,
        } => {
            let query = ClientListQuery {
                search,
                status,
                sort,
            };
            to_json(&client_service::load_client_list(repo, &query, now)?)
        }
        Command::Show { id } => to_json(&client_service::get_client(repo, &id)?),
        Command::Add { input } => {
            let form: AddClientForm = serde_json::from_str(&read_input(&input)?)?;
            to_json(&client_service::add_client(repo, form)?)
        }
        Command::Update { id, input } => {
            let form: EditClientForm = serde_json::from_str(&read_input(&input)?)?;
            to_json(&client_service::update_client(repo, &id, form)?)
        }
        Command::Delete { id } => {
            client_service::delete_client(repo, &id)?;
            to_json(&serde_json::json!({ "deleted": id }))
        }
    }
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default").required(false))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {}", err);
            std::process::exit(1);
        }
    };

    let app_config = match settings.try_deserialize::<AppConfig>() {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading app config: {}", err);
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&app_config.database_url) {
        Ok(pool) => pool,
        Err(err) => {
            log::error!("Failed to establish database connection: {err}");
            std::process::exit(1);
        }
    };

    if app_config.run_migrations {
        if let Err(err) = run_pending_migrations(&pool) {
            log::error!("{err}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);

    match run(cli.command, &repo) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }
}
