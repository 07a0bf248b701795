//! Command-line front end for the JSON API client.
//!
//! Issues a single request against the configured backend and prints the
//! JSON result to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::Value;

use fetch_api::config::{apply_env_overrides, load_config, loader::process_env, validate_config};
use fetch_api::config::{ClientConfig, ConfigError};
use fetch_api::observability::init_logging;
use fetch_api::{ApiClient, ApiRequest, JsonMap, Method};

#[derive(Parser)]
#[command(name = "fetch-api")]
#[command(about = "Send one JSON request to the backend API", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(short = 'u', long)]
    base_url: Option<String>,

    /// Do not keep or send cookies
    #[arg(long)]
    no_credentials: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// GET a path
    Get { path: String },
    /// DELETE a path
    Delete { path: String },
    /// POST a JSON object to a path
    Post {
        path: String,
        #[arg(short, long)]
        data: Option<String>,
    },
    /// PUT a JSON object to a path
    Put {
        path: String,
        #[arg(short, long)]
        data: Option<String>,
    },
    /// PATCH a JSON object to a path
    Patch {
        path: String,
        #[arg(short, long)]
        data: Option<String>,
    },
    /// Send a request with any method
    Request {
        method: Method,
        path: String,
        #[arg(short, long)]
        data: Option<String>,
    },
}

impl Commands {
    fn into_parts(self) -> (Method, String, Option<String>) {
        match self {
            Commands::Get { path } => (Method::Get, path, None),
            Commands::Delete { path } => (Method::Delete, path, None),
            Commands::Post { path, data } => (Method::Post, path, data),
            Commands::Put { path, data } => (Method::Put, path, data),
            Commands::Patch { path, data } => (Method::Patch, path, data),
            Commands::Request { method, path, data } => (method, path, data),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(&cli)?;

    if let Err(e) = init_logging(&config.observability) {
        eprintln!("warning: logging not initialized: {}", e);
    }

    tracing::debug!(base_url = %config.api.base_url, "Configuration loaded");

    let (method, path, data) = cli.command.into_parts();
    let mut request = ApiRequest::new(path).method(method);
    if let Some(raw) = data {
        request = request.body(parse_data(&raw)?);
    }

    let client = ApiClient::from_config(&config)?;
    let value = client.send(request).await?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<ClientConfig, ConfigError> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };
    let mut config = apply_env_overrides(config, process_env)?;

    if let Some(url) = &cli.base_url {
        config.api.base_url = url.clone();
    }
    if cli.no_credentials {
        config.api.include_credentials = false;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn parse_data(raw: &str) -> Result<JsonMap, String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err("--data must be a JSON object".to_string()),
        Err(e) => Err(format!("--data is not valid JSON: {}", e)),
    }
}
