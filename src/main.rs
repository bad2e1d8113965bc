use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use promptvault::{PromptClient, PromptPath, PromptSource};

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

fn setup_logging(cli: &Cli, config: &Config) {
    let default_level = if cli.is_verbose() {
        "debug"
    } else {
        config.log_level.as_deref().unwrap_or("warn")
    };

    // RUST_LOG still wins when set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        eprintln!("{}", "Verbose mode enabled".yellow());
    }

    let client_config = config
        .client_config(cli.base_url.as_deref(), cli.api_key.as_deref())
        .context("Set --base-url/--api-key, PROMPTVAULT_BASE_URL/PROMPTVAULT_API_KEY, or a config file")?;
    let client = PromptClient::new(client_config).context("Failed to create HTTP client")?;

    let content = match &cli.command {
        Commands::Get { slug, project, version } => handle_get_command(&client, slug, project, *version, cli)?,
        Commands::Show { path } => handle_show_command(&client, path, cli)?,
    };

    println!("{}", content);
    Ok(())
}

fn handle_get_command(
    client: &PromptClient,
    slug: &str,
    project: &str,
    version: Option<u32>,
    cli: &Cli,
) -> Result<String> {
    info!("Fetching prompt: {} (project: {}, version: {:?})", slug, project, version);
    if cli.is_verbose() {
        eprintln!("{} {}/{}", "Fetching:".cyan(), project, slug);
    }

    client
        .get_prompt(slug, project, version)
        .context(format!("Failed to fetch '{}' from '{}'", slug, project))
}

fn handle_show_command(client: &PromptClient, path: &PromptPath, cli: &Cli) -> Result<String> {
    info!("Fetching prompt by path: {}", path);
    if cli.is_verbose() {
        eprintln!("{} {}", "Fetching:".cyan(), path);
    }

    client
        .namespace(&path.namespace)
        .prompt(&path.slug)
        .context(format!("Failed to fetch '{}'", path))
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration, environment overriding the file
    let config = Config::load(cli.config.as_ref())
        .context("Failed to load configuration")?
        .with_env();

    setup_logging(&cli, &config);
    info!("Starting with config from: {:?}", cli.config);

    if let Err(e) = run_application(&cli, &config) {
        eprintln!("{} {:#}", "Error:".red(), e);
        std::process::exit(1);
    }

    Ok(())
}
