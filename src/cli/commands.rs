//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - get: fetch a prompt by slug and project, optionally pinned to a version
//! - show: fetch the latest prompt by dotted `<project>.<prompt>` path

use clap::{Parser, Subcommand};
use promptvault::PromptPath;
use std::path::PathBuf;

/// PromptVault - fetch prompts from a Prompt Manager service
#[derive(Parser, Debug)]
#[command(name = "promptvault")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Service base URL (overrides config and PROMPTVAULT_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// API key (overrides config and PROMPTVAULT_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a prompt by slug and project
    Get {
        /// Prompt slug (e.g. research-manager)
        slug: String,

        /// Project slug the prompt belongs to
        #[arg(short, long)]
        project: String,

        /// Specific version (defaults to latest)
        #[arg(long)]
        version: Option<u32>,
    },

    /// Fetch the latest prompt by dotted path, e.g. agents_lextenso.research_manager
    Show {
        /// <project>.<prompt>, underscores become hyphens
        path: PromptPath,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["promptvault"]).is_err());
    }

    #[test]
    fn test_get_command() {
        let cli = Cli::try_parse_from(["promptvault", "get", "research-manager", "-p", "agents-lextenso"]).unwrap();
        match cli.command {
            Commands::Get { slug, project, version } => {
                assert_eq!(slug, "research-manager");
                assert_eq!(project, "agents-lextenso");
                assert!(version.is_none());
            }
            _ => panic!("Expected get command"),
        }
    }

    #[test]
    fn test_get_with_version() {
        let cli = Cli::try_parse_from([
            "promptvault",
            "get",
            "research-manager",
            "--project",
            "agents-lextenso",
            "--version",
            "2",
        ])
        .unwrap();
        match cli.command {
            Commands::Get { version, .. } => assert_eq!(version, Some(2)),
            _ => panic!("Expected get command"),
        }
    }

    #[test]
    fn test_get_requires_project() {
        assert!(Cli::try_parse_from(["promptvault", "get", "research-manager"]).is_err());
    }

    #[test]
    fn test_show_command_parses_path() {
        let cli = Cli::try_parse_from(["promptvault", "show", "agents_lextenso.research_manager"]).unwrap();
        match cli.command {
            Commands::Show { path } => {
                assert_eq!(path.namespace, "agents-lextenso");
                assert_eq!(path.slug, "research-manager");
            }
            _ => panic!("Expected show command"),
        }
    }

    #[test]
    fn test_show_rejects_bad_path() {
        assert!(Cli::try_parse_from(["promptvault", "show", "no_dot_here"]).is_err());
    }

    #[test]
    fn test_global_overrides() {
        let cli = Cli::try_parse_from([
            "promptvault",
            "show",
            "a.b",
            "--base-url",
            "https://prompts.example.com",
            "--api-key",
            "pk_test",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("https://prompts.example.com"));
        assert_eq!(cli.api_key.as_deref(), Some("pk_test"));
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_config_option() {
        let cli = Cli::try_parse_from(["promptvault", "-c", "/path/to/config.yml", "show", "a.b"]).unwrap();
        assert_eq!(cli.config.as_ref(), Some(&PathBuf::from("/path/to/config.yml")));
    }

    #[test]
    fn test_help_works() {
        Cli::command().debug_assert();
    }
}
