// src/config.rs
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::AppError;
use crate::export::ExportKind;
use crate::types::{BaseUrl, BuildingId, SessionCookie};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about = "Browse scraped real-estate listings", long_about = None)]
pub struct CommandLineInput {
    /// Base URL of the listings API (e.g., "http://localhost:8000/api")
    #[arg(long, global = true, env = "LISTINGS_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Session cookie sent with every request ("name=value")
    #[arg(long, global = true, env = "LISTINGS_SESSION_COOKIE", hide_env_values = true)]
    pub session_cookie: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every building as a card
    Buildings {
        /// Print the raw records as JSON instead of cards
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show the full detail of one building
    Show {
        /// Building ID
        id: String,
    },
    /// Show or edit the cart
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
    /// Download a CSV export
    Export(ExportArgs),
    /// Manage scraping sources
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add a building to the cart
    Add { id: String },
    /// Remove a building from the cart
    Remove { id: String },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ExportArgs {
    /// What to export
    #[arg(value_enum)]
    pub kind: ExportKind,

    /// Directory the CSV is saved into (defaults to the current directory)
    #[arg(short = 'o', long)]
    pub output_dir: Option<PathBuf>,

    /// Write the CSV to stdout instead of a file
    #[arg(long, default_value_t = false, conflicts_with = "output_dir")]
    pub stdout: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    /// List configured search links
    Links,
    /// List supported source websites
    Sources,
    /// Add a search link
    Add {
        /// Search results URL
        #[arg(long)]
        url: String,
        /// Source website the URL belongs to
        #[arg(long)]
        source: String,
    },
}

/// Validated transport configuration, injected into the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: BaseUrl,
    pub session_cookie: Option<SessionCookie>,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Resolves the client configuration from CLI input (flags or their
    /// environment fallbacks).
    pub fn resolve(cli: &CommandLineInput) -> Result<Self, AppError> {
        let base_url = BaseUrl::parse(&cli.base_url)?;

        let session_cookie = cli
            .session_cookie
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .map(SessionCookie::new)
            .transpose()?;

        if cli.timeout == 0 {
            return Err(AppError::MissingConfiguration(
                "--timeout must be at least 1 second".to_string(),
            ));
        }

        Ok(ClientConfig {
            base_url,
            session_cookie,
            timeout: Duration::from_secs(cli.timeout),
        })
    }

    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            session_cookie: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Parses a user-typed building ID, for the `show` and `cart` commands.
pub fn parse_building_id(input: &str) -> Result<BuildingId, AppError> {
    Ok(BuildingId::parse(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CommandLineInput {
        let mut argv = vec!["realestate-browser"];
        argv.extend_from_slice(args);
        CommandLineInput::try_parse_from(argv).unwrap()
    }

    #[test]
    fn global_options_resolve_into_client_config() {
        let cli = parse(&[
            "--base-url",
            "https://listings.example/api/",
            "--session-cookie",
            "sessionid=abc",
            "--timeout",
            "5",
            "cart",
        ]);
        let config = ClientConfig::resolve(&cli).unwrap();
        assert_eq!(config.base_url.as_str(), "https://listings.example/api");
        assert_eq!(config.session_cookie.unwrap().as_str(), "sessionid=abc");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(cli.command, Command::Cart { action: None });
    }

    #[test]
    fn cart_subcommands() {
        let cli = parse(&["cart", "add", "42"]);
        assert_eq!(
            cli.command,
            Command::Cart {
                action: Some(CartAction::Add { id: "42".into() })
            }
        );
    }

    #[test]
    fn export_kind_and_destination() {
        let cli = parse(&["export", "cart", "-o", "out"]);
        assert_eq!(
            cli.command,
            Command::Export(ExportArgs {
                kind: ExportKind::Cart,
                output_dir: Some(PathBuf::from("out")),
                stdout: false,
            })
        );

        let err = CommandLineInput::try_parse_from([
            "realestate-browser",
            "export",
            "buildings",
            "-o",
            "out",
            "--stdout",
        ]);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let cli = parse(&["--base-url", "ftp://nope", "buildings"]);
        assert!(matches!(
            ClientConfig::resolve(&cli),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let cli = parse(&["--timeout", "0", "buildings"]);
        assert!(ClientConfig::resolve(&cli).is_err());
    }

    #[test]
    fn building_ids_must_be_integers() {
        assert_eq!(parse_building_id(" 42 ").unwrap(), BuildingId::new(42));
        assert!(parse_building_id("abc").is_err());
    }
}
