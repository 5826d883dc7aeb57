// src/main.rs
use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use realestate_browser::config::{parse_building_id, CartAction, Command, SettingsAction};
use realestate_browser::formatting::{
    render_building_list, render_cart, render_detail, render_search_links, render_sources,
};
use realestate_browser::output::resolve_output_dir;
use realestate_browser::{
    export_csv, AppError, BuildingsView, CartState, CartSync, ClientConfig, CommandLineInput,
    ExportDestination, ListingHttpClient, ListingRepository, SettingsView, ViewScope,
};
use std::fs;
use std::process::ExitCode;
use std::sync::Arc;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("realestate_browser.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create log directory {}", parent.display()))?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)
        .with_context(|| format!("cannot open log file {}", log_file_path.display()))?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )
        .context("invalid logging configuration")?;

    log4rs::init_config(config).context("logger already initialized")?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Runs one command against the backend and prints its view.
async fn run(cli: CommandLineInput) -> Result<(), AppError> {
    let config = ClientConfig::resolve(&cli)?;
    log::debug!("Using backend {}", config.base_url);

    let repository: Arc<dyn ListingRepository> = Arc::new(ListingHttpClient::new(&config)?);
    let scope = ViewScope::new();

    let result = dispatch(cli.command, repository, scope.clone()).await;
    scope.close();
    result
}

async fn dispatch(
    command: Command,
    repository: Arc<dyn ListingRepository>,
    scope: ViewScope,
) -> Result<(), AppError> {
    match command {
        Command::Buildings { json } => {
            if json {
                let records = repository.list_buildings().await?;
                println!("{}", serde_json::to_string_pretty(&records)?);
                return Ok(());
            }
            let views = BuildingsView::new(repository, scope).load_list().await?;
            print!("{}", render_building_list(&views)?);
        }
        Command::Show { id } => {
            let id = parse_building_id(&id)?;
            match BuildingsView::new(repository, scope).load_detail(id).await? {
                Some(view) => print!("{}", render_detail(&view)?),
                None => println!("Building not found."),
            }
        }
        Command::Cart { action } => {
            let cart = CartSync::new(repository, scope);
            let state = match action {
                None => cart.load().await,
                Some(CartAction::Add { id }) => {
                    let id = parse_building_id(&id)?;
                    let state = cart.add(id).await?;
                    println!("✓ Added building {} to cart", id);
                    state
                }
                Some(CartAction::Remove { id }) => {
                    let id = parse_building_id(&id)?;
                    let state = cart.remove(id).await?;
                    println!("✓ Removed building {} from cart", id);
                    state
                }
            };
            print_cart(&state)?;
        }
        Command::Export(args) => {
            let destination = if args.stdout {
                ExportDestination::Stdout
            } else {
                ExportDestination::Directory(resolve_output_dir(args.output_dir.as_deref()))
            };
            let outcome = export_csv(repository.as_ref(), args.kind, destination).await?;
            if let Some(path) = outcome.path {
                println!(
                    "✓ Exported {} ({} bytes) to {}",
                    outcome.kind,
                    outcome.bytes,
                    path.display()
                );
            }
        }
        Command::Settings { action } => {
            let settings = SettingsView::new(repository, scope);
            match action {
                SettingsAction::Links => {
                    let snapshot = settings.load().await?;
                    print!("{}", render_search_links(&snapshot.links)?);
                }
                SettingsAction::Sources => {
                    let snapshot = settings.load().await?;
                    print!("{}", render_sources(&snapshot.sources)?);
                }
                SettingsAction::Add { url, source } => {
                    settings.load().await?;
                    let snapshot = settings.add(&url, &source).await?;
                    println!("✓ Search link added");
                    print!("{}", render_search_links(&snapshot.links)?);
                }
            }
        }
    }
    Ok(())
}

/// Prints a loaded cart; a failed reload becomes the command's error.
fn print_cart(state: &CartState) -> Result<(), AppError> {
    let views: Vec<_> = state
        .require_loaded()?
        .iter()
        .map(realestate_browser::CanonicalListingView::build)
        .collect();
    print!("{}", render_cart(&views)?);
    Ok(())
}

/// Maps an error to the message shown to the user.
fn user_message(err: &AppError) -> String {
    match err {
        AppError::NetworkFailure(e) if e.is_connect() => {
            format!("Could not reach the listings API: {}", e)
        }
        AppError::NetworkFailure(e) if e.is_timeout() => "The listings API timed out.".to_string(),
        other => other.to_string(),
    }
}

/// Reports a command failure to the user and picks the process exit code.
fn exit_code(result: &Result<(), AppError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            log::debug!("Command failed: {:?}", err);
            eprintln!("❌ {}", user_message(err));
            1
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let result = run(cli).await;
    Ok(ExitCode::from(exit_code(&result)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_cart_reload_fails_the_command() {
        let state = CartState::Failed("API error 502: Bad Gateway".to_string());
        let result = print_cart(&state);

        assert!(matches!(result, Err(AppError::CartUnavailable(ref m)) if m.contains("502")));
        assert_eq!(exit_code(&result), 1);
    }

    #[test]
    fn loaded_cart_succeeds() {
        let state = CartState::Loaded {
            items: Vec::new(),
            fetched_at: chrono::Utc::now(),
        };
        let result = print_cart(&state);
        assert!(result.is_ok());
        assert_eq!(exit_code(&result), 0);
    }

    #[test]
    fn cart_error_message_is_user_facing() {
        let err = AppError::CartUnavailable("API error 500: boom".to_string());
        assert_eq!(user_message(&err), "Could not load cart: API error 500: boom");
    }
}
