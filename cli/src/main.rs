//! CLI entrypoint for callerid
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use callerid_application::{
    LookupProgressNotifier, LookupProvider, SearchPhoneNumberUseCase, SubmitLookupUseCase,
};
use callerid_domain::{LookupSession, VALIDATION_MESSAGE, regions};
use callerid_infrastructure::{
    ConfigLoader, CountryDirectory, FileConfig, HttpLookupApi, HttpLookupProvider,
};
use callerid_presentation::{
    AppState, Cli, Command, ConsoleFormatter, OutputFormat, OutputFormatter, ProgressReporter,
    SimpleProgress, build_router,
};
use clap::{CommandFactory, Parser};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    }
    .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(Command::Serve { port }) => serve(config, port, cli.verbose).await,
        Some(Command::Lookup {
            country_code,
            phone_number,
            gateway,
            output,
            quiet,
        }) => {
            init_logging(cli.verbose, None);
            lookup(config, country_code, phone_number, gateway, output, quiet).await
        }
        Some(Command::Countries) => {
            for region in regions() {
                println!("{}  {}", region.code, region.name);
            }
            Ok(ExitCode::SUCCESS)
        }
        None => {
            Cli::command().print_help()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Initialize logging based on verbosity level, optionally mirrored to a daily log file
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "callerid.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(file_layer)
        .init();

    guard
}

async fn serve(mut config: FileConfig, port: Option<u16>, verbose: u8) -> Result<ExitCode> {
    if let Some(port) = port {
        config.server.port = port;
    }
    // Keeps the file writer flushing until shutdown
    let _log_guard = init_logging(verbose.max(1), config.server.log_dir.as_deref());

    let gateway_config = config.to_gateway_config()?;

    // === Dependency Injection ===
    let directory = match &config.provider.countries_file {
        Some(path) => CountryDirectory::load(path)?,
        None => {
            warn!("provider.countries_file is not set; countryDetails will be null");
            CountryDirectory::empty()
        }
    };
    info!("Loaded {} country entries", directory.len());

    let provider: Arc<dyn LookupProvider> = Arc::new(HttpLookupProvider::new(
        config.provider.base_url.clone(),
        Arc::new(directory),
    )?);
    let search = SearchPhoneNumberUseCase::new(provider, &gateway_config);
    let app = build_router(AppState::new(Arc::new(search)));

    let address = gateway_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Server is running on port {}", gateway_config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(ExitCode::SUCCESS)
}

async fn lookup(
    mut config: FileConfig,
    country_code: String,
    phone_number: String,
    gateway: Option<String>,
    output: OutputFormat,
    quiet: bool,
) -> Result<ExitCode> {
    if let Some(url) = gateway {
        config.client.gateway_url = url;
    }
    let client_config = config.to_client_config()?;

    let api = Arc::new(HttpLookupApi::new(&client_config)?);
    let use_case = SubmitLookupUseCase::new(api);
    let mut session = LookupSession::with_draft(country_code, phone_number);

    let show_progress = !quiet && client_config.show_progress && output == OutputFormat::Full;
    let progress: Option<Box<dyn LookupProgressNotifier>> = if !show_progress {
        None
    } else if std::io::stderr().is_terminal() {
        Some(Box::new(ProgressReporter::new()))
    } else {
        Some(Box::new(SimpleProgress))
    };
    let submitted = match &progress {
        Some(progress) => {
            use_case
                .execute_with_progress(&mut session, &**progress)
                .await
        }
        None => use_case.execute(&mut session).await,
    };

    if submitted.is_err() {
        let hint = session.validation_message().unwrap_or(VALIDATION_MESSAGE);
        eprintln!("{}", ConsoleFormatter::format_validation(hint));
        return Ok(ExitCode::FAILURE);
    }

    if let Some(message) = session.error_message() {
        eprintln!("{}", ConsoleFormatter::format_error(message));
        return Ok(ExitCode::FAILURE);
    }

    let Some(result) = session.result() else {
        return Ok(ExitCode::FAILURE);
    };

    let formatter: &dyn OutputFormatter = &ConsoleFormatter;
    let rendered = match output {
        OutputFormat::Full => formatter.format(result),
        OutputFormat::Json => formatter.format_json(result),
    };
    println!("{}", rendered);

    Ok(ExitCode::SUCCESS)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
