use actix_web::{web, HttpServer};
use clap::Parser;
use miette::{Context, IntoDiagnostic, Result};
use palabra::api::{api_router, json_extractor_config};
use palabra::cli::CLIArgs;
use palabra::logging::initialize_tracing;
use palabra::state::ApplicationStateInner;
use palabra_configuration::Configuration;
use tracing::info;



#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments.
    let arguments = CLIArgs::parse();

    // Load configuration.
    let configuration = match arguments.configuration_file_path.as_ref() {
        Some(path) => {
            println!("Loading configuration: {}", path.display());
            Configuration::load_from_path(path)
        }
        None => {
            println!("Loading configuration at default path.");
            Configuration::load_from_default_path()
        }
    }
    .into_diagnostic()
    .wrap_err("Failed to load configuration file.")?;


    configuration
        .base_paths
        .create_base_data_directory_if_missing()
        .into_diagnostic()
        .wrap_err("Failed to create base data directory.")?;

    configuration
        .logging
        .create_log_file_output_directory_if_missing()
        .into_diagnostic()
        .wrap_err("Failed to create log file output directory.")?;

    configuration
        .media
        .create_images_directory_if_missing()
        .into_diagnostic()
        .wrap_err("Failed to create vocabulary images directory.")?;


    let guard = initialize_tracing(
        configuration.logging.console_output_level_filter(),
        configuration.logging.log_file_output_level_filter(),
        &configuration.logging.log_file_output_directory,
        "palabra.log",
    )
    .wrap_err("Failed to initialize tracing.")?;

    info!(
        file_path = %configuration.configuration_file_path.display(),
        "Configuration loaded."
    );


    // Initialize database connection and other static structs.
    let state = ApplicationStateInner::new(configuration.clone())
        .await
        .into_diagnostic()
        .wrap_err("Failed to initialize application state.")?;

    if arguments.apply_pending_migrations {
        info!("Applying pending database migrations.");

        palabra_database::MIGRATOR
            .run(state.database_pool())
            .await
            .into_diagnostic()
            .wrap_err("Failed to apply pending database migrations.")?;
    }

    let state = web::Data::new(state);


    // Initialize and start the actix HTTP server.
    #[rustfmt::skip]
    let server = HttpServer::new(move || {
        // FIXME Modify permissive CORS to something more safe in production.
        let cors = actix_cors::Cors::permissive().expose_headers(vec![
            "Date",
            "Content-Type",
            "Content-Length",
        ]);

        actix_web::App::new()
            .wrap(actix_web::middleware::NormalizePath::trim())
            .wrap(cors)
            .wrap(tracing_actix_web::TracingLogger::default())
            .app_data(json_extractor_config())
            .app_data(state.clone())
            .service(api_router())
    })
        .bind(configuration.http.bind_address())
        .into_diagnostic()
        .wrap_err("Failed to set up actix HTTP server.")?;

    info!(
        host = configuration.http.host.as_str(),
        port = configuration.http.port,
        "HTTP server initialized and running."
    );

    // Run HTTP server until stopped.
    server
        .run()
        .await
        .into_diagnostic()
        .wrap_err("Errored while running actix HTTP server.")?;


    drop(guard);

    Ok(())
}
