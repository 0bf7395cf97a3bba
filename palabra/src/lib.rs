//! The Palabra HTTP server: configuration loading, shared state,
//! authentication and the `/api/v1` endpoints.

use std::time::Duration;

use palabra_configuration::DatabaseConfiguration;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

pub mod api;
pub mod authentication;
pub mod cli;
pub mod logging;
pub mod state;


fn database_connect_options(database_configuration: &DatabaseConfiguration) -> PgConnectOptions {
    let mut connection_options = PgConnectOptions::new_without_pgpass()
        .application_name(&format!(
            "palabra-backend_v{}",
            env!("CARGO_PKG_VERSION")
        ))
        .host(&database_configuration.host)
        .port(database_configuration.port)
        .username(&database_configuration.username)
        .database(&database_configuration.database_name);

    if let Some(password) = &database_configuration.password {
        connection_options = connection_options.password(password.as_str());
    }

    connection_options
}

fn database_pool_options() -> PgPoolOptions {
    PgPoolOptions::new()
        .idle_timeout(Some(Duration::from_secs(60 * 20)))
        .max_lifetime(Some(Duration::from_secs(60 * 60)))
        .min_connections(1)
        .max_connections(10)
        .test_before_acquire(true)
}


pub async fn establish_database_connection_pool(
    database_configuration: &DatabaseConfiguration,
) -> Result<PgPool, sqlx::Error> {
    database_pool_options()
        .connect_with(database_connect_options(database_configuration))
        .await
}

/// Like [`establish_database_connection_pool`], but connections are only opened
/// once something first acquires one.
pub fn establish_lazy_database_connection_pool(
    database_configuration: &DatabaseConfiguration,
) -> PgPool {
    database_pool_options()
        .min_connections(0)
        .connect_lazy_with(database_connect_options(database_configuration))
}
