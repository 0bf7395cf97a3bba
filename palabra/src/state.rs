//! Application-wide state (shared between endpoint functions).

use actix_web::web::Data;
use palabra_auth::JsonWebTokenManager;
use palabra_configuration::Configuration;
use palabra_core::password_hasher::{ArgonHasher, ArgonHasherError};
use palabra_import::images::FilesystemImageStore;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};
use thiserror::Error;

use crate::establish_database_connection_pool;



#[derive(Debug, Error)]
pub enum ApplicationStateError {
    #[error("failed to initialize password hasher")]
    FailedToInitializePasswordHasher {
        #[from]
        #[source]
        error: ArgonHasherError,
    },

    #[error("unable to connect to database")]
    UnableToConnectToDatabase {
        #[from]
        #[source]
        error: sqlx::Error,
    },
}



/// Central application state.
///
/// Use [`ApplicationState`] instead as it already wraps this struct
/// in [`actix_web::web::Data`].
///
/// If you need mutable state, opt for internal mutability as the struct
/// is internally essentially wrapped in an `Arc` by actix.
pub struct ApplicationStateInner {
    /// The configuration that this server was loaded with.
    configuration: Configuration,

    /// Password hasher helper struct.
    hasher: ArgonHasher,

    /// PostgreSQL database connection pool.
    database_pool: PgPool,

    /// Authentication token manager (JSON Web Token).
    jwt_manager: JsonWebTokenManager,

    /// Vocabulary image directory.
    image_store: FilesystemImageStore,
}

impl ApplicationStateInner {
    pub async fn new(configuration: Configuration) -> Result<Self, ApplicationStateError> {
        let database_pool = establish_database_connection_pool(&configuration.database).await?;

        Self::with_database_pool(configuration, database_pool)
    }

    /// Builds the state around an existing pool (which may be lazy).
    pub fn with_database_pool(
        configuration: Configuration,
        database_pool: PgPool,
    ) -> Result<Self, ApplicationStateError> {
        let hasher = ArgonHasher::new(&configuration.secrets.hash_salt)?;
        let jwt_manager = JsonWebTokenManager::new(&configuration.json_web_token.secret);
        let image_store = FilesystemImageStore::new(&configuration.media.images_directory_path);

        Ok(Self {
            configuration,
            hasher,
            database_pool,
            jwt_manager,
            image_store,
        })
    }

    pub async fn acquire_database_connection(
        &self,
    ) -> Result<PoolConnection<Postgres>, sqlx::Error> {
        self.database_pool.acquire().await
    }

    #[inline]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    #[inline]
    pub fn hasher(&self) -> &ArgonHasher {
        &self.hasher
    }

    #[inline]
    pub fn database_pool(&self) -> &PgPool {
        &self.database_pool
    }

    #[inline]
    pub fn jwt_manager(&self) -> &JsonWebTokenManager {
        &self.jwt_manager
    }

    #[inline]
    pub fn image_store(&self) -> &FilesystemImageStore {
        &self.image_store
    }
}


/// Central application state, wrapped in an actix [`Data`] wrapper.
///
/// This enables usage in endpoint functions.
/// See <https://actix.rs/docs/application#state> for more information.
///
/// # Examples
/// ```no_run
/// # use actix_web::get;
/// # use palabra::api::errors::EndpointResult;
/// # use palabra::state::ApplicationState;
/// #[get("")]
/// pub async fn some_endpoint(
///     state: ApplicationState,
/// ) -> EndpointResult {
///     // state.acquire_database_connection(), state.image_store(), ...
///     # todo!();
/// }
/// ```
pub type ApplicationState = Data<ApplicationStateInner>;
