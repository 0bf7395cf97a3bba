use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

mod base_paths;
mod database;
mod http;
mod json_web_token;
mod logging;
mod media;
mod secrets;

pub use base_paths::*;
pub use database::*;
pub use http::*;
pub use json_web_token::*;
pub use logging::*;
pub use media::*;
pub use secrets::*;

use crate::traits::{Resolve, TryResolveWithContext};
use crate::utilities::get_default_configuration_file_path;
use crate::{ConfigurationLoadingError, ConfigurationResolutionError};



#[derive(Deserialize, Debug)]
pub(crate) struct UnresolvedConfiguration {
    base_paths: UnresolvedBasePathsConfiguration,

    logging: UnresolvedLoggingConfiguration,

    http: UnresolvedHttpConfiguration,

    database: UnresolvedDatabaseConfiguration,

    secrets: UnresolvedSecretsConfiguration,

    json_web_token: UnresolvedJsonWebTokenConfiguration,

    media: UnresolvedMediaConfiguration,
}


/// The entire Palabra backend configuration.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// This is the file path this [`Configuration`] instance was loaded from.
    pub configuration_file_path: PathBuf,

    pub base_paths: BasePathsConfiguration,

    /// Logging-related configuration.
    pub logging: LoggingConfiguration,

    /// Configuration related to the HTTP server.
    pub http: HttpConfiguration,

    /// Configuration related to the database.
    pub database: DatabaseConfiguration,

    /// Password-related configuration.
    pub secrets: SecretsConfiguration,

    /// Json Web Token-related configuration.
    pub json_web_token: JsonWebTokenConfiguration,

    /// Vocabulary images and upload limits.
    pub media: MediaConfiguration,
}



pub(crate) struct ConfigurationResolutionContext {
    configuration_file_path: PathBuf,
}


impl<'r> TryResolveWithContext<'r> for UnresolvedConfiguration {
    type Resolved = Configuration;
    type Context = ConfigurationResolutionContext;
    type Error = ConfigurationResolutionError;

    fn try_resolve_with_context(
        self,
        context: Self::Context,
    ) -> Result<Self::Resolved, Self::Error> {
        let base_paths = self.base_paths.resolve();
        let logging = self.logging.try_resolve_with_context(&base_paths)?;
        let http = self.http.resolve();
        let database = self.database.resolve();
        let secrets = self.secrets.resolve();
        let json_web_token = self.json_web_token.resolve();
        let media = self.media.try_resolve_with_context(&base_paths)?;

        Ok(Configuration {
            configuration_file_path: context.configuration_file_path,
            base_paths,
            logging,
            http,
            database,
            secrets,
            json_web_token,
            media,
        })
    }
}


impl Configuration {
    /// Parse and resolve configuration contents.
    /// `configuration_file_path` is only recorded, never read.
    pub fn load_from_str(
        configuration_string: &str,
        configuration_file_path: PathBuf,
    ) -> Result<Self, ConfigurationLoadingError> {
        let unresolved_configuration =
            toml::from_str::<UnresolvedConfiguration>(configuration_string)
                .map_err(|error| ConfigurationLoadingError::ParsingError { error })?;

        let resolved_configuration =
            unresolved_configuration.try_resolve_with_context(ConfigurationResolutionContext {
                configuration_file_path,
            })?;

        Ok(resolved_configuration)
    }

    /// Load the configuration from a specific file path.
    pub fn load_from_path<S: AsRef<Path>>(
        configuration_file_path: S,
    ) -> Result<Self, ConfigurationLoadingError> {
        let configuration_file_path = configuration_file_path.as_ref();

        let configuration_string = fs::read_to_string(configuration_file_path).map_err(|error| {
            ConfigurationLoadingError::UnableToReadConfigurationFile {
                path: configuration_file_path.to_path_buf(),
                error,
            }
        })?;

        let canonical_configuration_file_path = dunce::canonicalize(configuration_file_path)
            .unwrap_or_else(|_| configuration_file_path.to_path_buf());

        Self::load_from_str(
            &configuration_string,
            canonical_configuration_file_path,
        )
    }

    /// Load the configuration from the default path (`./data/configuration.toml`).
    pub fn load_from_default_path() -> Result<Self, ConfigurationLoadingError> {
        Configuration::load_from_path(get_default_configuration_file_path()?)
    }
}



#[cfg(test)]
mod test {
    use super::*;
    use crate::{LoggingConfigurationError, MediaConfigurationError};

    const SAMPLE_CONFIGURATION: &str = r#"
[base_paths]
base_data_directory_path = "/srv/palabra"

[logging]
console_output_level_filter = "info,palabra=debug"
log_file_output_level_filter = "debug"
log_file_output_directory = "{BASE_DATA_DIRECTORY}/logs"

[http]
host = "127.0.0.1"
port = 8050

[database]
host = "localhost"
port = 5432
username = "palabra"
database_name = "palabra"

[secrets]
hash_salt = "c2FsdHlzYWx0eXNhbHR5"

[json_web_token]
secret = "some secret"

[media]
images_directory_path = "{BASE_DATA_DIRECTORY}/media/vocabulary_images"
"#;

    #[test]
    fn resolves_placeholders_and_defaults() {
        let configuration = Configuration::load_from_str(
            SAMPLE_CONFIGURATION,
            PathBuf::from("configuration.toml"),
        )
        .unwrap();

        assert_eq!(
            configuration.logging.log_file_output_directory,
            PathBuf::from("/srv/palabra/logs")
        );
        assert_eq!(
            configuration.media.images_directory_path,
            PathBuf::from("/srv/palabra/media/vocabulary_images")
        );
        assert_eq!(
            configuration.media.maximum_upload_size_bytes,
            32 * 1024 * 1024
        );
        assert_eq!(
            configuration.media.maximum_document_text_size_bytes,
            16 * 1024 * 1024
        );
        assert_eq!(configuration.http.bind_address(), ("127.0.0.1", 8050));
        assert!(configuration.database.password.is_none());
    }

    #[test]
    fn rejects_invalid_tracing_filter() {
        let broken_configuration = SAMPLE_CONFIGURATION.replace(
            "console_output_level_filter = \"info,palabra=debug\"",
            "console_output_level_filter = \"palabra=notalevel\"",
        );

        let result = Configuration::load_from_str(
            &broken_configuration,
            PathBuf::from("configuration.toml"),
        );

        assert!(matches!(
            result,
            Err(ConfigurationLoadingError::ResolutionError {
                error: ConfigurationResolutionError::LoggingConfigurationError {
                    error: LoggingConfigurationError::InvalidTracingFilter { .. }
                }
            })
        ));
    }

    #[test]
    fn rejects_zero_upload_size() {
        let broken_configuration =
            format!("{}maximum_upload_size_bytes = 0\n", SAMPLE_CONFIGURATION);

        assert!(matches!(
            Configuration::load_from_str(
                &broken_configuration,
                PathBuf::from("configuration.toml")
            ),
            Err(ConfigurationLoadingError::ResolutionError {
                error: ConfigurationResolutionError::MediaConfigurationError { .. }
            })
        ));
    }

    #[test]
    fn rejects_zero_document_text_size() {
        let broken_configuration = format!(
            "{}maximum_document_text_size_bytes = 0\n",
            SAMPLE_CONFIGURATION
        );

        assert!(matches!(
            Configuration::load_from_str(
                &broken_configuration,
                PathBuf::from("configuration.toml")
            ),
            Err(ConfigurationLoadingError::ResolutionError {
                error: ConfigurationResolutionError::MediaConfigurationError {
                    error: MediaConfigurationError::ZeroMaximumDocumentTextSize
                }
            })
        ));
    }

    #[test]
    fn reports_missing_file() {
        assert!(matches!(
            Configuration::load_from_path("./this/does/not/exist.toml"),
            Err(ConfigurationLoadingError::UnableToReadConfigurationFile { .. })
        ));
    }
}
