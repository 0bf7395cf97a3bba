use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::BasePathsConfiguration;
use crate::{
    traits::TryResolveWithContext,
    utilities::{create_directory_if_missing, replace_placeholders_in_path},
    DirectoryCreationError,
    LoggingConfigurationError,
};


#[derive(Deserialize, Clone, Debug)]
pub(super) struct UnresolvedLoggingConfiguration {
    console_output_level_filter: String,

    log_file_output_level_filter: String,

    log_file_output_directory: String,
}


#[derive(Clone, Debug)]
pub struct LoggingConfiguration {
    console_output_level_filter: String,

    log_file_output_level_filter: String,

    /// Daily-rotated log files are written into this directory.
    pub log_file_output_directory: PathBuf,
}


fn validate_tracing_filter(
    filter: &str,
    kind: &'static str,
) -> Result<(), LoggingConfigurationError> {
    EnvFilter::try_new(filter)
        .map(|_| ())
        .map_err(|error| LoggingConfigurationError::InvalidTracingFilter {
            invalid_filter: filter.to_string(),
            kind: Cow::Borrowed(kind),
            error,
        })
}


impl<'r> TryResolveWithContext<'r> for UnresolvedLoggingConfiguration {
    type Resolved = LoggingConfiguration;
    type Context = &'r BasePathsConfiguration;
    type Error = LoggingConfigurationError;

    fn try_resolve_with_context(
        self,
        context: Self::Context,
    ) -> Result<Self::Resolved, Self::Error> {
        validate_tracing_filter(&self.console_output_level_filter, "console")?;
        validate_tracing_filter(&self.log_file_output_level_filter, "log file")?;

        let log_file_output_directory = replace_placeholders_in_path(
            Path::new(&self.log_file_output_directory),
            context.placeholders(),
        );

        Ok(Self::Resolved {
            console_output_level_filter: self.console_output_level_filter,
            log_file_output_level_filter: self.log_file_output_level_filter,
            log_file_output_directory,
        })
    }
}


impl LoggingConfiguration {
    pub fn console_output_level_filter(&self) -> EnvFilter {
        // PANIC SAFETY: The filter was validated when resolving.
        EnvFilter::try_new(&self.console_output_level_filter).unwrap()
    }

    pub fn log_file_output_level_filter(&self) -> EnvFilter {
        // PANIC SAFETY: The filter was validated when resolving.
        EnvFilter::try_new(&self.log_file_output_level_filter).unwrap()
    }

    pub fn create_log_file_output_directory_if_missing(&self) -> Result<(), DirectoryCreationError> {
        create_directory_if_missing(&self.log_file_output_directory)
    }
}
