use std::{
    collections::HashMap,
    env::current_dir,
    path::{Path, PathBuf},
};

use crate::{ConfigurationLoadingError, DirectoryCreationError};


/// Returns the default configuration file path, which is
/// `{current directory}/data/configuration.toml`.
pub(crate) fn get_default_configuration_file_path() -> Result<PathBuf, ConfigurationLoadingError> {
    let mut configuration_file_path = current_dir()
        .map_err(|error| ConfigurationLoadingError::UnableToGetCurrentDirectory { error })?;
    configuration_file_path.push("data/configuration.toml");

    Ok(configuration_file_path)
}


/// Replaces every placeholder key (e.g. `{BASE_DATA_DIRECTORY}`)
/// found in `path` with its value.
pub(crate) fn replace_placeholders_in_path(
    path: &Path,
    placeholders: HashMap<&'static str, String>,
) -> PathBuf {
    let mut path_string = path.to_string_lossy().to_string();

    for (key, value) in placeholders {
        path_string = path_string.replace(key, &value);
    }

    PathBuf::from(path_string)
}


/// Creates the directory (and its parents) unless it already exists.
pub(crate) fn create_directory_if_missing(directory_path: &Path) -> Result<(), DirectoryCreationError> {
    if directory_path.exists() && !directory_path.is_dir() {
        return Err(DirectoryCreationError::NotADirectory {
            path: directory_path.to_path_buf(),
        });
    }

    std::fs::create_dir_all(directory_path).map_err(|error| {
        DirectoryCreationError::UnableToCreateDirectory {
            directory_path: directory_path.to_path_buf(),
            error,
        }
    })
}
