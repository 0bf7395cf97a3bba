use std::{collections::HashMap, path::PathBuf};

use serde::Deserialize;

use crate::{traits::Resolve, utilities::create_directory_if_missing, DirectoryCreationError};


#[derive(Deserialize, Debug)]
pub(super) struct UnresolvedBasePathsConfiguration {
    pub(super) base_data_directory_path: String,
}


#[derive(Debug, Clone)]
pub struct BasePathsConfiguration {
    /// Directory that the `{BASE_DATA_DIRECTORY}` placeholder expands to.
    pub base_data_directory_path: PathBuf,
}


impl Resolve for UnresolvedBasePathsConfiguration {
    type Resolved = BasePathsConfiguration;

    fn resolve(self) -> Self::Resolved {
        let base_data_directory_path = dunce::simplified(&PathBuf::from(
            self.base_data_directory_path,
        ))
        .to_path_buf();

        Self::Resolved {
            base_data_directory_path,
        }
    }
}


impl BasePathsConfiguration {
    pub fn create_base_data_directory_if_missing(&self) -> Result<(), DirectoryCreationError> {
        create_directory_if_missing(&self.base_data_directory_path)
    }

    pub fn placeholders(&self) -> HashMap<&'static str, String> {
        let mut placeholders_map = HashMap::with_capacity(1);

        placeholders_map.insert(
            "{BASE_DATA_DIRECTORY}",
            self.base_data_directory_path.to_string_lossy().to_string(),
        );

        placeholders_map
    }
}
