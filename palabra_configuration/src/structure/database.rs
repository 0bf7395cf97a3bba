use serde::Deserialize;

use crate::traits::Resolve;


pub(super) type UnresolvedDatabaseConfiguration = DatabaseConfiguration;

/// PostgreSQL-related configuration.
#[derive(Deserialize, Debug, Clone)]
pub struct DatabaseConfiguration {
    pub host: String,

    pub port: u16,

    pub username: String,

    pub password: Option<String>,

    pub database_name: String,
}

impl Resolve for UnresolvedDatabaseConfiguration {
    type Resolved = DatabaseConfiguration;

    fn resolve(self) -> Self::Resolved {
        self
    }
}
