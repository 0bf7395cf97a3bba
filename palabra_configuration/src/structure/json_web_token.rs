use serde::Deserialize;

use crate::traits::Resolve;


pub(super) type UnresolvedJsonWebTokenConfiguration = JsonWebTokenConfiguration;

#[derive(Deserialize, Debug, Clone)]
pub struct JsonWebTokenConfiguration {
    /// HS256 signing secret.
    pub secret: String,
}

impl Resolve for UnresolvedJsonWebTokenConfiguration {
    type Resolved = JsonWebTokenConfiguration;

    fn resolve(self) -> Self::Resolved {
        self
    }
}
