use serde::Deserialize;

use crate::traits::Resolve;


pub(super) type UnresolvedHttpConfiguration = HttpConfiguration;

/// Where the API server listens.
#[derive(Deserialize, Debug, Clone)]
pub struct HttpConfiguration {
    /// Interface name or IP address, e.g. `127.0.0.1` or `0.0.0.0`.
    pub host: String,

    pub port: u16,
}

impl HttpConfiguration {
    /// In the form accepted by `HttpServer::bind`.
    pub fn bind_address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

impl Resolve for UnresolvedHttpConfiguration {
    type Resolved = HttpConfiguration;

    fn resolve(self) -> Self::Resolved {
        self
    }
}
