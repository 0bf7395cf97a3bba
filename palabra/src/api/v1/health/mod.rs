mod endpoints;

use actix_web::{web, Scope};
pub use endpoints::*;


#[rustfmt::skip]
pub fn health_router() -> Scope {
    web::scope("/health")
        .service(ping)
}
