mod endpoints;
mod model_impls;

use actix_web::{web, Scope};
pub use endpoints::*;



#[rustfmt::skip]
pub fn users_router() -> Scope {
    web::scope("/users")
        // registration.rs
        .service(register_user)
        // current.rs
        .service(get_current_user_info)
}
