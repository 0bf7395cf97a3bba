//! Vocabulary exercises, document import and vocabulary image management.

mod documents;
mod exercises;
mod images;
mod model_impls;
mod multipart;

use actix_web::{web, Scope};
pub use documents::*;
pub use exercises::*;
pub use images::*;



#[rustfmt::skip]
pub fn vocabulary_router() -> Scope {
    web::scope("/vocabulary")
        // exercises.rs
        .service(get_all_exercises)
        .service(get_vocabulary_stats)
        // documents.rs
        .service(parse_document)
        .service(upload_document)
        // images.rs
        .service(get_all_images)
        .service(add_images)
        .service(delete_images)
}
