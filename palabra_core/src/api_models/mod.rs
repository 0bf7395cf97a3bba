mod error_reason;
mod health;
mod users;
mod vocabulary;

pub use error_reason::*;
pub use health::*;
pub use users::*;
pub use vocabulary::*;
