mod model;
mod mutation;

pub use model::*;
pub use mutation::*;
