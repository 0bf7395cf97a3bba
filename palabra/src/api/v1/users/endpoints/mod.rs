mod current;
mod registration;

pub use current::*;
pub use registration::*;
