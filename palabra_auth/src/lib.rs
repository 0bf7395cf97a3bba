//! JSON Web Token issuing and validation for the Palabra API.

mod token;

pub use token::*;
