pub mod linear;
pub mod prompt;
