pub mod bootstrap;
pub mod submit;

#[cfg(test)]
pub mod fake;
