pub mod create;
pub mod preview;
