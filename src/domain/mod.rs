pub mod document;
pub mod issue;
pub mod team;
pub mod ticket;
