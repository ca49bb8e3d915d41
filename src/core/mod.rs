pub mod chain;
pub mod field;
pub mod resolver;
