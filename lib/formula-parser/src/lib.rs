pub mod error;
pub mod expr;
pub mod parser;
pub mod token;
pub mod var;
