pub mod cnf;
pub mod convert;
pub mod distribute;
pub mod eliminate;
pub mod expr;
pub mod lit;
pub mod nnf;

pub use formula_parser::var::Var;
