pub use formula_parser as parser;
pub use prop_cnf_core as core;

pub use formula_parser::error::SyntaxError;
pub use formula_parser::expr::Expr;
pub use formula_parser::parser::parse_expr;
pub use formula_parser::var::Var;

pub use prop_cnf_core::cnf::clause::Clause;
pub use prop_cnf_core::cnf::Cnf;
pub use prop_cnf_core::convert::{to_cnf, to_cnf_clauses, to_nnf};
pub use prop_cnf_core::lit::Lit;
pub use prop_cnf_core::nnf::Nnf;
