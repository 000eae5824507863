use formula_parser::expr::Expr as ParsedExpr;
use log::debug;
use tap::Tap;

use crate::cnf::Cnf;
use crate::distribute::distribute;
use crate::eliminate::eliminate_implications;
use crate::nnf::{push_negation, Nnf};

/// Negation normal form of `expr`: implications eliminated, negation pushed
/// onto the variables.
pub fn to_nnf(expr: ParsedExpr) -> Nnf {
    debug!("-> to_nnf({expr})...");
    push_negation(eliminate_implications(expr)).tap(|nnf| debug!("<- to_nnf = {nnf}"))
}

/// Conjunctive normal form of `expr`. The result satisfies [`Nnf::is_cnf`].
pub fn to_cnf(expr: ParsedExpr) -> Nnf {
    debug!("-> to_cnf({expr})...");
    distribute(to_nnf(expr)).tap(|cnf| debug!("<- to_cnf = {cnf}"))
}

/// Conjunctive normal form of `expr`, flattened into clauses.
pub fn to_cnf_clauses(expr: ParsedExpr) -> Cnf {
    Cnf::from_expr(&to_cnf(expr))
}
