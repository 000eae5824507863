use std::fmt::{Display, Formatter};
use std::slice::Iter;

use clause::Clause;

use crate::lit::Lit;
use crate::nnf::Nnf;

pub mod clause;

#[derive(Debug)]
pub struct Cnf {
    pub clauses: Vec<Clause>,
}

impl Cnf {
    pub fn iter(&self) -> Iter<'_, Clause> {
        self.clauses.iter()
    }
}

impl Cnf {
    pub fn new() -> Self {
        Self { clauses: Vec::new() }
    }

    /// Flattens a CNF-shaped tree into its list of clauses.
    /// The input must satisfy [`Nnf::is_cnf`].
    pub fn from_expr(expr: &Nnf) -> Self {
        debug_assert!(expr.is_cnf(), "expression must be CNF-shaped");
        let mut cnf = Self::new();
        collect_clauses(expr, &mut cnf);
        cnf
    }
}

impl Default for Cnf {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> From<I> for Cnf
where
    I: IntoIterator,
    I::Item: Into<Clause>,
{
    fn from(iter: I) -> Self {
        let mut cnf = Self::new();
        for clause in iter.into_iter() {
            cnf.add_clause(clause)
        }
        cnf
    }
}

impl Display for Cnf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for clause in self.clauses.iter() {
            list.entry(&format_args!("{}", clause));
        }
        list.finish()
    }
}

impl Cnf {
    pub fn add_clause(&mut self, clause: impl Into<Clause>) {
        self.clauses.push(clause.into());
    }
}

fn collect_clauses(expr: &Nnf, cnf: &mut Cnf) {
    match expr {
        Nnf::And { lhs, rhs } => {
            collect_clauses(lhs, cnf);
            collect_clauses(rhs, cnf);
        }
        _ => {
            let mut lits = Vec::new();
            collect_lits(expr, &mut lits);
            cnf.add_clause(lits);
        }
    }
}

fn collect_lits(expr: &Nnf, lits: &mut Vec<Lit>) {
    match expr {
        Nnf::Lit(lit) => lits.push(lit.clone()),
        Nnf::Or { lhs, rhs } => {
            collect_lits(lhs, lits);
            collect_lits(rhs, lits);
        }
        Nnf::And { .. } => unreachable!("conjunction inside a clause"),
    }
}
