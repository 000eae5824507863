use std::fmt::{Display, Formatter};

use crate::expr::Expr;
use crate::lit::Lit;

/// Formula in negation normal form: negation occurs only inside literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nnf {
    Lit(Lit),
    And { lhs: Box<Nnf>, rhs: Box<Nnf> },
    Or { lhs: Box<Nnf>, rhs: Box<Nnf> },
}

// Constructors
impl Nnf {
    pub fn and(lhs: Self, rhs: Self) -> Self {
        Nnf::And {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Nnf::Or {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

impl From<Lit> for Nnf {
    fn from(lit: Lit) -> Self {
        Nnf::Lit(lit)
    }
}

impl Display for Nnf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Nnf::Lit(lit) => {
                write!(f, "{lit}")
            }
            Nnf::And { lhs, rhs } => {
                write!(f, "({lhs} & {rhs})")
            }
            Nnf::Or { lhs, rhs } => {
                write!(f, "({lhs} | {rhs})")
            }
        }
    }
}

impl Nnf {
    /// True iff no `Or` in the tree has an `And` below it: the formula is a
    /// conjunction of clauses.
    pub fn is_cnf(&self) -> bool {
        match self {
            Nnf::Lit(_) => true,
            Nnf::And { lhs, rhs } => lhs.is_cnf() && rhs.is_cnf(),
            Nnf::Or { lhs, rhs } => lhs.is_clause() && rhs.is_clause(),
        }
    }

    fn is_clause(&self) -> bool {
        match self {
            Nnf::Lit(_) => true,
            Nnf::And { .. } => false,
            Nnf::Or { lhs, rhs } => lhs.is_clause() && rhs.is_clause(),
        }
    }
}

/// Moves every negation inward until it sits directly on a variable,
/// applying De Morgan's laws and dropping double negations, bottom-up.
pub fn push_negation(expr: Expr) -> Nnf {
    match expr {
        Expr::Var(var) => Nnf::Lit(Lit::pos(var)),
        Expr::Not { arg } => negated(*arg),
        Expr::And { lhs, rhs } => Nnf::and(push_negation(*lhs), push_negation(*rhs)),
        Expr::Or { lhs, rhs } => Nnf::or(push_negation(*lhs), push_negation(*rhs)),
    }
}

// Pushes one pending negation into `expr`.
fn negated(expr: Expr) -> Nnf {
    match expr {
        Expr::Var(var) => Nnf::Lit(Lit::neg(var)),
        Expr::Not { arg } => push_negation(*arg),
        Expr::And { lhs, rhs } => Nnf::or(negated(*lhs), negated(*rhs)),
        Expr::Or { lhs, rhs } => Nnf::and(negated(*lhs), negated(*rhs)),
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn pos(name: &str) -> Nnf {
        Nnf::Lit(Lit::pos(name))
    }

    fn neg(name: &str) -> Nnf {
        Nnf::Lit(Lit::neg(name))
    }

    #[test]
    fn test_var_becomes_positive_literal() {
        assert_eq!(push_negation(Expr::var("A")), pos("A"));
    }

    #[test]
    fn test_negated_var_becomes_negative_literal() {
        assert_eq!(push_negation(!Expr::var("A")), neg("A"));
    }

    #[test]
    fn test_double_negation_is_dropped() {
        assert_eq!(push_negation(!!Expr::var("A")), pos("A"));
        assert_eq!(push_negation(!!!Expr::var("A")), neg("A"));
    }

    #[test]
    fn test_de_morgan_over_and() {
        let expr = push_negation(!(Expr::var("A") & Expr::var("B")));
        assert_eq!(expr, Nnf::or(neg("A"), neg("B")));
    }

    #[test]
    fn test_de_morgan_over_or() {
        let expr = push_negation(!(Expr::var("A") | Expr::var("B")));
        assert_eq!(expr, Nnf::and(neg("A"), neg("B")));
    }

    #[test]
    fn test_nested_negation() {
        // ~(A & ~(B | C))  =>  ~A | (B | C)
        let expr = push_negation(!(Expr::var("A") & !(Expr::var("B") | Expr::var("C"))));
        assert_eq!(expr, Nnf::or(neg("A"), Nnf::or(pos("B"), pos("C"))));
    }

    #[test]
    fn test_positive_connectives_are_rebuilt() {
        let expr = push_negation((Expr::var("A") | Expr::var("B")) & !Expr::var("C"));
        assert_eq!(expr, Nnf::and(Nnf::or(pos("A"), pos("B")), neg("C")));
    }

    #[test]
    fn test_display() {
        let expr = Nnf::and(Nnf::or(neg("A"), pos("B")), neg("C"));
        assert_eq!(expr.to_string(), "((~A | B) & ~C)");
    }

    #[test]
    fn test_is_cnf() {
        // (A | ~B) & (C & ~A)
        let cnf = Nnf::and(Nnf::or(pos("A"), neg("B")), Nnf::and(pos("C"), neg("A")));
        assert!(cnf.is_cnf());

        // A | (B & C)
        let not_cnf = Nnf::or(pos("A"), Nnf::and(pos("B"), pos("C")));
        assert!(!not_cnf.is_cnf());

        // ((A & B) | C) & D
        let not_cnf = Nnf::and(Nnf::or(Nnf::and(pos("A"), pos("B")), pos("C")), pos("D"));
        assert!(!not_cnf.is_cnf());
    }

    #[test]
    fn test_single_literal_is_cnf() {
        assert!(pos("A").is_cnf());
        assert!(neg("A").is_cnf());
    }
}
