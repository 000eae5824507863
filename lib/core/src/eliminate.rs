use formula_parser::expr::Expr as ParsedExpr;

use crate::expr::Expr;

/// Rewrites `->` and `<->` into `&`, `|` and `~`, bottom-up:
/// `(a -> b)` becomes `(~a | b)`, and `(a <-> b)` becomes
/// `((~a | b) & (~b | a))`. Every other node is rebuilt unchanged.
pub fn eliminate_implications(expr: ParsedExpr) -> Expr {
    match expr {
        ParsedExpr::Var(var) => Expr::Var(var),
        ParsedExpr::Not { arg } => Expr::not(eliminate_implications(*arg)),
        ParsedExpr::And { lhs, rhs } => {
            Expr::and(eliminate_implications(*lhs), eliminate_implications(*rhs))
        }
        ParsedExpr::Or { lhs, rhs } => {
            Expr::or(eliminate_implications(*lhs), eliminate_implications(*rhs))
        }
        ParsedExpr::Implies { lhs, rhs } => {
            Expr::or(!eliminate_implications(*lhs), eliminate_implications(*rhs))
        }
        ParsedExpr::Iff { lhs, rhs } => {
            // Both sides are rewritten once and the results reused.
            let lhs = eliminate_implications(*lhs);
            let rhs = eliminate_implications(*rhs);
            Expr::and(Expr::or(!lhs.clone(), rhs.clone()), Expr::or(!rhs, lhs))
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn v(name: &str) -> ParsedExpr {
        ParsedExpr::var(name)
    }

    fn e(name: &str) -> Expr {
        Expr::var(name)
    }

    #[test]
    fn test_var_is_unchanged() {
        assert_eq!(eliminate_implications(v("A")), e("A"));
    }

    #[test]
    fn test_connectives_are_rebuilt() {
        let expr = eliminate_implications(!(v("A") | v("B")) & v("C"));
        assert_eq!(expr, !(e("A") | e("B")) & e("C"));
    }

    #[test]
    fn test_implication() {
        let expr = eliminate_implications(ParsedExpr::implies(v("A"), v("B")));
        assert_eq!(expr, !e("A") | e("B"));
    }

    #[test]
    fn test_iff() {
        let expr = eliminate_implications(ParsedExpr::iff(v("A"), v("B")));
        assert_eq!(expr, (!e("A") | e("B")) & (!e("B") | e("A")));
    }

    #[test]
    fn test_nested_implication() {
        // (A -> B) -> C  =>  ~(~A | B) | C
        let inner = ParsedExpr::implies(v("A"), v("B"));
        let expr = eliminate_implications(ParsedExpr::implies(inner, v("C")));
        assert_eq!(expr, !(!e("A") | e("B")) | e("C"));
    }

    #[test]
    fn test_implication_under_negation() {
        let expr = eliminate_implications(!ParsedExpr::implies(v("A"), v("B")));
        assert_eq!(expr, !(!e("A") | e("B")));
    }

    #[test]
    fn test_iff_of_compound_sides() {
        // (A & B) <-> C
        let expr = eliminate_implications(ParsedExpr::iff(v("A") & v("B"), v("C")));
        let a_and_b = e("A") & e("B");
        assert_eq!(expr, (!a_and_b.clone() | e("C")) & (!e("C") | a_and_b));
    }
}
