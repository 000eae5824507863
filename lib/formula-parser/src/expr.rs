use std::collections::{BTreeSet, HashMap};
use std::fmt::{Display, Formatter};
use std::ops;
use std::str::FromStr;

use crate::error::SyntaxError;
use crate::parser;
use crate::var::Var;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Var(Var),
    Not { arg: Box<Expr> },
    And { lhs: Box<Expr>, rhs: Box<Expr> },
    Or { lhs: Box<Expr>, rhs: Box<Expr> },
    Implies { lhs: Box<Expr>, rhs: Box<Expr> },
    Iff { lhs: Box<Expr>, rhs: Box<Expr> },
}

// Constructors
impl Expr {
    pub fn var(name: impl Into<Var>) -> Self {
        Expr::Var(name.into())
    }

    pub fn not(arg: Self) -> Self {
        Expr::Not { arg: Box::new(arg) }
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Expr::Implies {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Expr::Iff {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

impl From<Var> for Expr {
    fn from(var: Var) -> Self {
        Expr::Var(var)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            match self {
                Expr::Var(var) => {
                    write!(f, "Var({var})")
                }
                Expr::Not { arg } => {
                    write!(f, "Not({arg:#})")
                }
                Expr::And { lhs, rhs } => {
                    write!(f, "And({lhs:#}, {rhs:#})")
                }
                Expr::Or { lhs, rhs } => {
                    write!(f, "Or({lhs:#}, {rhs:#})")
                }
                Expr::Implies { lhs, rhs } => {
                    write!(f, "Implies({lhs:#}, {rhs:#})")
                }
                Expr::Iff { lhs, rhs } => {
                    write!(f, "Iff({lhs:#}, {rhs:#})")
                }
            }
        } else {
            match self {
                Expr::Var(var) => {
                    write!(f, "{var}")
                }
                Expr::Not { arg } => {
                    write!(f, "~{arg}")
                }
                Expr::And { lhs, rhs } => {
                    write!(f, "({lhs} & {rhs})")
                }
                Expr::Or { lhs, rhs } => {
                    write!(f, "({lhs} | {rhs})")
                }
                Expr::Implies { lhs, rhs } => {
                    write!(f, "({lhs} -> {rhs})")
                }
                Expr::Iff { lhs, rhs } => {
                    write!(f, "({lhs} <-> {rhs})")
                }
            }
        }
    }
}

impl FromStr for Expr {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_expr(s)
    }
}

impl Expr {
    pub fn eval(&self, mapping: &HashMap<Var, bool>) -> bool {
        match self {
            Expr::Var(var) => *mapping.get(var).unwrap_or_else(|| panic!("Mapping does not contain {var}")),
            Expr::Not { arg } => !arg.eval(mapping),
            Expr::And { lhs, rhs } => lhs.eval(mapping) && rhs.eval(mapping),
            Expr::Or { lhs, rhs } => lhs.eval(mapping) || rhs.eval(mapping),
            Expr::Implies { lhs, rhs } => !lhs.eval(mapping) || rhs.eval(mapping),
            Expr::Iff { lhs, rhs } => lhs.eval(mapping) == rhs.eval(mapping),
        }
    }

    pub fn vars(&self) -> BTreeSet<Var> {
        let mut vars = BTreeSet::new();
        self.collect_vars(&mut vars);
        vars
    }

    fn collect_vars(&self, vars: &mut BTreeSet<Var>) {
        match self {
            Expr::Var(var) => {
                vars.insert(var.clone());
            }
            Expr::Not { arg } => {
                arg.collect_vars(vars);
            }
            Expr::And { lhs, rhs }
            | Expr::Or { lhs, rhs }
            | Expr::Implies { lhs, rhs }
            | Expr::Iff { lhs, rhs } => {
                lhs.collect_vars(vars);
                rhs.collect_vars(vars);
            }
        }
    }
}

impl ops::Not for Expr {
    type Output = Self;

    fn not(self) -> Self::Output {
        Expr::not(self)
    }
}

impl ops::BitAnd for Expr {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expr::and(self, rhs)
    }
}
impl ops::BitAnd<Var> for Expr {
    type Output = Self;

    fn bitand(self, rhs: Var) -> Self::Output {
        Expr::and(self, Expr::from(rhs))
    }
}

impl ops::BitOr for Expr {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::or(self, rhs)
    }
}
impl ops::BitOr<Var> for Expr {
    type Output = Self;

    fn bitor(self, rhs: Var) -> Self::Output {
        Expr::or(self, Expr::from(rhs))
    }
}

#[cfg(test)]
mod tests {
    use log::info;
    use test_log::test;

    use super::*;

    #[test]
    fn test_create_expr() {
        // e1 = A & ~B
        let e1 = Expr::And {
            lhs: Box::new(Expr::Var(Var::from("A"))),
            rhs: Box::new(Expr::Not {
                arg: Box::new(Expr::Var(Var::from("B"))),
            }),
        };
        info!("e1 = {:?}", e1);
        info!("e1 = {:#}", e1);
        info!("e1 = {}", e1);

        // e2 = A & ~B
        let e2 = Var::from("A") & !Expr::var("B");
        info!("e2 = {:?}", e2);
        info!("e2 = {:#}", e2);
        info!("e2 = {}", e2);

        assert_eq!(e1, e2);
    }

    #[test]
    fn test_display() {
        let e = Expr::iff(
            Expr::implies(Expr::var("A"), Expr::var("B")),
            Expr::or(Expr::not(Expr::var("A")), Expr::and(Expr::var("B"), Expr::var("C"))),
        );
        assert_eq!(e.to_string(), "((A -> B) <-> (~A | (B & C)))");
        assert_eq!(format!("{e:#}"), "Iff(Implies(Var(A), Var(B)), Or(Not(Var(A)), And(Var(B), Var(C))))");
    }

    #[test]
    fn test_eval_expr() {
        // f = (A -> B) & ~B
        let a = Var::from("A");
        let b = Var::from("B");
        let f = Expr::implies(Expr::from(a.clone()), Expr::from(b.clone())) & !Expr::from(b.clone());
        info!("f = {}", f);

        let mut mapping = HashMap::new();

        mapping.insert(a.clone(), false);
        mapping.insert(b.clone(), false);
        info!("f.eval(mapping={:?}) = {}", mapping, f.eval(&mapping));
        assert_eq!(f.eval(&mapping), true);

        mapping.insert(a, true);
        mapping.insert(b, true);
        info!("f.eval(mapping={:?}) = {}", mapping, f.eval(&mapping));
        assert_eq!(f.eval(&mapping), false);
    }

    #[test]
    fn test_eval_iff() {
        let f = Expr::iff(Expr::var("A"), Expr::var("B"));

        let mut mapping = HashMap::new();
        mapping.insert(Var::from("A"), true);
        mapping.insert(Var::from("B"), true);
        assert_eq!(f.eval(&mapping), true);

        mapping.insert(Var::from("B"), false);
        assert_eq!(f.eval(&mapping), false);
    }

    #[test]
    fn test_vars() {
        let f = Expr::implies(Expr::var("B") & Expr::var("A"), Expr::var("C") | Expr::var("A"));
        let names: Vec<_> = f.vars().into_iter().map(|var| var.0).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_from_str() {
        let e: Expr = "(A -> B)".parse().unwrap();
        assert_eq!(e, Expr::implies(Expr::var("A"), Expr::var("B")));
    }
}
