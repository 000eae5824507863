use std::fmt::{Display, Formatter};
use std::ops;

use crate::Var;

/// Implication-free formula: the output language of
/// [`eliminate_implications`](crate::eliminate::eliminate_implications).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Var(Var),
    Not { arg: Box<Expr> },
    And { lhs: Box<Expr>, rhs: Box<Expr> },
    Or { lhs: Box<Expr>, rhs: Box<Expr> },
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
}

impl From<Var> for Expr {
    fn from(var: Var) -> Self {
        Expr::Var(var)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
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

impl ops::BitOr for Expr {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::or(self, rhs)
    }
}
