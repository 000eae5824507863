use std::fmt::{Display, Formatter};
use std::ops;

use crate::expr::Expr;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var(pub String);

impl Var {
    pub fn new(name: impl Into<String>) -> Self {
        Var(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for Var {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Var {
    fn from(name: &str) -> Self {
        Var(name.to_string())
    }
}

impl From<String> for Var {
    fn from(name: String) -> Self {
        Var(name)
    }
}

impl From<char> for Var {
    fn from(name: char) -> Self {
        Var(name.to_string())
    }
}

// !Var
impl ops::Not for Var {
    type Output = Expr;

    fn not(self) -> Self::Output {
        !Expr::from(self)
    }
}

// Var & Var
impl ops::BitAnd for Var {
    type Output = Expr;

    fn bitand(self, rhs: Var) -> Self::Output {
        Expr::from(self) & Expr::from(rhs)
    }
}
// Var & Expr
impl ops::BitAnd<Expr> for Var {
    type Output = Expr;

    fn bitand(self, rhs: Expr) -> Self::Output {
        Expr::from(self) & rhs
    }
}

// Var | Var
impl ops::BitOr for Var {
    type Output = Expr;

    fn bitor(self, rhs: Var) -> Self::Output {
        Expr::from(self) | Expr::from(rhs)
    }
}
// Var | Expr
impl ops::BitOr<Expr> for Var {
    type Output = Expr;

    fn bitor(self, rhs: Expr) -> Self::Output {
        Expr::from(self) | rhs
    }
}
