use std::fmt::{Display, Formatter};
use std::ops::Neg;

use crate::Var;

#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Lit {
    var: Var,
    negated: bool,
}

impl Lit {
    pub fn new(var: impl Into<Var>, negated: bool) -> Self {
        Lit {
            var: var.into(),
            negated,
        }
    }

    pub fn pos(var: impl Into<Var>) -> Self {
        Self::new(var, false)
    }

    pub fn neg(var: impl Into<Var>) -> Self {
        Self::new(var, true)
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

impl Display for Lit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "~{}", self.var)
        } else {
            write!(f, "{}", self.var)
        }
    }
}

impl From<Var> for Lit {
    fn from(var: Var) -> Self {
        Self::pos(var)
    }
}

// -Lit
impl Neg for Lit {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(self.var, !self.negated)
    }
}
