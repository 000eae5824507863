use std::fmt::{Display, Formatter};
use std::slice::Iter;

use itertools::Itertools;

use crate::lit::Lit;

/// Disjunction of literals, kept in extraction order.
#[derive(Debug, Clone)]
pub struct Clause {
    pub lits: Vec<Lit>,
}

impl Clause {
    pub fn new(lits: Vec<Lit>) -> Self {
        debug_assert!(!lits.is_empty(), "Clause must be non-empty");
        Clause { lits }
    }

    pub fn iter(&self) -> Iter<'_, Lit> {
        self.lits.iter()
    }
}

impl<I> From<I> for Clause
where
    I: IntoIterator,
    I::Item: Into<Lit>,
{
    fn from(iter: I) -> Self {
        Self::new(iter.into_iter().map_into::<Lit>().collect())
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for lit in self.lits.iter() {
            list.entry(&format_args!("{}", lit));
        }
        list.finish()
    }
}

// Literal order does not matter for equality.
impl PartialEq for Clause {
    fn eq(&self, other: &Self) -> bool {
        if self.lits.len() != other.lits.len() {
            return false;
        }
        let lhs = self.lits.iter().sorted_unstable();
        let rhs = other.lits.iter().sorted_unstable();
        itertools::equal(lhs, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_from_lits() {
        let clause = Clause::from([Lit::pos("A"), Lit::neg("B")]);
        assert_eq!(clause.lits, vec![Lit::pos("A"), Lit::neg("B")]);
    }

    #[test]
    fn test_clause_display() {
        let clause = Clause::from([Lit::pos("A"), Lit::neg("B"), Lit::pos("C")]);
        assert_eq!(clause.to_string(), "[A, ~B, C]");
    }

    #[test]
    fn test_clause_eq_ignores_order() {
        let lhs = Clause::from([Lit::pos("A"), Lit::neg("B")]);
        let rhs = Clause::from([Lit::neg("B"), Lit::pos("A")]);
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_clause_eq_respects_polarity() {
        let lhs = Clause::from([Lit::pos("A")]);
        let rhs = Clause::from([Lit::neg("A")]);
        assert_ne!(lhs, rhs);
    }
}
