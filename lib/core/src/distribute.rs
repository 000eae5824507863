use crate::nnf::Nnf;

/// Applies the distributive law `(a & b) | c => (a | c) & (b | c)` until no
/// disjunction has a conjunction below it, bottom-up. When both children of
/// an `Or` are conjunctions, the left one is split first; the shape of the
/// result depends on this order. Output size is exponential in the worst
/// case.
pub fn distribute(expr: Nnf) -> Nnf {
    match expr {
        Nnf::And { lhs, rhs } => Nnf::and(distribute(*lhs), distribute(*rhs)),
        Nnf::Or { lhs, rhs } => {
            let lhs = distribute(*lhs);
            let rhs = distribute(*rhs);
            if let Nnf::And { lhs: a, rhs: b } = lhs {
                // The freshly built disjunctions may need distribution again.
                Nnf::and(distribute(Nnf::or(*a, rhs.clone())), distribute(Nnf::or(*b, rhs)))
            } else if let Nnf::And { lhs: a, rhs: b } = rhs {
                Nnf::and(distribute(Nnf::or(lhs.clone(), *a)), distribute(Nnf::or(lhs, *b)))
            } else {
                Nnf::or(lhs, rhs)
            }
        }
        lit @ Nnf::Lit(_) => lit,
    }
}
