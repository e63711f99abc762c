//! Whole-path matching of a [`PathPattern`] against a sequence of names.
use crate::ast::{PathPattern, PatternComponent, Wildcard};
use dataiter_types::{DataPath, PathSegment};

impl PathPattern {
    pub fn matches(&self, path: &DataPath) -> bool {
        self.matches_by(path.segments(), PathSegment::matches_literal)
    }

    /// Matches any sequence of names, given a way to compare a name with a literal
    /// component.
    ///
    /// `reachable[j]` records whether the components consumed so far can match the
    /// first `j` names; each component advances that set, so matching costs
    /// O(components * names) however the wildcards are arranged.
    pub fn matches_by<T>(&self, names: &[T], literal_eq: impl Fn(&T, &str) -> bool) -> bool {
        let n = names.len();
        let mut reachable = vec![false; n + 1];
        reachable[0] = true;

        for component in self.components() {
            let mut next = vec![false; n + 1];
            match component {
                PatternComponent::Name(literal) => {
                    for j in 0..n {
                        if reachable[j] && literal_eq(&names[j], literal) {
                            next[j + 1] = true;
                        }
                    }
                }
                PatternComponent::Wildcard(Wildcard::AnyOne) => {
                    for j in 0..n {
                        next[j + 1] = reachable[j];
                    }
                }
                PatternComponent::Wildcard(Wildcard::AnyZeroOrOne) => {
                    for j in 0..=n {
                        next[j] |= reachable[j];
                        if j < n {
                            next[j + 1] |= reachable[j];
                        }
                    }
                }
                PatternComponent::Wildcard(w @ (Wildcard::AnyOneOrMore | Wildcard::AnyZeroOrMore)) => {
                    let min = usize::from(*w == Wildcard::AnyOneOrMore);
                    let mut seen = false;
                    for j in 0..=n {
                        // `seen` is true once some earlier position at least `min`
                        // names back was reachable.
                        if j >= min && reachable[j - min] {
                            seen = true;
                        }
                        next[j] = seen;
                    }
                }
            }
            if !next.iter().any(|&r| r) {
                return false;
            }
            reachable = next;
        }
        reachable[n]
    }
}
