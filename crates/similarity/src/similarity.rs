//! The three-valued similarity verdict.

use serde::{Deserialize, Serialize};

/// Verdict of a similarity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Similarity {
    /// The elements are definitely similar.
    Same,
    /// The elements are definitely not similar.
    Different,
    /// No distinguishing evidence was found; callers pick the default.
    Unknown,
}

impl Similarity {
    pub fn from_bool(similar: bool) -> Self {
        if similar {
            Similarity::Same
        } else {
            Similarity::Different
        }
    }

    /// `true` for `Same` and `Unknown`.
    pub fn is_not_false(self) -> bool {
        self != Similarity::Different
    }

    /// `true` for `Different` and `Unknown`.
    pub fn is_not_true(self) -> bool {
        self != Similarity::Same
    }

    pub fn is_same(self) -> bool {
        self == Similarity::Same
    }

    pub fn is_different(self) -> bool {
        self == Similarity::Different
    }

    /// Conjunction: `Different` wins over `Unknown`, which wins over `Same`.
    pub fn and(self, other: Similarity) -> Similarity {
        match (self, other) {
            (Similarity::Different, _) | (_, Similarity::Different) => Similarity::Different,
            (Similarity::Unknown, _) | (_, Similarity::Unknown) => Similarity::Unknown,
            _ => Similarity::Same,
        }
    }

    /// Conjunction that skips `next` once `self` is `Different`.
    pub fn and_then(self, next: impl FnOnce() -> Similarity) -> Similarity {
        if self.is_different() {
            self
        } else {
            self.and(next())
        }
    }

    /// Disjunction: `Same` wins over `Unknown`, which wins over `Different`.
    pub fn or(self, other: Similarity) -> Similarity {
        match (self, other) {
            (Similarity::Same, _) | (_, Similarity::Same) => Similarity::Same,
            (Similarity::Unknown, _) | (_, Similarity::Unknown) => Similarity::Unknown,
            _ => Similarity::Different,
        }
    }

    /// Disjunction that skips `next` once `self` is `Same`.
    pub fn or_else(self, next: impl FnOnce() -> Similarity) -> Similarity {
        if self.is_same() {
            self
        } else {
            self.or(next())
        }
    }

    /// Collapse `Unknown` into `Same`.
    pub fn not_different(self) -> Similarity {
        Similarity::from_bool(self.is_not_false())
    }

    /// Fold with [`Similarity::and`], stopping at the first `Different`.
    pub fn all<I>(verdicts: I) -> Similarity
    where
        I: IntoIterator<Item = Similarity>,
    {
        let mut result = Similarity::Same;
        for verdict in verdicts {
            result = result.and(verdict);
            if result.is_different() {
                break;
            }
        }
        result
    }
}

impl From<bool> for Similarity {
    fn from(similar: bool) -> Self {
        Similarity::from_bool(similar)
    }
}

impl std::fmt::Display for Similarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Similarity::Same => write!(f, "same"),
            Similarity::Different => write!(f, "different"),
            Similarity::Unknown => write!(f, "unknown"),
        }
    }
}
