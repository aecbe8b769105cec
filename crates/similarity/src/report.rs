//! Explanations of why two nodes are not similar.

use serde::Serialize;

use crate::Similarity;

/// Outcome of [`SimilarityChecker::explain`](crate::SimilarityChecker::explain).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimilarityReport {
    pub verdict: Similarity,
    /// Mismatches in the order they were found, innermost first.
    pub mismatches: Vec<Mismatch>,
}

/// One place where the comparison found a difference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Labels of the left-hand nodes from the root of the check to the mismatch,
    /// e.g. `"Class[A] > ClassMethod[foo]"`.
    pub path: String,
    /// Label of the left-hand node, absent when it is missing.
    pub left: Option<String>,
    /// Label of the right-hand node, absent when it is missing.
    pub right: Option<String>,
    pub reason: MismatchReason,
}

/// Why a pair was found different.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchReason {
    /// The nodes are of different kinds.
    KindMismatch,
    /// Only one side has a node.
    MissingCounterpart,
    /// The comparator of the kind rejected the pair.
    RuleFailed,
}

impl SimilarityReport {
    pub fn is_similar(&self) -> bool {
        self.verdict.is_not_false()
    }

    /// The innermost mismatch, usually the most specific explanation.
    pub fn first_mismatch(&self) -> Option<&Mismatch> {
        self.mismatches.first()
    }
}

impl std::fmt::Display for SimilarityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.mismatches.is_empty() {
            return writeln!(f, "Verdict: {} (no mismatches)", self.verdict);
        }

        writeln!(
            f,
            "Verdict: {} ({} mismatches):",
            self.verdict,
            self.mismatches.len()
        )?;
        writeln!(f)?;

        for (i, mismatch) in self.mismatches.iter().enumerate() {
            writeln!(f, "{}. {} at '{}'", i + 1, mismatch.reason, mismatch.path)?;
            writeln!(
                f,
                "   Left:  {}",
                mismatch.left.as_deref().unwrap_or("<missing>")
            )?;
            writeln!(
                f,
                "   Right: {}",
                mismatch.right.as_deref().unwrap_or("<missing>")
            )?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl std::fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MismatchReason::KindMismatch => write!(f, "Node kind mismatch"),
            MismatchReason::MissingCounterpart => write!(f, "Missing counterpart"),
            MismatchReason::RuleFailed => write!(f, "Not similar"),
        }
    }
}
