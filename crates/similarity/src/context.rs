//! Per-run state threaded through every comparator.

use std::collections::HashSet;

use java_model::{Feature, NodeId, NodeRef, Value};

use crate::checker::evaluate;
use crate::config::CyclePolicy;
use crate::normalization::{NameCategory, NormalizationService};
use crate::report::{Mismatch, MismatchReason};
use crate::Similarity;

/// A pair under comparison together with its position sensitivity.
type PairKey = (usize, NodeId, usize, NodeId, bool);

fn pair_key(a: NodeRef<'_>, b: NodeRef<'_>, position: bool) -> PairKey {
    (a.model_key(), a.id(), b.model_key(), b.id(), position)
}

/// State of one top-level similarity check.
///
/// A context is created for each call on a
/// [`SimilarityChecker`](crate::SimilarityChecker) and dropped when it
/// returns. Comparators use it to recurse into sub-comparisons, to compare
/// names through the normalization tables and to compare leaf values.
pub(crate) struct Context<'c> {
    normalization: &'c NormalizationService,
    /// Position sensitivity of nested comparisons.
    default_position: bool,
    /// Position sensitivity of the pair currently being compared.
    position: bool,
    cycle_policy: CyclePolicy,
    in_progress: HashSet<PairKey>,
    trail: Vec<String>,
    mismatches: Option<Vec<Mismatch>>,
}

impl<'c> Context<'c> {
    pub(crate) fn new(
        normalization: &'c NormalizationService,
        check_statement_position: bool,
        cycle_policy: CyclePolicy,
    ) -> Self {
        Self {
            normalization,
            default_position: check_statement_position,
            position: check_statement_position,
            cycle_policy,
            in_progress: HashSet::new(),
            trail: Vec::new(),
            mismatches: None,
        }
    }

    /// Collect mismatches while comparing.
    pub(crate) fn recording(mut self) -> Self {
        self.mismatches = Some(Vec::new());
        self
    }

    pub(crate) fn take_mismatches(&mut self) -> Vec<Mismatch> {
        self.mismatches.take().unwrap_or_default()
    }

    /// Whether the statement being compared must also sit among similar neighbors.
    pub fn check_statement_position(&self) -> bool {
        self.position
    }

    /// Compare two nodes with the run's position sensitivity.
    pub fn similar<'m>(&mut self, a: NodeRef<'m>, b: NodeRef<'m>) -> Similarity {
        let position = self.default_position;
        evaluate(self, a, b, position)
    }

    /// Compare two optional nodes: both absent is `Same`, one absent is `Different`.
    pub fn similar_opt<'m>(&mut self, a: Option<NodeRef<'m>>, b: Option<NodeRef<'m>>) -> Similarity {
        let position = self.default_position;
        self.evaluate_opt(a, b, position)
    }

    /// Compare two optional nodes without looking at their neighbors.
    pub fn similar_ignoring_position<'m>(
        &mut self,
        a: Option<NodeRef<'m>>,
        b: Option<NodeRef<'m>>,
    ) -> Similarity {
        self.evaluate_opt(a, b, false)
    }

    /// Compare the first node of `feature` on both sides.
    pub fn similar_feature<'m>(
        &mut self,
        a: NodeRef<'m>,
        b: NodeRef<'m>,
        feature: Feature,
    ) -> Similarity {
        self.similar_opt(a.get(feature), b.get(feature))
    }

    /// Pairwise comparison of two lists.
    ///
    /// Lists of different length are `Different`; otherwise the verdicts of
    /// the pairs are combined with [`Similarity::and`].
    pub fn all_similar<'m>(&mut self, a: &[NodeRef<'m>], b: &[NodeRef<'m>]) -> Similarity {
        if a.len() != b.len() {
            log::trace!("list length {} differs from {}", a.len(), b.len());
            return Similarity::Different;
        }
        let mut result = Similarity::Same;
        for (x, y) in a.iter().zip(b) {
            result = result.and(self.similar(*x, *y));
            if result.is_different() {
                break;
            }
        }
        result
    }

    /// Pairwise comparison of all nodes of `feature` on both sides.
    pub fn all_similar_feature<'m>(
        &mut self,
        a: NodeRef<'m>,
        b: NodeRef<'m>,
        feature: Feature,
    ) -> Similarity {
        self.all_similar(&a.get_all(feature), &b.get_all(feature))
    }

    /// Compare a name of the first argument with one of the second through
    /// the normalization table of `category`.
    pub fn names_match(
        &self,
        category: NameCategory,
        left: Option<&str>,
        right: Option<&str>,
    ) -> Similarity {
        match (left, right) {
            (None, None) => Similarity::Same,
            (Some(left), Some(right)) => {
                Similarity::from_bool(self.normalization.names_match(category, left, right))
            }
            _ => Similarity::Different,
        }
    }

    /// Compare two leaf values in both directions.
    ///
    /// Both absent is `Same`. Leaf equality may come from an external model
    /// library and is not trusted to be symmetric, so either direction
    /// reporting inequality makes the pair `Different`.
    pub fn values_equal(&self, a: Option<&Value>, b: Option<&Value>) -> Similarity {
        match (a, b) {
            (None, None) => Similarity::Same,
            (Some(a), Some(b)) => Similarity::from_bool(a.equals(b) && b.equals(a)),
            _ => Similarity::Different,
        }
    }

    fn evaluate_opt<'m>(
        &mut self,
        a: Option<NodeRef<'m>>,
        b: Option<NodeRef<'m>>,
        position: bool,
    ) -> Similarity {
        match (a, b) {
            (None, None) => Similarity::Same,
            (Some(a), Some(b)) => evaluate(self, a, b, position),
            (a, b) => {
                self.record(
                    a.map(|n| n.label()),
                    b.map(|n| n.label()),
                    MismatchReason::MissingCounterpart,
                );
                Similarity::Different
            }
        }
    }

    /// Mark a pair as being compared with the given position sensitivity;
    /// `false` when it already is.
    ///
    /// The same pair asked with and without position checking are separate
    /// questions, so only a repeat of both counts as a cycle.
    pub(crate) fn enter(&mut self, a: NodeRef<'_>, b: NodeRef<'_>, position: bool) -> bool {
        self.in_progress.insert(pair_key(a, b, position))
    }

    pub(crate) fn leave(&mut self, a: NodeRef<'_>, b: NodeRef<'_>, position: bool) {
        self.in_progress.remove(&pair_key(a, b, position));
    }

    pub(crate) fn cycle_verdict(&self) -> Similarity {
        self.cycle_policy.verdict()
    }

    /// Swap in the position sensitivity of a pair, returning the previous one.
    pub(crate) fn set_position(&mut self, position: bool) -> bool {
        std::mem::replace(&mut self.position, position)
    }

    pub(crate) fn is_recording(&self) -> bool {
        self.mismatches.is_some()
    }

    pub(crate) fn push_trail(&mut self, label: String) {
        if self.is_recording() {
            self.trail.push(label);
        }
    }

    pub(crate) fn pop_trail(&mut self) {
        if self.is_recording() {
            self.trail.pop();
        }
    }

    pub(crate) fn record(
        &mut self,
        left: Option<String>,
        right: Option<String>,
        reason: MismatchReason,
    ) {
        if let Some(mismatches) = self.mismatches.as_mut() {
            mismatches.push(Mismatch {
                path: if self.trail.is_empty() {
                    "root".to_string()
                } else {
                    self.trail.join(" > ")
                },
                left,
                right,
                reason,
            });
        }
    }
}
