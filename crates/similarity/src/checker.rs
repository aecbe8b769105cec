//! Entry points of the engine and the dispatch of node pairs to comparators.

use std::path::Path;

use java_model::NodeRef;
use once_cell::sync::Lazy;

use crate::compare;
use crate::config::SimilarityConfig;
use crate::context::Context;
use crate::error::ConfigResult;
use crate::normalization::NormalizationService;
use crate::report::{MismatchReason, SimilarityReport};
use crate::Similarity;

/// Lazily initialized checker with default settings and no renames.
static DEFAULT_CHECKER: Lazy<SimilarityChecker> = Lazy::new(SimilarityChecker::new);

/// Decides whether two Java model elements are similar.
///
/// A checker owns its configuration and compiled rename tables and can be
/// shared between threads; every call runs with fresh traversal state.
///
/// # Example
///
/// ```
/// use java_model::{ModelBuilder, NodeKind};
/// use java_similarity::{Similarity, SimilarityChecker};
///
/// let mut left = ModelBuilder::new();
/// let a = left.add_named(NodeKind::Class, "Foo");
/// let left = left.build();
///
/// let mut right = ModelBuilder::new();
/// let b = right.add_named(NodeKind::Class, "Foo");
/// let right = right.build();
///
/// let checker = SimilarityChecker::new();
/// let verdict = checker.is_similar(left.node(a).unwrap(), right.node(b).unwrap(), true);
/// assert_eq!(verdict, Similarity::Same);
/// ```
#[derive(Debug, Clone)]
pub struct SimilarityChecker {
    config: SimilarityConfig,
    normalization: NormalizationService,
}

impl SimilarityChecker {
    /// Create a checker with default settings and identity normalization.
    pub fn new() -> Self {
        Self {
            config: SimilarityConfig::default(),
            normalization: NormalizationService::identity(),
        }
    }

    /// Get a reference to the lazily-initialized default checker.
    pub fn default_ref() -> &'static Self {
        &DEFAULT_CHECKER
    }

    /// Create a checker from a configuration, compiling its rename tables.
    pub fn from_config(config: SimilarityConfig) -> ConfigResult<Self> {
        let normalization =
            NormalizationService::from_config(&config.normalization, config.normalization_mode)?;
        Ok(Self {
            config,
            normalization,
        })
    }

    /// Create a checker from a YAML or JSON configuration file.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        Self::from_config(SimilarityConfig::from_path(path)?)
    }

    /// Replace the rename tables used by subsequent checks.
    pub fn with_normalization(mut self, normalization: NormalizationService) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn set_normalization(&mut self, normalization: NormalizationService) {
        self.normalization = normalization;
    }

    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    pub fn normalization(&self) -> &NormalizationService {
        &self.normalization
    }

    fn context(&self, check_statement_position: bool) -> Context<'_> {
        Context::new(
            &self.normalization,
            check_statement_position,
            self.config.cycle_policy,
        )
    }

    /// Compare two elements.
    ///
    /// `check_statement_position` makes statements also depend on their
    /// neighbors within the enclosing statement list.
    pub fn is_similar<'m>(
        &self,
        a: NodeRef<'m>,
        b: NodeRef<'m>,
        check_statement_position: bool,
    ) -> Similarity {
        let mut ctx = self.context(check_statement_position);
        evaluate(&mut ctx, a, b, check_statement_position)
    }

    /// Compare two elements with the configured position sensitivity.
    pub fn compare<'m>(&self, a: NodeRef<'m>, b: NodeRef<'m>) -> Similarity {
        self.is_similar(a, b, self.config.check_statement_position)
    }

    /// Compare two optional elements: both absent is `Same`, one absent is `Different`.
    pub fn is_similar_opt<'m>(
        &self,
        a: Option<NodeRef<'m>>,
        b: Option<NodeRef<'m>>,
        check_statement_position: bool,
    ) -> Similarity {
        match (a, b) {
            (None, None) => Similarity::Same,
            (Some(a), Some(b)) => self.is_similar(a, b, check_statement_position),
            _ => Similarity::Different,
        }
    }

    /// Compare two lists pairwise.
    ///
    /// Empty lists are `Same`; lists of different length are `Different`.
    pub fn are_similar<'m>(&self, a: &[NodeRef<'m>], b: &[NodeRef<'m>]) -> Similarity {
        let mut ctx = self.context(self.config.check_statement_position);
        ctx.all_similar(a, b)
    }

    /// Compare two elements and collect the mismatches found on the way.
    pub fn explain<'m>(
        &self,
        a: NodeRef<'m>,
        b: NodeRef<'m>,
        check_statement_position: bool,
    ) -> SimilarityReport {
        let mut ctx = self.context(check_statement_position).recording();
        let verdict = evaluate(&mut ctx, a, b, check_statement_position);
        SimilarityReport {
            verdict,
            mismatches: ctx.take_mismatches(),
        }
    }
}

impl Default for SimilarityChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two elements with the default checker.
pub fn is_similar<'m>(a: NodeRef<'m>, b: NodeRef<'m>, check_statement_position: bool) -> Similarity {
    SimilarityChecker::default_ref().is_similar(a, b, check_statement_position)
}

/// Compare two lists pairwise with the default checker.
pub fn are_similar<'m>(a: &[NodeRef<'m>], b: &[NodeRef<'m>]) -> Similarity {
    SimilarityChecker::default_ref().are_similar(a, b)
}

/// Compare one pair: identity, kind check, cycle guard, then the comparator
/// of the kind's category.
pub(crate) fn evaluate<'m>(
    ctx: &mut Context<'_>,
    a: NodeRef<'m>,
    b: NodeRef<'m>,
    check_statement_position: bool,
) -> Similarity {
    if a == b {
        return Similarity::Same;
    }

    if a.kind() != b.kind() {
        log::trace!("kind mismatch: {:?} vs {:?}", a, b);
        if ctx.is_recording() {
            ctx.push_trail(a.label());
            ctx.record(Some(a.label()), Some(b.label()), MismatchReason::KindMismatch);
            ctx.pop_trail();
        }
        return Similarity::Different;
    }

    if !ctx.enter(a, b, check_statement_position) {
        let verdict = ctx.cycle_verdict();
        log::debug!("cycle on {:?} vs {:?}, treating as {}", a, b, verdict);
        return verdict;
    }
    if ctx.is_recording() {
        ctx.push_trail(a.label());
    }

    let saved = ctx.set_position(check_statement_position);
    let verdict = compare::dispatch(a, b, ctx);
    ctx.set_position(saved);

    log::trace!("{:?} ~ {:?}: {}", a, b, verdict);
    if verdict.is_different() && ctx.is_recording() {
        ctx.record(Some(a.label()), Some(b.label()), MismatchReason::RuleFailed);
    }

    if ctx.is_recording() {
        ctx.pop_trail();
    }
    ctx.leave(a, b, check_statement_position);
    verdict
}
