//! Comparison rules, one module per node category.
//!
//! Every rule receives two nodes of the same kind and the run's [`Context`],
//! and re-enters the engine through the context for nested comparisons.

mod annotations;
mod classifiers;
mod commons;
mod containers;
mod expressions;
mod generics;
mod imports;
mod instantiations;
mod literals;
mod members;
mod modules;
mod parameters;
mod references;
mod statements;
mod types;
mod variables;

use java_model::{Category, Feature, NodeRef};

use crate::context::Context;
use crate::normalization::NameCategory;
use crate::Similarity;

/// Route a pair of same-kind nodes to the rule of their category.
pub(crate) fn dispatch<'m>(a: NodeRef<'m>, b: NodeRef<'m>, ctx: &mut Context<'_>) -> Similarity {
    debug_assert_eq!(a.kind(), b.kind(), "comparators expect nodes of one kind");

    match a.kind().category() {
        Category::Annotations => annotations::compare(a, b, ctx),
        Category::Classifiers => classifiers::compare(a, b, ctx),
        Category::Commons => commons::compare(a, b, ctx),
        Category::Containers => containers::compare(a, b, ctx),
        Category::Generics => generics::compare(a, b, ctx),
        Category::Imports => imports::compare(a, b, ctx),
        Category::Instantiations => instantiations::compare(a, b, ctx),
        Category::Literals => literals::compare(a, b, ctx),
        Category::Members => members::compare(a, b, ctx),
        Category::Modules => modules::compare(a, b, ctx),
        Category::Parameters => parameters::compare(a, b, ctx),
        Category::References => references::compare(a, b, ctx),
        Category::Statements => statements::compare(a, b, ctx),
        Category::Types => types::compare(a, b, ctx),
        Category::Variables => variables::compare(a, b, ctx),
        Category::Expressions => expressions::compare(a, b, ctx),
    }
}

/// Raw name equality; two unnamed nodes are equal.
pub(super) fn names_equal(a: NodeRef<'_>, b: NodeRef<'_>, ctx: &Context<'_>) -> Similarity {
    ctx.values_equal(a.attr(Feature::Name), b.attr(Feature::Name))
}

/// Namespace strings through the namespace table; missing namespaces read as empty.
pub(super) fn namespaces_match(a: NodeRef<'_>, b: NodeRef<'_>, ctx: &Context<'_>) -> Similarity {
    let (left, right) = (a.namespaces_as_string(), b.namespaces_as_string());
    ctx.names_match(NameCategory::Namespace, Some(&left), Some(&right))
}
