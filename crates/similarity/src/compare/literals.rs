use java_model::{Feature, NodeKind, NodeRef};

use crate::context::Context;
use crate::Similarity;

/// Literals are similar when their values are.
///
/// `null`, `this` and `super` carry no value and always match.
pub(super) fn compare<'m>(a: NodeRef<'m>, b: NodeRef<'m>, ctx: &mut Context<'_>) -> Similarity {
    match a.kind() {
        NodeKind::NullLiteral | NodeKind::This | NodeKind::Super => Similarity::Same,
        _ => ctx.values_equal(a.attr(Feature::Value), b.attr(Feature::Value)),
    }
}
