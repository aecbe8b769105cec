use java_model::NodeRef;

use super::names_equal;
use crate::context::Context;
use crate::Similarity;

/// Jump labels and empty members are compared by name.
pub(super) fn compare<'m>(a: NodeRef<'m>, b: NodeRef<'m>, ctx: &mut Context<'_>) -> Similarity {
    names_equal(a, b, ctx)
}
