use java_model::{Feature, NodeKind, NodeRef};

use super::names_equal;
use crate::context::Context;
use crate::Similarity;

pub(super) fn compare<'m>(a: NodeRef<'m>, b: NodeRef<'m>, ctx: &mut Context<'_>) -> Similarity {
    match a.kind() {
        NodeKind::UnknownTypeArgument => Similarity::Same,
        NodeKind::TypeParameter => {
            names_equal(a, b, ctx).and_then(|| ctx.all_similar_feature(a, b, Feature::Extends))
        }
        // qualified, extends and super type arguments wrap a type
        _ => ctx.similar_feature(a, b, Feature::TypeReference),
    }
}
