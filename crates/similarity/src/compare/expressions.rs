use java_model::{Feature, NodeKind, NodeRef};

use crate::context::Context;
use crate::Similarity;

/// Operators and modifiers compare their symbol; array dimensions always
/// match. Everything else compares its child slots pairwise.
pub(super) fn compare<'m>(a: NodeRef<'m>, b: NodeRef<'m>, ctx: &mut Context<'_>) -> Similarity {
    match a.kind() {
        NodeKind::Operator | NodeKind::Modifier => {
            ctx.values_equal(a.attr(Feature::Value), b.attr(Feature::Value))
        }
        NodeKind::ArrayDimension => Similarity::Same,
        _ => compare_children(a, b, ctx),
    }
}

fn compare_children<'m>(a: NodeRef<'m>, b: NodeRef<'m>, ctx: &mut Context<'_>) -> Similarity {
    let mut features = a.child_features();
    for feature in b.child_features() {
        if !features.contains(&feature) {
            features.push(feature);
        }
    }

    let mut result = Similarity::Same;
    for feature in features {
        result = result.and(ctx.all_similar_feature(a, b, feature));
        if result.is_different() {
            log::trace!("{} differs in {}", a.kind(), feature);
            break;
        }
    }
    result
}
