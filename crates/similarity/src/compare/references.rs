use java_model::{Feature, NodeKind, NodeRef};

use crate::context::Context;
use crate::Similarity;

pub(super) fn compare<'m>(a: NodeRef<'m>, b: NodeRef<'m>, ctx: &mut Context<'_>) -> Similarity {
    match a.kind() {
        NodeKind::IdentifierReference => compare_identifier(a, b, ctx),
        NodeKind::MethodCall => ctx
            .similar_feature(a, b, Feature::Target)
            .and_then(|| ctx.all_similar_feature(a, b, Feature::Arguments))
            .and_then(|| ctx.similar_feature(a, b, Feature::Next)),
        NodeKind::ElementReference => ctx.similar_feature(a, b, Feature::Target),
        NodeKind::StringReference | NodeKind::TextBlockReference => {
            ctx.values_equal(a.attr(Feature::Value), b.attr(Feature::Value))
        }
        NodeKind::SelfReference => ctx
            .values_equal(a.attr(Feature::SelfKind), b.attr(Feature::SelfKind))
            .and_then(|| ctx.similar_feature(a, b, Feature::Next)),
        NodeKind::PrimitiveTypeReference => ctx
            .similar_feature(a, b, Feature::PrimitiveType)
            .and_then(|| ctx.similar_feature(a, b, Feature::Next)),
        _ => Similarity::Same,
    }
}

/// Target, the target's container, array selectors and then `next`.
///
/// The containers of the targets are skipped when either of them encloses
/// the reference itself, since comparing it would lead back here.
fn compare_identifier<'m>(a: NodeRef<'m>, b: NodeRef<'m>, ctx: &mut Context<'_>) -> Similarity {
    let (target_a, target_b) = (a.get(Feature::Target), b.get(Feature::Target));
    let mut result = ctx.similar_opt(target_a, target_b);

    if let (Some(target_a), Some(target_b)) = (target_a, target_b) {
        let (container_a, container_b) = (target_a.container(), target_b.container());
        let encloses = |container: Option<NodeRef<'m>>, reference: NodeRef<'m>| {
            container.is_some_and(|c| c.is_ancestor_or_self_of(reference))
        };
        if encloses(container_a, a) || encloses(container_b, b) {
            log::trace!("skipping enclosing target container of {:?}", a);
        } else {
            result = result.and_then(|| ctx.similar_ignoring_position(container_a, container_b));
        }
    }

    result
        .and_then(|| ctx.all_similar_feature(a, b, Feature::ArraySelectors))
        .and_then(|| ctx.similar_feature(a, b, Feature::Next))
}
