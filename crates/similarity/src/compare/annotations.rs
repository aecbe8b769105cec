use java_model::{Feature, NodeKind, NodeRef};

use super::namespaces_match;
use crate::context::Context;
use crate::Similarity;

pub(super) fn compare<'m>(a: NodeRef<'m>, b: NodeRef<'m>, ctx: &mut Context<'_>) -> Similarity {
    match a.kind() {
        NodeKind::AnnotationInstance => ctx
            .similar_feature(a, b, Feature::Target)
            .and_then(|| namespaces_match(a, b, ctx)),
        // an inconclusive attribute still counts as a match
        NodeKind::AnnotationAttributeSetting => {
            Similarity::from_bool(ctx.similar_feature(a, b, Feature::Attribute).is_not_false())
        }
        NodeKind::SingleAnnotationParameter => {
            ctx.similar_feature(a, b, Feature::ParameterValue)
        }
        _ => ctx.all_similar_feature(a, b, Feature::Settings),
    }
}
