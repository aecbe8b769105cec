use java_model::{Feature, NodeKind, NodeRef};

use super::namespaces_match;
use crate::context::Context;
use crate::Similarity;

/// Classifier references follow their target; primitive and inferred types
/// match any type of the same kind.
pub(super) fn compare<'m>(a: NodeRef<'m>, b: NodeRef<'m>, ctx: &mut Context<'_>) -> Similarity {
    match a.kind() {
        NodeKind::ClassifierReference => ctx.similar_feature(a, b, Feature::Target),
        NodeKind::NamespaceClassifierReference => namespaces_match(a, b, ctx).and_then(|| {
            ctx.similar_opt(
                a.get_last(Feature::ClassifierReferences),
                b.get_last(Feature::ClassifierReferences),
            )
        }),
        _ => Similarity::Same,
    }
}
