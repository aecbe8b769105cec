use java_model::{Feature, NodeKind, NodeRef};

use crate::context::Context;
use crate::Similarity;

/// Module references and exports/opens directives compare namespace parts
/// one by one; the other directives follow the module or type they name.
pub(super) fn compare<'m>(a: NodeRef<'m>, b: NodeRef<'m>, ctx: &mut Context<'_>) -> Similarity {
    match a.kind() {
        NodeKind::RequiresModuleDirective => ctx.similar_feature(a, b, Feature::Module),
        NodeKind::ProvidesModuleDirective | NodeKind::UsesModuleDirective => {
            ctx.similar_feature(a, b, Feature::TypeReference)
        }
        _ => namespace_parts_equal(a, b),
    }
}

fn namespace_parts_equal(a: NodeRef<'_>, b: NodeRef<'_>) -> Similarity {
    let left = a.namespaces().unwrap_or_default();
    let right = b.namespaces().unwrap_or_default();
    Similarity::from_bool(
        left.len() == right.len() && left.iter().zip(right).all(|(l, r)| l == r),
    )
}
