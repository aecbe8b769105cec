use java_model::{Feature, NodeKind, NodeRef};

use super::names_equal;
use crate::context::Context;
use crate::Similarity;

pub(super) fn compare<'m>(a: NodeRef<'m>, b: NodeRef<'m>, ctx: &mut Context<'_>) -> Similarity {
    match a.kind() {
        NodeKind::ClassMethod | NodeKind::InterfaceMethod | NodeKind::Constructor => {
            compare_signature(a, b, ctx)
        }
        NodeKind::AdditionalField => compare_additional_field(a, b, ctx),
        NodeKind::AnnotationAttribute => names_equal(a, b, ctx)
            .and_then(|| ctx.similar_ignoring_position(a.container(), b.container())),
        _ => names_equal(a, b, ctx),
    }
}

/// Name, parameter types and array dimensions, then the declaring type.
///
/// Return types are not part of a signature.
fn compare_signature<'m>(a: NodeRef<'m>, b: NodeRef<'m>, ctx: &mut Context<'_>) -> Similarity {
    names_equal(a, b, ctx)
        .and_then(|| compare_parameters(a, b, ctx))
        .and_then(|| ctx.similar_ignoring_position(a.container(), b.container()))
}

fn compare_parameters<'m>(a: NodeRef<'m>, b: NodeRef<'m>, ctx: &mut Context<'_>) -> Similarity {
    let left = a.get_all(Feature::Parameters);
    let right = b.get_all(Feature::Parameters);
    if left.len() != right.len() {
        return Similarity::Different;
    }

    let mut result = Similarity::Same;
    for (pa, pb) in left.iter().zip(&right) {
        result = result
            .and_then(|| ctx.similar_feature(*pa, *pb, Feature::TypeReference))
            .and_then(|| {
                ctx.values_equal(pa.attr(Feature::ArrayDimensions), pb.attr(Feature::ArrayDimensions))
            });
        if result.is_different() {
            break;
        }
    }
    result
}

/// `int a, b;` declares `b` as an additional field of `a`'s declaration.
fn compare_additional_field<'m>(
    a: NodeRef<'m>,
    b: NodeRef<'m>,
    ctx: &mut Context<'_>,
) -> Similarity {
    names_equal(a, b, ctx)
        .and_then(|| ctx.similar_feature(a, b, Feature::TypeReference))
        .and_then(|| ctx.similar_ignoring_position(a.container(), b.container()))
        .and_then(|| match (a.container(), b.container()) {
            (Some(ca), Some(cb)) => ctx.similar_ignoring_position(ca.container(), cb.container()),
            _ => Similarity::Same,
        })
}
