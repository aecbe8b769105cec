use java_model::{Feature, NodeKind, NodeRef};

use crate::context::Context;
use crate::Similarity;

/// Constructor calls need a similar target type (or `this`/`super` target),
/// pairwise similar arguments and a similar `next` reference.
pub(super) fn compare<'m>(a: NodeRef<'m>, b: NodeRef<'m>, ctx: &mut Context<'_>) -> Similarity {
    let target = match a.kind() {
        NodeKind::NewConstructorCall => Feature::TypeReference,
        _ => Feature::Target,
    };
    ctx.similar_feature(a, b, target)
        .and_then(|| ctx.all_similar_feature(a, b, Feature::Arguments))
        .and_then(|| ctx.similar_feature(a, b, Feature::Next))
}

#[cfg(test)]
mod tests {
    use crate::{is_similar, Similarity};
    use java_model::{Feature, Model, ModelBuilder, NodeId, NodeKind};

    fn new_call(b: &mut ModelBuilder, class: NodeId, args: &[i64]) -> NodeId {
        let call = b.add(NodeKind::NewConstructorCall);
        let ty = b
            .add_child(call, Feature::TypeReference, NodeKind::ClassifierReference)
            .unwrap();
        b.set_reference(ty, Feature::Target, class).unwrap();
        for arg in args {
            let lit = b
                .add_child(call, Feature::Arguments, NodeKind::DecimalIntegerLiteral)
                .unwrap();
            b.set_attr(lit, Feature::Value, *arg).unwrap();
        }
        call
    }

    fn compare(model: &Model, x: NodeId, y: NodeId) -> Similarity {
        is_similar(model.node(x).unwrap(), model.node(y).unwrap(), true)
    }

    #[test]
    fn test_new_constructor_call() {
        let mut b = ModelBuilder::new();
        let foo = b.add_named(NodeKind::Class, "Foo");
        let bar = b.add_named(NodeKind::Class, "Bar");
        let x = new_call(&mut b, foo, &[1, 2]);
        let y = new_call(&mut b, foo, &[1, 2]);
        let z = new_call(&mut b, foo, &[1]);
        let w = new_call(&mut b, bar, &[1, 2]);
        let model = b.build();

        assert_eq!(compare(&model, x, y), Similarity::Same);
        assert_eq!(compare(&model, x, z), Similarity::Different);
        assert_eq!(compare(&model, x, w), Similarity::Different);
    }

    #[test]
    fn test_explicit_constructor_call_target() {
        let mut b = ModelBuilder::new();
        let mut call = |kind| {
            let id = b.add(NodeKind::ExplicitConstructorCall);
            b.add_child(id, Feature::Target, kind).unwrap();
            id
        };
        let this = call(NodeKind::This);
        let this2 = call(NodeKind::This);
        let sup = call(NodeKind::Super);
        let model = b.build();

        assert_eq!(compare(&model, this, this2), Similarity::Same);
        assert_eq!(compare(&model, this, sup), Similarity::Different);
    }
}
