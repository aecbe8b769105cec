use java_model::NodeRef;

use super::names_equal;
use crate::context::Context;
use crate::Similarity;

/// Parameters match by name; their types are part of the method signature instead.
pub(super) fn compare<'m>(a: NodeRef<'m>, b: NodeRef<'m>, ctx: &mut Context<'_>) -> Similarity {
    names_equal(a, b, ctx)
}

#[cfg(test)]
mod tests {
    use crate::{is_similar, Similarity};
    use java_model::{Feature, ModelBuilder, NodeKind};

    #[test]
    fn test_parameters_compare_names() {
        for kind in [
            NodeKind::OrdinaryParameter,
            NodeKind::ReceiverParameter,
            NodeKind::VariableLengthParameter,
            NodeKind::CatchParameter,
        ] {
            let mut b = ModelBuilder::new();
            let x = b.add_named(kind, "args");
            let y = b.add_named(kind, "args");
            let z = b.add_named(kind, "rest");
            let model = b.build();
            let node = |id| model.node(id).unwrap();

            assert_eq!(is_similar(node(x), node(y), true), Similarity::Same, "{kind}");
            assert_eq!(is_similar(node(x), node(z), true), Similarity::Different, "{kind}");
        }
    }

    #[test]
    fn test_parameter_type_is_ignored() {
        let mut b = ModelBuilder::new();
        let x = b.add_named(NodeKind::OrdinaryParameter, "n");
        b.add_child(x, Feature::TypeReference, NodeKind::IntType)
            .unwrap();
        let y = b.add_named(NodeKind::OrdinaryParameter, "n");
        b.add_child(y, Feature::TypeReference, NodeKind::LongType)
            .unwrap();
        let model = b.build();

        assert_eq!(
            is_similar(model.node(x).unwrap(), model.node(y).unwrap(), true),
            Similarity::Same
        );
    }
}
