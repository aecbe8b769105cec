use java_model::{Feature, NodeKind, NodeRef};

use super::namespaces_match;
use crate::context::Context;
use crate::Similarity;

/// Single-type and static member imports need similar targets and the same
/// namespace; on-demand imports only compare the namespace.
pub(super) fn compare<'m>(a: NodeRef<'m>, b: NodeRef<'m>, ctx: &mut Context<'_>) -> Similarity {
    match a.kind() {
        NodeKind::ClassifierImport => ctx
            .similar_feature(a, b, Feature::Target)
            .and_then(|| namespaces_match(a, b, ctx)),
        NodeKind::StaticMemberImport => ctx
            .all_similar_feature(a, b, Feature::Target)
            .and_then(|| namespaces_match(a, b, ctx)),
        _ => namespaces_match(a, b, ctx),
    }
}

#[cfg(test)]
mod tests {
    use crate::{is_similar, Similarity};
    use java_model::{Feature, ModelBuilder, NodeKind};

    #[test]
    fn test_classifier_import_needs_target_and_namespace() {
        let mut b = ModelBuilder::new();
        let list = b.add_named(NodeKind::Interface, "List");
        let map = b.add_named(NodeKind::Interface, "Map");
        let mut import = |target, ns: &[&str]| {
            let id = b.add(NodeKind::ClassifierImport);
            b.set_namespaces(id, ns).unwrap();
            b.set_reference(id, Feature::Target, target).unwrap();
            id
        };
        let x = import(list, &["java", "util"]);
        let y = import(list, &["java", "util"]);
        let z = import(map, &["java", "util"]);
        let w = import(list, &["java", "awt"]);
        let model = b.build();
        let node = |id| model.node(id).unwrap();

        assert_eq!(is_similar(node(x), node(y), true), Similarity::Same);
        assert_eq!(is_similar(node(x), node(z), true), Similarity::Different);
        assert_eq!(is_similar(node(x), node(w), true), Similarity::Different);
    }

    #[test]
    fn test_package_import_compares_namespace() {
        let mut b = ModelBuilder::new();
        let x = b.add(NodeKind::PackageImport);
        b.set_namespaces(x, &["java", "util"]).unwrap();
        let y = b.add(NodeKind::PackageImport);
        b.set_namespaces(y, &["java", "util"]).unwrap();
        let z = b.add(NodeKind::StaticClassifierImport);
        b.set_namespaces(z, &["java", "util"]).unwrap();
        let model = b.build();
        let node = |id| model.node(id).unwrap();

        assert_eq!(is_similar(node(x), node(y), true), Similarity::Same);
        assert_eq!(is_similar(node(x), node(z), true), Similarity::Different);
    }
}
