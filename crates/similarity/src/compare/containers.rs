use java_model::{NodeKind, NodeRef};

use super::namespaces_match;
use crate::context::Context;
use crate::normalization::NameCategory;
use crate::Similarity;

pub(super) fn compare<'m>(a: NodeRef<'m>, b: NodeRef<'m>, ctx: &mut Context<'_>) -> Similarity {
    match a.kind() {
        NodeKind::CompilationUnit => ctx
            .names_match(NameCategory::CompilationUnit, a.name(), b.name())
            .and_then(|| namespaces_match(a, b, ctx)),
        NodeKind::Package => {
            let (left, right) = (package_path(a), package_path(b));
            ctx.names_match(NameCategory::Package, Some(&left), Some(&right))
        }
        _ => Similarity::from_bool(a.name() == b.name()),
    }
}

/// Namespaces and name of a package joined with `.`.
fn package_path(node: NodeRef<'_>) -> String {
    node.namespaces()
        .unwrap_or_default()
        .iter()
        .map(String::as_str)
        .chain(node.name())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_similar, NormalizationService, SimilarityChecker};
    use java_model::ModelBuilder;

    #[test]
    fn test_package_path() {
        let mut b = ModelBuilder::new();
        let p = b.add_named(NodeKind::Package, "util");
        b.set_namespaces(p, &["org", "example"]).unwrap();
        let bare = b.add(NodeKind::Package);
        let model = b.build();
        assert_eq!(package_path(model.node(p).unwrap()), "org.example.util");
        assert_eq!(package_path(model.node(bare).unwrap()), "");
    }

    #[test]
    fn test_compilation_units() {
        let mut b = ModelBuilder::new();
        let x = b.add_named(NodeKind::CompilationUnit, "Foo.java");
        b.set_namespaces(x, &["a"]).unwrap();
        let y = b.add_named(NodeKind::CompilationUnit, "Foo.java");
        b.set_namespaces(y, &["b"]).unwrap();
        let z = b.add_named(NodeKind::CompilationUnit, "Foo.java");
        b.set_namespaces(z, &["a"]).unwrap();
        let model = b.build();
        let (x, y, z) = (
            model.node(x).unwrap(),
            model.node(y).unwrap(),
            model.node(z).unwrap(),
        );

        assert_eq!(is_similar(x, y, true), Similarity::Different);
        assert_eq!(is_similar(x, z, true), Similarity::Same);

        let checker = SimilarityChecker::new()
            .with_normalization(NormalizationService::identity().with_rename(NameCategory::Namespace, "a", "b"));
        assert_eq!(checker.is_similar(x, y, true), Similarity::Same);
    }

    #[test]
    fn test_modules_compare_raw_names() {
        let mut b = ModelBuilder::new();
        let x = b.add_named(NodeKind::Module, "app");
        let y = b.add_named(NodeKind::Module, "lib");
        let model = b.build();
        let checker = SimilarityChecker::new().with_normalization(
            NormalizationService::identity().with_rename(NameCategory::Package, "app", "lib"),
        );
        assert_eq!(
            checker.is_similar(model.node(x).unwrap(), model.node(y).unwrap(), true),
            Similarity::Different
        );
    }
}
