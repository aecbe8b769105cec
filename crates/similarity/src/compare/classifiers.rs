use java_model::{NodeKind, NodeRef};

use crate::context::Context;
use crate::normalization::NameCategory;
use crate::Similarity;

/// Named type declarations match by fully qualified name, normalized on the
/// left. Anonymous classes always match.
pub(super) fn compare<'m>(a: NodeRef<'m>, b: NodeRef<'m>, ctx: &mut Context<'_>) -> Similarity {
    if a.kind() == NodeKind::AnonymousClass {
        return Similarity::Same;
    }
    let left = qualified_name(a);
    let right = qualified_name(b);
    ctx.names_match(NameCategory::Classifier, left.as_deref(), right.as_deref())
}

/// Fully qualified name of a classifier, e.g. `org.example.Outer.Inner`.
///
/// Explicit namespaces on the node win; otherwise the name is assembled from
/// enclosing classifiers and the namespaces of the compilation unit.
pub(crate) fn qualified_name(node: NodeRef<'_>) -> Option<String> {
    let name = node.name()?;
    if let Some(parts) = node.namespaces().filter(|p| !p.is_empty()) {
        return Some(format!("{}.{}", parts.join("."), name));
    }

    let mut segments = vec![name.to_string()];
    for ancestor in node.ancestors() {
        if ancestor.kind().is_concrete_classifier() {
            if let Some(outer) = ancestor.name() {
                segments.push(outer.to_string());
            }
        } else if ancestor.kind() == NodeKind::CompilationUnit {
            if let Some(parts) = ancestor.namespaces() {
                segments.extend(parts.iter().rev().cloned());
            }
            break;
        }
    }
    segments.reverse();
    Some(segments.join("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_similar, NormalizationService, SimilarityChecker};
    use java_model::{Feature, ModelBuilder};

    fn nested_class() -> java_model::Model {
        let mut b = ModelBuilder::new();
        let unit = b.add_named(NodeKind::CompilationUnit, "Outer.java");
        b.set_namespaces(unit, &["org", "example"]).unwrap();
        let outer = b
            .add_named_child(unit, Feature::Classifiers, NodeKind::Class, "Outer")
            .unwrap();
        b.add_named_child(outer, Feature::Members, NodeKind::Interface, "Inner")
            .unwrap();
        b.build()
    }

    #[test]
    fn test_qualified_name_from_containers() {
        let model = nested_class();
        let inner = model.nodes_of_kind(NodeKind::Interface).next().unwrap();
        assert_eq!(
            qualified_name(inner).as_deref(),
            Some("org.example.Outer.Inner")
        );
    }

    #[test]
    fn test_explicit_namespaces_win() {
        let mut b = ModelBuilder::new();
        let class = b.add_named(NodeKind::Class, "Foo");
        b.set_namespaces(class, &["a", "b"]).unwrap();
        let model = b.build();
        assert_eq!(
            qualified_name(model.node(class).unwrap()).as_deref(),
            Some("a.b.Foo")
        );
    }

    #[test]
    fn test_renamed_classifier() {
        let build = |ns: &str| {
            let mut b = ModelBuilder::new();
            let class = b.add_named(NodeKind::Class, "Foo");
            b.set_namespaces(class, &[ns]).unwrap();
            (b.build(), class)
        };
        let (old, a) = build("old");
        let (new, b) = build("new");
        let (a, b) = (old.node(a).unwrap(), new.node(b).unwrap());

        assert_eq!(is_similar(a, b, true), Similarity::Different);
        let checker = SimilarityChecker::new().with_normalization(
            NormalizationService::identity().with_rename(NameCategory::Classifier, "old.Foo", "new.Foo"),
        );
        assert_eq!(checker.is_similar(a, b, true), Similarity::Same);
    }

    #[test]
    fn test_anonymous_classes_match() {
        let mut b = ModelBuilder::new();
        let x = b.add(NodeKind::AnonymousClass);
        let y = b.add(NodeKind::AnonymousClass);
        b.add_named_child(y, Feature::Members, NodeKind::ClassMethod, "run")
            .unwrap();
        let model = b.build();
        assert_eq!(
            is_similar(model.node(x).unwrap(), model.node(y).unwrap(), true),
            Similarity::Same
        );
    }
}
