//! Shared model fixtures for the integration tests.

#![allow(dead_code)]

use java_model::{Feature, Model, ModelBuilder, NodeId, NodeKind, NodeRef};

/// Install a test logger so `RUST_LOG=trace` shows the comparison steps.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Ids of the interesting nodes of [`greeter`].
pub struct Greeter {
    pub model: Model,
    pub unit: NodeId,
    pub class: NodeId,
    pub field: NodeId,
    pub method: NodeId,
    pub block: NodeId,
    pub statements: Vec<NodeId>,
}

impl Greeter {
    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        self.model.node(id).unwrap()
    }

    pub fn statement(&self, index: usize) -> NodeRef<'_> {
        self.node(self.statements[index])
    }

    pub fn statement_refs(&self) -> Vec<NodeRef<'_>> {
        self.statements.iter().map(|id| self.node(*id)).collect()
    }
}

/// Builds the model of
///
/// ```java
/// package <namespace>;
///
/// import java.util.List;
///
/// public class <class_name> {
///     int count;
///
///     void greet(String name) {
///         {
///             String message = "<greeting>";
///             System.out.println(message);
///             count = count + 1;
///             return;
///         }
///     }
/// }
/// ```
pub fn greeter(namespace: &[&str], class_name: &str, greeting: &str) -> Greeter {
    let mut b = ModelBuilder::new();

    let list = b.add_named(NodeKind::Interface, "List");
    b.set_namespaces(list, &["java", "util"]).unwrap();
    let string = b.add_named(NodeKind::Class, "String");
    b.set_namespaces(string, &["java", "lang"]).unwrap();
    let stream = b.add_named(NodeKind::Class, "PrintStream");
    b.set_namespaces(stream, &["java", "io"]).unwrap();
    let println = b
        .add_named_child(stream, Feature::Members, NodeKind::ClassMethod, "println")
        .unwrap();

    let unit = b.add_named(NodeKind::CompilationUnit, &format!("{class_name}.java"));
    b.set_namespaces(unit, namespace).unwrap();
    let import = b
        .add_child(unit, Feature::Imports, NodeKind::ClassifierImport)
        .unwrap();
    b.set_namespaces(import, &["java", "util"]).unwrap();
    b.set_reference(import, Feature::Target, list).unwrap();

    let class = b
        .add_named_child(unit, Feature::Classifiers, NodeKind::Class, class_name)
        .unwrap();
    let public = b
        .add_child(class, Feature::Modifiers, NodeKind::Modifier)
        .unwrap();
    b.set_attr(public, Feature::Value, "public").unwrap();

    let field = b
        .add_named_child(class, Feature::Members, NodeKind::Field, "count")
        .unwrap();
    b.add_child(field, Feature::TypeReference, NodeKind::IntType)
        .unwrap();

    let method = b
        .add_named_child(class, Feature::Members, NodeKind::ClassMethod, "greet")
        .unwrap();
    b.add_child(method, Feature::TypeReference, NodeKind::VoidType)
        .unwrap();
    let param = b
        .add_named_child(method, Feature::Parameters, NodeKind::OrdinaryParameter, "name")
        .unwrap();
    let param_type = b
        .add_child(param, Feature::TypeReference, NodeKind::ClassifierReference)
        .unwrap();
    b.set_reference(param_type, Feature::Target, string).unwrap();

    let block = b
        .add_child(method, Feature::Statements, NodeKind::Block)
        .unwrap();

    // String message = "<greeting>";
    let declaration = b
        .add_child(block, Feature::Statements, NodeKind::LocalVariableStatement)
        .unwrap();
    let message = b
        .add_named_child(declaration, Feature::Variable, NodeKind::LocalVariable, "message")
        .unwrap();
    let init = b
        .add_child(message, Feature::InitialValue, NodeKind::StringReference)
        .unwrap();
    b.set_attr(init, Feature::Value, greeting).unwrap();

    // System.out.println(message);
    let print = b
        .add_child(block, Feature::Statements, NodeKind::ExpressionStatement)
        .unwrap();
    let call = b
        .add_child(print, Feature::Expression, NodeKind::MethodCall)
        .unwrap();
    b.set_reference(call, Feature::Target, println).unwrap();
    let argument = b
        .add_child(call, Feature::Arguments, NodeKind::IdentifierReference)
        .unwrap();
    b.set_reference(argument, Feature::Target, message).unwrap();

    // count = count + 1;
    let increment = b
        .add_child(block, Feature::Statements, NodeKind::ExpressionStatement)
        .unwrap();
    let assignment = b
        .add_child(increment, Feature::Expression, NodeKind::AssignmentExpression)
        .unwrap();
    let lhs = b
        .add_child(assignment, Feature::Children, NodeKind::IdentifierReference)
        .unwrap();
    b.set_reference(lhs, Feature::Target, field).unwrap();
    let assign = b
        .add_child(assignment, Feature::Operators, NodeKind::Operator)
        .unwrap();
    b.set_attr(assign, Feature::Value, "=").unwrap();
    let sum = b
        .add_child(assignment, Feature::Children, NodeKind::AdditiveExpression)
        .unwrap();
    let read = b
        .add_child(sum, Feature::Children, NodeKind::IdentifierReference)
        .unwrap();
    b.set_reference(read, Feature::Target, field).unwrap();
    let plus = b.add_child(sum, Feature::Operators, NodeKind::Operator).unwrap();
    b.set_attr(plus, Feature::Value, "+").unwrap();
    let one = b
        .add_child(sum, Feature::Children, NodeKind::DecimalIntegerLiteral)
        .unwrap();
    b.set_attr(one, Feature::Value, 1i64).unwrap();

    // return;
    let ret = b.add_child(block, Feature::Statements, NodeKind::Return).unwrap();

    Greeter {
        model: b.build(),
        unit,
        class,
        field,
        method,
        block,
        statements: vec![declaration, print, increment, ret],
    }
}

/// The default greeter in `org.example`.
pub fn default_greeter() -> Greeter {
    greeter(&["org", "example"], "Greeter", "hello")
}
