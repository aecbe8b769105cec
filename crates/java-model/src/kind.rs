//! Node kinds, their categories and the feature keys nodes are addressed by.

use serde::{Deserialize, Serialize};

/// Syntactic category of a node kind.
///
/// Every [`NodeKind`] belongs to exactly one category, and each category is
/// handled by one comparator in the similarity engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Annotations,
    Classifiers,
    Commons,
    Containers,
    Generics,
    Imports,
    Instantiations,
    Literals,
    Members,
    Modules,
    Parameters,
    References,
    Statements,
    Types,
    Variables,
    /// Expressions, operators, arrays and modifiers.
    Expressions,
}

impl Category {
    /// Returns a human-readable name for the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Annotations => "annotations",
            Category::Classifiers => "classifiers",
            Category::Commons => "commons",
            Category::Containers => "containers",
            Category::Generics => "generics",
            Category::Imports => "imports",
            Category::Instantiations => "instantiations",
            Category::Literals => "literals",
            Category::Members => "members",
            Category::Modules => "modules",
            Category::Parameters => "parameters",
            Category::References => "references",
            Category::Statements => "statements",
            Category::Types => "types",
            Category::Variables => "variables",
            Category::Expressions => "expressions",
        }
    }
}

macro_rules! node_kinds {
    ($($category:ident => [$($kind:ident),+ $(,)?]),+ $(,)?) => {
        /// The concrete Java construct a node represents.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum NodeKind {
            $($($kind,)+)+
        }

        impl NodeKind {
            /// All kinds, grouped by category.
            pub const ALL: &'static [NodeKind] = &[$($(NodeKind::$kind,)+)+];

            /// The category whose comparator handles this kind.
            pub fn category(&self) -> Category {
                match self {
                    $($(NodeKind::$kind)|+ => Category::$category,)+
                }
            }

            /// The kind name as written in the Java metamodel.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($(NodeKind::$kind => stringify!($kind),)+)+
                }
            }
        }
    };
}

node_kinds! {
    Annotations => [
        AnnotationInstance,
        SingleAnnotationParameter,
        AnnotationParameterList,
        AnnotationAttributeSetting,
    ],
    Classifiers => [
        Class,
        Interface,
        Enumeration,
        AnnotationType,
        AnonymousClass,
    ],
    Commons => [
        JumpLabel,
        EmptyMember,
    ],
    Containers => [
        CompilationUnit,
        Package,
        Module,
    ],
    Generics => [
        QualifiedTypeArgument,
        ExtendsTypeArgument,
        SuperTypeArgument,
        UnknownTypeArgument,
        TypeParameter,
    ],
    Imports => [
        ClassifierImport,
        PackageImport,
        StaticMemberImport,
        StaticClassifierImport,
    ],
    Instantiations => [
        NewConstructorCall,
        ExplicitConstructorCall,
    ],
    Literals => [
        BooleanLiteral,
        CharacterLiteral,
        DecimalIntegerLiteral,
        HexIntegerLiteral,
        OctalIntegerLiteral,
        BinaryIntegerLiteral,
        DecimalLongLiteral,
        HexLongLiteral,
        OctalLongLiteral,
        BinaryLongLiteral,
        DecimalFloatLiteral,
        HexFloatLiteral,
        DecimalDoubleLiteral,
        HexDoubleLiteral,
        NullLiteral,
        This,
        Super,
    ],
    Members => [
        ClassMethod,
        InterfaceMethod,
        Constructor,
        AdditionalField,
        EnumConstant,
        AnnotationAttribute,
    ],
    Modules => [
        ModuleReference,
        RequiresModuleDirective,
        ExportsModuleDirective,
        OpensModuleDirective,
        ProvidesModuleDirective,
        UsesModuleDirective,
    ],
    Parameters => [
        OrdinaryParameter,
        VariableLengthParameter,
        ReceiverParameter,
        CatchParameter,
    ],
    References => [
        IdentifierReference,
        MethodCall,
        ElementReference,
        StringReference,
        TextBlockReference,
        SelfReference,
        PrimitiveTypeReference,
        ReflectiveClassReference,
    ],
    Statements => [
        Block,
        LocalVariableStatement,
        ExpressionStatement,
        Return,
        Throw,
        Condition,
        WhileLoop,
        DoWhileLoop,
        ForLoop,
        ForEachLoop,
        Switch,
        NormalSwitchCase,
        DefaultSwitchCase,
        Break,
        Continue,
        SynchronizedBlock,
        TryBlock,
        CatchBlock,
        Assert,
        EmptyStatement,
        YieldStatement,
    ],
    Types => [
        ClassifierReference,
        NamespaceClassifierReference,
        InferableType,
        BooleanType,
        ByteType,
        CharType,
        ShortType,
        IntType,
        LongType,
        FloatType,
        DoubleType,
        VoidType,
    ],
    Variables => [
        LocalVariable,
        AdditionalLocalVariable,
        Field,
    ],
    Expressions => [
        AssignmentExpression,
        ConditionalExpression,
        ConditionalOrExpression,
        ConditionalAndExpression,
        EqualityExpression,
        RelationalExpression,
        AdditiveExpression,
        MultiplicativeExpression,
        UnaryExpression,
        CastExpression,
        InstanceOfExpression,
        LambdaExpression,
        NestedExpression,
        ArrayDimension,
        ArraySelector,
        ArrayInitializer,
        ArrayInstantiationBySize,
        ArrayInstantiationByValues,
        Operator,
        Modifier,
    ],
}

impl NodeKind {
    /// Whether this kind is a named type declaration (class, interface, enum or annotation type).
    pub fn is_concrete_classifier(&self) -> bool {
        matches!(
            self,
            NodeKind::Class | NodeKind::Interface | NodeKind::Enumeration | NodeKind::AnnotationType
        )
    }

    /// Whether this kind is a method-like member (class or interface method).
    pub fn is_method(&self) -> bool {
        matches!(self, NodeKind::ClassMethod | NodeKind::InterfaceMethod)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key of an attribute or a child/reference slot on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    // attributes
    Name,
    Value,
    Namespaces,
    ArrayDimensions,

    // slots
    Target,
    Next,
    Arguments,
    ArraySelectors,
    Parameters,
    TypeReference,
    TypeArguments,
    TypeParameters,
    Extends,
    Implements,
    ClassifierReferences,
    Members,
    Classifiers,
    Imports,
    Annotations,
    Modifiers,
    Statements,
    Expression,
    ReturnValue,
    Condition,
    Else,
    Init,
    Updates,
    Collection,
    Variable,
    AdditionalFields,
    AdditionalLocalVariables,
    InitialValue,
    Cases,
    LockProvider,
    Body,
    CatchBlocks,
    FinallyBlock,
    Resources,
    Parameter,
    Message,
    Attribute,
    ParameterValue,
    Settings,
    SelfKind,
    PrimitiveType,
    Module,
    Directives,
    Modules,
    ProvidedTypes,
    Children,
    Operators,
    Position,
    Constants,
}

impl Feature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Name => "name",
            Feature::Value => "value",
            Feature::Namespaces => "namespaces",
            Feature::ArrayDimensions => "array_dimensions",
            Feature::Target => "target",
            Feature::Next => "next",
            Feature::Arguments => "arguments",
            Feature::ArraySelectors => "array_selectors",
            Feature::Parameters => "parameters",
            Feature::TypeReference => "type_reference",
            Feature::TypeArguments => "type_arguments",
            Feature::TypeParameters => "type_parameters",
            Feature::Extends => "extends",
            Feature::Implements => "implements",
            Feature::ClassifierReferences => "classifier_references",
            Feature::Members => "members",
            Feature::Classifiers => "classifiers",
            Feature::Imports => "imports",
            Feature::Annotations => "annotations",
            Feature::Modifiers => "modifiers",
            Feature::Statements => "statements",
            Feature::Expression => "expression",
            Feature::ReturnValue => "return_value",
            Feature::Condition => "condition",
            Feature::Else => "else",
            Feature::Init => "init",
            Feature::Updates => "updates",
            Feature::Collection => "collection",
            Feature::Variable => "variable",
            Feature::AdditionalFields => "additional_fields",
            Feature::AdditionalLocalVariables => "additional_local_variables",
            Feature::InitialValue => "initial_value",
            Feature::Cases => "cases",
            Feature::LockProvider => "lock_provider",
            Feature::Body => "body",
            Feature::CatchBlocks => "catch_blocks",
            Feature::FinallyBlock => "finally_block",
            Feature::Resources => "resources",
            Feature::Parameter => "parameter",
            Feature::Message => "message",
            Feature::Attribute => "attribute",
            Feature::ParameterValue => "parameter_value",
            Feature::Settings => "settings",
            Feature::SelfKind => "self_kind",
            Feature::PrimitiveType => "primitive_type",
            Feature::Module => "module",
            Feature::Directives => "directives",
            Feature::Modules => "modules",
            Feature::ProvidedTypes => "provided_types",
            Feature::Children => "children",
            Feature::Operators => "operators",
            Feature::Position => "position",
            Feature::Constants => "constants",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
