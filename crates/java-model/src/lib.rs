//! Node model for parsed Java source code.
//!
//! This crate provides the arena-backed graph that similarity checks run on:
//! typed node kinds grouped into categories, scalar attributes, owned
//! children, non-owning references and a container back-link per node.
//! Graphs are assembled with [`ModelBuilder`] and read through [`NodeRef`]
//! handles.
//!
//! # Example
//!
//! ```
//! use java_model::{Feature, ModelBuilder, NodeKind};
//!
//! let mut builder = ModelBuilder::new();
//! let class = builder.add_named(NodeKind::Class, "Foo");
//! let method = builder
//!     .add_named_child(class, Feature::Members, NodeKind::ClassMethod, "bar")
//!     .unwrap();
//! let model = builder.build();
//!
//! let method = model.node(method).unwrap();
//! assert_eq!(method.container().and_then(|c| c.name()), Some("Foo"));
//! ```

mod builder;
mod error;
mod kind;
mod model;
mod value;

pub use builder::ModelBuilder;
pub use error::{ModelError, ModelResult};
pub use kind::{Category, Feature, NodeKind};
pub use model::{Model, NodeId, NodeRef};
pub use value::{LeafValue, Value};
