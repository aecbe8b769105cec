//! Structural similarity checks between two Java models.
//!
//! Two independently parsed [`java_model::Model`]s are compared node by
//! node. Each node kind has a rule that looks at names, values, children,
//! references and containers, and the verdict is one of three
//! [`Similarity`] values. Names can be passed through rename tables first so
//! that a moved or renamed classifier still matches its old references.
//!
//! # Example
//!
//! ```
//! use java_model::{Feature, ModelBuilder, NodeKind};
//! use java_similarity::{is_similar, Similarity};
//!
//! let build = |value: bool| {
//!     let mut builder = ModelBuilder::new();
//!     let literal = builder.add(NodeKind::BooleanLiteral);
//!     builder.set_attr(literal, Feature::Value, value).unwrap();
//!     (builder.build(), literal)
//! };
//! let (left, a) = build(true);
//! let (right, b) = build(false);
//!
//! let verdict = is_similar(left.node(a).unwrap(), right.node(b).unwrap(), true);
//! assert_eq!(verdict, Similarity::Different);
//! ```

mod checker;
mod compare;
pub mod config;
mod context;
pub mod error;
pub mod normalization;
pub mod report;
mod similarity;

pub use checker::{are_similar, is_similar, SimilarityChecker};
pub use config::{CyclePolicy, NormalizationConfig, NormalizationMode, RenameEntry, SimilarityConfig};
pub use error::{ConfigError, ConfigResult};
pub use normalization::{NameCategory, NormalizationService};
pub use report::{Mismatch, MismatchReason, SimilarityReport};
pub use similarity::Similarity;

pub use java_model;
