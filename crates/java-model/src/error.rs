//! Error types for model construction.

use thiserror::Error;

use crate::{Feature, NodeId};

/// Errors that can occur while building a model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The id does not belong to this model
    #[error("Node {0} does not exist in this model")]
    UnknownNode(NodeId),

    /// The node already has a container
    #[error("Node {node} is already contained by {container}")]
    AlreadyContained { node: NodeId, container: NodeId },

    /// Attaching the node would make it contain itself
    #[error("Attaching {node} under {parent} would create a containment cycle")]
    ContainmentCycle { node: NodeId, parent: NodeId },

    /// The slot was first used for containment and then for a reference, or vice versa
    #[error("Slot '{feature}' on {node} cannot mix containment and references")]
    SlotMismatch { node: NodeId, feature: Feature },

    /// Node ids are 32-bit
    #[error("A model holds at most {} nodes", u32::MAX as u64 + 1)]
    TooManyNodes,
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
