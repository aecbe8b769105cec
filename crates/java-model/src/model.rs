//! Arena storage for a parsed Java model and read-only handles into it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Feature, NodeKind, Value};

/// Index of a node inside its [`Model`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named list of node ids on a node.
#[derive(Debug, Clone)]
pub(crate) struct Slot {
    pub(crate) feature: Feature,
    /// Owned children when set, otherwise non-owning references.
    pub(crate) containment: bool,
    pub(crate) nodes: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) attributes: BTreeMap<Feature, Value>,
    /// Kept in insertion order; children are reported in this order.
    pub(crate) slots: Vec<Slot>,
    pub(crate) container: Option<NodeId>,
    pub(crate) containing_feature: Option<Feature>,
}

impl NodeData {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attributes: BTreeMap::new(),
            slots: Vec::new(),
            container: None,
            containing_feature: None,
        }
    }

    pub(crate) fn slot(&self, feature: Feature) -> Option<&Slot> {
        self.slots.iter().find(|s| s.feature == feature)
    }
}

/// An immutable node graph produced by a [`ModelBuilder`](crate::ModelBuilder).
///
/// Containment forms a forest; references may point anywhere in the model,
/// including back at the referring node.
#[derive(Debug, Clone, Default)]
pub struct Model {
    pub(crate) nodes: Vec<NodeData>,
}

impl Model {
    /// Handle for the node with the given id, if it exists.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.index() < self.nodes.len()).then_some(NodeRef { model: self, id })
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> {
        (0..self.nodes.len()).map(move |i| NodeRef {
            model: self,
            id: NodeId(i as u32),
        })
    }

    /// Nodes without a container.
    pub fn roots(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.container.is_none())
            .map(move |(i, _)| NodeRef {
                model: self,
                id: NodeId(i as u32),
            })
    }

    /// All nodes of the given kind, in creation order.
    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = NodeRef<'_>> {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, n)| n.kind == kind)
            .map(move |(i, _)| NodeRef {
                model: self,
                id: NodeId(i as u32),
            })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }
}

/// A read-only handle to one node of a [`Model`].
///
/// Handles are cheap to copy. Two handles are equal when they point at the
/// same node of the same model instance; structurally equal nodes of
/// different models are never equal handles.
#[derive(Clone, Copy)]
pub struct NodeRef<'m> {
    model: &'m Model,
    id: NodeId,
}

impl<'m> NodeRef<'m> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn model(&self) -> &'m Model {
        self.model
    }

    /// Address of the owning model, usable as part of an identity key.
    pub fn model_key(&self) -> usize {
        self.model as *const Model as usize
    }

    fn data(&self) -> &'m NodeData {
        self.model.data(self.id)
    }

    fn wrap(&self, id: NodeId) -> NodeRef<'m> {
        NodeRef {
            model: self.model,
            id,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.data().kind
    }

    pub fn attr(&self, feature: Feature) -> Option<&'m Value> {
        self.data().attributes.get(&feature)
    }

    pub fn name(&self) -> Option<&'m str> {
        self.attr(Feature::Name).and_then(Value::as_str)
    }

    /// Namespace parts, e.g. `["java", "util"]`.
    pub fn namespaces(&self) -> Option<&'m [String]> {
        self.attr(Feature::Namespaces).and_then(Value::as_str_list)
    }

    /// Namespace parts joined with `.`; empty when there are none.
    pub fn namespaces_as_string(&self) -> String {
        self.namespaces().map(|n| n.join(".")).unwrap_or_default()
    }

    /// First node of a slot, whether contained or referenced.
    pub fn get(&self, feature: Feature) -> Option<NodeRef<'m>> {
        self.data()
            .slot(feature)
            .and_then(|s| s.nodes.first())
            .map(|id| self.wrap(*id))
    }

    /// All nodes of a slot; empty when the slot is unset.
    pub fn get_all(&self, feature: Feature) -> Vec<NodeRef<'m>> {
        self.data()
            .slot(feature)
            .map(|s| s.nodes.iter().map(|id| self.wrap(*id)).collect())
            .unwrap_or_default()
    }

    /// Last node of a slot.
    pub fn get_last(&self, feature: Feature) -> Option<NodeRef<'m>> {
        self.data()
            .slot(feature)
            .and_then(|s| s.nodes.last())
            .map(|id| self.wrap(*id))
    }

    /// Features of the containment slots, in insertion order.
    pub fn child_features(&self) -> Vec<Feature> {
        self.data()
            .slots
            .iter()
            .filter(|s| s.containment)
            .map(|s| s.feature)
            .collect()
    }

    /// Owned children across all containment slots, in slot order.
    pub fn children(&self) -> Vec<NodeRef<'m>> {
        self.data()
            .slots
            .iter()
            .filter(|s| s.containment)
            .flat_map(|s| s.nodes.iter())
            .map(|id| self.wrap(*id))
            .collect()
    }

    /// Non-owning targets of a slot; empty for containment slots.
    pub fn references(&self, feature: Feature) -> Vec<NodeRef<'m>> {
        match self.data().slot(feature) {
            Some(slot) if !slot.containment => {
                slot.nodes.iter().map(|id| self.wrap(*id)).collect()
            }
            _ => Vec::new(),
        }
    }

    pub fn container(&self) -> Option<NodeRef<'m>> {
        self.data().container.map(|id| self.wrap(id))
    }

    /// The container slot this node lives in.
    pub fn containing_feature(&self) -> Option<Feature> {
        self.data().containing_feature
    }

    /// Index of this node within its container slot.
    pub fn position_in_container(&self) -> Option<usize> {
        let container = self.container()?;
        let feature = self.containing_feature()?;
        container
            .data()
            .slot(feature)?
            .nodes
            .iter()
            .position(|id| *id == self.id)
    }

    /// Nodes sharing this node's container slot, this node included.
    pub fn siblings(&self) -> Vec<NodeRef<'m>> {
        match (self.container(), self.containing_feature()) {
            (Some(container), Some(feature)) => container.get_all(feature),
            _ => Vec::new(),
        }
    }

    /// Whether `self` is `other` or one of its transitive containers.
    pub fn is_ancestor_or_self_of(&self, other: NodeRef<'m>) -> bool {
        let mut current = Some(other);
        while let Some(node) = current {
            if node == *self {
                return true;
            }
            current = node.container();
        }
        false
    }

    /// Containers from the direct parent up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = NodeRef<'m>> {
        std::iter::successors(self.container(), |n| n.container())
    }

    /// Short description used in traces and reports, e.g. `ClassMethod[foo]`.
    pub fn label(&self) -> String {
        match self.name() {
            Some(name) => format!("{}[{}]", self.kind(), name),
            None => match self.attr(Feature::Value) {
                Some(value) => format!("{}[{}]", self.kind(), value.render()),
                None => self.kind().to_string(),
            },
        }
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.model, other.model) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.label(), self.id)
    }
}
