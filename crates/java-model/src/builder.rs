//! Incremental construction of a [`Model`].

use crate::model::{NodeData, Slot};
use crate::{Feature, Model, ModelError, ModelResult, NodeId, NodeKind, Value};

/// Builds a [`Model`] node by node.
///
/// Children are attached to exactly one container. References may target any
/// node created by the same builder, including the referring node itself.
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
    nodes: Vec<NodeData>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a node without a container.
    ///
    /// # Panics
    ///
    /// Panics when the model already holds `u32::MAX + 1` nodes; use
    /// [`try_add`](Self::try_add) to get an error instead.
    pub fn add(&mut self, kind: NodeKind) -> NodeId {
        match self.try_add(kind) {
            Ok(id) => id,
            Err(err) => panic!("{err}"),
        }
    }

    /// Add a node without a container, failing once node ids run out.
    pub fn try_add(&mut self, kind: NodeKind) -> ModelResult<NodeId> {
        let id = node_id(self.nodes.len())?;
        self.nodes.push(NodeData::new(kind));
        Ok(id)
    }

    /// Add a node without a container and set its name.
    pub fn add_named(&mut self, kind: NodeKind, name: &str) -> NodeId {
        let id = self.add(kind);
        self.nodes[id.index()]
            .attributes
            .insert(Feature::Name, Value::from(name));
        id
    }

    /// Add a node contained by `parent` under `feature`.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        feature: Feature,
        kind: NodeKind,
    ) -> ModelResult<NodeId> {
        self.check(parent)?;
        let id = self.try_add(kind)?;
        self.attach(parent, feature, id)?;
        Ok(id)
    }

    /// Add a named node contained by `parent` under `feature`.
    pub fn add_named_child(
        &mut self,
        parent: NodeId,
        feature: Feature,
        kind: NodeKind,
        name: &str,
    ) -> ModelResult<NodeId> {
        let id = self.add_child(parent, feature, kind)?;
        self.set_name(id, name)?;
        Ok(id)
    }

    /// Append an existing root node to a containment slot of `parent`.
    pub fn attach(&mut self, parent: NodeId, feature: Feature, child: NodeId) -> ModelResult<()> {
        self.check(parent)?;
        self.check(child)?;
        if let Some(container) = self.nodes[child.index()].container {
            return Err(ModelError::AlreadyContained {
                node: child,
                container,
            });
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(ModelError::ContainmentCycle {
                node: child,
                parent,
            });
        }

        self.slot_mut(parent, feature, true)?.nodes.push(child);
        let data = &mut self.nodes[child.index()];
        data.container = Some(parent);
        data.containing_feature = Some(feature);
        Ok(())
    }

    pub fn set_attr(
        &mut self,
        node: NodeId,
        feature: Feature,
        value: impl Into<Value>,
    ) -> ModelResult<()> {
        self.check(node)?;
        self.nodes[node.index()]
            .attributes
            .insert(feature, value.into());
        Ok(())
    }

    pub fn set_name(&mut self, node: NodeId, name: &str) -> ModelResult<()> {
        self.set_attr(node, Feature::Name, name)
    }

    pub fn set_namespaces(&mut self, node: NodeId, parts: &[&str]) -> ModelResult<()> {
        let parts: Vec<String> = parts.iter().map(|p| p.to_string()).collect();
        self.set_attr(node, Feature::Namespaces, parts)
    }

    /// Point a single-valued reference slot at `target`, replacing any previous target.
    pub fn set_reference(
        &mut self,
        node: NodeId,
        feature: Feature,
        target: NodeId,
    ) -> ModelResult<()> {
        self.check(target)?;
        let slot = self.slot_mut(node, feature, false)?;
        slot.nodes.clear();
        slot.nodes.push(target);
        Ok(())
    }

    /// Append `target` to a multi-valued reference slot.
    pub fn add_reference(
        &mut self,
        node: NodeId,
        feature: Feature,
        target: NodeId,
    ) -> ModelResult<()> {
        self.check(target)?;
        self.slot_mut(node, feature, false)?.nodes.push(target);
        Ok(())
    }

    pub fn kind(&self, node: NodeId) -> ModelResult<NodeKind> {
        self.check(node)?;
        Ok(self.nodes[node.index()].kind)
    }

    pub fn build(self) -> Model {
        Model { nodes: self.nodes }
    }

    fn check(&self, node: NodeId) -> ModelResult<()> {
        if node.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(ModelError::UnknownNode(node))
        }
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.nodes[id.index()].container;
        }
        false
    }

    fn slot_mut(
        &mut self,
        node: NodeId,
        feature: Feature,
        containment: bool,
    ) -> ModelResult<&mut Slot> {
        self.check(node)?;
        let slots = &mut self.nodes[node.index()].slots;
        let index = match slots.iter().position(|s| s.feature == feature) {
            Some(index) => {
                if slots[index].containment != containment {
                    return Err(ModelError::SlotMismatch { node, feature });
                }
                index
            }
            None => {
                slots.push(Slot {
                    feature,
                    containment,
                    nodes: Vec::new(),
                });
                slots.len() - 1
            }
        };
        Ok(&mut slots[index])
    }
}

fn node_id(index: usize) -> ModelResult<NodeId> {
    u32::try_from(index)
        .map(NodeId)
        .map_err(|_| ModelError::TooManyNodes)
}
