//! Scene graph over a closed set of node kinds.
//!
//! Nodes live in an arena and refer to each other through generational
//! [`NodeId`]s, so reparenting never invalidates other handles.

mod node;

pub use node::{Camera, Light, LightKind, NodeId, NodeKind, Projection, SceneNode};

use slotmap::SlotMap;
use tracing::debug;

use crate::error::SceneError;
use crate::math::Matrix4;

/// Arena that owns every scene node.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: SlotMap<NodeId, SceneNode>,
    roots: Vec<NodeId>,
}

impl SceneGraph {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a root node and returns its ID.
    pub fn add(&mut self, name: impl Into<String>, kind: NodeKind, local: Matrix4) -> NodeId {
        let id = self.nodes.insert(SceneNode {
            name: name.into(),
            kind,
            local,
            parent: None,
            children: Vec::new(),
        });
        self.roots.push(id);
        id
    }

    /// Inserts a node directly under `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` is not in the scene.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        kind: NodeKind,
        local: Matrix4,
    ) -> Result<NodeId, SceneError> {
        self.node(parent)?;
        let id = self.add(name, kind, local);
        self.attach(id, parent)?;
        Ok(id)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the scene has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level nodes in insertion order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Returns a reference to the node, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not in the scene.
    pub fn node(&self, id: NodeId) -> Result<&SceneNode, SceneError> {
        self.nodes.get(id).ok_or(SceneError::NodeNotFound("node"))
    }

    /// Returns a mutable reference to the node, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not in the scene.
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut SceneNode, SceneError> {
        self.nodes.get_mut(id).ok_or(SceneError::NodeNotFound("node"))
    }

    /// Moves `child` (with its subtree) under `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if either node is missing, or if `parent` is
    /// `child` itself or one of its descendants.
    pub fn attach(&mut self, child: NodeId, parent: NodeId) -> Result<(), SceneError> {
        self.node(child)?;
        if self.is_ancestor_or_self(child, parent)? {
            return Err(SceneError::Cycle);
        }
        self.unlink(child)?;
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        debug!(?child, ?parent, "node attached");
        Ok(())
    }

    /// Makes `child` a root again.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not in the scene.
    pub fn detach(&mut self, child: NodeId) -> Result<(), SceneError> {
        self.unlink(child)?;
        self.roots.push(child);
        Ok(())
    }

    /// Removes a node and its whole subtree, returning how many nodes were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not in the scene.
    pub fn remove(&mut self, id: NodeId) -> Result<usize, SceneError> {
        self.unlink(id)?;
        let mut stack = vec![id];
        let mut removed = 0;
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.remove(next) {
                stack.extend(node.children);
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Composes local transforms from the root down to `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not in the scene.
    pub fn world_transform(&self, id: NodeId) -> Result<Matrix4, SceneError> {
        let mut node = self.node(id)?;
        let mut world = node.local;
        while let Some(parent) = node.parent {
            node = self.node(parent)?;
            world = node.local * world;
        }
        Ok(world)
    }

    /// Visits every node depth-first, parents before children, roots and
    /// siblings in insertion order. The visitor receives each node's world
    /// transform.
    pub fn traverse<F>(&self, mut visit: F)
    where
        F: FnMut(NodeId, &SceneNode, &Matrix4),
    {
        let mut stack: Vec<(NodeId, Matrix4)> = self
            .roots
            .iter()
            .rev()
            .map(|&id| (id, Matrix4::identity()))
            .collect();

        while let Some((id, parent_world)) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            let world = parent_world * node.local;
            visit(id, node, &world);
            stack.extend(node.children.iter().rev().map(|&child| (child, world)));
        }
    }

    /// Detaches `id` from its parent's child list or from the root list.
    fn unlink(&mut self, id: NodeId) -> Result<(), SceneError> {
        match self.node_mut(id)?.parent.take() {
            Some(parent) => self.node_mut(parent)?.children.retain(|&c| c != id),
            None => self.roots.retain(|&r| r != id),
        }
        Ok(())
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> Result<bool, SceneError> {
        let mut current = Some(id);
        while let Some(node_id) = current {
            if node_id == ancestor {
                return Ok(true);
            }
            current = self.node(node_id)?.parent;
        }
        Ok(false)
    }
}
