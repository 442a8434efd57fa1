use super::types::{ChildSlot, NodeId, QUADRANT_COUNT};
use common::shapes::LongRect;

pub(crate) struct InternalNode {
    pub(crate) x_divider: i64,
    pub(crate) y_divider: i64,
    // Indexed by `quadrant()`
    pub(crate) children: [NodeId; QUADRANT_COUNT],
}

pub(crate) struct LeafNode<B> {
    pub(crate) bucket: B,
    pub(crate) bounds: LongRect,
    pub(crate) slot: ChildSlot,
}

pub(crate) enum Node<B> {
    Internal(InternalNode),
    Leaf(LeafNode<B>),
}

/// Node storage. Replaced nodes give their slot back to the free list.
pub(crate) struct NodeArena<B> {
    nodes: Vec<Option<Node<B>>>,
    free_nodes: Vec<u32>,
    internal_count: usize,
    leaf_count: usize,
}

impl<B> NodeArena<B> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free_nodes: Vec::new(),
            internal_count: 0,
            leaf_count: 0,
        }
    }

    pub(crate) fn alloc(&mut self, node: Node<B>) -> NodeId {
        match node {
            Node::Internal(_) => self.internal_count += 1,
            Node::Leaf(_) => self.leaf_count += 1,
        }
        if let Some(idx) = self.free_nodes.pop() {
            self.nodes[idx as usize] = Some(node);
            return NodeId(idx);
        }
        let idx = u32::try_from(self.nodes.len()).expect("node arena exceeded u32 indices");
        self.nodes.push(Some(node));
        NodeId(idx)
    }

    /// Remove a node, leaving its slot free for reuse.
    pub(crate) fn take(&mut self, id: NodeId) -> Node<B> {
        let node = self.nodes[id.index()]
            .take()
            .expect("node id refers to a free slot");
        match node {
            Node::Internal(_) => self.internal_count -= 1,
            Node::Leaf(_) => self.leaf_count -= 1,
        }
        self.free_nodes.push(id.0);
        node
    }

    #[inline(always)]
    pub(crate) fn get(&self, id: NodeId) -> &Node<B> {
        self.nodes[id.index()]
            .as_ref()
            .expect("node id refers to a free slot")
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<B> {
        self.nodes[id.index()]
            .as_mut()
            .expect("node id refers to a free slot")
    }

    pub(crate) fn leaf(&self, id: NodeId) -> &LeafNode<B> {
        match self.get(id) {
            Node::Leaf(leaf) => leaf,
            Node::Internal(_) => panic!("node {:?} is not a leaf", id),
        }
    }

    pub(crate) fn leaf_mut(&mut self, id: NodeId) -> &mut LeafNode<B> {
        match self.get_mut(id) {
            Node::Leaf(leaf) => leaf,
            Node::Internal(_) => panic!("node {:?} is not a leaf", id),
        }
    }

    pub(crate) fn internal_mut(&mut self, id: NodeId) -> &mut InternalNode {
        match self.get_mut(id) {
            Node::Internal(internal) => internal,
            Node::Leaf(_) => panic!("node {:?} is not an internal node", id),
        }
    }

    pub(crate) fn internal_count(&self) -> usize {
        self.internal_count
    }

    pub(crate) fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.nodes.len()
    }
}
