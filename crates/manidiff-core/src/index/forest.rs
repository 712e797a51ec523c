use crate::index::node::{GroupNode, KindNode, LeafNode, NodeRef};
use crate::model::MaterializedDocument;

/// Ordered sequence of group trees produced by one build
///
/// Lookups at each level are linear scans by label; indexes hold tens to low
/// hundreds of leaves. Not thread-safe: insertion must be serialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forest {
    groups: Vec<GroupNode>,
}

impl Forest {
    /// Create an empty forest
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Insert one document, creating its group, kind and leaf on first use
    ///
    /// A document for a side that is already populated on the leaf replaces
    /// the earlier one (last write wins).
    pub fn insert(&mut self, document: MaterializedDocument) -> &LeafNode {
        let identity = &document.identity;

        let group_idx = match self.groups.iter().position(|g| g.label == identity.group) {
            Some(idx) => idx,
            None => {
                self.groups.push(GroupNode::new(&identity.group));
                self.groups.len() - 1
            }
        };
        let group = &mut self.groups[group_idx];

        let kind_idx = match group.kinds.iter().position(|k| k.label == identity.kind) {
            Some(idx) => idx,
            None => {
                let node = KindNode::new(&group.path_key, &identity.kind);
                group.kinds.push(node);
                group.kinds.len() - 1
            }
        };
        let kind = &mut group.kinds[kind_idx];

        let leaf_idx = match kind.leaves.iter().position(|l| l.label == identity.name) {
            Some(idx) => idx,
            None => {
                let node = LeafNode::new(&kind.path_key, &identity.name);
                kind.leaves.push(node);
                kind.leaves.len() - 1
            }
        };
        let leaf = &mut kind.leaves[leaf_idx];

        leaf.set(document);
        leaf
    }

    /// Insert a sequence of documents in order
    ///
    /// Returns the same forest so that one call per side can be chained.
    pub fn insert_all<I>(&mut self, documents: I) -> &mut Self
    where
        I: IntoIterator<Item = MaterializedDocument>,
    {
        for document in documents {
            self.insert(document);
        }
        self
    }

    /// Top-level group nodes in first-seen order
    pub fn groups(&self) -> &[GroupNode] {
        &self.groups
    }

    pub fn group(&self, label: &str) -> Option<&GroupNode> {
        self.groups.iter().find(|g| g.label == label)
    }

    /// Top-level nodes as generic views
    pub fn roots(&self) -> Vec<NodeRef<'_>> {
        self.groups.iter().map(NodeRef::Group).collect()
    }

    /// Find a node by its `/`-joined path key
    pub fn find(&self, path_key: &str) -> Option<NodeRef<'_>> {
        let mut segments = path_key.splitn(3, '/');
        let group = self.group(segments.next()?)?;
        let Some(kind_label) = segments.next() else {
            return Some(NodeRef::Group(group));
        };
        let kind = group.kind(kind_label)?;
        let Some(name) = segments.next() else {
            return Some(NodeRef::Kind(kind));
        };
        kind.leaf(name).map(NodeRef::Leaf)
    }

    /// Find a leaf by its path key
    pub fn leaf(&self, path_key: &str) -> Option<&LeafNode> {
        self.find(path_key).and_then(|node| node.as_leaf())
    }

    /// All leaves, depth-first in insertion order
    pub fn leaves(&self) -> impl Iterator<Item = &LeafNode> {
        self.groups
            .iter()
            .flat_map(|g| g.kinds.iter())
            .flat_map(|k| k.leaves.iter())
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.groups.clear();
    }
}
