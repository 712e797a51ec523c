use crate::model::{MaterializedDocument, Side};
use std::path::Path;

/// Level of a node in the index forest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Group,
    Kind,
    Leaf,
}

/// Which inputs contributed a document to a leaf
///
/// Always derived from the leaf's `left`/`right` slots, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipStatus {
    LeftOnly,
    RightOnly,
    Both,
    None,
}

impl MembershipStatus {
    /// Collection marker as shown to users ("A", "B", "AB")
    pub fn marker(&self) -> &'static str {
        match self {
            MembershipStatus::LeftOnly => "A",
            MembershipStatus::RightOnly => "B",
            MembershipStatus::Both => "AB",
            MembershipStatus::None => "-",
        }
    }
}

/// Top-level node: one api-group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupNode {
    pub(crate) label: String,
    pub(crate) path_key: String,
    pub(crate) kinds: Vec<KindNode>,
}

impl GroupNode {
    pub(crate) fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            path_key: label.to_string(),
            kinds: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn path_key(&self) -> &str {
        &self.path_key
    }

    pub fn kinds(&self) -> &[KindNode] {
        &self.kinds
    }

    pub fn kind(&self, label: &str) -> Option<&KindNode> {
        self.kinds.iter().find(|k| k.label == label)
    }
}

/// Second-level node: one kind within a group
#[derive(Debug, Clone, PartialEq)]
pub struct KindNode {
    pub(crate) label: String,
    pub(crate) path_key: String,
    pub(crate) leaves: Vec<LeafNode>,
}

impl KindNode {
    pub(crate) fn new(parent_key: &str, label: &str) -> Self {
        Self {
            label: label.to_string(),
            path_key: format!("{}/{}", parent_key, label),
            leaves: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn path_key(&self) -> &str {
        &self.path_key
    }

    pub fn leaves(&self) -> &[LeafNode] {
        &self.leaves
    }

    pub fn leaf(&self, label: &str) -> Option<&LeafNode> {
        self.leaves.iter().find(|l| l.label == label)
    }
}

/// Leaf node: one named manifest and its per-side documents
#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    pub(crate) label: String,
    pub(crate) path_key: String,
    pub(crate) left: Option<MaterializedDocument>,
    pub(crate) right: Option<MaterializedDocument>,
}

impl LeafNode {
    pub(crate) fn new(parent_key: &str, label: &str) -> Self {
        Self {
            label: label.to_string(),
            path_key: format!("{}/{}", parent_key, label),
            left: None,
            right: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn path_key(&self) -> &str {
        &self.path_key
    }

    pub fn left(&self) -> Option<&MaterializedDocument> {
        self.left.as_ref()
    }

    pub fn right(&self) -> Option<&MaterializedDocument> {
        self.right.as_ref()
    }

    /// The document contributed by `side`, if any
    pub fn document(&self, side: Side) -> Option<&MaterializedDocument> {
        match side {
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }

    /// The locator of the document contributed by `side`, if any
    pub fn locator(&self, side: Side) -> Option<&Path> {
        self.document(side).map(MaterializedDocument::locator)
    }

    pub fn status(&self) -> MembershipStatus {
        match (&self.left, &self.right) {
            (Some(_), Some(_)) => MembershipStatus::Both,
            (Some(_), None) => MembershipStatus::LeftOnly,
            (None, Some(_)) => MembershipStatus::RightOnly,
            (None, None) => MembershipStatus::None,
        }
    }

    /// True when both sides are present and their renderings are identical
    pub fn is_identical(&self) -> bool {
        match (&self.left, &self.right) {
            (Some(left), Some(right)) => left.same_content(right),
            _ => false,
        }
    }

    /// Store a document in its side's slot, returning the one it replaced
    pub(crate) fn set(&mut self, document: MaterializedDocument) -> Option<MaterializedDocument> {
        let slot = match document.side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        slot.replace(document)
    }
}

/// Borrowed view of any node in the forest
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    Group(&'a GroupNode),
    Kind(&'a KindNode),
    Leaf(&'a LeafNode),
}

impl<'a> NodeRef<'a> {
    pub fn kind(&self) -> NodeKind {
        match *self {
            NodeRef::Group(_) => NodeKind::Group,
            NodeRef::Kind(_) => NodeKind::Kind,
            NodeRef::Leaf(_) => NodeKind::Leaf,
        }
    }

    pub fn label(&self) -> &'a str {
        match *self {
            NodeRef::Group(node) => &node.label,
            NodeRef::Kind(node) => &node.label,
            NodeRef::Leaf(node) => &node.label,
        }
    }

    pub fn path_key(&self) -> &'a str {
        match *self {
            NodeRef::Group(node) => &node.path_key,
            NodeRef::Kind(node) => &node.path_key,
            NodeRef::Leaf(node) => &node.path_key,
        }
    }

    /// Child nodes in insertion order (empty for leaves)
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        match *self {
            NodeRef::Group(node) => node.kinds.iter().map(NodeRef::Kind).collect(),
            NodeRef::Kind(node) => node.leaves.iter().map(NodeRef::Leaf).collect(),
            NodeRef::Leaf(_) => Vec::new(),
        }
    }

    pub fn as_leaf(&self) -> Option<&'a LeafNode> {
        match *self {
            NodeRef::Leaf(node) => Some(node),
            _ => None,
        }
    }
}
