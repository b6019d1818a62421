//! Composite: treat single files and whole directory trees through one
//! operation.
//!
//! All nodes live in a [`FileSystem`] arena and refer to each other by
//! [`NodeId`]. The arena is the only owner, so dropping it drops the whole
//! tree, and a node can be referenced before or after it is attached.

use crate::core::Transcript;
use thiserror::Error;

/// Errors that can occur when linking nodes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("Node {0:?} does not exist in this file system")]
    UnknownNode(NodeId),

    #[error("'{name}' is a file and cannot contain other nodes")]
    NotADirectory { name: String },

    #[error("'{name}' is already attached to a directory")]
    AlreadyAttached { name: String },

    #[error("Attaching '{child}' under '{parent}' would create a cycle")]
    WouldCycle { parent: String, child: String },
}

/// Stable index of a node inside its [`FileSystem`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory { children: Vec<NodeId> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    name: String,
    parent: Option<NodeId>,
    kind: NodeKind,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// Children in insertion order. Files have none.
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::File => &[],
            NodeKind::Directory { children } => children,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FileSystem {
    nodes: Vec<Node>,
}

impl FileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, name: impl Into<String>) -> NodeId {
        self.push(name.into(), NodeKind::File)
    }

    pub fn add_directory(&mut self, name: impl Into<String>) -> NodeId {
        self.push(name.into(), NodeKind::Directory { children: Vec::new() })
    }

    fn push(&mut self, name: String, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name,
            parent: None,
            kind,
        });
        id
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.nodes.get(id.0).ok_or(TreeError::UnknownNode(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Attach `child` as the last child of the directory `parent`.
    ///
    /// A node has at most one parent, and a directory may not end up inside
    /// itself.
    pub fn add(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let parent_node = self.node(parent)?;
        let child_node = self.node(child)?;

        if !parent_node.is_directory() {
            return Err(TreeError::NotADirectory {
                name: parent_node.name.clone(),
            });
        }
        if child_node.parent.is_some() {
            return Err(TreeError::AlreadyAttached {
                name: child_node.name.clone(),
            });
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(TreeError::WouldCycle {
                parent: parent_node.name.clone(),
                child: child_node.name.clone(),
            });
        }

        self.nodes[child.0].parent = Some(parent);
        if let NodeKind::Directory { children } = &mut self.nodes[parent.0].kind {
            children.push(child);
        }
        Ok(())
    }

    /// Walks up from `node` looking for `candidate`.
    fn is_ancestor_or_self(&self, candidate: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.nodes[id.0].parent;
        }
        false
    }

    /// Print `id` and everything below it, indenting each level by two spaces.
    pub fn show_details(
        &self,
        id: NodeId,
        indent: usize,
        out: &mut Transcript,
    ) -> Result<(), TreeError> {
        let node = self.node(id)?;
        let pad = " ".repeat(indent);

        match &node.kind {
            NodeKind::File => out.line(format!("{pad}File: {}", node.name)),
            NodeKind::Directory { children } => {
                out.line(format!("{pad}Directory: {}", node.name));
                for &child in children {
                    self.show_details(child, indent + 2, out)?;
                }
            }
        }
        Ok(())
    }
}

fn build_and_show(out: &mut Transcript) -> Result<(), TreeError> {
    let mut fs = FileSystem::new();
    let file1 = fs.add_file("file1.txt");
    let file2 = fs.add_file("file2.txt");
    let dir1 = fs.add_directory("dir1");
    let dir2 = fs.add_directory("dir2");

    fs.add(dir1, file1)?;
    fs.add(dir2, file2)?;
    fs.add(dir1, dir2)?;

    fs.show_details(dir1, 0, out)
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();
    if let Err(err) = build_and_show(&mut out) {
        out.line(err.to_string());
    }
    out
}
