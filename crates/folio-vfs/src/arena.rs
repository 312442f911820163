//! Node storage: the immutable base arena and the session overlay.

use std::collections::{BTreeMap, HashMap};

use folio_types::error::VfsError;

use crate::node::{Node, NodeId, NodeKind, TreeNode};
use crate::path;

/// The read-only tree supplied at construction.
///
/// Nodes live in a flat vector addressed by [`NodeId`]; `index` interns
/// every absolute path so lookups never walk the tree.
#[derive(Debug)]
pub(crate) struct BaseArena {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl BaseArena {
    pub(crate) fn build(root: TreeNode) -> Result<Self, VfsError> {
        if root.kind != NodeKind::Folder {
            return Err(VfsError::NotADirectory("/".to_string()));
        }
        let mut arena = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        };
        arena.insert(root, "/".to_string());
        Ok(arena)
    }

    /// An arena holding only an empty root folder.
    pub(crate) fn root_only() -> Self {
        let mut arena = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        };
        arena.insert(TreeNode::folder("", Vec::new()), "/".to_string());
        arena
    }

    fn insert(&mut self, record: TreeNode, at: String) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: path::file_name(&at).to_string(),
            kind: record.kind,
            content: record.content,
            size: record.size,
            created: record.created,
            modified: record.modified,
            children: Vec::new(),
        });
        self.index.insert(at.clone(), id);

        if record.kind == NodeKind::Folder {
            let mut children = Vec::with_capacity(record.children.len());
            for child in record.children {
                if !is_valid_name(&child.name) {
                    log::warn!("Skipping base node with invalid name {:?} under {at}", child.name);
                    continue;
                }
                let child_path = path::join(&at, &child.name);
                if self.index.contains_key(&child_path) {
                    log::warn!("Skipping duplicate base node {child_path}");
                    continue;
                }
                children.push(self.insert(child, child_path));
            }
            self.nodes[id.0].children = children;
        }
        id
    }

    pub(crate) fn lookup(&self, path: &str) -> Option<NodeId> {
        self.index.get(path).copied()
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && name != "." && name != ".."
}

/// Nodes created or modified during the session.
///
/// The arena is append-only; `paths` maps each absolute path to its
/// current node. Creation order is the order of the IDs.
#[derive(Debug, Default)]
pub(crate) struct Overlay {
    nodes: Vec<Node>,
    paths: BTreeMap<String, NodeId>,
}

impl Overlay {
    /// Insert or replace the node at `path`. A replaced path keeps its ID.
    pub(crate) fn insert(&mut self, path: String, node: Node) -> NodeId {
        if let Some(&id) = self.paths.get(&path) {
            self.nodes[id.0] = node;
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.paths.insert(path, id);
        id
    }

    pub(crate) fn lookup(&self, path: &str) -> Option<NodeId> {
        self.paths.get(path).copied()
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Direct children of `dir` held in the overlay, in creation order.
    pub(crate) fn children_of(&self, dir: &str) -> Vec<(&str, NodeId)> {
        let prefix = path::child_prefix(dir);
        let mut out: Vec<(&str, NodeId)> = self
            .paths
            .range(prefix.clone()..)
            .take_while(|(key, _)| key.starts_with(&prefix))
            .filter(|(key, _)| {
                let rest = &key[prefix.len()..];
                !rest.is_empty() && !rest.contains('/')
            })
            .map(|(key, &id)| (key.as_str(), id))
            .collect();
        out.sort_by_key(|&(_, id)| id);
        out
    }

    pub(crate) fn len(&self) -> usize {
        self.paths.len()
    }
}
