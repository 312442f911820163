//! Node types: the serialized base-tree record and the arena node.

use serde::Deserialize;

/// Size reported for folders that carry no explicit size.
pub const FOLDER_SIZE: u64 = 4096;

/// Whether a node is a file or a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    #[serde(alias = "directory", alias = "dir")]
    Folder,
}

/// One record of the externally supplied base tree.
///
/// This is the nested format the host hands over at construction time,
/// typically deserialized from JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeNode {
    pub name: String,
    pub kind: NodeKind,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub created: Option<u64>,
    #[serde(default)]
    pub modified: Option<u64>,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// A folder record with the given children.
    pub fn folder(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Folder,
            content: None,
            size: None,
            created: None,
            modified: None,
            children,
        }
    }

    /// A file record with text content.
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            content: Some(content.into()),
            size: None,
            created: None,
            modified: None,
            children: Vec::new(),
        }
    }

    /// Override the reported size.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Set both timestamps.
    pub fn with_times(mut self, created: u64, modified: u64) -> Self {
        self.created = Some(created);
        self.modified = Some(modified);
        self
    }
}

/// Index of a node inside one of the arenas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

/// A filesystem node as stored in an arena.
///
/// Folder children are kept only for base nodes; the overlay derives
/// children from its path map instead.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) kind: NodeKind,
    pub(crate) content: Option<String>,
    pub(crate) size: Option<u64>,
    pub(crate) created: Option<u64>,
    pub(crate) modified: Option<u64>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new_folder(name: &str, now: u64) -> Self {
        Self {
            name: name.to_string(),
            kind: NodeKind::Folder,
            content: None,
            size: None,
            created: Some(now),
            modified: Some(now),
            children: Vec::new(),
        }
    }

    pub(crate) fn new_file(name: &str, now: u64) -> Self {
        Self {
            name: name.to_string(),
            kind: NodeKind::File,
            content: Some(String::new()),
            size: None,
            created: Some(now),
            modified: Some(now),
            children: Vec::new(),
        }
    }

    /// Copy of this node without arena links, for copy-on-write into the overlay.
    pub(crate) fn detached(&self) -> Self {
        Self {
            children: Vec::new(),
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Explicit size if the record carried one, otherwise the content length
    /// for files and [`FOLDER_SIZE`] for folders.
    pub fn size(&self) -> u64 {
        match (self.size, self.kind) {
            (Some(size), _) => size,
            (None, NodeKind::File) => self.content.as_ref().map_or(0, |c| c.len() as u64),
            (None, NodeKind::Folder) => FOLDER_SIZE,
        }
    }

    pub fn created(&self) -> Option<u64> {
        self.created
    }

    pub fn modified(&self) -> Option<u64> {
        self.modified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_node_from_json() {
        let json = r#"{
            "name": "",
            "kind": "folder",
            "children": [
                { "name": "about.md", "kind": "file", "content": "hi" },
                { "name": "projects", "kind": "directory" }
            ]
        }"#;
        let root: TreeNode = serde_json::from_str(json).unwrap();
        assert_eq!(root.kind, NodeKind::Folder);
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].content.as_deref(), Some("hi"));
        assert_eq!(root.children[1].kind, NodeKind::Folder);
        assert!(root.children[1].children.is_empty());
    }

    #[test]
    fn size_falls_back_to_content_length() {
        let node = Node {
            content: Some("hello".into()),
            ..Node::new_file("a.txt", 0)
        };
        assert_eq!(node.size(), 5);
    }

    #[test]
    fn explicit_size_wins() {
        let node = Node {
            size: Some(2048),
            ..Node::new_file("a.bin", 0)
        };
        assert_eq!(node.size(), 2048);
    }

    #[test]
    fn folder_default_size() {
        assert_eq!(Node::new_folder("d", 0).size(), FOLDER_SIZE);
    }
}
