//! Selection tree connecting discovered cache directories to the scan root.
//!
//! The scanner produces a flat list of cache directories. To let an operator
//! select every cache below a directory in one action, [`build_tree`] links
//! each cache directory back to the root through all of its real ancestor
//! directories. Those ordinary ancestors become selection handles.
//!
//! Nodes live in an arena ([`SelectionTree`]) and refer to each other by
//! [`NodeId`]. A parent lists its children in insertion order; a child keeps
//! its parent's id for upward traversal only.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//!
//! use reclaim::scanner::CacheDirectoryRecord;
//! use reclaim::tree::build_tree;
//!
//! let records = vec![CacheDirectoryRecord {
//!     path: "/work/app/node_modules".into(),
//!     name: "node_modules".into(),
//!     size_bytes: 10,
//!     file_count: 2,
//! }];
//!
//! let tree = build_tree(&records, Path::new("/work"));
//! let app = tree.get(Path::new("/work/app")).unwrap();
//! assert!(!tree.node(app).is_cache_directory);
//! assert!(tree.has_cache_descendant(app));
//! ```

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use crate::scanner::{CacheDirectoryRecord, DirectoryStats};
use crate::size::{format_file_count, format_size};


/// Index of a node inside a [`SelectionTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One directory in the selection tree: the root, an ordinary ancestor, or a
/// cache directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub path: PathBuf,
    pub name: String,
    pub is_cache_directory: bool,
    /// Present only on cache directories
    pub size_bytes: Option<u64>,
    /// Present only on cache directories
    pub file_count: Option<u64>,
    /// Distance from the root (root = 0)
    pub depth: usize,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl TreeNode {
    fn new(path: PathBuf, name: String, depth: usize, parent: Option<NodeId>) -> Self {
        Self {
            path,
            name,
            is_cache_directory: false,
            size_bytes: None,
            file_count: None,
            depth,
            children: Vec::new(),
            parent,
        }
    }

    /// Children in insertion order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// An entry the selection UI can offer: a cache directory or an ancestor
/// handle that selects every cache directory beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionItem {
    /// Path handed back to the selection resolver when chosen
    pub value: PathBuf,
    /// Tree-drawn label with name, marker and sizes
    pub label: String,
    /// Path relative to the scan root
    pub hint: String,
}

/// Arena of [`TreeNode`]s rooted at the scan root.
#[derive(Debug, Clone)]
pub struct SelectionTree {
    nodes: Vec<TreeNode>,
    index: HashMap<PathBuf, NodeId>,
}

const ROOT: NodeId = NodeId(0);

/// Build the selection tree for `records` found beneath `root`.
///
/// Records are attached shallowest first, creating each missing ancestor as
/// an ordinary node and reusing ancestors shared between records. The
/// resulting structure does not depend on the input order; only the order
/// of siblings within a node can differ. Records that do not lie strictly
/// beneath `root` are left out.
pub fn build_tree(records: &[CacheDirectoryRecord], root: &Path) -> SelectionTree {
    let mut tree = SelectionTree::new(root);

    let mut ordered: Vec<&CacheDirectoryRecord> = records.iter().collect();
    ordered.sort_by_key(|record| record.path.components().count());

    for record in ordered {
        tree.insert(record);
    }

    tree
}

impl SelectionTree {
    fn new(root: &Path) -> Self {
        let name = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());

        let mut index = HashMap::new();
        index.insert(root.to_path_buf(), ROOT);

        Self {
            nodes: vec![TreeNode::new(root.to_path_buf(), name, 0, None)],
            index,
        }
    }

    /// Attach one record, creating missing ancestors on the way down.
    fn insert(&mut self, record: &CacheDirectoryRecord) -> Option<NodeId> {
        let relative = record.path.strip_prefix(&self.node(ROOT).path).ok()?;

        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(segment) => segments.push(segment),
                _ => return None,
            }
        }
        if segments.is_empty() {
            return None;
        }

        let mut current = ROOT;
        let mut current_path = self.node(ROOT).path.clone();
        for segment in segments {
            current_path.push(segment);
            current = match self.index.get(&current_path) {
                Some(&id) => id,
                None => self.attach(current, current_path.clone()),
            };
        }

        let node = &mut self.nodes[current.0];
        node.is_cache_directory = true;
        node.name = record.name.clone();
        node.size_bytes = Some(record.size_bytes);
        node.file_count = Some(record.file_count);

        Some(current)
    }

    fn attach(&mut self, parent: NodeId, path: PathBuf) -> NodeId {
        let id = NodeId(self.nodes.len());
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let depth = self.node(parent).depth + 1;

        self.nodes
            .push(TreeNode::new(path.clone(), name, depth, Some(parent)));
        self.nodes[parent.0].children.push(id);
        self.index.insert(path, id);

        id
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn root_path(&self) -> &Path {
        &self.node(ROOT).path
    }

    /// # Panics
    ///
    /// Panics if `id` did not come from this tree.
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    /// Look up the node for an exact path
    pub fn get(&self, path: &Path) -> Option<NodeId> {
        self.index.get(path).copied()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).children()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent()
    }

    /// Ancestors of `id`, nearest first, ending with the root
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&current| self.parent(current))
    }

    /// Total number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// All cache directory nodes, in node creation order
    pub fn cache_nodes(&self) -> impl Iterator<Item = (NodeId, &TreeNode)> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_cache_directory)
            .map(|(idx, node)| (NodeId(idx), node))
    }

    /// Whether any cache directory lies strictly beneath `id`.
    pub fn has_cache_descendant(&self, id: NodeId) -> bool {
        let mut stack: Vec<NodeId> = self.children(id).to_vec();
        while let Some(current) = stack.pop() {
            let node = self.node(current);
            if node.is_cache_directory {
                return true;
            }
            stack.extend_from_slice(&node.children);
        }
        false
    }

    /// Combined size and file count of the cache directories at or beneath
    /// `id`.
    pub fn cache_totals(&self, id: NodeId) -> DirectoryStats {
        let mut totals = DirectoryStats::default();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = self.node(current);
            if node.is_cache_directory {
                totals.size_bytes += node.size_bytes.unwrap_or(0);
                totals.file_count += node.file_count.unwrap_or(0);
            }
            stack.extend_from_slice(&node.children);
        }
        totals
    }

    /// Per-node flag: does a cache directory lie strictly beneath it?
    ///
    /// Children are always created after their parent, so one reverse pass
    /// over the arena settles every node.
    fn cache_below(&self) -> Vec<bool> {
        let mut below = vec![false; self.nodes.len()];
        for idx in (1..self.nodes.len()).rev() {
            let node = &self.nodes[idx];
            if let Some(parent) = node.parent
                && (node.is_cache_directory || below[idx])
            {
                below[parent.0] = true;
            }
        }
        below
    }

    /// The entries a selection UI should offer, in pre-order.
    ///
    /// The root itself is not offered. A node is offered if it is a cache
    /// directory or has one beneath it.
    pub fn selection_items(&self) -> Vec<SelectionItem> {
        let below = self.cache_below();
        let mut items = Vec::new();
        // (node, branch flags: is each ancestor below the root the last child)
        let mut stack: Vec<(NodeId, Vec<bool>)> = Vec::new();

        let root_children = self.children(ROOT);
        for (pos, &child) in root_children.iter().enumerate().rev() {
            stack.push((child, vec![pos + 1 == root_children.len()]));
        }

        while let Some((id, is_last)) = stack.pop() {
            let node = self.node(id);
            if node.is_cache_directory || below[id.0] {
                items.push(SelectionItem {
                    value: node.path.clone(),
                    label: self.label(id, &is_last),
                    hint: self.relative_hint(node),
                });
            }

            let children = node.children();
            for (pos, &child) in children.iter().enumerate().rev() {
                let mut flags = is_last.clone();
                flags.push(pos + 1 == children.len());
                stack.push((child, flags));
            }
        }

        items
    }

    /// Paths pre-selected in the UI: every cache directory and every handle
    /// above one.
    pub fn default_selection(&self) -> Vec<PathBuf> {
        self.selection_items()
            .into_iter()
            .map(|item| item.value)
            .collect()
    }

    fn label(&self, id: NodeId, is_last: &[bool]) -> String {
        let node = self.node(id);
        let mut label = branch_prefix(is_last);

        if node.is_cache_directory {
            label.push_str(&format!(
                "{} [cache] ({}, {})",
                node.name,
                format_size(node.size_bytes.unwrap_or(0)),
                format_file_count(node.file_count.unwrap_or(0))
            ));
        } else {
            let totals = self.cache_totals(id);
            label.push_str(&format!(
                "{}/ ({} in caches)",
                node.name,
                format_size(totals.size_bytes)
            ));
        }

        label
    }

    fn relative_hint(&self, node: &TreeNode) -> String {
        node.path
            .strip_prefix(self.root_path())
            .map(|relative| relative.display().to_string())
            .ok()
            .filter(|relative| !relative.is_empty())
            .unwrap_or_else(|| node.name.clone())
    }
}

/// Box-drawing prefix for a node whose ancestors (below the root) are or are
/// not the last child of their parent.
fn branch_prefix(is_last: &[bool]) -> String {
    let Some((&last, ancestors)) = is_last.split_last() else {
        return String::new();
    };

    let mut prefix = String::new();
    for &ancestor_is_last in ancestors {
        prefix.push_str(if ancestor_is_last { "    " } else { "│   " });
    }
    prefix.push_str(if last { "└── " } else { "├── " });
    prefix
}
