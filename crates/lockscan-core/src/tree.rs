//! Dependency tree construction and rendering.
//!
//! The tree is stored in a petgraph [`DiGraph`] used as a node arena; the
//! [`DepTree`] wrapper enforces the strict-tree invariants a raw digraph
//! does not: every node has at most one parent, a node never appears under
//! two parents, and no edge may close a cycle. A name index gives O(1)
//! lookup while the tree is being assembled.

use std::collections::HashMap;
use std::fmt;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::version::Version;

/// One resolved package in the dependency tree.
#[derive(Debug, Clone)]
pub struct DepNode {
    pub name: String,
    pub version: Version,
}

impl DepNode {
    /// Build a node, parsing the version best-effort.
    pub fn new(name: impl Into<String>, version: &str) -> Self {
        Self {
            name: name.into(),
            version: Version::parse(version),
        }
    }
}

impl fmt::Display for DepNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.original.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.name, self.version)
        }
    }
}

/// A dependency tree rooted at a synthetic node representing the manifest.
///
/// The root pre-exists assembly and only ever gains children; packages that
/// nothing else requires end up directly under it.
pub struct DepTree {
    graph: DiGraph<DepNode, ()>,
    /// Lookup from package name to node index. The root is not indexed.
    index: HashMap<String, NodeIndex>,
    root: NodeIndex,
}

impl DepTree {
    pub fn new(root: DepNode) -> Self {
        let mut graph = DiGraph::new();
        let root = graph.add_node(root);
        Self {
            graph,
            index: HashMap::new(),
            root,
        }
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    /// Insert a package node, keyed by name.
    ///
    /// A repeated name replaces the earlier node's payload in place
    /// (last-write-wins) rather than growing the arena, so the index always
    /// points at exactly one live node per name.
    pub fn insert(&mut self, node: DepNode) -> NodeIndex {
        if let Some(&idx) = self.index.get(&node.name) {
            self.graph[idx] = node;
            return idx;
        }
        let key = node.name.clone();
        let idx = self.graph.add_node(node);
        self.index.insert(key, idx);
        idx
    }

    /// Link `child` under `parent` if `child` is still unclaimed.
    ///
    /// Returns `false` without mutating when the edge would violate the
    /// tree shape: the child already has a parent (first assignment wins),
    /// the edge is a self-loop, the child is the root, or the child is an
    /// ancestor of the parent (the edge would close a cycle).
    pub fn attach(&mut self, parent: NodeIndex, child: NodeIndex) -> bool {
        if parent == child || child == self.root {
            return false;
        }
        if self.parent(child).is_some() {
            return false;
        }
        if self.is_ancestor(child, parent) {
            return false;
        }
        self.graph.add_edge(parent, child, ());
        true
    }

    /// The unique parent of a node, or `None` for the root and for nodes
    /// not yet claimed during assembly.
    pub fn parent(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .next()
    }

    /// Children of a node in the order they were attached.
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        // petgraph walks neighbors newest-first; reverse to insertion order.
        let mut children: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .collect();
        children.reverse();
        children
    }

    /// Look up a package node by name.
    pub fn find(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    /// Get the node data for an index.
    pub fn node(&self, idx: NodeIndex) -> &DepNode {
        &self.graph[idx]
    }

    /// Number of package nodes (excluding the root).
    pub fn len(&self) -> usize {
        self.graph.node_count() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `anc` lies on the parent chain of `idx`.
    fn is_ancestor(&self, anc: NodeIndex, idx: NodeIndex) -> bool {
        let mut current = idx;
        while let Some(parent) = self.parent(current) {
            if parent == anc {
                return true;
            }
            current = parent;
        }
        false
    }

    /// Render the tree as ASCII art, one node per line.
    pub fn render(&self, max_depth: Option<usize>) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", self.graph[self.root]));

        let children = self.children(self.root);
        let count = children.len();
        for (i, child) in children.iter().enumerate() {
            let is_last = i == count - 1;
            self.render_subtree(&mut output, *child, "", is_last, 1, max_depth);
        }
        output
    }

    fn render_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        prefix: &str,
        is_last: bool,
        depth: usize,
        max_depth: Option<usize>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        output.push_str(&format!("{prefix}{connector}{}\n", self.graph[idx]));

        if let Some(max) = max_depth {
            if depth >= max {
                return;
            }
        }

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let children = self.children(idx);
        let count = children.len();
        for (i, child) in children.iter().enumerate() {
            let is_last = i == count - 1;
            self.render_subtree(output, *child, &child_prefix, is_last, depth + 1, max_depth);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> DepTree {
        DepTree::new(DepNode::new("app", ""))
    }

    #[test]
    fn insert_and_find() {
        let mut t = tree();
        let idx = t.insert(DepNode::new("psr/log", "1.1.4"));
        assert_eq!(t.find("psr/log"), Some(idx));
        assert_eq!(t.node(idx).version.original, "1.1.4");
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn repeated_name_replaces_in_place() {
        let mut t = tree();
        let first = t.insert(DepNode::new("psr/log", "1.0.0"));
        let second = t.insert(DepNode::new("psr/log", "2.0.0"));
        assert_eq!(first, second);
        assert_eq!(t.node(second).version.original, "2.0.0");
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn attach_claims_child_once() {
        let mut t = tree();
        let a = t.insert(DepNode::new("a", "1.0"));
        let b = t.insert(DepNode::new("b", "1.0"));
        let c = t.insert(DepNode::new("c", "1.0"));

        assert!(t.attach(a, c));
        // first assignment wins; b's claim on c is dropped
        assert!(!t.attach(b, c));

        assert_eq!(t.parent(c), Some(a));
        assert_eq!(t.children(a), vec![c]);
        assert!(t.children(b).is_empty());
    }

    #[test]
    fn attach_rejects_self_loop() {
        let mut t = tree();
        let a = t.insert(DepNode::new("a", "1.0"));
        assert!(!t.attach(a, a));
        assert_eq!(t.parent(a), None);
    }

    #[test]
    fn attach_rejects_root_as_child() {
        let mut t = tree();
        let a = t.insert(DepNode::new("a", "1.0"));
        let root = t.root();
        assert!(!t.attach(a, root));
    }

    #[test]
    fn attach_rejects_cycle() {
        let mut t = tree();
        let a = t.insert(DepNode::new("a", "1.0"));
        let b = t.insert(DepNode::new("b", "1.0"));
        assert!(t.attach(a, b));
        // b -> a would close a cycle
        assert!(!t.attach(b, a));
        assert_eq!(t.parent(a), None);
    }

    #[test]
    fn children_keep_insertion_order() {
        let mut t = tree();
        let root = t.root();
        let c = t.insert(DepNode::new("c", "1.0"));
        let a = t.insert(DepNode::new("a", "1.0"));
        let b = t.insert(DepNode::new("b", "1.0"));
        assert!(t.attach(root, c));
        assert!(t.attach(root, a));
        assert!(t.attach(root, b));
        assert_eq!(t.children(root), vec![c, a, b]);
    }

    #[test]
    fn render_basic_tree() {
        let mut t = tree();
        let root = t.root();
        let a = t.insert(DepNode::new("monolog/monolog", "2.3.5"));
        let b = t.insert(DepNode::new("psr/log", "1.1.4"));
        t.attach(root, a);
        t.attach(a, b);

        let out = t.render(None);
        let expected = "app\n└── monolog/monolog 2.3.5\n    └── psr/log 1.1.4\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn render_respects_max_depth() {
        let mut t = tree();
        let root = t.root();
        let a = t.insert(DepNode::new("a", "1.0"));
        let b = t.insert(DepNode::new("b", "1.0"));
        t.attach(root, a);
        t.attach(a, b);

        let out = t.render(Some(1));
        assert!(out.contains("a 1.0"));
        assert!(!out.contains("b 1.0"));
    }

    #[test]
    fn display_without_version() {
        let node = DepNode::new("app", "");
        assert_eq!(node.to_string(), "app");
    }
}
