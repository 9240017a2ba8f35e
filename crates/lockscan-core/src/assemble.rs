//! Two-pass dependency tree assembly from flat lock-file records.
//!
//! Pass 1 walks each record's direct requirement edges exactly once and
//! claims unparented targets (first writer wins, which is also what breaks
//! requirement cycles). Pass 2 migrates every still-unclaimed node under
//! the root and produces the flat result list in record order. Neither
//! pass traverses transitively, so assembly is O(records + edges) no
//! matter how tangled the requirement graph is.

use std::collections::HashMap;

use petgraph::graph::NodeIndex;

use crate::record::PackageRecord;
use crate::tree::{DepNode, DepTree};

/// Build one fresh tree node per record, keyed by name.
///
/// Versions parse best-effort and never abort the build. A repeated name
/// silently overwrites the earlier entry (last-write-wins).
pub fn build_nodes(
    tree: &mut DepTree,
    records: &[PackageRecord],
) -> HashMap<String, NodeIndex> {
    let mut nodes = HashMap::with_capacity(records.len());
    for rec in records {
        let idx = tree.insert(DepNode::new(rec.name.clone(), &rec.version));
        nodes.insert(rec.name.clone(), idx);
    }
    nodes
}

/// Assemble the records into a tree under `tree`'s root and return the
/// flat node list in record order.
///
/// Requirements naming an undeclared package are dropped, as are
/// self-requirements and any edge whose target already has a parent.
/// Every record contributes one entry to the flat list even when several
/// records share a name.
pub fn assemble(tree: &mut DepTree, records: &[PackageRecord]) -> Vec<NodeIndex> {
    let nodes = build_nodes(tree, records);

    // Pass 1: claim direct requirement edges.
    for rec in records {
        let parent = nodes[&rec.name];
        for dep_name in rec.requires.keys() {
            if *dep_name == rec.name {
                continue;
            }
            if let Some(&child) = nodes.get(dep_name) {
                tree.attach(parent, child);
            }
        }
    }

    // Pass 2: migrate top-level nodes under the root.
    let root = tree.root();
    let mut flat = Vec::with_capacity(records.len());
    for rec in records {
        let idx = nodes[&rec.name];
        if tree.parent(idx).is_none() {
            tree.attach(root, idx);
        }
        flat.push(idx);
    }
    flat
}
