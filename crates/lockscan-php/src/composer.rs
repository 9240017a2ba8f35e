//! `composer.lock` parsing.
//!
//! Composer's lock file is a flat JSON record of exact package versions
//! and their direct requirements. The parser reduces it to
//! [`PackageRecord`]s and hands them to the core assembler; requirement
//! constraints are already pinned by composer, so only the names matter.

use std::collections::BTreeMap;

use petgraph::graph::NodeIndex;
use serde::Deserialize;

use lockscan_core::analyzer::Analyzer;
use lockscan_core::assemble::assemble;
use lockscan_core::record::PackageRecord;
use lockscan_core::tree::DepTree;

/// The lock-file name composer writes.
pub const COMPOSER_LOCK: &str = "composer.lock";

/// Wire shape of `composer.lock`. Only the fields the scanner reads.
#[derive(Debug, Deserialize)]
struct ComposerLock {
    #[serde(default)]
    packages: Vec<ComposerPackage>,
}

#[derive(Debug, Deserialize)]
struct ComposerPackage {
    name: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    require: BTreeMap<String, String>,
}

/// Parse `composer.lock` bytes and assemble the packages under `tree`'s
/// root. Returns the flat node list in lock-file order.
///
/// Malformed input is reported through `tracing` and yields an empty list
/// with the tree untouched; a single broken manifest never halts a scan.
pub fn parse_composer_lock(tree: &mut DepTree, data: &[u8]) -> Vec<NodeIndex> {
    let lock: ComposerLock = match serde_json::from_slice(data) {
        Ok(lock) => lock,
        Err(e) => {
            tracing::error!("failed to parse composer.lock: {e}");
            return Vec::new();
        }
    };

    let records: Vec<PackageRecord> = lock
        .packages
        .into_iter()
        .map(|pkg| PackageRecord {
            name: pkg.name,
            version: pkg.version,
            requires: pkg.require,
        })
        .collect();

    assemble(tree, &records)
}

/// [`Analyzer`] implementation for the PHP ecosystem.
#[derive(Debug, Default)]
pub struct ComposerAnalyzer;

impl Analyzer for ComposerAnalyzer {
    fn language(&self) -> &'static str {
        "php"
    }

    fn lockfile_name(&self) -> &'static str {
        COMPOSER_LOCK
    }

    fn analyze(&self, tree: &mut DepTree, data: &[u8]) -> Vec<NodeIndex> {
        parse_composer_lock(tree, data)
    }
}
