use petgraph::graph::NodeIndex;

use crate::tree::DepTree;

/// A per-ecosystem lock-file parser.
///
/// Each supported ecosystem contributes one implementation that reduces
/// its wire format to [`PackageRecord`](crate::record::PackageRecord)s and
/// assembles them under the supplied tree's root.
pub trait Analyzer {
    /// Ecosystem label for output ("php", ...).
    fn language(&self) -> &'static str;

    /// The lock-file name this analyzer handles.
    fn lockfile_name(&self) -> &'static str;

    /// Whether `file_name` is this analyzer's lock file.
    fn matches(&self, file_name: &str) -> bool {
        file_name == self.lockfile_name()
    }

    /// Parse raw lock-file bytes and assemble the packages under `tree`'s
    /// root, returning the flat node list in record order.
    ///
    /// Malformed input degrades to an empty result with the tree left
    /// untouched; it never raises an error, so one broken manifest cannot
    /// halt a batch scan.
    fn analyze(&self, tree: &mut DepTree, data: &[u8]) -> Vec<NodeIndex>;
}
