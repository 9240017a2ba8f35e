use std::collections::BTreeMap;

/// A single flat package record from a lock file.
///
/// Every analyzer reduces its wire format to this shape before tree
/// assembly. Requirement constraint strings are carried opaquely: the lock
/// file already pins concrete versions, so the assembler links edges by
/// name alone and never evaluates a constraint.
#[derive(Debug, Clone, Default)]
pub struct PackageRecord {
    /// Package name, the unique key within the manifest.
    pub name: String,
    /// Raw version string as the lock file recorded it.
    pub version: String,
    /// Direct requirements: dependency name to constraint string.
    ///
    /// A `BTreeMap` so requirement edges are walked in a deterministic
    /// order, making assembly reproducible across runs.
    pub requires: BTreeMap<String, String>,
}

impl PackageRecord {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            requires: BTreeMap::new(),
        }
    }

    /// Add a requirement edge. Used by analyzers and tests.
    pub fn require(mut self, name: impl Into<String>, constraint: impl Into<String>) -> Self {
        self.requires.insert(name.into(), constraint.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_style_construction() {
        let rec = PackageRecord::new("monolog/monolog", "2.3.5")
            .require("psr/log", "^1.0.1")
            .require("symfony/polyfill", "^1.0");
        assert_eq!(rec.name, "monolog/monolog");
        assert_eq!(rec.version, "2.3.5");
        assert_eq!(rec.requires.len(), 2);
    }

    #[test]
    fn requires_iterates_in_name_order() {
        let rec = PackageRecord::new("a", "1.0")
            .require("zeta", "*")
            .require("alpha", "*");
        let names: Vec<&str> = rec.requires.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
