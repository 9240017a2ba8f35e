//! Handler for `lockscan scan`.

use std::path::Path;

use miette::Result;

use lockscan_core::tree::{DepNode, DepTree};
use lockscan_php::parse_composer_lock;
use lockscan_util::errors::LockscanError;

pub fn exec(path: Option<&Path>) -> Result<()> {
    let lock_path = super::locate_lockfile(path)?;
    let data = std::fs::read(&lock_path).map_err(LockscanError::Io)?;

    let mut tree = DepTree::new(DepNode::new(super::root_name(&lock_path), ""));
    let flat = parse_composer_lock(&mut tree, &data);

    for &idx in &flat {
        println!("{}", tree.node(idx));
    }
    println!("{} packages", flat.len());
    Ok(())
}
