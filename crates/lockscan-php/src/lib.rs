//! PHP ecosystem support: parsing `composer.lock` into the lockscan
//! dependency tree model.

pub mod composer;

pub use composer::{parse_composer_lock, ComposerAnalyzer, COMPOSER_LOCK};
