//! Integration smoke tests for `ds_explorer`

use ds_explorer::core::catalog::Catalog;
use ds_explorer::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn builtin_catalog_loads() {
    assert_eq!(Catalog::builtin().len(), 10);
}
