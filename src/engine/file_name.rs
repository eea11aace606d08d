use std::fmt;

use crate::model::catalog::Catalog;

/// Relative file name of an image, e.g. `object2_rust1.png`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(String);

impl AssetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub(crate) fn compose_asset_id(asset_index: u32, suffix: &str) -> AssetId {
    AssetId(format!("object{asset_index}_{suffix}.png"))
}

/// Maps (object, stage) to the asset shown for it.
///
/// Sidebar thumbnails, the main image and the summary grid all go through
/// here, so they can never disagree about which file belongs to a cell.
/// Panics on indices outside the catalog.
pub fn resolve(catalog: &Catalog, object: usize, stage: usize) -> AssetId {
    let entry = catalog.object(object);
    let stage = catalog.stage(stage);
    compose_asset_id(entry.asset_index, &stage.asset_suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::builtin;
    use std::collections::HashSet;

    #[test]
    fn identity_mapping_uses_catalog_position() {
        let catalog = builtin::catalog([0, 1, 2, 3]).unwrap();
        assert_eq!(resolve(&catalog, 2, 1).as_str(), "object2_rust1.png");
        assert_eq!(resolve(&catalog, 0, 0).as_str(), "object0_clean.png");
    }

    #[test]
    fn permuted_mapping_follows_asset_index() {
        let catalog = builtin::catalog(builtin::DEFAULT_ASSET_INDICES).unwrap();
        assert_eq!(resolve(&catalog, 2, 1).as_str(), "object3_rust1.png");
        assert_eq!(resolve(&catalog, 3, 3).as_str(), "object2_rust3.png");
    }

    #[test]
    fn all_sixteen_assets_are_distinct_and_stable() {
        let catalog = builtin::catalog(builtin::DEFAULT_ASSET_INDICES).unwrap();
        let mut seen = HashSet::new();

        for o in 0..catalog.object_count() {
            for s in 0..catalog.stage_count() {
                let first = resolve(&catalog, o, s);
                assert_eq!(first, resolve(&catalog, o, s));
                assert!(seen.insert(first));
            }
        }

        assert_eq!(seen.len(), 16);
    }

    #[test]
    #[should_panic(expected = "object index 4 out of range")]
    fn out_of_range_object_panics() {
        let catalog = builtin::catalog([0, 1, 2, 3]).unwrap();
        resolve(&catalog, 4, 0);
    }
}
