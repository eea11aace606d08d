use std::collections::HashMap;

use thiserror::Error;

use crate::engine::file_name::{compose_asset_id, AssetId};

pub const OBJECT_COUNT: usize = 4;
pub const STAGE_COUNT: usize = 4;

/// One of the four decay levels, applied uniformly to every object.
#[derive(Debug, Clone)]
pub struct DecayStage {
    pub label: String,
    pub time_range: String,
    pub asset_suffix: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct ObjectEntry {
    pub label: String,

    /// Number used in asset file names. Not necessarily the catalog position.
    pub asset_index: u32,
}

/// Read-only view of a stage handed to the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageInfo<'a> {
    pub label: &'a str,
    pub time_range: &'a str,
    pub description: &'a str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog must hold exactly {expected} objects, found {found}")]
    ObjectCount { expected: usize, found: usize },

    #[error("catalog must hold exactly {expected} decay stages, found {found}")]
    StageCount { expected: usize, found: usize },

    #[error("decay stage {stage} has an empty asset suffix")]
    EmptySuffix { stage: usize },

    #[error("asset '{asset}' is produced by both {first:?} and {second:?}")]
    DuplicateAsset {
        asset: String,
        first: (usize, usize),
        second: (usize, usize),
    },
}

/// Fixed table of objects, decay stages and the closing narrative.
/// Immutable once built.
#[derive(Debug, Clone)]
pub struct Catalog {
    objects: Vec<ObjectEntry>,
    stages: Vec<DecayStage>,
    summary: String,
}

impl Catalog {
    pub fn new(
        objects: Vec<ObjectEntry>,
        stages: Vec<DecayStage>,
        summary: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        if objects.len() != OBJECT_COUNT {
            return Err(CatalogError::ObjectCount {
                expected: OBJECT_COUNT,
                found: objects.len(),
            });
        }
        if stages.len() != STAGE_COUNT {
            return Err(CatalogError::StageCount {
                expected: STAGE_COUNT,
                found: stages.len(),
            });
        }
        if let Some(stage) = stages.iter().position(|s| s.asset_suffix.trim().is_empty()) {
            return Err(CatalogError::EmptySuffix { stage });
        }

        let mut seen: HashMap<AssetId, (usize, usize)> = HashMap::new();
        for (o, object) in objects.iter().enumerate() {
            for (s, stage) in stages.iter().enumerate() {
                let asset = compose_asset_id(object.asset_index, &stage.asset_suffix);
                if let Some(first) = seen.insert(asset.clone(), (o, s)) {
                    return Err(CatalogError::DuplicateAsset {
                        asset: asset.to_string(),
                        first,
                        second: (o, s),
                    });
                }
            }
        }

        Ok(Self {
            objects,
            stages,
            summary: summary.into(),
        })
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn object_label(&self, object: usize) -> &str {
        &self.object(object).label
    }

    pub fn stage_info(&self, stage: usize) -> StageInfo<'_> {
        let s = self.stage(stage);
        StageInfo {
            label: &s.label,
            time_range: &s.time_range,
            description: &s.description,
        }
    }

    pub fn summary_narrative(&self) -> &str {
        &self.summary
    }

    pub(crate) fn object(&self, object: usize) -> &ObjectEntry {
        assert!(
            object < self.objects.len(),
            "object index {object} out of range 0..{}",
            self.objects.len()
        );
        &self.objects[object]
    }

    pub(crate) fn stage(&self, stage: usize) -> &DecayStage {
        assert!(
            stage < self.stages.len(),
            "stage index {stage} out of range 0..{}",
            self.stages.len()
        );
        &self.stages[stage]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::builtin;

    fn stages() -> Vec<DecayStage> {
        ["clean", "rust1", "rust2", "rust3"]
            .iter()
            .map(|suffix| DecayStage {
                label: suffix.to_uppercase(),
                time_range: "0 Years".into(),
                asset_suffix: suffix.to_string(),
                description: format!("{suffix} description"),
            })
            .collect()
    }

    fn objects(indices: &[u32]) -> Vec<ObjectEntry> {
        indices
            .iter()
            .map(|&asset_index| ObjectEntry {
                label: format!("OBJECT {asset_index}"),
                asset_index,
            })
            .collect()
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = builtin::catalog(builtin::DEFAULT_ASSET_INDICES).unwrap();

        assert_eq!(catalog.object_count(), 4);
        assert_eq!(catalog.stage_count(), 4);
        assert_eq!(catalog.object_label(3), "OBJECT 3: CANDLE (WAX)");
        assert_eq!(catalog.stage_info(2).time_range, "5-15 Years");
        assert!(catalog
            .summary_narrative()
            .starts_with("[DECAY ANALYSIS PROTOCOL - FINAL REPORT]"));
    }

    #[test]
    fn rejects_wrong_object_count() {
        let err = Catalog::new(objects(&[0, 1, 2]), stages(), "").unwrap_err();
        assert_eq!(err, CatalogError::ObjectCount { expected: 4, found: 3 });
    }

    #[test]
    fn rejects_wrong_stage_count() {
        let mut five = stages();
        five.push(five[0].clone());
        let err = Catalog::new(objects(&[0, 1, 2, 3]), five, "").unwrap_err();
        assert_eq!(err, CatalogError::StageCount { expected: 4, found: 5 });
    }

    #[test]
    fn rejects_non_injective_asset_mapping() {
        let err = Catalog::new(objects(&[0, 1, 1, 3]), stages(), "").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateAsset { first: (1, 0), second: (2, 0), .. }
        ));
    }

    #[test]
    fn rejects_repeated_stage_suffix() {
        let mut repeated = stages();
        repeated[3].asset_suffix = "rust2".into();
        let err = Catalog::new(objects(&[0, 1, 2, 3]), repeated, "").unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateAsset { .. }));
    }

    #[test]
    fn rejects_blank_suffix() {
        let mut blank = stages();
        blank[1].asset_suffix = " ".into();
        let err = Catalog::new(objects(&[0, 1, 2, 3]), blank, "").unwrap_err();
        assert_eq!(err, CatalogError::EmptySuffix { stage: 1 });
    }

    #[test]
    #[should_panic(expected = "stage index 4 out of range")]
    fn stage_lookup_out_of_range_panics() {
        let catalog = Catalog::new(objects(&[0, 1, 2, 3]), stages(), "").unwrap();
        catalog.stage_info(4);
    }
}
