use crate::model::catalog::{Catalog, CatalogError, DecayStage, ObjectEntry, OBJECT_COUNT};

/// Object → asset file number. The human subject and the candle swap files.
pub const DEFAULT_ASSET_INDICES: [u32; OBJECT_COUNT] = [0, 1, 3, 2];

const OBJECT_LABELS: [&str; OBJECT_COUNT] = [
    "OBJECT 0: OLIVE TREE (WOOD)",
    "OBJECT 1: EARTH (MODEL)",
    "OBJECT 2: HUMAN (SUBJECT)",
    "OBJECT 3: CANDLE (WAX)",
];

const STAGES: [(&str, &str, &str, &str); 4] = [
    (
        "CLEAN (Baseline)",
        "0 Years",
        "clean",
        "Initial state. Minimal decay level, structural integrity and original color maintained. \
         Measured strong resistance to extreme environmental conditions. The object is stable. \
         Factor: 1.00x.",
    ),
    (
        "RUST-1 (Early Stage)",
        "1-5 Years",
        "rust1",
        "Onset of oxidation reaction. Slight change in color hue (RGB Shift 15%). Surface shows \
         localized pattern of early-stage corrosion and minor detail blurring. Factor: 1.85x.",
    ),
    (
        "RUST-2 (Advanced Corrosion)",
        "5-15 Years",
        "rust2",
        "Advanced corrosion observed. Significant loss of natural pigments and slight \
         deformation. Decay has reached a measurable level in the material's secondary layer. \
         Factor: 2.50x.",
    ),
    (
        "RUST-3 (Maximum Decay)",
        "15-30+ Years",
        "rust3",
        "Maximum decay observed. Internal structure is exposed. Color pattern shifts towards dark \
         red-brown tones. Complete structural instability and substantial detail loss. \
         Factor: 3.50x.",
    ),
];

const SUMMARY_NARRATIVE: &str = r#"
[DECAY ANALYSIS PROTOCOL - FINAL REPORT]

The decay array test successfully mapped the corrosion lifecycle across four distinct material categories (Wood, Model, Human, Wax).

**Oxidation & Rust Phases:**
Rust is the common term for iron oxide (Fe2O3), formed when iron reacts with oxygen and water. While the objects in this array represent varied base materials, the 'Rust' stages are used as a proxy for generalized material degradation due to exposure.

**PHASE I: CLEAN (Baseline)**
Oxidation Percentage: 0.0%
Structural Integrity: 100%
Characteristics: All objects maintained original spectral data. No measurable texture or molecular degradation.

**PHASE II: RUST-1 (Early Stage)**
Oxidation Percentage: 15-35%
Structural Integrity: 95%
Characteristics: Onset of molecular breakdown. Initial color shift is detectable, primarily in the UV spectrum. Surface corrosion is localized and highly dependent on material composition.

**PHASE III: RUST-2 (Advanced Corrosion)**
Oxidation Percentage: 35-75%
Structural Integrity: 70%
Characteristics: Advanced exposure leading to deep pigment loss and physical deformation. Decay penetrates the secondary structural layer, visible as blurring and erosion of fine details. Factor increase correlates directly with environmental temperature instability.

**PHASE IV: RUST-3 (Maximum Decay)**
Oxidation Percentage: 75-100%
Structural Integrity: <50%
Characteristics: Critical structural failure. Complete loss of original color profile. Exposed internal material structure. Total integrity compromised, representing the end-state of the observed decay cycle.
"#;

/// Builds the shipped catalog with the given object → asset-number mapping.
pub fn catalog(asset_indices: [u32; OBJECT_COUNT]) -> Result<Catalog, CatalogError> {
    let objects = OBJECT_LABELS
        .iter()
        .zip(asset_indices)
        .map(|(label, asset_index)| ObjectEntry {
            label: label.to_string(),
            asset_index,
        })
        .collect();

    let stages = STAGES
        .iter()
        .map(|(label, time_range, suffix, description)| DecayStage {
            label: label.to_string(),
            time_range: time_range.to_string(),
            asset_suffix: suffix.to_string(),
            description: description.to_string(),
        })
        .collect();

    Catalog::new(objects, stages, SUMMARY_NARRATIVE.trim())
}
