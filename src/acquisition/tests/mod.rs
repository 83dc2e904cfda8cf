//! Shared fixtures for acquisition derivation tests

use crate::models::{ParameterFormat, ProjectedParameters, RawParameters, RawValue};
use crate::parser::project;


/// Reco parameters for a 128x128 in-plane matrix over a 3cm field of view
pub fn reco_raw() -> RawParameters {
    RawParameters::from_pairs(
        ParameterFormat::Reco,
        [
            ("RECO_fov", RawValue::from("3.0 3.0")),
            ("RECO_size", RawValue::from("128 128")),
            ("RECO_wordtype", RawValue::from("_16BIT_SGN_INT")),
        ],
    )
}

/// Method parameters for a 30-direction single-shell acquisition
pub fn method_raw() -> RawParameters {
    let directions: Vec<String> = (0..30)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::PI / 30.0;
            format!("{} {} 0", angle.cos(), angle.sin())
        })
        .collect();

    RawParameters::from_pairs(
        ParameterFormat::Method,
        [
            ("PVM_DwUsedSliceThick", RawValue::from("1.0")),
            ("PVM_DwNDiffDir", RawValue::from("30")),
            ("PVM_DwAoImages", RawValue::from("1")),
            ("PVM_DwBvalEach", RawValue::from(vec!["0 1000"])),
            ("PVM_SPackArrNSlices", RawValue::from(vec!["20"])),
            ("PVM_NRepetitions", RawValue::from("1")),
            ("PVM_DwDir", RawValue::Sequence(directions)),
        ],
    )
}

pub fn reco_params() -> ProjectedParameters {
    project(&reco_raw())
}

pub fn method_params() -> ProjectedParameters {
    project(&method_raw())
}

/// Project `raw` after replacing or adding one entry
pub fn with_entry(mut raw: RawParameters, key: &str, value: RawValue) -> ProjectedParameters {
    raw.insert(key, value);
    project(&raw)
}

/// Project `raw` with one key removed
pub fn without_key(raw: &RawParameters, key: &str) -> ProjectedParameters {
    let remaining = raw
        .iter()
        .filter(|(k, _)| k.as_str() != key)
        .map(|(k, v)| (k.clone(), v.clone()));
    project(&RawParameters::from_pairs(raw.format(), remaining))
}
