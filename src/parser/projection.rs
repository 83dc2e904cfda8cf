//! Allow-list projection of decoded parameters

use tracing::debug;

use super::coercion::coerce;
use crate::constants::is_recognized;
use crate::models::{ProjectedParameters, RawParameters};

/// Keep the recognized parameters of a file, typed
pub fn project(raw: &RawParameters) -> ProjectedParameters {
    let mut projected = ProjectedParameters::new(raw.format());

    for (key, value) in raw.iter().filter(|(key, _)| is_recognized(key)) {
        projected.insert(key.as_str(), coerce(value));
    }

    debug!(
        "Projected {} of {} {} parameters",
        projected.len(),
        raw.len(),
        raw.format()
    );

    projected
}

/// Keep only `allow_list` keys present in `raw`, coercing each value.
///
/// Allow-listed keys missing from `raw` are omitted rather than defaulted.
pub fn project_with(raw: &RawParameters, allow_list: &[&str]) -> ProjectedParameters {
    let mut projected = ProjectedParameters::new(raw.format());

    for key in allow_list {
        if let Some(value) = raw.get(key) {
            projected.insert(*key, coerce(value));
        }
    }

    debug!(
        "Projected {} of {} {} parameters",
        projected.len(),
        raw.len(),
        raw.format()
    );

    projected
}
