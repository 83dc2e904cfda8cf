//! Image geometry derivation
//!
//! Reconciles the reco file (in-plane field of view, matrix size and word
//! type) with the method file (slice thickness, slice count, diffusion and
//! repetition parameters) into one [`AcquisitionDescriptor`].

use regex::Regex;
use tracing::{debug, info};

use super::fields::{count_field, first_count, integer_tokens, real_field, real_tokens};
use crate::constants::{FOV_CM_TO_MM, method_keys, reco_keys, word_types};
use crate::error::{BrukerError, Result};
use crate::models::{AcquisitionDescriptor, PixelEncoding, ProjectedParameters};
use crate::parser::coerce_str;

/// Remove every parenthesized aside from `text`.
///
/// Nested groups are removed from the inside out, so applying this twice
/// gives the same result as applying it once. Text outside the parentheses
/// is kept verbatim.
pub fn strip_parenthesized(text: &str) -> Result<String> {
    let group = Regex::new(r"\([^()]*\)")?;
    let mut stripped = text.to_string();

    while group.is_match(&stripped) {
        stripped = group.replace_all(&stripped, "").into_owned();
    }

    Ok(stripped)
}

/// Map a RECO_wordtype value onto its pixel encoding
pub fn pixel_encoding(reco: &ProjectedParameters) -> Result<PixelEncoding> {
    let value = reco.require(reco_keys::WORD_TYPE)?;

    match value.as_text() {
        Some(word_types::SIGNED_16) => Ok(PixelEncoding::Int16),
        Some(word_types::SIGNED_32) => Ok(PixelEncoding::Int32),
        Some(word_types::UNSIGNED_8) => Ok(PixelEncoding::Uint8),
        Some(word_types::FLOAT_32) => Ok(PixelEncoding::Float32),
        _ => Err(BrukerError::UnknownEncoding {
            value: value.to_text(),
        }),
    }
}

/// B-values of the first row of PVM_DwBvalEach
pub fn b_values(method: &ProjectedParameters) -> Result<Vec<i64>> {
    let value = method.require(method_keys::B_VALUES)?;
    integer_tokens(method_keys::B_VALUES, value.first_row())
}

/// Re-read a reco array with its size annotation removed.
///
/// Reco blocks are flattened to one line before coercion, so the typed
/// value is the whitespace-split token sequence of the raw text. Parentheses
/// never fall inside a numeric token; they survive as text tokens, and
/// `to_text` rejoins the tokens in order. Stripping the rejoined text
/// therefore removes the same groups as stripping the raw value and leaves
/// the same numeric tokens behind.
fn in_plane_text(reco: &ProjectedParameters, key: &str) -> Result<String> {
    let value = reco.require(key)?;
    strip_parenthesized(&value.to_text())
}

fn in_plane_fov(reco: &ProjectedParameters) -> Result<[f64; 2]> {
    let key = reco_keys::FOV;
    let values = real_tokens(key, &coerce_str(&in_plane_text(reco, key)?))?;
    match values.as_slice() {
        [x, y, ..] => Ok([*x, *y]),
        _ => Err(BrukerError::invalid_field(
            key,
            format!("expected at least 2 in-plane entries, found {}", values.len()),
        )),
    }
}

fn in_plane_matrix(reco: &ProjectedParameters) -> Result<[usize; 2]> {
    let key = reco_keys::SIZE;
    let values = integer_tokens(key, &coerce_str(&in_plane_text(reco, key)?))?;
    match values.as_slice() {
        [x, y, ..] => {
            let to_size = |n: i64| {
                usize::try_from(n).map_err(|_| {
                    BrukerError::invalid_field(key, format!("negative matrix size {}", n))
                })
            };
            Ok([to_size(*x)?, to_size(*y)?])
        }
        _ => Err(BrukerError::invalid_field(
            key,
            format!("expected at least 2 in-plane entries, found {}", values.len()),
        )),
    }
}

/// Derive imaging geometry and diffusion parameters for one scan
pub fn derive_acquisition(
    reco: &ProjectedParameters,
    method: &ProjectedParameters,
) -> Result<AcquisitionDescriptor> {
    let fov = in_plane_fov(reco)?;
    let matrix = in_plane_matrix(reco)?;
    let pixel_encoding = pixel_encoding(reco)?;
    debug!(
        "Reco geometry: fov={:?} matrix={:?} encoding={}",
        fov, matrix, pixel_encoding
    );

    let slice_thickness = real_field(method, method_keys::SLICE_THICKNESS)?;
    let direction_count = count_field(method, method_keys::DIFFUSION_DIRECTIONS)?;
    let b0_count = count_field(method, method_keys::B0_IMAGES)?;
    let b_values = b_values(method)?;
    let slice_count = first_count(method, method_keys::SLICE_PACK_SLICES)?;
    let repetitions = count_field(method, method_keys::REPETITIONS)?;

    let voxel_size = [
        fov[0] / matrix[0] as f64 * FOV_CM_TO_MM,
        fov[1] / matrix[1] as f64 * FOV_CM_TO_MM,
        slice_thickness,
    ];
    let dimensions = [
        matrix[0],
        matrix[1],
        slice_count,
        b_values.len(),
        direction_count,
    ];

    info!(
        "Derived acquisition: dimensions={:?} voxel_size={:?} repetitions={} b0_count={}",
        dimensions, voxel_size, repetitions, b0_count
    );

    Ok(AcquisitionDescriptor {
        dimensions,
        voxel_size,
        repetitions,
        b0_count,
        b_values,
        pixel_encoding,
    })
}
