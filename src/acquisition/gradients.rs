//! Diffusion gradient table extraction
//!
//! PVM_DwDir stores one unit vector per diffusion direction, wrapped over
//! as many body lines as the writer needed, so all of its tokens are
//! flattened and regrouped into 3-vectors.

use tracing::{debug, warn};

use super::derivation::b_values;
use super::fields::{count_field, real_tokens};
use crate::config::B0Strategy;
use crate::constants::method_keys;
use crate::error::{BrukerError, Result};
use crate::models::{GradientTable, ProjectedParameters};

/// Group a flat component list into direction vectors
fn direction_vectors(method: &ProjectedParameters, expected: usize) -> Result<Vec<[f64; 3]>> {
    let key = method_keys::DIRECTION_TABLE;
    let components = real_tokens(key, method.require(key)?)?;

    if components.len() != expected * 3 {
        return Err(BrukerError::invalid_field(
            key,
            format!(
                "expected {} components for {} directions, found {}",
                expected * 3,
                expected,
                components.len()
            ),
        ));
    }

    Ok(components
        .chunks_exact(3)
        .map(|chunk| [chunk[0], chunk[1], chunk[2]])
        .collect())
}

/// Positions in `b_values` holding non-diffusion-weighted images
pub fn b0_indices(b_values: &[i64], ao_images: usize, strategy: B0Strategy) -> Vec<usize> {
    match strategy {
        B0Strategy::ZeroBValue => b_values
            .iter()
            .enumerate()
            .filter(|(_, b)| **b == 0)
            .map(|(index, _)| index)
            .collect(),
        B0Strategy::AoImagesCount => (0..ao_images.min(b_values.len())).collect(),
    }
}

/// Extract diffusion directions and B0 positions from the method parameters
pub fn derive_gradient_table(
    method: &ProjectedParameters,
    strategy: B0Strategy,
) -> Result<GradientTable> {
    let direction_count = count_field(method, method_keys::DIFFUSION_DIRECTIONS)?;
    let repetitions = count_field(method, method_keys::REPETITIONS)?;
    let ao_images = count_field(method, method_keys::B0_IMAGES)?;
    let b_values = b_values(method)?;
    let directions = direction_vectors(method, direction_count)?;

    let b0_indices = b0_indices(&b_values, ao_images, strategy);
    if b0_indices.len() != ao_images {
        warn!(
            "Found {} B0 images by {:?} but {} declares {}",
            b0_indices.len(),
            strategy,
            method_keys::B0_IMAGES,
            ao_images
        );
    }

    debug!(
        "Gradient table: {} directions, {} b-values, B0 at {:?}",
        directions.len(),
        b_values.len(),
        b0_indices
    );

    Ok(GradientTable {
        directions,
        b_values,
        b0_indices,
        repetitions,
    })
}
