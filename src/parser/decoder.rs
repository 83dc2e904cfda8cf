//! Parameter block decoding
//!
//! Method blocks keep their line structure: the first line holds
//! `KEY=<scalar or array size header>` and any further lines are the array
//! body. Reco blocks are flattened to a single `KEY=value` line before
//! splitting.

use tracing::debug;

use super::tokenizer::split_blocks;
use crate::constants::{KEY_VALUE_SEPARATOR, PARAMETER_MARKER, RECO_RESIDUAL_MARKER};
use crate::models::{ParameterFormat, RawParameters, RawValue};

/// Decode one block into a key and raw value.
///
/// Returns `None` when the block has no `=` or an empty key.
pub fn decode_block(block: &str, format: ParameterFormat) -> Option<(String, RawValue)> {
    match format {
        ParameterFormat::Method => decode_method_block(block),
        ParameterFormat::Reco => decode_reco_block(block),
    }
}

fn decode_method_block(block: &str) -> Option<(String, RawValue)> {
    let lines: Vec<String> = block
        .lines()
        .map(|line| line.replace(PARAMETER_MARKER, ""))
        .collect();
    let (header, body) = lines.split_first()?;

    let (key, value) = split_key_value(header)?;
    if body.is_empty() {
        Some((key, RawValue::Scalar(value.to_string())))
    } else {
        // The header remainder is only an array size annotation here
        Some((key, RawValue::Sequence(body.to_vec())))
    }
}

fn decode_reco_block(block: &str) -> Option<(String, RawValue)> {
    let flattened: String = block
        .chars()
        .filter(|&c| c != PARAMETER_MARKER && c != RECO_RESIDUAL_MARKER && c != '\n' && c != '\r')
        .collect();

    let (key, value) = split_key_value(&flattened)?;
    Some((key, RawValue::Scalar(value.to_string())))
}

fn split_key_value(line: &str) -> Option<(String, &str)> {
    let (key, value) = line.split_once(KEY_VALUE_SEPARATOR)?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value))
}

/// Decode every block of a parameter file.
///
/// Undecodable blocks are dropped. A key that appears twice keeps the value
/// of its last occurrence.
pub fn decode_parameters(text: &str, format: ParameterFormat) -> RawParameters {
    let mut parameters = RawParameters::new(format);
    let mut total_blocks = 0;
    let mut dropped = 0;

    for block in split_blocks(text) {
        total_blocks += 1;
        match decode_block(block, format) {
            Some((key, value)) => {
                if parameters.insert(key.clone(), value).is_some() {
                    debug!("Parameter '{}' repeated in {} file; keeping last value", key, format);
                }
            }
            None => dropped += 1,
        }
    }

    debug!(
        "Decoded {} {} parameters from {} blocks ({} dropped)",
        parameters.len(),
        format,
        total_blocks,
        dropped
    );

    parameters
}
