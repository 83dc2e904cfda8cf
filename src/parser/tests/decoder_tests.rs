//! Tests for block decoding

use super::super::decoder::{decode_block, decode_parameters};
use super::super::tokenizer::split_blocks;
use super::{create_test_method, create_test_reco};
use crate::models::{ParameterFormat, RawValue};

#[test]
fn test_method_scalar_block() {
    let decoded = decode_block("$PVM_NRepetitions=4\n", ParameterFormat::Method);
    assert_eq!(
        decoded,
        Some(("PVM_NRepetitions".to_string(), RawValue::Scalar("4".to_string())))
    );
}

#[test]
fn test_method_array_block_ignores_size_header() {
    let decoded = decode_block("$PVM_DwBvalEach=( 2 )\n0 1000\n", ParameterFormat::Method);
    assert_eq!(
        decoded,
        Some((
            "PVM_DwBvalEach".to_string(),
            RawValue::Sequence(vec!["0 1000".to_string()])
        ))
    );
}

#[test]
fn test_method_value_split_on_first_separator() {
    let (key, value) = decode_block("$PVM_Comment=a=b\n", ParameterFormat::Method).unwrap();
    assert_eq!(key, "PVM_Comment");
    assert_eq!(value, RawValue::Scalar("a=b".to_string()));
}

#[test]
fn test_method_marker_stripped_from_body() {
    let (_, value) = decode_block("OWNER=nmrsu\n$$ comment\n", ParameterFormat::Method).unwrap();
    assert_eq!(value, RawValue::Sequence(vec![" comment".to_string()]));
}

#[test]
fn test_reco_block_flattened() {
    let decoded = decode_block("$RECO_size=( 2 )\n128 128\n", ParameterFormat::Reco);
    assert_eq!(
        decoded,
        Some((
            "RECO_size".to_string(),
            RawValue::Scalar("( 2 )128 128".to_string())
        ))
    );
}

#[test]
fn test_reco_residual_markers_removed() {
    let (key, value) = decode_block("$RECO_mode=FT#\r\n", ParameterFormat::Reco).unwrap();
    assert_eq!(key, "RECO_mode");
    assert_eq!(value, RawValue::Scalar("FT".to_string()));
}

#[test]
fn test_undecodable_blocks_dropped() {
    for format in [ParameterFormat::Method, ParameterFormat::Reco] {
        assert_eq!(decode_block("", format), None);
        assert_eq!(decode_block("\n", format), None);
        assert_eq!(decode_block("no separator here\n", format), None);
        assert_eq!(decode_block("=orphan value\n", format), None);
    }
}

#[test]
fn test_sequence_length_matches_block_lines() {
    let text = create_test_method();

    for block in split_blocks(&text) {
        let line_count = block.lines().count();
        if line_count < 2 {
            continue;
        }
        let (_, value) = decode_block(block, ParameterFormat::Method).unwrap();
        assert_eq!(value.element_count(), line_count - 1, "block: {:?}", block);
    }
}

#[test]
fn test_decode_method_file() {
    let params = decode_parameters(&create_test_method(), ParameterFormat::Method);

    assert_eq!(params.format(), ParameterFormat::Method);
    assert_eq!(
        params.get("Method"),
        Some(&RawValue::Scalar("<Bruker:DtiEpi>".to_string()))
    );
    assert_eq!(
        params.get("PVM_DwDir"),
        Some(&RawValue::Sequence(vec![
            "1 0 0 0 0.7071 0.7071".to_string(),
            "0 0 1".to_string()
        ]))
    );
    assert_eq!(params.get("END"), Some(&RawValue::Scalar(String::new())));
    assert!(params.contains_key("PVM_VendorPrivateFlag"));
}

#[test]
fn test_decode_reco_file() {
    let params = decode_parameters(&create_test_reco(), ParameterFormat::Reco);

    assert_eq!(
        params.get("RECO_wordtype"),
        Some(&RawValue::Scalar("_16BIT_SGN_INT".to_string()))
    );
    assert_eq!(
        params.get("RECO_fov"),
        Some(&RawValue::Scalar("( 2 )3 3".to_string()))
    );
}

#[test]
fn test_repeated_key_keeps_last_value() {
    let text = "##$PVM_NRepetitions=1\n##$PVM_NRepetitions=5\n";
    let params = decode_parameters(text, ParameterFormat::Method);

    assert_eq!(params.len(), 1);
    assert_eq!(
        params.get("PVM_NRepetitions"),
        Some(&RawValue::Scalar("5".to_string()))
    );
}

#[test]
fn test_malformed_text_yields_empty_mapping() {
    let params = decode_parameters("garbage without blocks", ParameterFormat::Method);
    assert!(params.is_empty());

    let params = decode_parameters("##\n####", ParameterFormat::Reco);
    assert!(params.is_empty());
}
