//! Core data structures for Bruker parameter processing.
//!
//! Defines the raw and typed parameter values, the per-file parameter
//! mappings, and the derived acquisition records handed to downstream
//! image assembly and gradient-table writers.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::PathBuf;

use crate::error::{BrukerError, Result};

/// Which parameter file a block or mapping came from.
///
/// Method and reco files share the block delimiter but use different inner
/// conventions, so decoding depends on the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterFormat {
    /// Acquisition-time parameters; multi-line blocks with array bodies
    Method,
    /// Reconstruction parameters; blocks flattened to single `KEY=value` lines
    Reco,
}

impl fmt::Display for ParameterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterFormat::Method => write!(f, "method"),
            ParameterFormat::Reco => write!(f, "reco"),
        }
    }
}

/// Undecoded parameter value as it appears in the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Scalar(String),
    /// One entry per body line following the `KEY=` header line
    Sequence(Vec<String>),
}

impl RawValue {
    /// Number of body elements (a scalar counts as one)
    pub fn element_count(&self) -> usize {
        match self {
            RawValue::Scalar(_) => 1,
            RawValue::Sequence(lines) => lines.len(),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Scalar(value.to_string())
    }
}

impl From<Vec<&str>> for RawValue {
    fn from(lines: Vec<&str>) -> Self {
        RawValue::Sequence(lines.into_iter().map(str::to_string).collect())
    }
}

/// Parameter value after type inference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypedValue {
    Integer(i64),
    Real(f64),
    Text(String),
    /// Whitespace-separated tokens, or one entry per row of a multi-row array
    List(Vec<TypedValue>),
}

impl TypedValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TypedValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Numeric value, widening integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TypedValue::Integer(value) => Some(*value as f64),
            TypedValue::Real(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TypedValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, TypedValue::List(_))
    }

    /// First row of an array value.
    ///
    /// Multi-row arrays coerce to a list of row lists and yield row 0;
    /// anything else is already a single row.
    pub fn first_row(&self) -> &TypedValue {
        match self {
            TypedValue::List(rows) if !rows.is_empty() && rows.iter().all(TypedValue::is_list) => {
                &rows[0]
            }
            other => other,
        }
    }

    /// All atomic values in order, flattening rows
    pub fn tokens(&self) -> Vec<&TypedValue> {
        match self {
            TypedValue::List(items) => items.iter().flat_map(TypedValue::tokens).collect(),
            scalar => vec![scalar],
        }
    }

    /// Re-render as whitespace-separated text
    pub fn to_text(&self) -> String {
        match self {
            TypedValue::Integer(value) => value.to_string(),
            TypedValue::Real(value) => value.to_string(),
            TypedValue::Text(value) => value.clone(),
            TypedValue::List(items) => items
                .iter()
                .map(TypedValue::to_text)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::List(_) => write!(f, "[{}]", self.to_text()),
            _ => write!(f, "{}", self.to_text()),
        }
    }
}

/// Every decoded parameter of one source file
#[derive(Debug, Clone, PartialEq)]
pub struct RawParameters {
    format: ParameterFormat,
    values: HashMap<String, RawValue>,
}

impl RawParameters {
    pub fn new(format: ParameterFormat) -> Self {
        Self {
            format,
            values: HashMap::new(),
        }
    }

    /// Build a mapping from key/value pairs; later pairs overwrite earlier ones
    pub fn from_pairs<K, V, I>(format: ParameterFormat, pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<RawValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut parameters = Self::new(format);
        for (key, value) in pairs {
            parameters.insert(key, value);
        }
        parameters
    }

    pub fn format(&self) -> ParameterFormat {
        self.format
    }

    /// Insert a value; a repeated key replaces the earlier value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Option<RawValue> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RawValue)> {
        self.values.iter()
    }
}

/// Allow-listed parameters of one source file with inferred types
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedParameters {
    format: ParameterFormat,
    values: BTreeMap<String, TypedValue>,
}

impl ProjectedParameters {
    pub fn new(format: ParameterFormat) -> Self {
        Self {
            format,
            values: BTreeMap::new(),
        }
    }

    pub fn format(&self) -> ParameterFormat {
        self.format
    }

    pub fn insert(&mut self, key: impl Into<String>, value: TypedValue) -> Option<TypedValue> {
        self.values.insert(key.into(), value)
    }

    /// Look up a parameter; absence means "not acquired"
    pub fn get(&self, key: &str) -> Option<&TypedValue> {
        self.values.get(key)
    }

    /// Look up a parameter the caller cannot proceed without
    pub fn require(&self, key: &str) -> Result<&TypedValue> {
        self.values
            .get(key)
            .ok_or_else(|| BrukerError::missing_field(key, self.format))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TypedValue)> {
        self.values.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }
}

/// Sample encoding of the reconstructed pixel data file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelEncoding {
    Int16,
    Int32,
    Uint8,
    Float32,
}

impl PixelEncoding {
    /// Bytes per sample
    pub fn byte_width(&self) -> usize {
        match self {
            PixelEncoding::Uint8 => 1,
            PixelEncoding::Int16 => 2,
            PixelEncoding::Int32 | PixelEncoding::Float32 => 4,
        }
    }
}

impl fmt::Display for PixelEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PixelEncoding::Int16 => "int16",
            PixelEncoding::Int32 => "int32",
            PixelEncoding::Uint8 => "uint8",
            PixelEncoding::Float32 => "float32",
        };
        write!(f, "{}", name)
    }
}

/// Imaging geometry and diffusion parameters of one scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionDescriptor {
    /// X, Y, Z, B-value count, diffusion direction count
    pub dimensions: [usize; 5],
    /// X, Y, Z voxel size in millimetres
    pub voxel_size: [f64; 3],
    pub repetitions: usize,
    pub b0_count: usize,
    pub b_values: Vec<i64>,
    pub pixel_encoding: PixelEncoding,
}

/// Diffusion gradient directions and B0 volume positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientTable {
    /// One 3-vector per diffusion direction
    pub directions: Vec<[f64; 3]>,
    pub b_values: Vec<i64>,
    /// Indices into `b_values` of non-diffusion-weighted images
    pub b0_indices: Vec<usize>,
    pub repetitions: usize,
}

impl GradientTable {
    /// Total acquired volumes across repetitions
    pub fn volume_count(&self) -> usize {
        self.b_values.len() * self.repetitions
    }

    /// B0 positions expanded over every repetition
    pub fn b0_volume_indices(&self) -> Vec<usize> {
        let per_repetition = self.b_values.len();
        (0..self.repetitions)
            .flat_map(|repetition| {
                self.b0_indices
                    .iter()
                    .map(move |index| index + repetition * per_repetition)
            })
            .collect()
    }
}

/// The four files of one subject folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectPaths {
    pub method: PathBuf,
    pub reco: PathBuf,
    /// Reconstructed pixel data; passed through untouched
    pub pixel_data: PathBuf,
    /// Acquisition parameters; passed through untouched
    pub acq_params: PathBuf,
}

/// Everything derived for one subject, ready for image assembly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionRecord {
    pub paths: SubjectPaths,
    pub descriptor: AcquisitionDescriptor,
    pub gradients: GradientTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_parameters_last_write_wins() {
        let params = RawParameters::from_pairs(
            ParameterFormat::Method,
            [("PVM_NRepetitions", "1"), ("PVM_NRepetitions", "4")],
        );

        assert_eq!(params.len(), 1);
        assert_eq!(
            params.get("PVM_NRepetitions"),
            Some(&RawValue::Scalar("4".to_string()))
        );
    }

    #[test]
    fn test_require_names_missing_key() {
        let params = ProjectedParameters::new(ParameterFormat::Reco);
        let err = params.require("RECO_size").unwrap_err();

        match err {
            BrukerError::MissingField { key, format } => {
                assert_eq!(key, "RECO_size");
                assert_eq!(format, ParameterFormat::Reco);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_first_row_of_multi_row_list() {
        let rows = TypedValue::List(vec![
            TypedValue::List(vec![TypedValue::Integer(0), TypedValue::Integer(1000)]),
            TypedValue::List(vec![TypedValue::Integer(0), TypedValue::Integer(2000)]),
        ]);
        assert_eq!(
            rows.first_row(),
            &TypedValue::List(vec![TypedValue::Integer(0), TypedValue::Integer(1000)])
        );

        let single = TypedValue::List(vec![TypedValue::Integer(0), TypedValue::Integer(1000)]);
        assert_eq!(single.first_row(), &single);
        assert_eq!(TypedValue::Integer(5).first_row(), &TypedValue::Integer(5));
    }

    #[test]
    fn test_tokens_flatten_rows() {
        let rows = TypedValue::List(vec![
            TypedValue::List(vec![TypedValue::Real(1.0), TypedValue::Real(0.0)]),
            TypedValue::Real(0.5),
        ]);
        let tokens: Vec<f64> = rows.tokens().iter().filter_map(|t| t.as_f64()).collect();
        assert_eq!(tokens, vec![1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_to_text_joins_tokens() {
        let value = TypedValue::List(vec![
            TypedValue::Text("(".to_string()),
            TypedValue::Integer(2),
            TypedValue::Text(")3.0".to_string()),
            TypedValue::Real(3.5),
        ]);
        assert_eq!(value.to_text(), "( 2 )3.0 3.5");
    }

    #[test]
    fn test_typed_value_serializes_untagged() {
        let value = TypedValue::List(vec![
            TypedValue::Integer(3),
            TypedValue::Real(0.5),
            TypedValue::Text("Yes".to_string()),
        ]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"[3,0.5,"Yes"]"#);
    }

    #[test]
    fn test_b0_volume_indices_span_repetitions() {
        let table = GradientTable {
            directions: vec![[1.0, 0.0, 0.0]],
            b_values: vec![0, 1000, 2000],
            b0_indices: vec![0],
            repetitions: 3,
        };

        assert_eq!(table.volume_count(), 9);
        assert_eq!(table.b0_volume_indices(), vec![0, 3, 6]);
    }

    #[test]
    fn test_pixel_encoding_display() {
        assert_eq!(PixelEncoding::Int16.to_string(), "int16");
        assert_eq!(PixelEncoding::Float32.to_string(), "float32");
        assert_eq!(PixelEncoding::Uint8.byte_width(), 1);
    }
}
