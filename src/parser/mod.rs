//! Parser for Bruker ParaVision method and reco parameter files
//!
//! Raw file text flows through four stages, each usable on its own:
//!
//! - [`tokenizer`] - splits text into `##`-delimited parameter blocks
//! - [`decoder`] - turns each block into a key and raw value
//! - [`coercion`] - infers integer, real or text types for raw values
//! - [`projection`] - keeps the allow-listed keys with typed values
//!
//! [`reader`] ties the stages to the filesystem.
//!
//! ## Usage
//!
//! ```rust
//! use bruker_reader::models::{ParameterFormat, TypedValue};
//! use bruker_reader::parser::{decode_parameters, project};
//!
//! let text = "##TITLE=Parameter List\n##$PVM_NRepetitions=4\n##END=\n";
//! let raw = decode_parameters(text, ParameterFormat::Method);
//! let projected = project(&raw);
//!
//! assert_eq!(projected.get("PVM_NRepetitions"), Some(&TypedValue::Integer(4)));
//! ```

pub mod coercion;
pub mod decoder;
pub mod projection;
pub mod reader;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

pub use coercion::{coerce, coerce_str, coerce_token};
pub use decoder::{decode_block, decode_parameters};
pub use projection::{project, project_with};
pub use reader::{load_parameters, read_parameter_file};
pub use tokenizer::split_blocks;
