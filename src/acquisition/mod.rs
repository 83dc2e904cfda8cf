//! Acquisition derivation from projected method and reco parameters
//!
//! - [`derivation`] - image geometry, voxel size and pixel encoding
//! - [`gradients`] - diffusion direction table and B0 image positions
//! - [`fields`] - typed access to required parameters
//!
//! Both derivations are all-or-nothing: a missing or unusable field aborts
//! with an error naming the key, and no partial result is returned.

pub mod derivation;
pub mod fields;
pub mod gradients;

#[cfg(test)]
pub mod tests;

pub use derivation::{derive_acquisition, strip_parenthesized};
pub use gradients::derive_gradient_table;
