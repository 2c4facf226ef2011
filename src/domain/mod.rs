//! Domain value objects and types.
//!
//! This module contains the e-mail endpoint value object together with the
//! address matcher and display-name normalizer it is built from. Validation
//! happens at construction time so an invalid address can never be stored.

pub mod address;
pub mod display_name;
pub mod endpoint;

pub use address::contains_valid_address;
pub use display_name::{normalize_display_name, strip_non_ascii};
pub use endpoint::{EmailEndpoint, INVALID_ADDRESS};
