//! Mail Endpoint - a validated e-mail participant value type.
//!
//! An [`EmailEndpoint`] pairs an optional address with an optional display
//! name, as used for sender and recipient fields of a message. Addresses are
//! checked against a restricted practical pattern; display names are reduced
//! to trimmed ASCII.
//!
//! # Architecture
//!
//! - **domain**: The endpoint value object, address matcher and display-name normalizer
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration for the `endpoint-check` binary, read from environment variables
//! - **check**: Line-oriented endpoint checking used by the binary

pub mod check;
pub mod config;
pub mod domain;
pub mod error;

pub use check::{CheckOutcome, CheckSummary, EndpointChecker};
pub use config::{Config, OutputFormat};
pub use domain::{contains_valid_address, EmailEndpoint};
pub use error::{ConfigError, EndpointError};
