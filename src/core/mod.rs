//! Core invoice types, the GST computation engine, and validation.
//!
//! This module provides the value types exchanged with the invoicing
//! backend, the pure totals computation, form validation, GSTIN checks,
//! and display formatting for the totals summary.

mod builder;
mod calc;
mod error;
mod format;
pub mod gstin;
mod profile;
mod submission;
mod types;
mod validation;

pub use builder::*;
pub use calc::*;
pub use error::*;
pub use format::*;
pub use gstin::{Gstin, GstinFormatError, determine_tax_type, validate_gstin_format};
pub use profile::*;
pub use submission::*;
pub use types::*;
pub use validation::*;
