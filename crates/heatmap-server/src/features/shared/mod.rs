//! Shared utilities for feature modules
//!
//! # Contents
//!
//! - **validation**: pure input validation rules and the error taxonomy

pub mod validation;

// Re-export commonly used types
pub use validation::{
    validate_audit_id, validate_audit_type, validate_date_range, validate_date_string,
    validate_title, validate_year, ValidationError,
};
