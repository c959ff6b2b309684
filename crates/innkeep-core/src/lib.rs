//! # Innkeep Core
//!
//! Core types, errors, and utilities for the Innkeep API.
//!
//! This crate provides foundational types used throughout the Innkeep application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`permissions`]: The catalog of permission keys
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use innkeep_core::errors::AppError;
//! use innkeep_core::permissions;
//!
//! // Create an error
//! let error = AppError::bad_request(anyhow::anyhow!("Missing X-Tenant-Id header"));
//!
//! // Reference a permission key
//! let key = permissions::BOOKINGS_MANAGE;
//! ```

pub mod errors;
pub mod permissions;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse};
