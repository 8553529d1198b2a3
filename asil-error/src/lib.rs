// ASIL - asil-error
// Module: Integrity Error Handling
//
// Copyright (c) 2024 The ASIL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error handling for ISO 26262 integrity tags
//!
//! Every fallible integrity operation reports one of two error kinds, each
//! with its own range of error codes:
//!
//! ## Format Errors (1000-1999)
//! - Input text does not match the integrity tag grammar
//!
//! ## Availability Errors (2000-2999)
//! - The verbatim source text was requested but never retained
//!
//! # Usage
//!
//! ```
//! use asil_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::format("ASIL-E");
//! assert_eq!(error.category, ErrorCategory::Format);
//! assert_eq!(error.code, codes::INVALID_INTEGRITY_FORMAT);
//! assert_eq!(error.input(), Some("ASIL-E"));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Error codes for integrity processing
pub mod codes;
/// Error and error category types
pub mod errors;

pub use errors::{Error, ErrorCategory};

/// A specialized `Result` type for integrity operations.
pub type Result<T> = core::result::Result<T, Error>;
