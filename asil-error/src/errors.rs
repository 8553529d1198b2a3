// ASIL - asil-error
// Module: Error Types
//
// Copyright (c) 2024 The ASIL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error value shared by every integrity operation.
//!
//! Errors are categorised and coded the same way across the workspace. A
//! format error keeps the offending input so callers can report it back to
//! whoever wrote the tag.

use core::fmt;

use crate::codes;

/// `Error` categories for integrity operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Input text does not follow the integrity tag grammar
    Format      = 1,
    /// Requested data was not retained when the value was built
    Unavailable = 2,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format => write!(f, "Format"),
            Self::Unavailable => write!(f, "Unavailable"),
        }
    }
}

/// Integrity `Error` type
///
/// Carries a category, a numeric code, a static message and, for format
/// errors, the rejected input verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
    input:        Option<String>,
}

impl Error {
    /// Create a new error without an attached input.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
            input: None,
        }
    }

    /// Create a format error for text that is not a valid integrity tag.
    ///
    /// The input is stored exactly as given, surrounding whitespace included.
    #[must_use]
    pub fn format(input: impl Into<String>) -> Self {
        Self {
            category: ErrorCategory::Format,
            code:     codes::INVALID_INTEGRITY_FORMAT,
            message:  "Invalid integrity format",
            input:    Some(input.into()),
        }
    }

    /// Create the error returned when the original text was not retained.
    #[must_use]
    pub const fn original_unavailable() -> Self {
        Self::new(
            ErrorCategory::Unavailable,
            codes::ORIGINAL_NOT_RETAINED,
            "The original integrity was not retained for this value",
        )
    }

    /// The rejected input, if this error carries one.
    #[must_use]
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    /// Check if this is a format error
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        self.category == ErrorCategory::Format
    }

    /// Check if this error reports a missing original text
    #[must_use]
    pub fn is_original_unavailable(&self) -> bool {
        self.category == ErrorCategory::Unavailable
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][E{}] {}", self.category, self.code, self.message)?;
        if let Some(input) = &self.input {
            write!(f, ": '{input}'")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
