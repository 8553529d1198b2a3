// ASIL - asil-error
// Module: Error Codes
//
// Copyright (c) 2024 The ASIL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for integrity tag processing

// Format error codes (1000-1999)
/// Input text does not match the integrity tag grammar
pub const INVALID_INTEGRITY_FORMAT: u16 = 1000;

// Availability error codes (2000-2999)
/// The verbatim source text was not retained at construction time
pub const ORIGINAL_NOT_RETAINED: u16 = 2000;
