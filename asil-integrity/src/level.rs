// ASIL - asil-integrity
// Module: Integrity Levels
//
// Copyright (c) 2024 The ASIL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The five-level ISO 26262 integrity scale.

use core::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// ASIL (Automotive Safety Integrity Level) as defined by ISO 26262
///
/// Levels are totally ordered by increasing rigor and encoded as ordinals
/// `QM = 0` through `D = 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AsilLevel {
    /// Quality Management (no specific safety requirements)
    QM = 0,
    /// ASIL-A (lowest safety integrity level)
    A  = 1,
    /// ASIL-B
    B  = 2,
    /// ASIL-C
    C  = 3,
    /// ASIL-D (highest safety integrity level)
    D  = 4,
}

impl AsilLevel {
    /// Every level, lowest first.
    pub const ALL: [Self; 5] = [Self::QM, Self::A, Self::B, Self::C, Self::D];

    /// Encoded ordinal of this level.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Decode an ordinal back into a level.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::QM),
            1 => Some(Self::A),
            2 => Some(Self::B),
            3 => Some(Self::C),
            4 => Some(Self::D),
            _ => None,
        }
    }

    /// Level token as it appears inside a decomposition suffix.
    #[must_use]
    pub const fn letter(self) -> &'static str {
        match self {
            Self::QM => "QM",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Map a single ASCII letter (either case) to one of the lettered levels.
    pub(crate) const fn from_letter(byte: u8) -> Option<Self> {
        match byte.to_ascii_uppercase() {
            b'A' => Some(Self::A),
            b'B' => Some(Self::B),
            b'C' => Some(Self::C),
            b'D' => Some(Self::D),
            _ => None,
        }
    }
}

impl Default for AsilLevel {
    fn default() -> Self {
        AsilLevel::QM
    }
}

impl fmt::Display for AsilLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsilLevel::QM => write!(f, "QM"),
            level => write!(f, "ASIL {}", level.letter()),
        }
    }
}
