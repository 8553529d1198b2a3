// ASIL - asil-integrity
// Module: Integrity Values
//
// Copyright (c) 2024 The ASIL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Canonical structured form of an integrity tag.
//!
//! An [`Integrity`] is built once from text and never changes afterwards. It
//! renders back to the one canonical spelling (`"ASIL B(D)"`, `"QM"`, ...)
//! and compares on its base level only: the decomposition suffix records how
//! a level was derived, not a different level.

use core::{
    cmp::Ordering,
    fmt,
    hash::{
        Hash,
        Hasher,
    },
    str::FromStr,
};

use asil_error::{
    Error,
    Result,
};
use serde::{
    de,
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};
#[cfg(feature = "tracing")]
use tracing::debug;

use crate::{
    grammar,
    inheritance,
    level::AsilLevel,
};

/// ISO 26262 integrity of a single requirement
#[derive(Debug, Clone)]
pub struct Integrity {
    base:       AsilLevel,
    decomposed: Option<AsilLevel>,
    original:   Option<String>,
}

impl Integrity {
    /// Parse `text` into an integrity value.
    ///
    /// With `keep_original` set the text is stored verbatim and can be read
    /// back through [`Integrity::original`].
    ///
    /// # Errors
    ///
    /// Returns a format error carrying `text` when it is not a valid tag.
    pub fn new(text: &str, keep_original: bool) -> Result<Self> {
        let Some(tokens) = grammar::recognize(text) else {
            #[cfg(feature = "tracing")]
            debug!(input = text, "rejected integrity tag");
            return Err(Error::format(text));
        };

        Ok(Self {
            base:       tokens.base,
            decomposed: tokens.decomposed,
            original:   keep_original.then(|| text.to_owned()),
        })
    }

    /// Check whether `text` is a valid integrity tag in any accepted spelling.
    #[must_use]
    pub fn validate(text: &str) -> bool {
        grammar::recognize(text).is_some()
    }

    /// Base level of this integrity.
    #[must_use]
    pub const fn base(&self) -> AsilLevel {
        self.base
    }

    /// Level this integrity was decomposed from, if it carries a suffix.
    #[must_use]
    pub const fn decomposed(&self) -> Option<AsilLevel> {
        self.decomposed
    }

    /// Whether a decomposition suffix was present.
    #[must_use]
    pub const fn is_decomposed(&self) -> bool {
        self.decomposed.is_some()
    }

    /// The text this value was parsed from.
    ///
    /// # Errors
    ///
    /// Fails with an unavailable error when the value was built without
    /// `keep_original`.
    pub fn original(&self) -> Result<&str> {
        self.original
            .as_deref()
            .ok_or_else(Error::original_unavailable)
    }

    /// Check this integrity, as a child, against a parent requirement's.
    #[must_use]
    pub fn verify_with_parent(&self, parent: &Integrity) -> bool {
        inheritance::verify(parent, self)
    }

    /// Check this integrity, as a parent, against a child requirement's.
    #[must_use]
    pub fn verify_with_child(&self, child: &Integrity) -> bool {
        inheritance::verify(self, child)
    }
}

impl fmt::Display for Integrity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        if let Some(decomposed) = self.decomposed {
            write!(f, "({})", decomposed.letter())?;
        }
        Ok(())
    }
}

impl FromStr for Integrity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s, false)
    }
}

impl TryFrom<&str> for Integrity {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl PartialEq for Integrity {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl Eq for Integrity {}

impl PartialOrd for Integrity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integrity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.base.cmp(&other.base)
    }
}

impl Hash for Integrity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state);
    }
}

impl Serialize for Integrity {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Integrity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
