// ASIL - asil-integrity
// Module: Integrity Tag Engine
//
// Copyright (c) 2024 The ASIL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! ISO 26262 integrity tags
//!
//! Requirements documents spell the same ASIL in many ways: `"ASIL D"`,
//! `"ASIL_D"`, `"AsilD"`, `" asil-d "`. This crate recognizes every accepted
//! spelling, reduces it to one canonical form and answers the two questions
//! asked when requirements are refined:
//!
//! - how do two integrities rank against each other, and
//! - is a child's decomposed integrity a valid inheritance of its parent's.
//!
//! # Usage
//!
//! ```
//! use asil_integrity::{canonicalize, validate, verify_inheritance, AsilLevel, Integrity};
//!
//! assert!(validate(" asil_b (d)"));
//! assert_eq!(canonicalize(" asil_b (d)").unwrap(), "ASIL B(D)");
//! assert!(verify_inheritance("ASIL D", "ASIL B(D)").unwrap());
//!
//! let value = Integrity::new("ASILC", true).unwrap();
//! assert_eq!(value.base(), AsilLevel::C);
//! assert_eq!(value.original().unwrap(), "ASILC");
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod grammar;
pub mod inheritance;
pub mod integrity;
pub mod level;

pub use asil_error::{
    Error,
    ErrorCategory,
    Result,
};
pub use integrity::Integrity;
pub use level::AsilLevel;

/// Check whether `asil` is a valid integrity tag.
///
/// The text does not need to be in canonical form.
#[must_use]
pub fn validate(asil: &str) -> bool {
    Integrity::validate(asil)
}

/// Reduce a valid integrity tag to its canonical spelling.
///
/// # Errors
///
/// Returns a format error when `asil` is not a valid tag.
pub fn canonicalize(asil: &str) -> Result<String> {
    Ok(asil.parse::<Integrity>()?.to_string())
}

/// Check whether the `child` integrity is a valid inheritance of `parent`.
///
/// # Errors
///
/// Returns a format error for the first of the two tags that is invalid,
/// the child being parsed first.
pub fn verify_inheritance(parent: &str, child: &str) -> Result<bool> {
    let child: Integrity = child.parse()?;
    let parent: Integrity = parent.parse()?;
    Ok(child.verify_with_parent(&parent))
}

/// Highest integrity among `tags`, or `None` if there are none.
///
/// Integrities of equal base rank the same, so the first of them wins.
///
/// # Errors
///
/// Returns a format error for the first invalid tag.
pub fn highest<I, S>(tags: I) -> Result<Option<Integrity>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut best: Option<Integrity> = None;
    for tag in tags {
        let candidate: Integrity = tag.as_ref().parse()?;
        if best.as_ref().is_none_or(|current| candidate > *current) {
            best = Some(candidate);
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_wrapper() {
        assert!(validate("ASIL-C"));
        assert!(!validate("ASIL-E"));
    }

    #[test]
    fn test_canonicalize_wrapper() {
        assert_eq!(canonicalize("asilb").unwrap(), "ASIL B");
        let error = canonicalize("bob").unwrap_err();
        assert_eq!(error.input(), Some("bob"));
    }

    #[test]
    fn test_verify_inheritance_reports_invalid_tag() {
        let error = verify_inheritance("ASIL D", "ASIL B(E)").unwrap_err();
        assert_eq!(error.input(), Some("ASIL B(E)"));

        let error = verify_inheritance("ASIL X", "ASIL B(D)").unwrap_err();
        assert_eq!(error.input(), Some("ASIL X"));
    }

    #[test]
    fn test_highest() {
        let top = highest(["ASIL B", "ASIL D(D)", "QM", "ASIL D"]).unwrap().unwrap();
        assert_eq!(top.to_string(), "ASIL D(D)");

        assert!(highest(Vec::<String>::new()).unwrap().is_none());
        assert!(highest(["ASIL A", "nope"]).unwrap_err().is_format_error());
    }
}
