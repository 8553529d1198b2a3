// ASIL - asil-integrity
// Module: Decomposition Inheritance
//
// Copyright (c) 2024 The ASIL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! ISO 26262 decomposition-compatibility rule between two requirements.

use crate::integrity::Integrity;

/// Check whether `child` is a valid decomposition of `parent`.
///
/// The child's decomposition suffix must name exactly the parent's base
/// level, and the child's own base must not exceed that suffix. A child
/// without a suffix never verifies.
#[must_use]
pub fn verify(parent: &Integrity, child: &Integrity) -> bool {
    child
        .decomposed()
        .is_some_and(|decomposed| decomposed == parent.base() && child.base() <= decomposed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(parent: &str, child: &str) -> bool {
        verify(&parent.parse().unwrap(), &child.parse().unwrap())
    }

    #[test]
    fn test_decomposed_child_of_matching_parent() {
        assert!(check("ASIL D", "ASIL B(D)"));
        assert!(check("ASIL D", "ASIL D(D)"));
        assert!(check("QM", "QM(QM)"));
    }

    #[test]
    fn test_child_above_its_decomposition() {
        assert!(!check("ASIL C", "ASIL D(C)"));
        assert!(!check("QM", "ASIL A(QM)"));
    }

    #[test]
    fn test_decomposition_must_match_parent() {
        assert!(!check("ASIL C", "ASIL B(D)"));
    }

    #[test]
    fn test_child_without_decomposition() {
        assert!(!check("ASIL D", "ASIL D"));
        assert!(!check("QM", "QM"));
    }

    #[test]
    fn test_parent_suffix_is_irrelevant() {
        assert!(check("ASIL D(QM)", "ASIL A(D)"));
    }
}
