// ASIL - asil-integrity
// Module: Tag Grammar
//
// Copyright (c) 2024 The ASIL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Recognizer for the integrity tag grammar.
//!
//! ```text
//! tag        := base [" "] [suffix]
//! base       := "QM" | "ASIL" ["-" | "_" | " "] letter
//! suffix     := "(" [" "] (letter | "QM") [" "] ")"
//! letter     := "A" | "B" | "C" | "D"
//! ```
//!
//! Keywords and letters match without regard to ASCII case. Whitespace around
//! the whole tag is ignored; every other character must be consumed by the
//! grammar.

#[cfg(feature = "tracing")]
use tracing::trace;

use crate::level::AsilLevel;

/// Level tokens recognized in a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokens {
    /// Base level of the tag
    pub base:       AsilLevel,
    /// Level named in the parenthesized decomposition suffix, if any
    pub decomposed: Option<AsilLevel>,
}

/// Match `input` against the tag grammar.
///
/// Returns `None` when the text is not a tag. This never fails otherwise;
/// turning a mismatch into an error is left to the caller.
#[must_use]
pub fn recognize(input: &str) -> Option<Tokens> {
    let tokens = Cursor::new(input.trim()).tag();

    #[cfg(feature = "tracing")]
    trace!(input, matched = tokens.is_some(), "recognize integrity tag");

    tokens
}

/// Byte cursor over the trimmed input.
struct Cursor<'a> {
    rest: &'a [u8],
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            rest: input.as_bytes(),
        }
    }

    fn tag(mut self) -> Option<Tokens> {
        let base = self.base()?;
        self.eat(b' ');
        let decomposed = if self.eat(b'(') {
            Some(self.suffix()?)
        } else {
            None
        };
        self.rest.is_empty().then_some(Tokens { base, decomposed })
    }

    fn base(&mut self) -> Option<AsilLevel> {
        if self.eat_keyword(b"QM") {
            return Some(AsilLevel::QM);
        }
        if !self.eat_keyword(b"ASIL") {
            return None;
        }
        // At most one separator
        let _ = self.eat(b'-') || self.eat(b'_') || self.eat(b' ');
        self.letter()
    }

    /// Body of the suffix, after the opening parenthesis.
    fn suffix(&mut self) -> Option<AsilLevel> {
        self.eat(b' ');
        let level = if self.eat_keyword(b"QM") {
            AsilLevel::QM
        } else {
            self.letter()?
        };
        self.eat(b' ');
        self.eat(b')').then_some(level)
    }

    fn letter(&mut self) -> Option<AsilLevel> {
        let (&first, rest) = self.rest.split_first()?;
        let level = AsilLevel::from_letter(first)?;
        self.rest = rest;
        Some(level)
    }

    fn eat(&mut self, byte: u8) -> bool {
        match self.rest.split_first() {
            Some((&first, rest)) if first == byte => {
                self.rest = rest;
                true
            },
            _ => false,
        }
    }

    fn eat_keyword(&mut self, keyword: &[u8]) -> bool {
        match self.rest.get(..keyword.len()) {
            Some(head) if head.eq_ignore_ascii_case(keyword) => {
                self.rest = &self.rest[keyword.len()..];
                true
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(base: AsilLevel, decomposed: Option<AsilLevel>) -> Option<Tokens> {
        Some(Tokens { base, decomposed })
    }

    #[test]
    fn test_base_spellings() {
        for input in ["ASIL D", "ASIL-D", "ASIL_D", "ASILD", "asild", "AsilD"] {
            assert_eq!(recognize(input), tokens(AsilLevel::D, None), "{input}");
        }
        assert_eq!(recognize("qm"), tokens(AsilLevel::QM, None));
    }

    #[test]
    fn test_decomposition_suffix() {
        assert_eq!(
            recognize("ASIL B(D)"),
            tokens(AsilLevel::B, Some(AsilLevel::D))
        );
        assert_eq!(
            recognize(" ASILD ( a )"),
            tokens(AsilLevel::D, Some(AsilLevel::A))
        );
        assert_eq!(
            recognize("qm (b )"),
            tokens(AsilLevel::QM, Some(AsilLevel::B))
        );
        assert_eq!(
            recognize("ASIL_D (QM )"),
            tokens(AsilLevel::D, Some(AsilLevel::QM))
        );
    }

    #[test]
    fn test_outer_whitespace_is_ignored() {
        assert_eq!(recognize("\t ASIL C \n"), tokens(AsilLevel::C, None));
    }

    #[test]
    fn test_rejections() {
        for input in [
            "",
            "a",
            "ASIL",
            "ASIL QM",
            "asilqm",
            "ASIL-E",
            "asilad",
            "ASIL--A",
            "ASIL -A",
            "ASIL.A",
            "ASIL A  (B)",
            "ASIL A(B",
            "ASIL A B)",
            "ASIL A(  B)",
            "ASIL A(B)x",
            "ASIL A()",
            "ASIL A(E)",
            "QM(ASIL B)",
            "xASIL A",
        ] {
            assert_eq!(recognize(input), None, "{input:?}");
        }
    }

    #[test]
    fn test_non_ascii_is_rejected() {
        assert_eq!(recognize("ASİL A"), None);
        assert_eq!(recognize("ASIL Ä"), None);
    }
}
