//! Integration tests for integrity tag recognition, rendering and inheritance

use asil_integrity::{
    canonicalize,
    validate,
    verify_inheritance,
    AsilLevel,
    Integrity,
};

const VALID_ASIL: &[&str] = &[
    " ASIL_D ",
    " ASIL_D (QM )",
    " ASIL_D",
    " AsilD ",
    " ASILD ( a )",
    " ASILD ( B )",
    "ASIL A",
    "ASIL_D",
    "ASIL-C",
    "ASILB",
    "ASILD(QM)",
    "qm (b )",
    "qm",
    "QM",
    "QM(B)",
];

const INVALID_ASIL: &[&str] = &[
    "a",
    "ASIL QM",
    "ASIL-A( E)",
    "ASIL-E",
    "asilad",
    "ASILE",
    "asilqm",
    "bob",
];

#[test]
fn test_valid_asil_constructs() {
    for input in VALID_ASIL {
        assert!(Integrity::new(input, false).is_ok(), "{input:?}");
    }
}

#[test]
fn test_invalid_asil_fails_with_format_error() {
    for input in INVALID_ASIL {
        let error = Integrity::new(input, false).unwrap_err();
        assert!(error.is_format_error(), "{input:?}");
        assert_eq!(error.input(), Some(*input));
    }
}

#[test]
fn test_valid_asil_validates() {
    for input in VALID_ASIL {
        assert!(validate(input), "{input:?}");
    }
}

#[test]
fn test_invalid_asil_does_not_validate() {
    for input in INVALID_ASIL {
        assert!(!validate(input), "{input:?}");
        assert!(canonicalize(input).unwrap_err().is_format_error());
    }
}

#[test]
fn test_canonical_forms() {
    let expected = [
        (" ASIL_D ", "ASIL D"),
        (" ASIL_D (QM )", "ASIL D(QM)"),
        (" ASILD ( a )", "ASIL D(A)"),
        ("ASILB", "ASIL B"),
        ("qm (b )", "QM(B)"),
        ("qm", "QM"),
    ];
    for (input, canonical) in expected {
        assert_eq!(canonicalize(input).unwrap(), canonical, "{input:?}");
    }
}

#[test]
fn test_canonicalize_is_idempotent_on_samples() {
    for input in VALID_ASIL {
        let once = canonicalize(input).unwrap();
        assert_eq!(canonicalize(&once).unwrap(), once);
    }
}

#[test]
fn test_ordering_scale() {
    let mut values: Vec<Integrity> = ["ASIL D", "QM(A)", "ASIL B", "ASIL A(B)", "ASIL C"]
        .iter()
        .map(|tag| tag.parse().unwrap())
        .collect();
    values.sort();
    let bases: Vec<AsilLevel> = values.iter().map(Integrity::base).collect();
    assert_eq!(bases, AsilLevel::ALL);
}

#[test]
fn test_decomposition_does_not_change_rank() {
    let decomposed: Integrity = "ASIL B(QM)".parse().unwrap();
    let plain: Integrity = "ASIL B".parse().unwrap();
    assert_eq!(decomposed, plain);
    assert!(!(decomposed < plain));
    assert!(!(decomposed > plain));
}

#[test]
fn test_verify_inheritance_scenarios() {
    assert!(verify_inheritance("ASIL D", "ASIL B(D)").unwrap());
    assert!(!verify_inheritance("ASIL C", "ASIL D(C)").unwrap());
    assert!(!verify_inheritance("QM", "ASIL A(QM)").unwrap());
    assert!(verify_inheritance("QM", "QM(QM)").unwrap());
    assert!(!verify_inheritance("ASIL D", "ASIL D").unwrap());
}

#[test]
fn test_verify_from_both_sides() {
    let parent: Integrity = "ASIL D".parse().unwrap();
    let child: Integrity = "ASIL A(D)".parse().unwrap();
    assert!(parent.verify_with_child(&child));
    assert!(child.verify_with_parent(&parent));
    assert!(!child.verify_with_child(&parent));
}

#[test]
fn test_original_access() {
    let kept = Integrity::new(" AsilD ", true).unwrap();
    assert_eq!(kept.original().unwrap(), " AsilD ");

    let dropped = Integrity::new(" AsilD ", false).unwrap();
    assert!(dropped.original().unwrap_err().is_original_unavailable());
}
