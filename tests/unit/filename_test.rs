//! Tests for the filename decoder

use std::path::Path;

use manifesto_corpus::core::models::{PartyCode, Tag};
use manifesto_corpus::core::services::{decode_filename, has_manifesto_extension};
use manifesto_corpus::error::IngestError;

fn parties(name: &str) -> Vec<String> {
    decode_filename(Path::new(name))
        .unwrap()
        .parties
        .iter()
        .map(PartyCode::to_string)
        .collect()
}

// =============================================================================
// PARTY SECTION
// =============================================================================

#[test]
fn test_joint_program_in_filename_order() {
    assert_eq!(parties("GL+PvdA.pdf"), ["GL", "PvdA"]);
    assert_eq!(parties("PvdA+GL.pdf"), ["PvdA", "GL"]);
}

#[test]
fn test_digits_are_valid_party_characters() {
    assert_eq!(parties("50PLUS.pdf"), ["50PLUS"]);
}

#[test]
fn test_extension_is_case_insensitive() {
    assert_eq!(parties("CDA.PDF"), ["CDA"]);
    assert_eq!(parties("CDA.Pdf"), ["CDA"]);
}

#[test]
fn test_empty_party_between_joiners_is_malformed() {
    for name in ["CDA++CU.pdf", "+CU.pdf", "CDA+.pdf"] {
        let err = decode_filename(Path::new(name)).unwrap_err();
        assert!(matches!(err, IngestError::MalformedFilename { .. }), "{name}: {err}");
    }
}

#[test]
fn test_only_tags_is_malformed() {
    let err = decode_filename(Path::new(" #Short.pdf")).unwrap_err();
    assert!(matches!(err, IngestError::MalformedFilename { .. }));
}

#[test]
fn test_whitespace_inside_party_code_is_malformed() {
    let err = decode_filename(Path::new("Groen Links.pdf")).unwrap_err();
    assert!(matches!(err, IngestError::MalformedFilename { .. }));
}

#[test]
fn test_tag_without_separating_space_is_malformed() {
    let err = decode_filename(Path::new("CDA#Short.pdf")).unwrap_err();
    assert!(matches!(err, IngestError::MalformedFilename { .. }));
}

// =============================================================================
// TAG SECTION
// =============================================================================

#[test]
fn test_tags_are_collected() {
    let decoded = decode_filename(Path::new("CDA #Concept #NotExtractable.pdf")).unwrap();
    assert!(decoded.tags.contains(Tag::Concept));
    assert!(decoded.tags.contains(Tag::NotExtractable));
    assert_eq!(decoded.tags.len(), 2);
}

#[test]
fn test_repeated_tag_is_idempotent() {
    let decoded = decode_filename(Path::new("CDA #Short #Short.pdf")).unwrap();
    assert_eq!(decoded.tags.len(), 1);
}

#[test]
fn test_unknown_tag_names_token_and_file() {
    let err = decode_filename(Path::new("TK/2017-03/CDA #Foo.pdf")).unwrap_err();
    match err {
        IngestError::UnknownTag { tag, file } => {
            assert_eq!(tag, "Foo");
            assert!(file.ends_with("CDA #Foo.pdf"));
        },
        other => panic!("expected unknown tag, got {other}"),
    }
}

#[test]
fn test_tag_matching_is_case_sensitive() {
    let err = decode_filename(Path::new("CDA #short.pdf")).unwrap_err();
    assert!(matches!(err, IngestError::UnknownTag { ref tag, .. } if tag == "short"));
}

// =============================================================================
// NON-MANIFESTS
// =============================================================================

#[test]
fn test_other_extensions_are_skips() {
    for name in ["notes.txt", "CDA.pdf.bak", "README"] {
        let err = decode_filename(Path::new(name)).unwrap_err();
        assert!(err.is_skip(), "{name} should be skipped, got {err}");
    }
}

#[test]
fn test_has_manifesto_extension() {
    assert!(has_manifesto_extension(Path::new("TK/2017-03/CDA #Short.pdf")));
    assert!(has_manifesto_extension(Path::new("CDA.PDF")));
    assert!(!has_manifesto_extension(Path::new("CDA.txt")));
    assert!(!has_manifesto_extension(Path::new("pdf")));
}
