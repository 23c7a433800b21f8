//! Tests for the election scanner

use manifesto_corpus::error::{CorpusError, IngestError};
use manifesto_corpus::scanner::{ElectionScanner, ScanEvent};

use crate::common::{TestArchive, election};

fn file_names(archive: &TestArchive) -> Vec<String> {
    ElectionScanner::new(archive.path())
        .unwrap()
        .scan()
        .filter_map(|event| match event {
            ScanEvent::Candidate { election, file } => Some(format!(
                "{}/{}",
                election,
                file.file_name().unwrap().to_string_lossy()
            )),
            ScanEvent::Rejected(_) => None,
        })
        .collect()
}

#[test]
fn test_scan_order_is_lexicographic() {
    let archive = TestArchive::national();
    assert_eq!(
        file_names(&archive),
        [
            "EP 2019-05/CU+SGP.pdf",
            "TK 2017-03/CDA.pdf",
            "TK 2017-03/CU+SGP.pdf",
            "TK 2017-03/VVD #Short.pdf",
            "TK 2021-03/CDA #Concept.pdf",
            "TK 2021-03/VVD.pdf",
        ]
    );
}

#[test]
fn test_candidates_carry_their_election() {
    let archive = TestArchive::new();
    archive.add_manifest("GR/2022-03/D66.pdf");

    let events: Vec<ScanEvent> = ElectionScanner::new(archive.path()).unwrap().scan().collect();
    assert_eq!(events.len(), 1);
    match &events[0] {
        ScanEvent::Candidate { election: found, file } => {
            assert_eq!(found, &election("GR", 2022, 3));
            assert_eq!(file, &archive.join("GR/2022-03/D66.pdf"));
        },
        ScanEvent::Rejected(err) => panic!("unexpected rejection: {err}"),
    }
}

#[test]
fn test_non_pdf_files_in_date_dirs_are_still_candidates() {
    let archive = TestArchive::new();
    archive.add_manifest("TK/2017-03/CDA.pdf");
    archive.add_file("TK/2017-03/bronnen.txt", "links");

    // The decoder turns these into skips; the scanner reports every file
    assert_eq!(file_names(&archive), ["TK 2017-03/CDA.pdf", "TK 2017-03/bronnen.txt"]);
}

#[test]
fn test_invalid_date_dir_is_reported_once_and_skipped() {
    let archive = TestArchive::national();
    archive.add_manifest("TK/not-a-date/CDA.pdf");
    archive.add_manifest("TK/not-a-date/VVD.pdf");

    let events: Vec<ScanEvent> = ElectionScanner::new(archive.path()).unwrap().scan().collect();
    let rejected: Vec<&IngestError> = events
        .iter()
        .filter_map(|e| match e {
            ScanEvent::Rejected(err) => Some(err),
            ScanEvent::Candidate { .. } => None,
        })
        .collect();

    assert_eq!(rejected.len(), 1);
    assert!(matches!(
        rejected[0],
        IngestError::InvalidElectionDate { value, .. } if value == "not-a-date"
    ));
    assert_eq!(file_names(&archive).len(), 6);
}

#[test]
fn test_nested_directories_and_stray_files_are_ignored() {
    let archive = TestArchive::new();
    archive.add_file("README.md", "# data");
    archive.add_file("TK/index.txt", "");
    archive.add_manifest("TK/2017-03/archief/CDA.pdf");
    archive.add_manifest("TK/2017-03/VVD.pdf");
    archive.add_dir("TK/2017-03/leeg");

    assert_eq!(file_names(&archive), ["TK 2017-03/VVD.pdf"]);
}

#[test]
fn test_hidden_entries_are_ignored() {
    let archive = TestArchive::new();
    archive.add_manifest(".git/2017-03/CDA.pdf");
    archive.add_manifest("TK/.cache/CDA.pdf");
    archive.add_manifest("TK/2017-03/.CDA.pdf");
    archive.add_manifest("TK/2017-03/CDA.pdf");

    let events: Vec<ScanEvent> = ElectionScanner::new(archive.path()).unwrap().scan().collect();
    assert_eq!(events.len(), 1);
}

#[test]
fn test_empty_root_yields_nothing() {
    let archive = TestArchive::new();
    assert_eq!(ElectionScanner::new(archive.path()).unwrap().scan().count(), 0);
}

#[test]
fn test_root_must_be_a_directory() {
    let archive = TestArchive::new();
    archive.add_file("data.pdf", "");

    let err = ElectionScanner::new(archive.join("data.pdf")).unwrap_err();
    assert!(matches!(err, CorpusError::NotADirectory(_)));

    let err = ElectionScanner::new(archive.join("missing")).unwrap_err();
    assert!(matches!(err, CorpusError::RootNotFound(_)));
}
