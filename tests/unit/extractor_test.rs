//! Tests for text extraction over a whole corpus

use std::sync::Arc;
use std::time::{Duration, Instant};

use manifesto_corpus::config::{CorpusConfig, ExtractionConfig};
use manifesto_corpus::core::models::{ExtractionSource, ExtractionStatus};
use manifesto_corpus::corpus::Corpus;
use manifesto_corpus::extractor::Extractor;
use manifesto_corpus::ingest::Ingestor;

use crate::common::mocks::{MemoryCache, StubSource};
use crate::common::{TestArchive, date};

fn build(archive: &TestArchive) -> Corpus {
    Ingestor::new(CorpusConfig::default()).without_extraction().ingest(archive.path()).unwrap().corpus
}

fn config(workers: usize) -> ExtractionConfig {
    ExtractionConfig { workers, ..ExtractionConfig::default() }
}

fn status(corpus: &Corpus, party: &str) -> ExtractionStatus {
    corpus.program_for("TK", date(2017, 3), party).unwrap().status()
}

#[test]
fn test_every_program_reaches_a_terminal_status() {
    let archive = TestArchive::new();
    for file in ["CDA.pdf", "CU.pdf", "PVV.pdf", "SP.pdf"] {
        archive.add_manifest(&format!("TK/2017-03/{file}"));
    }
    let mut corpus = build(&archive);

    let source = StubSource::new()
        .text("CDA.pdf", "Samen werken aan een sterk land.")
        .text("CU.pdf", " \n ")
        .fail("PVV.pdf", "broken xref")
        .panic("SP.pdf");
    let counts = Extractor::new(Arc::new(source), config(3)).extract_all(&mut corpus);

    assert_eq!(status(&corpus, "CDA"), ExtractionStatus::Extracted);
    assert_eq!(status(&corpus, "CU"), ExtractionStatus::EmptyExtraction);
    assert_eq!(status(&corpus, "PVV"), ExtractionStatus::ExtractionFailed);
    assert_eq!(status(&corpus, "SP"), ExtractionStatus::ExtractionFailed);
    assert_eq!((counts.extracted, counts.empty, counts.failed), (1, 1, 2));

    let cda = corpus.program_for("TK", date(2017, 3), "CDA").unwrap();
    assert_eq!(cda.text(), Some("Samen werken aan een sterk land."));
    assert_eq!(corpus.extracted_programs().len(), 1);

    let pvv = corpus.program_for("TK", date(2017, 3), "PVV").unwrap();
    assert!(pvv.extraction().error.as_deref().unwrap().contains("broken xref"));
    let sp = corpus.program_for("TK", date(2017, 3), "SP").unwrap();
    assert!(sp.extraction().error.as_deref().unwrap().contains("panicked"));
}

#[test]
fn test_hung_extraction_times_out() {
    let archive = TestArchive::new();
    archive.add_manifest("TK/2017-03/CDA.pdf");
    archive.add_manifest("TK/2017-03/VVD.pdf");
    let mut corpus = build(&archive);

    let source = StubSource::new().hang("CDA.pdf").text("VVD.pdf", "Vrijheid.");
    let started = Instant::now();
    let counts = Extractor::new(Arc::new(source), config(2))
        .with_timeout(Duration::from_millis(200))
        .extract_all(&mut corpus);

    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(counts.failed, 1);
    assert_eq!(status(&corpus, "VVD"), ExtractionStatus::Extracted);

    let cda = corpus.program_for("TK", date(2017, 3), "CDA").unwrap();
    assert_eq!(cda.status(), ExtractionStatus::ExtractionFailed);
    assert!(cda.extraction().error.as_deref().unwrap().contains("timed out"));
}

#[test]
fn test_joint_program_is_extracted_once() {
    let archive = TestArchive::new();
    archive.add_manifest("TK/2017-03/CU+SGP.pdf");
    let mut corpus = build(&archive);

    let source = Arc::new(StubSource::new().text("CU+SGP.pdf", "Samen."));
    Extractor::new(source.clone(), config(4)).extract_all(&mut corpus);

    assert_eq!(source.calls(), 1);
    assert_eq!(status(&corpus, "CU"), ExtractionStatus::Extracted);
    assert_eq!(status(&corpus, "SGP"), ExtractionStatus::Extracted);
}

#[test]
fn test_second_pass_leaves_finished_programs_alone() {
    let archive = TestArchive::new();
    archive.add_manifest("TK/2017-03/CDA.pdf");
    let mut corpus = build(&archive);

    let source = Arc::new(StubSource::new().text("CDA.pdf", "eerste"));
    let extractor = Extractor::new(source.clone(), config(1));
    extractor.extract_all(&mut corpus);
    let counts = extractor.extract_all(&mut corpus);

    assert_eq!(counts.total(), 0);
    assert_eq!(source.calls(), 1);
}

#[test]
fn test_cache_round_trip() {
    let archive = TestArchive::new();
    archive.add_manifest("TK/2017-03/CDA #Short.pdf");
    let cache = Arc::new(MemoryCache::new());

    let source = Arc::new(StubSource::new().text("CDA #Short.pdf", "Korte   versie."));
    let mut first = build(&archive);
    Extractor::new(source.clone(), config(1))
        .with_cache(cache.clone(), false)
        .extract_all(&mut first);
    assert_eq!(cache.get("TK-CDA-2017-03#Sho.txt").as_deref(), Some("Korte versie."));

    let mut second = build(&archive);
    let counts = Extractor::new(source.clone(), config(1))
        .with_cache(cache.clone(), false)
        .extract_all(&mut second);

    assert_eq!(source.calls(), 1);
    assert_eq!(counts.from_cache, 1);
    let program = second.program_for("TK", date(2017, 3), "CDA").unwrap();
    assert_eq!(program.text(), Some("Korte versie."));
    assert_eq!(program.extraction().source, Some(ExtractionSource::Cache));
}

#[test]
fn test_failures_are_not_cached() {
    let archive = TestArchive::new();
    archive.add_manifest("TK/2017-03/CDA.pdf");
    archive.add_manifest("TK/2017-03/CU.pdf");
    let cache = Arc::new(MemoryCache::new());

    let source = StubSource::new().fail("CDA.pdf", "corrupt").text("CU.pdf", "");
    let mut corpus = build(&archive);
    Extractor::new(Arc::new(source), config(2))
        .with_cache(cache.clone(), false)
        .extract_all(&mut corpus);

    assert_eq!(cache.len(), 0);
}

#[test]
fn test_normalization_can_be_disabled() {
    let archive = TestArchive::new();
    archive.add_manifest("TK/2017-03/CDA.pdf");
    let mut corpus = build(&archive);

    let raw = "Hoofd-\nstuk 1\n\n3\n\nTekst";
    let settings = ExtractionConfig { normalize: false, remove_slogans: false, ..config(1) };
    Extractor::new(Arc::new(StubSource::new().text("CDA.pdf", raw)), settings)
        .extract_all(&mut corpus);

    let program = corpus.program_for("TK", date(2017, 3), "CDA").unwrap();
    assert_eq!(program.text(), Some(raw));
}
