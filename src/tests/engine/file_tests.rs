//! End-to-end copy tests against real files.

use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use crate::config::{DestinationSpec, WriteMode};
use crate::engine::TeeEngine;
use crate::io::FileOutput;

fn file_spec(path: &Path) -> DestinationSpec {
    DestinationSpec::new(
        path.to_string_lossy().into_owned(),
        Arc::new(FileOutput::new(path.to_path_buf())),
    )
}

#[test]
fn copies_input_to_multiple_files() {
    let dir = tempfile::tempdir().unwrap();
    let p1 = dir.path().join("one.txt");
    let p2 = dir.path().join("two.txt");

    let engine = TeeEngine::new(WriteMode::Truncate, vec![file_spec(&p1), file_spec(&p2)]);
    let copied = engine.run(Cursor::new(b"payload".to_vec())).unwrap();

    assert_eq!(copied, 7);
    assert_eq!(fs::read(&p1).unwrap(), b"payload".to_vec());
    assert_eq!(fs::read(&p2).unwrap(), b"payload".to_vec());
}

#[test]
fn truncate_mode_is_idempotent_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let engine = TeeEngine::new(WriteMode::Truncate, vec![file_spec(&path)]);
    engine
        .run(Cursor::new(b"a much longer first input".to_vec()))
        .unwrap();
    engine.run(Cursor::new(b"short".to_vec())).unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"short".to_vec());
}

#[test]
fn append_mode_accumulates_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, b"seed:").unwrap();

    let engine = TeeEngine::new(WriteMode::Append, vec![file_spec(&path)]);
    engine.run(Cursor::new(b"one".to_vec())).unwrap();
    engine.run(Cursor::new(b"two".to_vec())).unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"seed:onetwo".to_vec());
}

#[test]
fn duplicate_destination_names_open_independently() {
    // Final content is platform-dependent when two handles point at the same
    // file; the run itself must succeed and leave the file non-empty.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dup.txt");

    let engine = TeeEngine::new(WriteMode::Append, vec![file_spec(&path), file_spec(&path)]);
    let copied = engine.run(Cursor::new(b"xy".to_vec())).unwrap();

    assert_eq!(copied, 2);
    assert!(!fs::read(&path).unwrap().is_empty());
}

#[test]
fn open_failure_for_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("out.txt");

    let engine = TeeEngine::new(WriteMode::Truncate, vec![file_spec(&path)]);
    let err = engine
        .run(Cursor::new(b"abc".to_vec()))
        .expect_err("expected open failure");

    assert_eq!(err.stage, crate::error::Stage::Open);
    assert!(err.target.contains("out.txt"));
    assert!(err.target.contains("truncate"));
}
