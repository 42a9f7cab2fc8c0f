use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use ekraw_core::{DatagramSource, RawFileSource, SourceError, open_sample_stream};

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn fixture(case: &str) -> PathBuf {
    repo_root()
        .join("tests")
        .join("golden")
        .join(case)
        .join("input.raw")
}

fn temp_file(stem: &str, data: &[u8]) -> PathBuf {
    let mut path = std::env::temp_dir();
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("ekraw_{stem}_{unique}.raw"));
    fs::write(&path, data).unwrap();
    path
}

#[test]
fn raw_source_reads_datagrams_from_fixture() {
    let mut source = RawFileSource::open(&fixture("survey")).unwrap();

    let mut datagrams = 0;
    let mut last_offset = None;
    while let Some(event) = source.next_datagram().unwrap() {
        if datagrams == 0 {
            assert_eq!(&event.body[..4], b"CON0");
        }
        if let Some(previous) = last_offset {
            assert!(event.offset > previous);
        }
        last_offset = Some(event.offset);
        datagrams += 1;
    }

    assert_eq!(datagrams, 7);
}

#[test]
fn raw_source_reports_missing_file() {
    let err = match RawFileSource::open(&repo_root().join("no_such_file.raw")) {
        Ok(_) => panic!("expected missing file to be rejected"),
        Err(err) => err,
    };
    assert!(matches!(err, SourceError::NotFound { .. }));
}

#[test]
fn raw_source_rejects_truncated_length_field() {
    let path = temp_file("short_length", &[0x10, 0x00, 0x00]);
    let mut source = RawFileSource::open(&path).unwrap();
    let err = source.next_datagram().unwrap_err();
    let _ = fs::remove_file(&path);

    assert!(matches!(
        err,
        SourceError::Truncated {
            offset: 0,
            needed: 4,
            actual: 3
        }
    ));
}

#[test]
fn raw_source_rejects_truncated_body() {
    let mut data = Vec::new();
    data.extend_from_slice(&100i32.to_le_bytes());
    data.extend_from_slice(&[0u8; 10]);
    let path = temp_file("short_body", &data);
    let mut source = RawFileSource::open(&path).unwrap();
    let err = source.next_datagram().unwrap_err();
    let _ = fs::remove_file(&path);

    assert!(matches!(
        err,
        SourceError::Truncated {
            offset: 0,
            needed: 100,
            actual: 10
        }
    ));
}

#[test]
fn raw_source_rejects_negative_length() {
    let path = temp_file("negative_length", &(-1i32).to_le_bytes());
    let mut source = RawFileSource::open(&path).unwrap();
    let err = source.next_datagram().unwrap_err();
    let _ = fs::remove_file(&path);

    assert!(matches!(
        err,
        SourceError::InvalidLength {
            offset: 0,
            length: -1
        }
    ));
}

#[test]
fn raw_source_rejects_trailing_repeat_mismatch() {
    let mut data = Vec::new();
    data.extend_from_slice(&12i32.to_le_bytes());
    data.extend_from_slice(b"XYZ0");
    data.extend_from_slice(&[0u8; 8]);
    data.extend_from_slice(&13i32.to_le_bytes());
    let path = temp_file("repeat_mismatch", &data);
    let mut source = RawFileSource::open(&path).unwrap();
    let err = source.next_datagram().unwrap_err();
    let _ = fs::remove_file(&path);

    assert!(matches!(
        err,
        SourceError::FrameLengthMismatch {
            offset: 0,
            declared: 12,
            trailing: 13
        }
    ));
}

#[test]
fn raw_source_accepts_missing_trailing_repeat_at_eof() {
    let mut data = Vec::new();
    data.extend_from_slice(&12i32.to_le_bytes());
    data.extend_from_slice(b"XYZ0");
    data.extend_from_slice(&[0u8; 8]);
    let path = temp_file("no_repeat", &data);
    let mut source = RawFileSource::open(&path).unwrap();

    let event = source.next_datagram().unwrap().expect("one datagram");
    assert_eq!(event.body.len(), 12);
    assert!(source.next_datagram().unwrap().is_none());
    let _ = fs::remove_file(&path);
}

#[test]
fn skip_to_past_configuration_resumes_at_first_ping() {
    let path = fixture("survey");
    let mut source = RawFileSource::open(&path).unwrap();
    source.next_datagram().unwrap().expect("configuration");
    let resume_at = source.position();

    let mut resumed = open_sample_stream(&path, resume_at).unwrap();
    let event = resumed.next_datagram().unwrap().expect("first ping");
    assert_eq!(event.offset, resume_at);
    assert_eq!(&event.body[..4], b"RAW0");
}

#[test]
fn skip_to_exact_end_of_file_reads_nothing() {
    let path = temp_file("skip_exact", &[0u8; 848]);
    let mut source = open_sample_stream(&path, 848).unwrap();
    assert!(source.next_datagram().unwrap().is_none());
    let _ = fs::remove_file(&path);
}

#[test]
fn skip_to_beyond_end_of_file_fails() {
    let path = temp_file("skip_short", &[0u8; 8]);
    let err = match open_sample_stream(&path, 1024) {
        Ok(_) => panic!("expected out-of-range offset to be rejected"),
        Err(err) => err,
    };
    let _ = fs::remove_file(&path);

    assert!(matches!(
        err,
        SourceError::Truncated {
            needed: 1024,
            actual: 8,
            ..
        }
    ));
}

#[test]
fn closed_source_rejects_further_reads() {
    let path = temp_file("closed", &[]);
    let mut source = RawFileSource::open(&path).unwrap();
    source.close();
    source.close();
    let err = source.next_datagram().unwrap_err();
    let _ = fs::remove_file(&path);

    assert!(matches!(err, SourceError::Closed));
}
