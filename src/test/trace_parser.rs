use crate::error::Error;
use crate::trace::{Event, RunParams, TraceLine, TraceParser};

const BANNER: &str = r#"write(2, "=== effective_io_concurrency 1, range size 4 ===\n", 49) = 49 <0.000010>"#;
const SEEK3: &str = "lseek(3, 0, SEEK_END) = 32768 <0.000005>";
const HINT3: &str = "fadvise64(3, 0, 32768, POSIX_FADV_WILLNEED) = 0 <0.001>";
const READ3: &str = r#"pread64(3, "\0\0\0\0"..., 32768, 0) = 32768 <0.050>"#;

fn feed_all(parser: &mut TraceParser, lines: &[&str]) -> Vec<crate::trace::Batch> {
    lines
        .iter()
        .filter_map(|line| parser.feed(line).expect("feed"))
        .collect()
}

#[test]
fn classify_recognizes_each_line_shape() {
    assert_eq!(
        TraceLine::classify(BANNER).unwrap(),
        TraceLine::Banner(RunParams {
            effective_io_concurrency: 1,
            range_size: 4
        })
    );
    assert_eq!(
        TraceLine::classify(SEEK3).unwrap(),
        TraceLine::Seek { fd: 3 }
    );
    assert_eq!(
        TraceLine::classify(HINT3).unwrap(),
        TraceLine::Hint {
            fd: 3,
            offset: 0,
            size: 32768,
            elapsed: "0.001".to_string()
        }
    );
    assert_eq!(
        TraceLine::classify(READ3).unwrap(),
        TraceLine::Read {
            syscall: "pread".to_string(),
            fd: 3,
            offset: 0,
            size: 32768,
            elapsed: "0.050".to_string()
        }
    );
    assert_eq!(
        TraceLine::classify("close(3) = 0 <0.000004>").unwrap(),
        TraceLine::Other
    );
}

#[test]
fn read_takes_last_argument_as_offset_and_return_value_as_size() {
    let line = r#"preadv(3, [{iov_base="..."..., iov_len=8192}, {iov_base="..."..., iov_len=8192}], 2, 16384) = 12288 <0.000030>"#;
    assert_eq!(
        TraceLine::classify(line).unwrap(),
        TraceLine::Read {
            syscall: "preadv".to_string(),
            fd: 3,
            offset: 16384,
            size: 12288,
            elapsed: "0.000030".to_string()
        }
    );
}

#[test]
fn banner_takes_priority_over_other_shapes() {
    let line = "=== effective_io_concurrency 2, range size 8 === lseek(3, 0, SEEK_SET)";
    assert!(matches!(
        TraceLine::classify(line).unwrap(),
        TraceLine::Banner(_)
    ));
}

#[test]
fn malformed_numbers_are_fatal() {
    let err = TraceLine::classify(
        "fadvise64(3, 99999999999999999999999, 8192, POSIX_FADV_WILLNEED) = 0 <0.1>",
    )
    .expect_err("offset overflows u64");
    assert!(matches!(err, Error::InvalidNumber { field: "offset", .. }));

    let err = TraceLine::classify("lseek(99999999999, 0, SEEK_END) = 0 <0.1>")
        .expect_err("fd overflows i32");
    assert!(matches!(err, Error::InvalidNumber { field: "fd", .. }));

    let mut parser = TraceParser::new();
    assert!(
        parser
            .feed("lseek(99999999999, 0, SEEK_END) = 0 <0.1>")
            .is_err()
    );
}

#[test]
fn hints_on_other_descriptors_are_dropped() {
    let mut parser = TraceParser::new();
    let done = feed_all(
        &mut parser,
        &[
            BANNER,
            "lseek(5, 0, SEEK_END) = 0 <0.000001>",
            "fadvise64(7, 0, 8192, POSIX_FADV_WILLNEED) = 0 <0.1>",
        ],
    );
    assert!(done.is_empty());
    assert!(parser.pending().is_empty());

    parser
        .feed("fadvise64(5, 0, 8192, POSIX_FADV_WILLNEED) = 0 <0.1>")
        .unwrap();
    assert_eq!(parser.pending().events, vec![Event::hint(0, 8192, "0.1")]);
}

#[test]
fn reads_follow_the_last_accepted_descriptor() {
    let mut parser = TraceParser::new();
    feed_all(
        &mut parser,
        &[
            BANNER,
            SEEK3,
            HINT3,
            r#"pread64(9, "..."..., 8192, 0) = 8192 <0.1>"#,
            READ3,
        ],
    );
    assert_eq!(
        parser.pending().events,
        vec![
            Event::hint(0, 32768, "0.001"),
            Event::read("pread", 0, 32768, "0.050"),
        ]
    );
}

#[test]
fn read_after_seek_is_kept_without_any_hint() {
    let mut parser = TraceParser::new();
    feed_all(
        &mut parser,
        &[
            BANNER,
            SEEK3,
            READ3,
            r#"pread64(9, "..."..., 8192, 0) = 8192 <0.1>"#,
        ],
    );
    assert_eq!(
        parser.pending().events,
        vec![Event::read("pread", 0, 32768, "0.050")]
    );
}

#[test]
fn read_without_seek_or_hint_in_batch_is_dropped() {
    let mut parser = TraceParser::new();
    feed_all(&mut parser, &[BANNER, READ3]);
    assert!(parser.pending().is_empty());

    // 新的 banner 会清空上一批次的 fd
    feed_all(&mut parser, &[SEEK3, HINT3, READ3, BANNER, READ3]);
    assert!(parser.pending().is_empty());
}

#[test]
fn banner_flushes_previous_batch_once() {
    let mut parser = TraceParser::new();
    let done = feed_all(&mut parser, &[BANNER, SEEK3, HINT3, READ3, BANNER, BANNER]);
    assert_eq!(done.len(), 1);
    assert_eq!(
        done[0].params,
        Some(RunParams {
            effective_io_concurrency: 1,
            range_size: 4
        })
    );
    assert_eq!(done[0].events.len(), 2);
    assert!(parser.finish().is_none());
}

#[test]
fn finish_returns_trailing_batch() {
    let mut parser = TraceParser::new();
    feed_all(&mut parser, &[SEEK3, HINT3]);
    let batch = parser.finish().expect("trailing batch");
    assert_eq!(batch.params, None);
    assert_eq!(batch.events, vec![Event::hint(0, 32768, "0.001")]);
}
