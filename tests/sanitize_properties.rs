//! Library-level properties of the sanitizer and the concatenator.

use std::io::{self, Cursor, Write};

use stcat::output::{classify, CharClass, REPLACEMENT};
use stcat::{sanitize, Concatenator, Sanitizer, SanitizerOptions, SourceList};
use tempfile::NamedTempFile;

/// Inputs mixing text, escapes, controls and broken encodings.
const SAMPLES: &[&[u8]] = &[
    b"",
    b"plain ascii\n",
    b"\x1b[38;5;196mcolor\x1b[m\n",
    b"\x1b]8;;http://example.com\x1b\\link\x1b]8;;\x1b\\",
    b"\x1b[?1049h\x1b[Hfake prompt$ \x1b[8mhidden\x1b[28m",
    b"\xe6\x97\xa5\xe6\x9c\xac \xf0\x9f\xa6\x80 \xc3\xa9",
    b"\xff\xfe\xfd\xc0\xaf\xed\xa0\x80",
    b"\x00\x01\x02\x7f\x1b\x1b\x1b",
    b"trailing partial \xe2\x82",
    b"a\x1b\xffb",
    b"a\x1b\xe2\x82\xacb",
    b"\x1b[\xc3\xa9 hidden",
    b"name=\x1b\xc3\xa9 secret=42",
];

fn opts() -> SanitizerOptions {
    SanitizerOptions::default()
}

fn temp_file(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_output_only_printable_or_newline() {
    for sample in SAMPLES {
        for ch in sanitize(sample, opts()).chars() {
            assert_ne!(classify(ch, &opts()), CharClass::Control, "{ch:?} in {sample:?}");
        }
    }
}

#[test]
fn test_idempotent() {
    for sample in SAMPLES {
        let once = sanitize(sample, opts());
        assert_eq!(sanitize(once.as_bytes(), opts()), once);
    }
}

#[test]
fn test_chunking_does_not_change_output() {
    for sample in SAMPLES {
        let whole = sanitize(sample, opts());
        for split in 0..=sample.len() {
            let mut sanitizer = Sanitizer::new(opts());
            let mut output = sanitizer.push(&sample[..split]);
            output.push_str(&sanitizer.push(&sample[split..]));
            output.push_str(&sanitizer.finish());
            assert_eq!(output, whole, "{sample:?} split at {split}");
        }
    }
}

#[test]
fn test_text_after_interrupted_escape_survives_any_split() {
    let cases: &[(&[u8], &str)] = &[
        (b"a\x1b\xffb", "a\u{FFFD}b"),
        ("a\x1b€b".as_bytes(), "a€b"),
        ("\x1b[é hidden".as_bytes(), "é hidden"),
        (b"warn: \x1b\xff visible text\n", "warn: \u{FFFD} visible text\n"),
    ];

    for (input, expected) in cases {
        for split in 0..=input.len() {
            let mut sanitizer = Sanitizer::new(opts());
            let mut output = sanitizer.push(&input[..split]);
            output.push_str(&sanitizer.push(&input[split..]));
            output.push_str(&sanitizer.finish());
            assert_eq!(output, *expected, "{input:?} split at {split}");
        }
    }
}

#[test]
fn test_multibyte_split_reassembled() {
    let mut sanitizer = Sanitizer::new(opts());
    let mut output = sanitizer.push(b"\xf0\x9f");
    output.push_str(&sanitizer.push(b"\xa6\x80"));
    output.push_str(&sanitizer.finish());
    assert_eq!(output, "🦀");
    assert!(!output.contains(REPLACEMENT));
    assert_eq!(sanitizer_stats_replaced(b"\xf0\x9f", b"\xa6\x80"), 0);
}

fn sanitizer_stats_replaced(first: &[u8], second: &[u8]) -> usize {
    let mut sanitizer = Sanitizer::new(opts());
    let _ = sanitizer.push(first);
    let _ = sanitizer.push(second);
    let (_, stats) = sanitizer.finish_with_stats();
    stats.replaced
}

#[test]
fn test_concatenation_is_per_source() {
    // Pairs chosen so that joining before sanitizing would differ.
    let pairs: &[(&[u8], &[u8])] = &[
        (b"abc\xe2\x82", b"\xac def"),
        (b"x\x1b]0;", b"title\x07y"),
        (b"a b\nc d", b"a b\nc d\n"),
    ];

    for (first, second) in pairs {
        let a = temp_file(first);
        let b = temp_file(second);
        let sources = SourceList::from_args([a.path(), b.path()]);

        let mut out: Vec<u8> = Vec::new();
        Concatenator::new(opts())
            .with_buffer_size(3)
            .run(&sources, &mut io::empty(), &mut out)
            .unwrap();

        let expected = sanitize(first, opts()) + &sanitize(second, opts());
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}

#[test]
fn test_split_source_vs_joined() {
    let first = temp_file(b"abc\xe2\x82");
    let second = temp_file(b"\xac def");
    let sources = SourceList::from_args([first.path(), second.path()]);

    let mut out: Vec<u8> = Vec::new();
    Concatenator::default()
        .run(&sources, &mut io::empty(), &mut out)
        .unwrap();

    // Each file ends or starts with a broken code point of its own.
    assert_eq!(String::from_utf8(out).unwrap(), "abc\u{FFFD}\u{FFFD} def");
    assert_eq!(sanitize(b"abc\xe2\x82\xac def", opts()), "abc€ def");
}

#[test]
fn test_stdin_cursor_source() {
    let mut stdin = Cursor::new(b"\x1b[2J\x1b[Hcontent\n".to_vec());
    let mut out: Vec<u8> = Vec::new();
    let summary = Concatenator::default()
        .run(&SourceList::from_args(Vec::<String>::new()), &mut stdin, &mut out)
        .unwrap();

    assert_eq!(out, b"content\n");
    assert_eq!(summary.sources, 1);
}
