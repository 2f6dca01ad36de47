//! End-to-end shell sessions over in-memory input and output.

use setsum::command::USAGE;
use setsum::{Setsum, Shell, ShellConfig, ShellError};
use setsum_testkit::setsum_of;
use setsum_testkit::vectors::{SEVEN_VALUES, SEVEN_VALUES_HEX};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

fn session(config: ShellConfig, input: &[u8]) -> (setsum::ShellReport, String) {
    init_tracing();
    let mut out = Vec::new();
    let report = Shell::new(config).run(input, &mut out).unwrap();
    (report, String::from_utf8(out).unwrap())
}

#[test]
fn test_seven_values_transcript() {
    let mut input = String::new();
    for value in SEVEN_VALUES {
        input.push_str(&format!("insert {}\n", value));
    }
    input.push_str("digest\nquit\n");

    let (report, out) = session(ShellConfig::default(), input.as_bytes());
    assert_eq!(out, format!("{}\n", SEVEN_VALUES_HEX));
    assert_eq!(report.inserts, 7);
    assert_eq!(report.lines, 9);
    assert!(report.quit);
    assert_eq!(report.setsum.hex_digest(), SEVEN_VALUES_HEX);
}

#[test]
fn test_merge_and_subtract_other_replica() {
    let first_four = setsum_of(&SEVEN_VALUES[..4]);
    let last_three = setsum_of(&SEVEN_VALUES[4..]);

    let input = format!(
        "merge {}\nmerge {}\ndigest\nsubtract {}\ndigest\n",
        first_four.hex_digest(),
        last_three.hex_digest(),
        first_four.hex_digest(),
    );
    let (report, out) = session(ShellConfig::default(), input.as_bytes());

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec![SEVEN_VALUES_HEX.to_string(), last_three.hex_digest()]);
    assert_eq!(report.merges, 2);
    assert_eq!(report.subtracts, 1);
}

#[test]
fn test_insert_remove_round_trip() {
    let input = b"insert alpha\ninsert beta\nremove alpha\nremove beta\ndigest\n";
    let (report, out) = session(ShellConfig::default(), input);
    assert_eq!(out.trim_end(), "0".repeat(64));
    assert!(report.setsum.is_empty());
}

#[test]
fn test_binary_values() {
    let mut input = b"insert ".to_vec();
    input.extend_from_slice(&[0x00, 0xff, 0x80]);
    input.extend_from_slice(b"\ndigest\n");

    let (_, out) = session(ShellConfig::default(), &input);
    let expected = setsum_of([[0x00u8, 0xff, 0x80]]);
    assert_eq!(out.trim_end(), expected.hex_digest());
}

#[test]
fn test_usage_then_continue() {
    let (report, out) = session(ShellConfig::default(), b"bogus\ninsert x\ndigest\n");
    let expected = format!("{}{}\n", USAGE, setsum_of([b"x"]).hex_digest());
    assert_eq!(out, expected);
    assert_eq!(report.unknown, 1);
}

#[test]
fn test_malformed_digest_keeps_running_checksum() {
    let input = b"insert x\nmerge 1234\nsubtract not-a-digest\ndigest\n";
    let (report, out) = session(ShellConfig::default(), input);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("error: "));
    assert!(lines[1].starts_with("error: "));
    assert_eq!(lines[2], setsum_of([b"x"]).hex_digest());
    assert_eq!(report.invalid_digests, 2);
}

#[test]
fn test_strict_mode_stops() {
    init_tracing();
    let config = ShellConfig {
        strict: true,
        ..Default::default()
    };
    let mut out = Vec::new();
    let err = Shell::new(config)
        .run(&b"insert x\nmerge zz\ndigest\n"[..], &mut out)
        .unwrap_err();
    match err {
        ShellError::InvalidDigest { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {}", other),
    }
    assert!(out.is_empty());
}

#[test]
fn test_initial_checksum_from_config() {
    let config = ShellConfig {
        initial: Setsum::from_hex_digest(SEVEN_VALUES_HEX).unwrap(),
        ..Default::default()
    };
    let mut input = String::new();
    for value in SEVEN_VALUES.iter().rev() {
        input.push_str(&format!("remove {}\n", value));
    }
    input.push_str("digest\n");

    let (report, out) = session(config, input.as_bytes());
    assert_eq!(out.trim_end(), "0".repeat(64));
    assert_eq!(report.removes, 7);
}

#[test]
fn test_report_serializes() {
    let (report, _) = session(ShellConfig::default(), b"insert x\nexit\n");
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["inserts"], 1);
    assert_eq!(json["quit"], true);
    assert_eq!(json["setsum"], setsum_of([b"x"]).hex_digest());
}
