#![cfg(feature = "cli")]

use std::process::Command;

use signwire::protocol::ACK;

fn signwire() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_signwire"));
    cmd.arg("--log-level").arg("error");
    cmd
}

fn hex(data: &[u8]) -> String {
    data.iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn text_json_output_reports_payload_and_ack() {
    let output = signwire()
        .arg("--format")
        .arg("json")
        .arg("text")
        .arg("HELLO")
        .output()
        .expect("text command should run");
    assert!(output.status.success(), "stderr: {:?}", output.stderr);

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(parsed["label"], "text");
    assert_eq!(parsed["commands"], 2);
    // start(7) + kind(2) + "HELLO"(5) + end(4), then the 17-byte ack.
    assert_eq!(parsed["wire_len"], 35);
    assert_eq!(parsed["items"][0]["size"], 18);
    assert_eq!(parsed["items"][1]["bytes"], hex(ACK));
}

#[test]
fn clear_raw_output_is_the_exact_wire_bytes() {
    let output = signwire()
        .arg("--format")
        .arg("raw")
        .arg("clear")
        .output()
        .expect("clear command should run");
    assert!(output.status.success());
    assert_eq!(
        output.stdout,
        [0x5D, 0x21, 0x5A, 0x30, 0x30, 0x5D, 0x22, 0x58, 0x5D, 0x24]
    );
}

#[test]
fn unsupported_width_exits_with_usage_code() {
    let output = signwire()
        .arg("width")
        .arg("64")
        .output()
        .expect("width command should run");
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn malformed_clock_field_exits_with_usage_code() {
    let output = signwire()
        .arg("clock")
        .arg("--time")
        .arg("12:00")
        .output()
        .expect("clock command should run");
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn version_extended_reports_build_provenance() {
    let output = signwire()
        .arg("version")
        .arg("--extended")
        .output()
        .expect("version command should run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("text output");
    assert!(stdout.contains("name: signwire"));
    // The build script captures the compiler banner, e.g. "rustc 1.85.0".
    assert!(
        stdout.contains("rustc: rustc "),
        "missing compiler provenance in: {stdout}"
    );
}

#[test]
fn preview_prints_ascii_frames() {
    let output = signwire()
        .arg("preview")
        .arg("HI")
        .output()
        .expect("preview command should run");
    assert!(output.status.success(), "stderr: {:?}", output.stderr);

    let stdout = String::from_utf8(output.stdout).expect("ascii output");
    assert!(stdout.starts_with("frame 1 of 1"));
    assert!(stdout.contains('R'), "default color should light red pixels");
    // header line plus 16 matrix rows
    assert_eq!(stdout.lines().count(), 17);
}
