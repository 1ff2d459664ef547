//! CLI Tests
//!
//! Tests for the zget binary's argument handling and exit codes.

use std::net::TcpListener;
use std::process::Command;

fn zget_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_zget"))
}

// =============================================================================
// Argument Handling Tests
// =============================================================================

#[test]
fn test_no_argument_exits_one_with_usage() {
    let output = zget_cmd().output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"), "stderr was: {stderr}");
    assert!(output.stdout.is_empty());
}

// =============================================================================
// Error Reporting Tests
// =============================================================================

#[test]
fn test_refused_connection_exits_one_with_diagnostic() {
    // Bind to grab a free port, then drop the listener before connecting
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let output = zget_cmd()
        .args(["--host", "127.0.0.1"])
        .args(["--port", &port.to_string()])
        .args(["--timeout-ms", "2000"])
        .arg("agent.ping")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("zget:"), "stderr was: {stderr}");
    assert!(output.stdout.is_empty());
}
