use std::io::Write;
use std::net::UdpSocket;
use std::process::{Command, Output};
use std::time::Duration;

fn sevlog(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sevlog"))
        .args(args)
        .output()
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_cli_info_to_stderr() {
    let output = sevlog(&["disk", "low"]);
    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.ends_with("[INFO] disk low\n"), "{}", err);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_threshold_suppresses() {
    let output = sevlog(&["--loglevel", "2", "--level", "info", "hidden"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "{}", stderr(&output));
}

#[test]
fn test_cli_threshold_by_name() {
    let output = sevlog(&["--loglevel", "warning", "-l", "warning", "disk", "low"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("[WARNING] disk low"));
}

#[test]
fn test_cli_fatal_exits() {
    let output = sevlog(&["--level", "fatal", "shutting", "down"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("[FATAL] shutting down"));
}

#[test]
fn test_cli_invalid_level() {
    let output = sevlog(&["--loglevel", "9", "x"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid log level"));
}

#[test]
fn test_cli_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{ "loglevel": 4 }"#).unwrap();
    let path = file.path().to_str().unwrap();

    let output = sevlog(&["-c", path, "-l", "error", "hidden"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "{}", stderr(&output));

    // Flags win over the file.
    let output = sevlog(&["-c", path, "--loglevel", "0", "-l", "debug", "shown"]);
    assert!(stderr(&output).contains("[DEBUG] shown"));
}

#[test]
fn test_cli_remote_syslog() {
    let server = UdpSocket::bind("127.0.0.1:0").unwrap();
    server
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    let address = server.local_addr().unwrap().to_string();

    let output = sevlog(&[
        "--syslog",
        "--syslog-network",
        "udp",
        "--syslog-address",
        &address,
        "--tag",
        "demo",
        "--level",
        "error",
        "boom",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(output.stderr.is_empty(), "{}", stderr(&output));

    let mut packet = [0u8; 1024];
    let n = server.recv(&mut packet).unwrap();
    let line = String::from_utf8_lossy(&packet[..n]);
    // user (1 << 3) | err (3)
    assert!(line.starts_with("<11>"), "{}", line);
    assert!(line.contains(" demo["), "{}", line);
    assert!(line.ends_with("]: boom\n"), "{}", line);
}
