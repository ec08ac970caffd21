use std::{
    io::Write,
    path::PathBuf,
    process::{Command, Stdio},
};

fn sample_site() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../world/tests/fixtures/sample1.txt")
}

fn run_cli(args: &[&str], script: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_site-clearing"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to launch site-clearing binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(script.as_bytes())
        .expect("failed to write commands");

    child.wait_with_output().expect("failed to wait for site-clearing")
}

#[test]
fn reference_session_reports_total_cost() {
    let site = sample_site();
    let output = run_cli(&[site.to_str().expect("utf-8 path")], "a 4\nr\na 2\nq\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "session should exit cleanly");
    assert!(stdout.contains("Advance 4, Turn right, Advance 2, Quit"));
    assert!(stdout.contains(
        "Total                                                                138"
    ));
}

#[test]
fn missing_site_map_fails_with_message() {
    let output = run_cli(&["does/not/exist.txt"], "");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("does/not/exist.txt does not exist!"));
}

#[test]
fn summary_json_is_written_on_request() {
    let site = sample_site();
    let summary = std::env::temp_dir().join(format!(
        "site-clearing-summary-{}.json",
        std::process::id()
    ));
    let output = run_cli(
        &[
            site.to_str().expect("utf-8 path"),
            "--quiet-map",
            "--summary-json",
            summary.to_str().expect("utf-8 path"),
        ],
        "a 20\n",
    );
    assert!(output.status.success(), "session should exit cleanly");

    let contents = std::fs::read_to_string(&summary).expect("summary written");
    let _ = std::fs::remove_file(&summary);
    let json: serde_json::Value = serde_json::from_str(&contents).expect("summary is json");
    assert_eq!(json["termination"], "OutOfBounds");
    assert_eq!(json["history"], serde_json::json!(["Advance 20"]));
    assert_eq!(json["uncleared_squares"], 38);
}
