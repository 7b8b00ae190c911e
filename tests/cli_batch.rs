// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;

const TAG_A: &str = "QEjESRGRYEP/YmiV/3jFJidkaFtsuaA84HiGqe/7kkw=";
const TAG_B: &str = "jK8pWDfgnIdsDF73KVgdXnXvk63BBCDOcaqwVjasY+0=";

fn stdout_of(args: &[&str]) -> String {
	let mut cmd = cargo_bin_cmd!("rgm");
	let assert = cmd.env("NO_COLOR", "1").args(args).assert().success();
	String::from_utf8(assert.get_output().stdout.clone())
		.expect("stdout utf8")
}

#[test]
fn batch_prints_one_verified_line_per_input_in_order() {
	let stdout = stdout_of(&["secret", "a", "b"]);
	let results: Vec<&str> = stdout
		.lines()
		.filter(|line| line.starts_with("INPUT: "))
		.collect();
	assert_eq!(
		results,
		vec![
			format!("INPUT: a, HMAC-SHA256: {}, Verified: true", TAG_A),
			format!("INPUT: b, HMAC-SHA256: {}, Verified: true", TAG_B),
		]
	);
	let last = stdout.lines().last().expect("timing line");
	assert!(last.starts_with("Hashing took "), "got `{}`", last);
}

#[test]
fn empty_batch_prints_no_results() {
	let stdout = stdout_of(&["secret"]);
	assert_eq!(stdout.lines().count(), 1);
	assert!(stdout.starts_with("Hashing took "));

	let silent = stdout_of(&["--no-timing", "secret"]);
	assert!(silent.is_empty());
}

#[test]
fn missing_key_is_a_usage_error() {
	let mut cmd = cargo_bin_cmd!("rgm");
	let assert = cmd.env("NO_COLOR", "1").assert().failure().code(2);
	let stderr = String::from_utf8_lossy(&assert.get_output().stderr)
		.to_string();
	assert!(stderr.contains("<KEY>"), "stderr: {}", stderr);
	assert!(assert.get_output().stdout.is_empty());
}

#[test]
fn inputs_after_key_are_never_options() {
	let stdout = stdout_of(&["--no-timing", "secret", "-x", "--json"]);
	let results: Vec<&str> = stdout.lines().collect();
	assert_eq!(results.len(), 2);
	assert!(results[0].starts_with("INPUT: -x, HMAC-SHA256: "));
	assert!(results[1].starts_with("INPUT: --json, HMAC-SHA256: "));
	assert!(results.iter().all(|l| l.ends_with("Verified: true")));
}

#[test]
fn hyphenated_key_is_accepted() {
	let stdout = stdout_of(&["--no-timing", "--hash-only", "-k", "a"]);
	assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn hash_only_hex_output() {
	let stdout =
		stdout_of(&["--no-timing", "--hash-only", "-o", "hex", "secret", "a"]);
	assert_eq!(
		stdout,
		"4048c44911916043ff626895ff78c5262764685b6cb9a03ce07886a9effb924c\n"
	);
}

#[test]
fn json_output_includes_timing_object() {
	let stdout = stdout_of(&["--json", "secret", "a", "b"]);
	let lines: Vec<Value> = stdout
		.lines()
		.map(|line| serde_json::from_str(line).expect("json line"))
		.collect();
	assert_eq!(lines.len(), 3);
	assert_eq!(lines[0]["input"], "a");
	assert_eq!(lines[0]["tag"], TAG_A);
	assert_eq!(lines[0]["verified"], true);
	assert_eq!(lines[0]["mode"], "self");
	assert_eq!(lines[1]["input"], "b");
	assert_eq!(lines[2]["label"], "Hashing");
	assert!(lines[2]["elapsed_ns"].is_u64());
}

#[test]
fn expected_tag_verifies_matching_inputs() {
	let stdout = stdout_of(&["--no-timing", "-e", TAG_A, "secret", "a"]);
	assert_eq!(
		stdout,
		format!("INPUT: a, HMAC-SHA256: {}, Verified: true\n", TAG_A)
	);
}

#[test]
fn expected_tag_mismatch_fails_after_printing_all_lines() {
	let mut cmd = cargo_bin_cmd!("rgm");
	let assert = cmd
		.env("NO_COLOR", "1")
		.args(["-e", TAG_A, "secret", "a", "b"])
		.assert()
		.failure()
		.code(1);
	let output = assert.get_output();
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("INPUT: a, HMAC-SHA256"));
	assert!(stdout.contains(&format!(
		"INPUT: b, HMAC-SHA256: {}, Verified: false",
		TAG_B
	)));
	assert!(stdout.contains("Hashing took "));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: 1 of 2 inputs failed verification"));
}

#[test]
fn malformed_expected_tag_aborts_before_hashing() {
	let mut cmd = cargo_bin_cmd!("rgm");
	let assert = cmd
		.env("NO_COLOR", "1")
		.args(["-e", "not-a-tag", "secret", "a"])
		.assert()
		.failure()
		.code(1);
	let output = assert.get_output();
	assert!(output.stdout.is_empty());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("not-a-tag"));
}

#[test]
fn empty_key_warns_but_succeeds() {
	let mut cmd = cargo_bin_cmd!("rgm");
	let assert = cmd
		.env("NO_COLOR", "1")
		.args(["--no-timing", "", "a"])
		.assert()
		.success();
	let stderr = String::from_utf8_lossy(&assert.get_output().stderr)
		.to_string();
	assert!(stderr.contains("warning: empty HMAC key"));
}

#[test]
fn completions_do_not_need_a_key() {
	let stdout = stdout_of(&["--completions", "bash"]);
	assert!(stdout.contains("rgm"));
}
