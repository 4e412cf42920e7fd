use predicates::prelude::*;
use test_env::TestEnv;

// =============================================================================
// normalize
// =============================================================================

#[test]
fn test_normalize_prints_canonical_keys() {
    let env = TestEnv::new();
    env.cmd()
        .args(["normalize", "picked_up", " not_assigned ", "ALREADY_DELIVERED"])
        .assert()
        .success()
        .stdout("PICKED_UP\nNOT_ASSIGNED\nDELIVERED\n");
}

#[test]
fn test_normalize_unknown_defaults_to_pending_and_warns() {
    let env = TestEnv::new();
    env.cmd()
        .args(["normalize", "totally-unknown-value", ""])
        .assert()
        .success()
        .stdout("PENDING\nPENDING\n")
        .stderr(predicate::str::contains("Unrecognized order status 'totally-unknown-value'"));
}

#[test]
fn test_normalize_strict_rejects_with_suggestion() {
    let env = TestEnv::new();
    env.cmd()
        .args(["normalize", "--strict", "piked up"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"))
        .stderr(predicate::str::contains("Unrecognized status 'piked up'"))
        .stderr(predicate::str::contains("Did you mean: PICKED_UP"));
}

#[test]
fn test_normalize_json() {
    let env = TestEnv::new();
    let output = env.cmd()
        .args(["normalize", "--json", "en camino", "mystery"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value[0]["status"], "IN_TRANSIT");
    assert_eq!(value[0]["fallback"], false);
    assert_eq!(value[1]["status"], "PENDING");
    assert_eq!(value[1]["fallback"], true);
}

#[test]
fn test_normalize_requires_input() {
    let env = TestEnv::new();
    env.cmd()
        .args(["normalize"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("At least one status value is required"));
}

#[test]
fn test_command_abbreviation() {
    let env = TestEnv::new();
    env.cmd()
        .args(["norm", "canceled"])
        .assert()
        .success()
        .stdout("CANCELLED\n");
}

// =============================================================================
// classify
// =============================================================================

#[test]
fn test_classify_line() {
    let env = TestEnv::new();
    env.cmd()
        .args(["classify", "picked_up"])
        .assert()
        .success()
        .stdout(predicate::str::contains("picked_up -> PICKED_UP  Recogido  in_progress"))
        .stdout(predicate::str::contains("60%  active"));
}

#[test]
fn test_classify_english_locale() {
    let env = TestEnv::new();
    env.cmd()
        .args(["classify", "--locale", "en", "FAILED_DELIVERY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed delivery"))
        .stdout(predicate::str::contains("cancelled"));
}

#[test]
fn test_classify_json_flags() {
    let env = TestEnv::new();
    let output = env.cmd()
        .args(["classify", "--json", "COMPLETED", "pending"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value[0]["status"], "COMPLETED");
    assert_eq!(value[0]["category"], "completed");
    assert_eq!(value[0]["active"], false);
    assert_eq!(value[0]["completed"], true);
    assert_eq!(value[0]["progress"], 100);
    assert_eq!(value[1]["cancelable"], true);
    assert_eq!(value[1]["icon"], "clock");
}

#[test]
fn test_classify_bad_locale() {
    let env = TestEnv::new();
    env.cmd()
        .args(["classify", "--locale", "fr", "pending"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown locale 'fr'"));
}

// =============================================================================
// list / aliases
// =============================================================================

#[test]
fn test_list_workflow_order() {
    let env = TestEnv::new();
    let output = env.cmd()
        .args(["list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 17);
    assert!(lines[0].starts_with("KEY"));
    assert!(lines[1].starts_with("PENDING"));
    assert!(lines[7].starts_with("PICKED_UP"));
    assert!(lines[16].starts_with("INCOMPLETE"));
}

#[test]
fn test_list_by_category_json() {
    let env = TestEnv::new();
    let output = env.cmd()
        .args(["list", "--category", "cancelled", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let keys: Vec<&str> = value.as_array().unwrap()
        .iter()
        .map(|v| v["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["CANCELLED", "FAILED", "FAILED_DELIVERY", "INCOMPLETE"]);
    assert!(value.as_array().unwrap().iter().all(|v| v["terminal"] == true));
}

#[test]
fn test_list_unknown_category() {
    let env = TestEnv::new();
    env.cmd()
        .args(["list", "--category", "shipped"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown category 'shipped'"));
}

#[test]
fn test_aliases_for_one_status() {
    let env = TestEnv::new();
    env.cmd()
        .args(["aliases", "canceled"])
        .assert()
        .success()
        .stdout("CANCELLED: CANCELADO, CANCELED, CANCELLED\n");
}

#[test]
fn test_aliases_unknown_status() {
    let env = TestEnv::new();
    env.cmd()
        .args(["aliases", "teleported"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unrecognized status 'teleported'"));
}

// =============================================================================
// summary / check
// =============================================================================

#[test]
fn test_summary_from_stdin() {
    let env = TestEnv::new();
    env.cmd()
        .args(["summary"])
        .write_stdin("pending\npicked_up\ndelivered\nwarp-speed\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("4 statuses"))
        .stdout(predicate::str::contains("in_progress  1"))
        .stdout(predicate::str::contains("active       3"))
        .stdout(predicate::str::contains("1 unrecognized (counted as PENDING): warp-speed"));
}

#[test]
fn test_summary_from_json_file() {
    let env = TestEnv::new();
    let path = env.write_file("orders.json", "[\"IN_TRANSIT\", null, \"cancelado\"]");
    let output = env.cmd()
        .args(["summary", "--json"])
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["total"], 3);
    assert_eq!(value["by_category"]["in_progress"], 1);
    assert_eq!(value["by_category"]["pending"], 1);
    assert_eq!(value["by_category"]["cancelled"], 1);
    assert_eq!(value["fallbacks"], 0);
}

#[test]
fn test_summary_missing_file() {
    let env = TestEnv::new();
    env.cmd()
        .args(["summary", "does-not-exist.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read does-not-exist.txt"));
}

#[test]
fn test_check() {
    let env = TestEnv::new();
    env.cmd()
        .args(["check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status catalog OK: 16 statuses, 47 aliases"));
}

#[test]
fn test_version() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
