#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn textdesk(data: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("textdesk").unwrap();
    cmd.env("TEXTDESK_DATA_DIR", data.path())
        .env_remove("RUST_LOG");
    cmd
}

fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.arg("--json").output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn create(data: &TempDir, ar: &str, fr: &str, en: &str) -> String {
    let text = json_output(
        textdesk(data).args(["create", "--ar", ar, "--fr", fr, "--en", en]),
    );
    text["id"].as_str().unwrap().to_string()
}

#[test]
fn test_create_starts_as_draft() {
    let data = TempDir::new().unwrap();
    let text = json_output(textdesk(&data).args([
        "create", "--ar", " مرحبا ", "--fr", "bonjour", "--en", "hello",
    ]));
    assert_eq!(text["state"], "draft");
    assert_eq!(text["content"]["ar"], "مرحبا");
}

#[test]
fn test_create_missing_language_fails_validation() {
    let data = TempDir::new().unwrap();
    textdesk(&data)
        .args(["create", "--ar", "a", "--en", "c"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("content.fr"));

    let listing = json_output(textdesk(&data).args(["list"]));
    assert_eq!(listing["results"].as_array().unwrap().len(), 0);
}

#[test]
fn test_review_workflow() {
    let data = TempDir::new().unwrap();
    let id = create(&data, "a", "b", "c");

    let submitted = json_output(textdesk(&data).args(["submit", &id]));
    assert_eq!(submitted["state"], "submitted");

    let rejected = json_output(textdesk(&data).args(["reject", &id]));
    assert_eq!(rejected["state"], "rejected");

    json_output(textdesk(&data).args(["submit", &id]));
    let approved = json_output(textdesk(&data).args(["approve", &id]));
    assert_eq!(approved["state"], "approved");

    textdesk(&data)
        .args(["submit", &id])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Illegal operation"));

    let stored = json_output(textdesk(&data).args(["get", &id]));
    assert_eq!(stored["state"], "approved");
}

#[test]
fn test_unknown_id_is_not_found() {
    let data = TempDir::new().unwrap();
    textdesk(&data)
        .args(["get", "6f1c1d6e-2f4e-4d38-9a43-4f4f0f2d8f11"])
        .assert()
        .code(3);
}

#[test]
fn test_word_counts() {
    let data = TempDir::new().unwrap();
    let id = create(&data, "واحد اثنان", "un deux  trois", "one");

    let total = json_output(textdesk(&data).args(["count", &id]));
    assert_eq!(total, 6);

    let fr = json_output(textdesk(&data).args(["count", &id, "fr"]));
    assert_eq!(fr, 3);

    let breakdown = json_output(textdesk(&data).args(["count", &id, "--breakdown"]));
    assert_eq!(breakdown["ar"], 2);
    assert_eq!(breakdown["en"], 1);

    textdesk(&data)
        .args(["count", &id, "de"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Incorrect language: de"));
}

#[test]
fn test_pagination_links() {
    let data = TempDir::new().unwrap();
    let ids: Vec<_> = (0..10)
        .map(|i| create(&data, &format!("ar{}", i), "fr", "en"))
        .collect();

    let page = json_output(textdesk(&data).args(["list", "--page", "2", "--limit", "3"]));
    let got: Vec<_> = page["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(got, ids[3..6].to_vec());
    assert_eq!(page["next"]["page"], 3);
    assert_eq!(page["previous"]["page"], 1);

    let all = json_output(textdesk(&data).args(["list", "--limit", "0"]));
    assert_eq!(all["results"].as_array().unwrap().len(), 10);
    assert!(all.get("next").is_none());
    assert!(all.get("previous").is_none());
}

#[test]
fn test_configured_default_limit() {
    let data = TempDir::new().unwrap();
    for i in 0..3 {
        create(&data, &format!("ar{}", i), "fr", "en");
    }
    textdesk(&data)
        .args(["config", "default-limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default-limit set to 2"));

    let page = json_output(textdesk(&data).args(["list"]));
    assert_eq!(page["results"].as_array().unwrap().len(), 2);
    assert_eq!(page["next"]["limit"], 2);
}

#[test]
fn test_most_frequent_word() {
    let data = TempDir::new().unwrap();
    let empty = json_output(textdesk(&data).args(["frequent"]));
    assert_eq!(empty, serde_json::json!([]));

    create(&data, "a a", "b", "c");
    create(&data, "a", "b b", "c c c");

    let words = json_output(textdesk(&data).args(["frequent"]));
    assert_eq!(words, serde_json::json!([{ "word": "c", "count": 4 }]));
}

#[test]
fn test_update_keeps_other_languages() {
    let data = TempDir::new().unwrap();
    let id = create(&data, "a", "b", "c");

    let updated = json_output(textdesk(&data).args(["update", &id, "--en", "new english"]));
    assert_eq!(updated["content"]["ar"], "a");
    assert_eq!(updated["content"]["en"], "new english");

    textdesk(&data)
        .args(["update", &id, "--fr", "   "])
        .assert()
        .code(2);
}

#[test]
fn test_human_output() {
    let data = TempDir::new().unwrap();
    let id = create(&data, "مرحبا", "bonjour", "hello there");

    textdesk(&data)
        .env("NO_COLOR", "1")
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(id.as_str()))
        .stdout(predicate::str::contains("hello there"))
        .stdout(predicate::str::contains("draft"));
}

#[test]
fn test_page_far_past_the_end_is_empty() {
    let data = TempDir::new().unwrap();
    create(&data, "a", "b", "c");

    let page = json_output(textdesk(&data).args([
        "list",
        "--page",
        "18446744073709551615",
        "--limit",
        "3",
    ]));
    assert_eq!(page["results"].as_array().unwrap().len(), 0);
    assert!(page.get("next").is_none());
}

#[test]
fn test_unknown_config_key_is_rejected() {
    let data = TempDir::new().unwrap();
    textdesk(&data)
        .args(["config", "colour"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown key 'colour'"));
    textdesk(&data)
        .args(["config", "colour", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown key 'colour'"));
}
