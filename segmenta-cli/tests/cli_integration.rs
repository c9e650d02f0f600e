use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn segmenta() -> Command {
    Command::cargo_bin("segmenta").unwrap()
}

#[test]
fn test_help_command() {
    segmenta()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("classify"));
}

#[test]
fn test_version_command() {
    segmenta()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("segmenta"));
}

#[test]
fn test_render_mixed_sentence_html() {
    segmenta()
        .args(["render", "-i", &fixture("mixed.json"), "-q"])
        .assert()
        .success()
        .stdout(
            r#"one two <b>click</b> <i tabindex="-1">the following:</i> <a href="www.google.com">anchor text</a>
"#,
        );
}

#[test]
fn test_render_text_format() {
    segmenta()
        .args(["render", "-i", &fixture("nodes.json"), "-f", "text", "-q"])
        .assert()
        .success()
        .stdout("one two\n");
}

#[test]
fn test_render_json_format() {
    let output = segmenta()
        .args(["render", "-i", &fixture("mixed.json"), "-f", "json", "-q"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let units = value[0]["units"].as_array().unwrap();
    assert_eq!(units.len(), 5);
    assert_eq!(units[2]["kind"], "wrap");
    assert_eq!(units[4]["kind"], "anchor");
    assert_eq!(units[4]["trailing_space"], false);
    assert_eq!(value[0]["text"], "one two click the following: anchor text");
}

#[test]
fn test_render_malformed_is_lenient_by_default() {
    segmenta()
        .args(["render", "-i", &fixture("malformed.json"), "-f", "text", "-q"])
        .assert()
        .success()
        .stdout("before   after\n");
}

#[test]
fn test_render_strict_fails() {
    segmenta()
        .args(["render", "-i", &fixture("malformed.json"), "--strict", "-q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed segment at index 1"));
}

#[test]
fn test_render_to_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out.html");

    segmenta()
        .args(["render", "-i", &fixture("nodes.json"), "-q", "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(output_path).unwrap(), "one two\n");
}

#[test]
fn test_render_glob_pattern() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.json"), r#"["first"]"#).unwrap();
    fs::write(temp_dir.path().join("b.json"), r#"["second"]"#).unwrap();

    let pattern = temp_dir.path().join("*.json");
    segmenta()
        .args(["render", "-q", "-i"])
        .arg(pattern.to_str().unwrap())
        .assert()
        .success()
        .stdout("first\nsecond\n");
}

#[test]
fn test_render_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("segmenta.toml");
    fs::write(&config_path, "[render]\nstrict = true\n").unwrap();

    segmenta()
        .args(["render", "-q", "-i", &fixture("malformed.json"), "-c"])
        .arg(&config_path)
        .assert()
        .failure();
}

#[test]
fn test_render_nonexistent_file() {
    segmenta()
        .args(["render", "-i", "nonexistent_file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_render_invalid_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.json");
    fs::write(&path, r#"["ok", 42]"#).unwrap();

    segmenta()
        .args(["render", "-q", "-i"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("number is not a segment"));
}

#[test]
fn test_classify_reports_variants() {
    segmenta()
        .args(["classify", "-i", &fixture("mixed.json")])
        .assert()
        .success()
        .stdout("0\tpre-rendered\n1\ttext\n2\twrap\n3\twrap\n4\tanchor\n");
}

#[test]
fn test_classify_reports_malformed() {
    segmenta()
        .args(["classify", "-i", &fixture("malformed.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1\tmalformed: unsupported tag name `blink`",
        ))
        .stdout(predicate::str::contains("2\tmalformed: anchor attributes"));
}

#[test]
fn test_validate_command() {
    segmenta()
        .args(["validate", "-i", &fixture("mixed.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"));

    segmenta()
        .args(["validate", "-i", &fixture("malformed.json")])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"))
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_list_tags() {
    segmenta()
        .args(["list", "tags"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("a\nabbr\n"))
        .stdout(predicate::str::contains("\nblockquote\n"));
}

#[test]
fn test_list_formats() {
    segmenta()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("html"))
        .stdout(predicate::str::contains("json"));
}

#[test]
fn test_generate_config_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("segmenta.toml");

    segmenta()
        .args(["generate-config", "-o"])
        .arg(&config_path)
        .assert()
        .success();

    segmenta()
        .args(["render", "-q", "-i", &fixture("nodes.json"), "-c"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout("one two\n");
}
