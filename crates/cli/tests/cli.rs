// ABOUTME: Integration tests for the dreamy CLI binary.
// ABOUTME: Runs each subcommand and checks stdout, including fetch against a mock server.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn dreamy_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dreamy").unwrap();
    cmd.env_remove("DREAMY_USER_AGENT");
    cmd
}

#[test]
fn distance_prints_edit_distance() {
    dreamy_cmd()
        .args(["distance", "kitten", "sitting"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn truncate_and_sanitize() {
    dreamy_cmd()
        .args(["truncate", "Lorem ipsum dolor sit amet", "11"])
        .assert()
        .success()
        .stdout("Lorem ipsu…\n");

    dreamy_cmd()
        .args(["sanitize", "A/B: C?.txt"])
        .assert()
        .success()
        .stdout("AB C.txt\n");
}

#[test]
fn escape_and_unescape() {
    dreamy_cmd()
        .args(["escape", "Tom & Jerry <3"])
        .assert()
        .success()
        .stdout("Tom &amp; Jerry &lt;3\n");

    dreamy_cmd()
        .args(["unescape", "Tom &AMP; Jerry &lt;3"])
        .assert()
        .success()
        .stdout("Tom & Jerry <3\n");
}

#[test]
fn fit_scales_dimensions() {
    dreamy_cmd()
        .args(["fit", "300x300", "1920x1080"])
        .assert()
        .success()
        .stdout("1080x1080\n");
}

#[test]
fn fit_rejects_malformed_dimensions() {
    dreamy_cmd()
        .args(["fit", "300", "1920x1080"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("WIDTHxHEIGHT"));
}

#[test]
fn date_uses_format_flag() {
    dreamy_cmd()
        .args(["date", "2004-01-01"])
        .assert()
        .success()
        .stdout("Jan 1, 2004\n");

    dreamy_cmd()
        .args(["date", "01/02/2004", "--format", "%d/%m/%Y"])
        .assert()
        .success()
        .stdout("Feb 1, 2004\n");
}

#[test]
fn date_guesses_common_shapes() {
    dreamy_cmd()
        .args(["date", "5 January 2024"])
        .assert()
        .success()
        .stdout("Jan 5, 2024\n");
}

#[test]
fn date_mismatch_fails() {
    dreamy_cmd()
        .args(["date", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("yesterday"));
}

#[test]
fn find_lists_files() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("A")).unwrap();
    fs::write(temp.path().join("top.txt"), "").unwrap();
    fs::write(temp.path().join("A/inner.sql"), "").unwrap();

    dreamy_cmd()
        .arg("find")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("top.txt").and(predicate::str::contains("inner.sql")));

    dreamy_cmd()
        .arg("find")
        .arg(temp.path())
        .arg("--flat")
        .assert()
        .success()
        .stdout(predicate::str::contains("top.txt").and(predicate::str::contains("inner.sql").not()));

    dreamy_cmd()
        .arg("find")
        .arg(temp.path())
        .args(["--suffix", ".sql"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inner.sql").and(predicate::str::contains("top.txt").not()));
}

#[test]
fn fetch_prints_selected_text() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/works/1")
            .header("user-agent", "reader/2.0");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body("<html><body><h2 class=title> The Long Rain </h2><p>Body</p></body></html>");
    });

    dreamy_cmd()
        .arg("fetch")
        .arg(server.url("/works/1"))
        .args(["--select", "h2.title", "--user-agent", "reader/2.0"])
        .assert()
        .success()
        .stdout("The Long Rain\n");

    mock.assert();
}

#[test]
fn fetch_reads_user_agent_from_env() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/").header("user-agent", "env-agent");
        then.status(200).body("<p>hello</p>");
    });

    dreamy_cmd()
        .env("DREAMY_USER_AGENT", "env-agent")
        .arg("fetch")
        .arg(server.url("/"))
        .assert()
        .success()
        .stdout("hello\n");

    mock.assert();
}

#[test]
fn fetch_reports_http_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/gone");
        then.status(410);
    });

    dreamy_cmd()
        .arg("fetch")
        .arg(server.url("/gone"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP status 410"));
}
