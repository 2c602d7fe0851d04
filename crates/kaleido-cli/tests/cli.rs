use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;

fn workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.parent().unwrap().parent().unwrap().to_path_buf()
}

fn kaleido() -> Command {
    let mut cmd = Command::cargo_bin("kaleido").unwrap();
    cmd.env_remove("KALEIDO_LOG");
    cmd
}

#[test]
fn parses_precedence_demo() {
    let root = workspace_root();
    let mut cmd = kaleido();
    cmd.arg("parse").arg(root.join("demos/precedence.kal"));
    cmd.assert()
        .success()
        .stdout(predicate::eq("(5 + (10 * 2))\n"));
}

#[test]
fn parses_associativity_demo() {
    let root = workspace_root();
    let mut cmd = kaleido();
    cmd.arg("parse").arg(root.join("demos/associativity.kal"));
    cmd.assert()
        .success()
        .stdout(predicate::eq("((5 + 10) - 2)\n"));
}

#[test]
fn parses_inline_expression() {
    let mut cmd = kaleido();
    cmd.args(["parse", "--expr", "1 + 2 - 3"]);
    cmd.assert()
        .success()
        .stdout(predicate::eq("((1 + 2) - 3)\n"));
}

#[test]
fn show_tokens_prints_filtered_stream() {
    let mut cmd = kaleido();
    cmd.args(["parse", "--show-tokens", "--expr", "7 * 6"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Type=NUMBER [file name: <expr>;line number: 0;position on line: 0;] number=7"))
        .stdout(predicate::str::contains("Type=ASTERISK"))
        .stdout(predicate::str::contains("Type=SPACE").not())
        .stdout(predicate::str::contains("(7 * 6)"));
}

#[test]
fn dangling_operator_is_a_parse_error() {
    let root = workspace_root();
    let mut cmd = kaleido();
    cmd.arg("parse").arg(root.join("demos/dangling.kal"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"))
        .stderr(predicate::str::contains("Unexpected end of expression after '-'"))
        .stderr(predicate::str::contains("line 1, column 7"));
}

#[test]
fn dumps_tokens_with_positions() {
    let root = workspace_root();
    let mut cmd = kaleido();
    cmd.args(["tokens", "--file-name", "tokens.kal"])
        .arg(root.join("demos/tokens.kal"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Type=DEF [file name: tokens.kal;line number: 0;position on line: 0;]",
        ))
        .stdout(predicate::str::contains("word=add"))
        .stdout(predicate::str::contains("word=@x"))
        .stdout(predicate::str::contains(
            "Type=EXTERN [file name: tokens.kal;line number: 1;position on line: 2;]",
        ))
        .stdout(predicate::str::contains("Type=INVALID"))
        .stdout(predicate::str::contains("char=$"));
}

#[test]
fn missing_file_is_nonzero() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let mut cmd = kaleido();
    cmd.arg("parse").arg(tmp_dir.path().join("nope.kal"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn adjacent_numbers_are_rejected() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let bad_path = tmp_dir.path().join("bad.kal");
    std::fs::write(&bad_path, "1 2\n").unwrap();

    let mut cmd = kaleido();
    cmd.arg("parse").arg(bad_path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("expected operator, got '2'"));
}

#[test]
fn repl_renders_each_line() {
    let mut cmd = assert_cmd::Command::cargo_bin("kaleido").unwrap();
    cmd.env_remove("KALEIDO_LOG")
        .arg("repl")
        .write_stdin("1 + 2 * 3\n\n3 -\n:quit\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(1 + (2 * 3))"))
        .stdout(predicate::str::contains("Goodbye."))
        .stderr(predicate::str::contains("Unexpected end of expression"));
}

#[test]
fn oversized_literal_is_printed_exactly() {
    let mut cmd = kaleido();
    cmd.args(["parse", "--expr", "99999999999999999999 + 1"]);
    cmd.assert()
        .success()
        .stdout(predicate::eq("(99999999999999999999 + 1)\n"));
}
