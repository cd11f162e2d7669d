use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

fn sample_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("sl-parser")
        .join("samples")
        .join(name)
}

#[test]
fn prints_the_grammar() {
    let mut cmd = cargo_bin_cmd!("sl");
    cmd.arg("--ebnf");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Document = "));
}

#[test]
fn lists_formats() {
    let mut cmd = cargo_bin_cmd!("sl");
    cmd.arg("--list-formats");
    cmd.assert().success().stdout(
        predicate::str::contains("source")
            .and(predicate::str::contains("ast-treeviz"))
            .and(predicate::str::contains("token-json")),
    );
}

#[test]
fn renders_a_sample_as_source() {
    let mut cmd = cargo_bin_cmd!("sl");
    cmd.arg(sample_path("010-single-equality.sl"));
    cmd.assert().success().stdout(
        predicate::str::contains("fn f(x: Int) -> (r: Int);")
            .and(predicate::str::contains("fn POST_f(x: Int, r: Int) -> Bool {"))
            .and(predicate::str::contains("return x == r;")),
    );
}

#[test]
fn dumps_the_ast_as_json() {
    let mut cmd = cargo_bin_cmd!("sl");
    cmd.arg(sample_path("030-grouped-parameters.sl"))
        .arg("--format")
        .arg("ast-json");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"max\""));
}

#[test]
fn rejects_a_missing_file() {
    let mut cmd = cargo_bin_cmd!("sl");
    cmd.arg(sample_path("does-not-exist.sl"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.sl"));
}

#[test]
fn rejects_an_unknown_format() {
    let mut cmd = cargo_bin_cmd!("sl");
    cmd.arg(sample_path("010-single-equality.sl"))
        .arg("--format")
        .arg("yaml");
    cmd.assert().failure();
}

#[test]
fn malformed_input_exits_with_status_one() {
    let mut cmd = cargo_bin_cmd!("sl");
    cmd.arg(sample_path("900-missing-close-paren.sl"));
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("900-missing-close-paren.sl").and(
            predicate::str::contains("syntax error"),
        ));
}

#[test]
fn stops_at_the_first_failing_file() {
    let mut cmd = cargo_bin_cmd!("sl");
    cmd.arg(sample_path("010-single-equality.sl"))
        .arg(sample_path("910-unsupported-operator.sl"))
        .arg(sample_path("030-grouped-parameters.sl"));
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("POST_f").and(predicate::str::contains("max").not()))
        .stderr(predicate::str::contains("910-unsupported-operator.sl"));
}

#[test]
fn processes_files_in_order() {
    let output = cargo_bin_cmd!("sl")
        .arg(sample_path("030-grouped-parameters.sl"))
        .arg(sample_path("010-single-equality.sl"))
        .output()
        .expect("run sl");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    let max = stdout.find("fn max").expect("max rendered");
    let f = stdout.find("fn f(").expect("f rendered");
    assert!(max < f);
}

#[test]
fn config_file_changes_the_check_prefix() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(file, "[lowering]\ncheck_prefix = \"check_\"").expect("write config");

    let mut cmd = cargo_bin_cmd!("sl");
    cmd.arg(sample_path("010-single-equality.sl"))
        .arg("--config")
        .arg(file.path());
    cmd.assert().success().stdout(
        predicate::str::contains("fn check_f(x: Int, r: Int) -> Bool {")
            .and(predicate::str::contains("POST_").not()),
    );
}

#[test]
fn invalid_config_is_reported() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(file, "[render]\nblank_lines_between = \"many\"").expect("write config");

    let mut cmd = cargo_bin_cmd!("sl");
    cmd.arg(sample_path("010-single-equality.sl"))
        .arg("--config")
        .arg(file.path());
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn set_overrides_a_configuration_key() {
    let mut cmd = cargo_bin_cmd!("sl");
    cmd.arg(sample_path("010-single-equality.sl"))
        .arg("--set")
        .arg("lowering.check_prefix=ensure_")
        .arg("--set")
        .arg("lowering.bool_type=bool");
    cmd.assert().success().stdout(predicate::str::contains(
        "fn ensure_f(x: Int, r: Int) -> bool {",
    ));
}

#[test]
fn set_wins_over_the_config_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(file, "[lowering]\ncheck_prefix = \"check_\"").expect("write config");

    let mut cmd = cargo_bin_cmd!("sl");
    cmd.arg(sample_path("010-single-equality.sl"))
        .arg("--config")
        .arg(file.path())
        .arg("--set")
        .arg("lowering.check_prefix=late_");
    cmd.assert().success().stdout(
        predicate::str::contains("fn late_f(").and(predicate::str::contains("check_").not()),
    );
}

#[test]
fn set_without_equals_is_rejected() {
    let mut cmd = cargo_bin_cmd!("sl");
    cmd.arg(sample_path("010-single-equality.sl"))
        .arg("--set")
        .arg("lowering.check_prefix");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("KEY=VALUE"));
}

#[test]
fn picks_up_sl_toml_from_the_working_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("sl.toml"),
        "[lowering]\ncheck_prefix = \"local_\"\n",
    )
    .expect("write config");

    let mut cmd = cargo_bin_cmd!("sl");
    cmd.current_dir(dir.path())
        .arg(sample_path("010-single-equality.sl"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("fn local_f("));
}

#[test]
fn deeply_nested_input_is_reported_not_fatal() {
    let depth = 10_000;
    let mut file = tempfile::Builder::new()
        .suffix(".sl")
        .tempfile()
        .expect("temp file");
    write!(
        file,
        "(sl_document (sl_definition_block (sl_function_definitions functions \
         (function_definition (implicit_function_definition f (parameter_types) \
         (identifier_type_pair_list) (post_expression post {}(variable (name x)){}))))))",
        "(negation not (expression ".repeat(depth),
        "))".repeat(depth)
    )
    .expect("write source");

    for format in ["source", "sexpr-treeviz"] {
        let mut cmd = cargo_bin_cmd!("sl");
        cmd.arg(file.path()).arg("--format").arg(format);
        cmd.assert()
            .code(1)
            .stderr(predicate::str::contains("nested forms"));
    }
}
