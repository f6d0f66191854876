use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const TEMPLATE_HEADER: &str =
    "Supplier_Count,Geo_Spread,Cost_Volatility,Lead_Time,Alt_Supplier_Options";

fn supplysight() -> Command {
    Command::cargo_bin("supplysight").expect("binary should compile")
}

fn write_csv(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("input file should write");
    path
}

#[test]
fn assess_renders_markdown_report_for_best_factors() {
    supplysight()
        .args([
            "assess",
            "--supplier-count",
            "5",
            "--geo-spread",
            "5",
            "--cost-volatility",
            "1",
            "--lead-time",
            "1",
            "--alt-supplier-options",
            "5",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Resilience score: 92.00/100"))
        .stdout(predicate::str::contains("Risk tier: low"))
        .stdout(predicate::str::contains("Maintain strategy"));
}

#[test]
fn assess_renders_json_when_requested() {
    supplysight()
        .args([
            "assess",
            "--supplier-count",
            "1",
            "--geo-spread",
            "1",
            "--cost-volatility",
            "5",
            "--lead-time",
            "5",
            "--alt-supplier-options",
            "1",
            "--format",
            "json",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"score\": 12.0"))
        .stdout(predicate::str::contains("\"tier\": \"high\""))
        .stdout(predicate::str::contains("\"generated_at\""));
}

#[test]
fn assess_rejects_out_of_scale_factor() {
    supplysight()
        .args([
            "assess",
            "--supplier-count",
            "3",
            "--geo-spread",
            "9",
            "--cost-volatility",
            "2",
            "--lead-time",
            "3",
            "--alt-supplier-options",
            "1",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("outside the 1-5 scale"));
}

#[test]
fn score_evaluates_first_data_row() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_csv(
        &dir,
        "input.csv",
        &format!("{TEMPLATE_HEADER}\n3,4,2,3,1\n5,5,1,1,5\n"),
    );

    supplysight()
        .arg("score")
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Resilience score: 52.00/100"))
        .stdout(predicate::str::contains("Risk tier: high"))
        .stdout(predicate::str::contains("Diversify supplier base"));
}

#[test]
fn score_fails_when_a_column_is_missing() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_csv(
        &dir,
        "input.csv",
        "Supplier_Count,Geo_Spread,Cost_Volatility,Alt_Supplier_Options\n3,4,2,1\n",
    );

    supplysight()
        .arg("score")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing factor column: Lead_Time"));
}

#[test]
fn score_fails_on_header_only_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_csv(&dir, "input.csv", &format!("{TEMPLATE_HEADER}\n"));

    supplysight()
        .arg("score")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no data rows"));
}

#[test]
fn score_fails_on_missing_path() {
    supplysight()
        .args(["score", "/nonexistent/input.csv"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn score_applies_configured_header_aliases() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("supplysight.toml"),
        r#"
[input.aliases]
"Suppliers" = "Supplier_Count"
"#,
    )
    .expect("config should write");
    let path = write_csv(
        &dir,
        "input.csv",
        "Suppliers,Geo_Spread,Cost_Volatility,Lead_Time,Alt_Supplier_Options\n5,5,1,1,5\n",
    );

    supplysight()
        .current_dir(dir.path())
        .arg("score")
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Resilience score: 92.00/100"));
}

#[test]
fn config_sets_the_default_output_format() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("supplysight.toml"),
        r#"
[output]
format = "json"
"#,
    )
    .expect("config should write");

    supplysight()
        .current_dir(dir.path())
        .args([
            "assess",
            "--supplier-count",
            "3",
            "--geo-spread",
            "4",
            "--cost-volatility",
            "2",
            "--lead-time",
            "3",
            "--alt-supplier-options",
            "1",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"tier\": \"high\""));
}

#[test]
fn invalid_config_fails_the_run() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("supplysight.toml"),
        r#"
[output]
format = "html"
"#,
    )
    .expect("config should write");

    supplysight()
        .current_dir(dir.path())
        .args([
            "assess",
            "--supplier-count",
            "3",
            "--geo-spread",
            "4",
            "--cost-volatility",
            "2",
            "--lead-time",
            "3",
            "--alt-supplier-options",
            "1",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("output.format"));
}

#[test]
fn template_prints_to_stdout_by_default() {
    supplysight()
        .arg("template")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(TEMPLATE_HEADER))
        .stdout(predicate::str::contains("3,4,2,3,1"));
}

#[test]
fn template_writes_a_scoreable_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("template.csv");

    supplysight()
        .arg("template")
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("template file:"));

    supplysight()
        .arg("score")
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Resilience score: 52.00/100"));
}

#[test]
fn template_no_overwrite_refuses_existing_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_csv(&dir, "template.csv", "existing");

    supplysight()
        .arg("template")
        .arg(&path)
        .arg("--no-overwrite")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn lint_reports_no_findings_for_clean_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_csv(&dir, "input.csv", &format!("{TEMPLATE_HEADER}\n3,4,2,3,1\n"));

    supplysight()
        .arg("lint")
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("lint: no findings"));
}

#[test]
fn lint_warns_on_unknown_columns() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_csv(
        &dir,
        "input.csv",
        &format!("{TEMPLATE_HEADER},Notes\n3,4,2,3,1,fine\n"),
    );

    supplysight()
        .arg("lint")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("schema.unknown_column"));
}

#[test]
fn lint_blocks_on_out_of_range_rows() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_csv(
        &dir,
        "input.csv",
        &format!("{TEMPLATE_HEADER}\n3,4,2,3,1\n9,4,2,3,1\n"),
    );

    supplysight()
        .arg("lint")
        .arg(&path)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("schema.out_of_range"))
        .stdout(predicate::str::contains("row 2"));
}

#[test]
fn lint_blocks_on_missing_columns() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_csv(
        &dir,
        "input.csv",
        "Supplier_Count,Geo_Spread\n3,4\n",
    );

    supplysight()
        .arg("lint")
        .arg(&path)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("schema.missing_column"));
}
