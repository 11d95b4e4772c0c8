use assert_cmd::Command;
use assert_cmd::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

/// `buildvars` running in `work_dir`, with the store at `<work_dir>/store`
fn buildvars_cmd(work_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("buildvars");
    cmd.current_dir(work_dir.path());
    cmd.env("BUILDVARS_STORE", work_dir.path().join("store"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_build(work_dir: &TempDir, project: &str, record: Value) {
    let number = record["number"].as_u64().unwrap();
    let dir = work_dir.path().join("store").join(project).join("builds");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join(format!("{number}.json")),
        serde_json::to_string_pretty(&record).unwrap(),
    )
    .unwrap();
}

fn read_build(work_dir: &TempDir, project: &str, number: u64) -> Value {
    let path = work_dir
        .path()
        .join("store")
        .join(project)
        .join("builds")
        .join(format!("{number}.json"));
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// `team/upstream` with a named successful build and an unnamed failed one,
/// plus a target build in `team/app`
fn seeded_store() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_build(
        &tmp,
        "team/upstream",
        json!({
            "number": 8,
            "display_name": "nightly",
            "result": "SUCCESS",
            "timestamp": "2024-05-01T10:00:00Z",
            "environment": { "VERSION": "1.2.3", "CHANNEL": "beta" }
        }),
    );
    write_build(
        &tmp,
        "team/upstream",
        json!({
            "number": 7,
            "result": "FAILURE",
            "timestamp": "2024-04-30T09:00:00Z",
            "environment": { "VERSION": "1.2.2" }
        }),
    );
    write_build(
        &tmp,
        "team/app",
        json!({
            "number": 3,
            "timestamp": "2024-05-02T08:00:00Z",
            "environment": { "WHICH": "nightly" }
        }),
    );
    tmp
}

#[test]
fn help_lists_commands() {
    cargo_bin_cmd!("buildvars")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("builds"))
        .stdout(predicate::str::contains("check-template"));
}

#[test]
fn check_template_accepts_single_placeholder() {
    cargo_bin_cmd!("buildvars")
        .args(["check-template", "UPSTREAM_%s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Template is valid"));
}

#[test]
fn check_template_rejects_missing_placeholder() {
    cargo_bin_cmd!("buildvars")
        .args(["check-template", "UPSTREAM"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must contain one instance of '%s'"));
}

#[test]
fn results_lists_every_result() {
    cargo_bin_cmd!("buildvars")
        .arg("results")
        .assert()
        .success()
        .stdout("SUCCESS\nFAILURE\nUNSTABLE\nABORTED\nNOT_BUILT\n");
}

#[test]
fn init_writes_config_once() {
    let tmp = TempDir::new().unwrap();
    buildvars_cmd(&tmp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));

    let config: Value =
        serde_json::from_str(&fs::read_to_string(tmp.path().join(".buildvars.json")).unwrap())
            .unwrap();
    assert_eq!(config["var_name_template"], "OTHER_BUILD_%s");
    assert!(tmp.path().join("builds").is_dir());

    buildvars_cmd(&tmp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config already exists"));
}

#[test]
fn projects_lists_full_names() {
    let tmp = seeded_store();
    buildvars_cmd(&tmp)
        .arg("projects")
        .assert()
        .success()
        .stdout("team/app\nteam/upstream\n");
}

#[test]
fn builds_filters_by_result() {
    let tmp = seeded_store();
    buildvars_cmd(&tmp)
        .args(["builds", "--project", "team/upstream", "--result", "success"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "8  nightly - SUCCESS (2024-05-01 10:00:00 UTC)",
        ))
        .stdout(predicate::str::contains("FAILURE").not());
}

#[test]
fn builds_of_unknown_project_is_empty() {
    let tmp = seeded_store();
    buildvars_cmd(&tmp)
        .args(["builds", "--project", "team/missing"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No builds found for team/missing"));
}

#[test]
fn import_copies_variables_by_name() {
    let tmp = seeded_store();
    buildvars_cmd(&tmp)
        .args([
            "import", "--project", "team/upstream", "--build", "nightly", "--into", "team/app#3",
            "--copy",
        ])
        .assert()
        .success()
        .stdout("CHANNEL=beta\nVERSION=1.2.3\nWHICH=nightly\n")
        .stderr(predicate::str::contains(
            "Imported 2 variables from build nightly of project team/upstream",
        ));

    // Nothing is written without --save
    let target = read_build(&tmp, "team/app", 3);
    assert!(target["environment"].get("VERSION").is_none());
}

#[test]
fn import_with_template_saves_renamed_variables() {
    let tmp = seeded_store();
    buildvars_cmd(&tmp)
        .args([
            "import", "--project", "team/upstream", "--build", "${WHICH}", "--into",
            "team/app#3", "--template", "UP_%s", "--save", "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"net_variables_imported\": 0"));

    let target = read_build(&tmp, "team/app", 3);
    assert_eq!(target["environment"]["UP_VERSION"], "1.2.3");
    assert_eq!(target["environment"]["UP_CHANNEL"], "beta");
    assert_eq!(target["environment"]["WHICH"], "nightly");
}

#[test]
fn import_falls_back_to_build_number() {
    let tmp = seeded_store();
    buildvars_cmd(&tmp)
        .args([
            "import", "--project", "team/upstream", "--build", "7", "--into", "team/app#3",
            "--copy",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("VERSION=1.2.2"));
}

#[test]
fn import_from_unknown_project_marks_target_failed() {
    let tmp = seeded_store();
    buildvars_cmd(&tmp)
        .args([
            "import", "--project", "team/missing", "--build", "1", "--into", "team/app#3",
            "--save",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Could not find project with name: team/missing",
        ));

    let target = read_build(&tmp, "team/app", 3);
    assert_eq!(target["result"], "FAILURE");
}

#[test]
fn import_rejects_malformed_target() {
    let tmp = seeded_store();
    buildvars_cmd(&tmp)
        .args(["import", "--project", "team/upstream", "--build", "8", "--into", "team/app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PROJECT#NUMBER"));
}

#[test]
fn step_reports_and_saves_import() {
    let tmp = seeded_store();
    buildvars_cmd(&tmp)
        .args([
            "step", "--project", "team/upstream", "--build", "nightly", "--into", "team/app#3",
        ])
        .assert()
        .success()
        .stdout("Imported 2 variables from build nightly of project team/upstream\n");

    let target = read_build(&tmp, "team/app", 3);
    assert_eq!(target["environment"]["VERSION"], "1.2.3");
    assert!(target.get("result").is_none());
}

#[test]
fn step_failure_is_logged_and_recorded() {
    let tmp = seeded_store();
    buildvars_cmd(&tmp)
        .args([
            "step", "--project", "team/upstream", "--build", "99", "--into", "team/app#3",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Failed to import variables: Could not find a build with id 99 in project upstream",
        ));

    let target = read_build(&tmp, "team/app", 3);
    assert_eq!(target["result"], "FAILURE");
}

#[test]
fn store_commands_need_a_store() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("buildvars");
    cmd.current_dir(tmp.path())
        .env_remove("BUILDVARS_STORE")
        .arg("projects")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No build store configured"));
}

#[test]
fn config_file_supplies_store_and_template() {
    let tmp = seeded_store();
    fs::write(
        tmp.path().join(".buildvars.json"),
        r#"{ "store_root": "store", "var_name_template": "CFG_%s" }"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("buildvars");
    cmd.current_dir(tmp.path())
        .env_remove("BUILDVARS_STORE")
        .args([
            "import", "--project", "team/upstream", "--build", "8", "--into", "team/app#3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("CFG_VERSION=1.2.3"));

    assert!(tmp.path().join("store").is_dir());
}
