//! Integration tests for the `run` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{AWS_SUITE, TestProject};

fn genverify() -> Command {
    Command::cargo_bin("genverify").expect("binary exists")
}

#[test]
fn test_run_passing_suite() {
    let project = TestProject::with_aws_fixture();

    genverify()
        .current_dir(project.path())
        .args(["run", "--templates", "templates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS"))
        .stdout(predicate::str::contains("3/3 scenarios passed"))
        .stdout(predicate::str::contains("5/5 template policies passed"));
}

#[test]
fn test_run_explicit_suite_path() {
    let project = TestProject::with_aws_fixture();
    std::fs::rename(project.suite_path(), project.path().join("aws.toml")).unwrap();

    genverify()
        .current_dir(project.path())
        .args(["run", "aws.toml", "--templates", "templates"])
        .assert()
        .success();
}

#[test]
fn test_run_fails_on_forbidden_fragment() {
    let project = TestProject::with_aws_fixture();
    project.write_template(
        "provider-aws/terraform/load_balancer.tf",
        concat!(
            "ssl_policy        = \"ELBSecurityPolicy-TLS13-1-2-2021-06\"\n",
            "ssl_policy        = \"ELBSecurityPolicy-TLS-1-2-2017-01\"\n",
            "access_logs {\n  enabled = true\n}\nexpiration {\n",
            "var.environment == \"production\" ? 90 : 30\n",
            "stickiness {\n  type            = \"lb_cookie\"\n",
            "  cookie_duration = 86400\n  enabled         = true\n}\n",
        ),
    );

    genverify()
        .current_dir(project.path())
        .args(["run", "--templates", "templates"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("tls-1-3-policy"))
        .stdout(predicate::str::contains("forbidden fragment present"))
        .stderr(predicate::str::contains("verification failed"));
}

#[test]
fn test_run_scenario_failure_exit_code() {
    let project = TestProject::with_aws_fixture();
    // Break the aws-basic scenario: expect a file its flags do not produce.
    let broken = AWS_SUITE.replace(
        "expected-files = [\"ops/aws/s3-config.yaml\", \"ops/aws/rds-config.yaml\"]",
        "expected-files = [\"ops/aws/s3-config.yaml\", \"ops/aws/cloudfront-config.yaml\"]",
    );
    project.write_suite(&broken);

    genverify()
        .current_dir(project.path())
        .args(["run", "--templates", "templates"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("missing expected file: ops/aws/cloudfront-config.yaml"))
        .stdout(predicate::str::contains("FAIL"));
}

#[test]
fn test_run_json_format() {
    let project = TestProject::with_aws_fixture();

    let output = genverify()
        .current_dir(project.path())
        .args(["run", "--templates", "templates", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], true);
    assert_eq!(json["module-id"], "provider-aws");
    assert_eq!(json["scenarios"].as_array().unwrap().len(), 3);
    assert_eq!(json["content"].as_array().unwrap().len(), 5);
}

#[test]
fn test_run_json_format_reports_failure_detail() {
    let project = TestProject::with_aws_fixture();
    std::fs::remove_file(
        project.templates_path().join("provider-aws/terraform/compute.tf"),
    )
    .unwrap();

    let output = genverify()
        .current_dir(project.path())
        .args(["run", "--templates", "templates", "--format", "json"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], false);
    assert_eq!(json["scenarios-passed"], true);
    assert_eq!(json["content-passed"], false);

    let health = json["content"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["rule-name"] == "asg-health-check-elb")
        .unwrap();
    assert_eq!(health["status"], "error");
}

#[test]
fn test_run_missing_suite_file() {
    let project = TestProject::new();

    genverify()
        .current_dir(project.path())
        .args(["run", "--templates", "templates"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Suite file not found"))
        .stderr(predicate::str::contains("Suggestion:"));
}

#[test]
fn test_run_strict_fails_on_vacuous_rule() {
    let project = TestProject::with_aws_fixture();
    let mut suite = String::from(AWS_SUITE);
    suite.push_str(
        "\n[[template-validations]]\nname = \"vacuous\"\ntemplate = \"provider-aws/terraform/compute.tf\"\n",
    );
    project.write_suite(&suite);

    // Without --strict the vacuous rule passes and only warns.
    genverify()
        .current_dir(project.path())
        .args(["run", "--templates", "templates"])
        .assert()
        .success();

    genverify()
        .current_dir(project.path())
        .args(["run", "--templates", "templates", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("strict mode"));
}
