//! Common test utilities and fixtures for genverify integration tests
//!
//! Consolidates the suite/template fixture patterns shared by the unit and
//! integration suites.

// Allow dead code because these utilities are shared across test targets
// and not every target uses every helper
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch project directory holding a suite file and a template tree.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Create an empty project with a `templates/` directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("templates")).expect("failed to create templates dir");
        Self {
            dir,
        }
    }

    /// Project root path.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path to the templates root.
    pub fn templates_path(&self) -> PathBuf {
        self.dir.path().join("templates")
    }

    /// Path to the suite file.
    pub fn suite_path(&self) -> PathBuf {
        self.dir.path().join("genverify.toml")
    }

    /// Write the suite file.
    pub fn write_suite(&self, content: &str) {
        std::fs::write(self.suite_path(), content).expect("failed to write suite file");
    }

    /// Write a template under the templates root, creating parent dirs.
    pub fn write_template(&self, relative: &str, content: &str) {
        let path = self.templates_path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create template parent dir");
        }
        std::fs::write(path, content).expect("failed to write template");
    }
}

/// The AWS provider suite mirrored from the generator's own fixtures:
/// three scenarios plus the load balancer and compute security policies.
pub const AWS_SUITE: &str = r#"
module-id = "provider-aws"
module-name = "AWS Infrastructure"

[[scenarios]]
name = "aws-basic"
description = "Basic AWS infrastructure with S3 and RDS"
expected-files = ["ops/aws/s3-config.yaml", "ops/aws/rds-config.yaml"]

[scenarios.config]
module-id = "aws-infra"
kind = "extension"
type = "aws"
layers = ["ops"]
enabled = true

[scenarios.config.field-values]
awsRegion = "us-east-1"
enableS3 = true
enableRDS = true
enableElasticBeanstalk = false

[[scenarios]]
name = "aws-full-stack"
description = "Full AWS stack with S3, RDS, and Elastic Beanstalk"
expected-files = [
    "ops/aws/s3-config.yaml",
    "ops/aws/rds-config.yaml",
    "ops/aws/elasticbeanstalk-config.yaml",
]

[scenarios.config]
module-id = "aws-full"
kind = "extension"
type = "aws"
layers = ["ops"]
enabled = true

[scenarios.config.field-values]
awsRegion = "us-west-2"
enableS3 = true
enableRDS = true
enableElasticBeanstalk = true
enableCloudFront = true

[[scenarios]]
name = "aws-s3-only"
description = "AWS with S3 storage only"
expected-files = ["ops/aws/s3-config.yaml"]
forbidden-files = ["ops/aws/rds-config.yaml", "ops/aws/elasticbeanstalk-config.yaml"]

[scenarios.config]
module-id = "aws-storage"
kind = "extension"
type = "aws"
layers = ["ops"]
enabled = true

[scenarios.config.field-values]
awsRegion = "eu-west-1"
enableS3 = true
enableRDS = false
enableElasticBeanstalk = false

[[template-validations]]
name = "asg-health-check-elb"
description = "ASG must use ELB health checks for proper instance health detection"
template = "provider-aws/terraform/compute.tf"
contains = [
    'health_check_type         = "ELB"',
    'health_check_grace_period = 300',
]
not-contains = [
    'health_check_type         = "EC2"',
    'health_check_grace_period = 2592000',
]

[[template-validations]]
name = "tls-1-3-policy"
description = "ALB HTTPS listener must use TLS 1.3 policy for modern security"
template = "provider-aws/terraform/load_balancer.tf"
contains = ['ssl_policy        = "ELBSecurityPolicy-TLS13-1-2-2021-06"']
not-contains = [
    'ssl_policy        = "ELBSecurityPolicy-TLS-1-2-2017-01"',
    'ssl_policy        = "ELBSecurityPolicy-2016-08"',
]

[[template-validations]]
name = "alb-access-logging"
description = "ALB must have access logging enabled with S3 lifecycle"
template = "provider-aws/terraform/load_balancer.tf"
contains = [
    "access_logs {",
    "enabled = true",
    "expiration {",
    'var.environment == "production" ? 90 : 30',
]

[[template-validations]]
name = "alb-sticky-sessions"
description = "ALB target group must have sticky sessions configured"
template = "provider-aws/terraform/load_balancer.tf"
contains = [
    "stickiness {",
    'type            = "lb_cookie"',
    "cookie_duration = 86400",
    "enabled         = true",
]

[[template-validations]]
name = "asg-instance-refresh"
description = "ASG must have rolling instance refresh for zero-downtime deployments"
template = "provider-aws/terraform/compute.tf"
contains = [
    "instance_refresh {",
    'strategy = "Rolling"',
    "min_healthy_percentage = 50",
    "instance_warmup        = 300",
]
"#;

/// Compute template satisfying the ASG health check and instance refresh
/// policies.
pub const COMPUTE_TEMPLATE: &str = r#"resource "aws_autoscaling_group" "app" {
  name                      = "{{ module_id }}-asg"
  health_check_type         = "ELB"
  health_check_grace_period = 300

  instance_refresh {
    strategy = "Rolling"
    preferences {
      min_healthy_percentage = 50
      instance_warmup        = 300
    }
  }
}
"#;

/// Load balancer template satisfying the TLS, access logging, and sticky
/// session policies.
pub const LOAD_BALANCER_TEMPLATE: &str = r#"resource "aws_lb" "app" {
  name = "{{ module_id }}-alb"

  access_logs {
    bucket  = "{{ module_id }}-alb-logs"
    enabled = true
  }
}

resource "aws_s3_bucket_lifecycle_configuration" "alb_logs" {
  rule {
    id     = "expire-logs"
    status = "Enabled"
    expiration {
      days = var.environment == "production" ? 90 : 30
    }
  }
}

resource "aws_lb_listener" "https" {
  protocol          = "HTTPS"
  ssl_policy        = "ELBSecurityPolicy-TLS13-1-2-2021-06"
}

resource "aws_lb_target_group" "app" {
  stickiness {
    type            = "lb_cookie"
    cookie_duration = 86400
    enabled         = true
  }
}
"#;

impl TestProject {
    /// Create a project pre-populated with the AWS suite and templates that
    /// satisfy every policy.
    pub fn with_aws_fixture() -> Self {
        let project = Self::new();
        project.write_suite(AWS_SUITE);
        project.write_template("provider-aws/terraform/compute.tf", COMPUTE_TEMPLATE);
        project.write_template("provider-aws/terraform/load_balancer.tf", LOAD_BALANCER_TEMPLATE);
        project
    }
}
