//! File rule table for the `aws` module type.

use super::{FileRule, RuleTable};

/// Optional features of the AWS provider module.
///
/// Each variant maps to exactly one feature flag and one generated config
/// file. Adding a variant forces both `match`es below to be extended, which
/// is the point: the flag vocabulary cannot drift out of sync with the rule
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwsFeature {
    /// S3 object storage.
    S3,
    /// RDS managed database.
    Rds,
    /// Elastic Beanstalk application hosting.
    ElasticBeanstalk,
    /// CloudFront CDN distribution.
    CloudFront,
}

impl AwsFeature {
    /// All features, in rule declaration order.
    pub const ALL: [Self; 4] = [Self::S3, Self::Rds, Self::ElasticBeanstalk, Self::CloudFront];

    /// Feature flag key in the module's field values.
    #[must_use]
    pub const fn flag_key(self) -> &'static str {
        match self {
            Self::S3 => "enableS3",
            Self::Rds => "enableRDS",
            Self::ElasticBeanstalk => "enableElasticBeanstalk",
            Self::CloudFront => "enableCloudFront",
        }
    }

    /// Output path template for the feature's generated config file.
    #[must_use]
    pub const fn path_template(self) -> &'static str {
        match self {
            Self::S3 => "{layer}/{type}/s3-config.yaml",
            Self::Rds => "{layer}/{type}/rds-config.yaml",
            Self::ElasticBeanstalk => "{layer}/{type}/elasticbeanstalk-config.yaml",
            Self::CloudFront => "{layer}/{type}/cloudfront-config.yaml",
        }
    }
}

/// Build the `aws` rule table.
pub(super) fn table() -> RuleTable {
    RuleTable {
        module_type: "aws",
        rules: AwsFeature::ALL
            .iter()
            .map(|feature| FileRule {
                flag: Some(feature.flag_key()),
                path_template: feature.path_template(),
            })
            .collect(),
    }
}
