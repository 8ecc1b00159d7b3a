//! AWS session loading

use aws_config::{BehaviorVersion, Region, SdkConfig};
use tracing::debug;

use crate::config::AwsConfig;
use crate::error::DeployError;

/// Build an SDK config from the default provider chain.
///
/// `region` and `profile` from config override the chain when set. A session
/// without a region is rejected up front rather than on the first API call.
pub async fn load(config: &AwsConfig) -> Result<SdkConfig, DeployError> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(profile) = &config.profile {
        loader = loader.profile_name(profile);
    }

    let sdk_config = loader.load().await;

    let Some(region) = sdk_config.region() else {
        return Err(DeployError::Session {
            message: "no AWS region configured (set --region, OAM_ECS_REGION or AWS_REGION)"
                .to_string(),
        });
    };
    debug!(region = %region, profile = ?config.profile, "loaded AWS session");

    Ok(sdk_config)
}
