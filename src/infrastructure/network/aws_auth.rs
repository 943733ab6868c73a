//! AWS session resolution and Signature Version 4 request signing.
//!
//! Region and credentials come from the SDK's default provider chains
//! (environment, shared config and credentials files, SSO, web identity,
//! container and instance metadata), with the `[amazon]` settings applied on top.

use crate::domain::error::{Result, TranslateError};
use crate::infrastructure::config::AmazonConfig;
use aws_config::{BehaviorVersion, ConfigLoader, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sigv4::http_request::{sign, SignableBody, SignableRequest, SigningParams, SigningSettings};
use aws_sigv4::sign::v4;
use aws_smithy_runtime_api::client::identity::Identity;
use std::fmt::Display;
use std::time::SystemTime;

pub use aws_credential_types::Credentials;

/// Region plus credentials, the equivalent of an SDK session
#[derive(Debug, Clone)]
pub struct AwsSession {
    pub region: String,
    pub credentials: Credentials,
}

impl AwsSession {
    pub fn new(region: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            region: region.into(),
            credentials,
        }
    }

    /// Resolve a session through the SDK's default chains
    pub fn resolve(config: &AmazonConfig) -> Result<Self> {
        Self::resolve_with(config, aws_config::defaults(BehaviorVersion::latest()))
    }

    /// Resolve a session from `loader`, with `region` and `profile` overriding it
    pub fn resolve_with(config: &AmazonConfig, mut loader: ConfigLoader) -> Result<Self> {
        if let Some(region) = config.region.clone().filter(|r| !r.is_empty()) {
            loader = loader.region(Region::new(region));
        }
        if let Some(profile) = config.profile.as_deref().filter(|p| !p.is_empty()) {
            loader = loader.profile_name(profile);
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(async {
            let sdk_config = loader.load().await;
            Self::from_sdk_config(&sdk_config).await
        })
    }

    /// Probe the region and the credentials provider of a loaded SDK config
    pub async fn from_sdk_config(sdk_config: &SdkConfig) -> Result<Self> {
        let region = sdk_config
            .region()
            .map(|region| region.to_string())
            .ok_or_else(|| session_error("no region configured"))?;
        let provider = sdk_config
            .credentials_provider()
            .ok_or_else(|| session_error("no credentials provider configured"))?;
        let credentials = provider
            .provide_credentials()
            .await
            .map_err(session_error)?;

        tracing::debug!(region = %region, "resolved AWS session");
        Ok(Self::new(region, credentials))
    }
}

fn session_error(reason: impl Display) -> TranslateError {
    TranslateError::Dependency(format!(
        "`AmazonTranslateService` could not acquire an AWS session: {}",
        reason
    ))
}

/// One HTTP call to be signed
pub struct SignableCall<'a> {
    pub method: &'a str,
    pub url: &'a str,
    pub headers: &'a [(&'a str, &'a str)],
    pub payload: &'a [u8],
    pub time: SystemTime,
}

/// Headers to attach to the call: `x-amz-date`, `authorization` and, for
/// temporary credentials, `x-amz-security-token`
///
/// The canonical URI and host are taken from `call.url`.
pub fn sign_request(
    session: &AwsSession,
    service: &str,
    call: &SignableCall<'_>,
) -> Result<Vec<(String, String)>> {
    let identity: Identity = session.credentials.clone().into();
    let params: SigningParams<'_> = v4::SigningParams::builder()
        .identity(&identity)
        .region(&session.region)
        .name(service)
        .time(call.time)
        .settings(SigningSettings::default())
        .build()
        .map_err(signing_error)?
        .into();

    let signable = SignableRequest::new(
        call.method,
        call.url,
        call.headers.iter().copied(),
        SignableBody::Bytes(call.payload),
    )
    .map_err(signing_error)?;
    let (instructions, _signature) = sign(signable, &params)
        .map_err(signing_error)?
        .into_parts();

    Ok(instructions
        .headers()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect())
}

fn signing_error(err: impl Display) -> TranslateError {
    TranslateError::Api(format!("Failed to sign AWS request: {}", err))
}
