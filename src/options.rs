use crate::admission::{AdmissionSource, AllowedIps};
use crate::constants::{DEFAULT_USER_AGENT, backend};
use crate::header_policy::{CleanupScope, HeaderCleanup};
use crate::origin::{BackendTemplate, OriginProtocol};
use crate::region::AllowedRegions;
use crate::util::is_http_token;
use serde::{Deserialize, Serialize};
use std::net::AddrParseError;
use thiserror::Error;

/// Policy data for [`crate::EdgeRewriter`]. Deserializes from the camelCase
/// keys used in deployment configuration; omitted keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RewriterOptions {
    pub allowed_ips: AllowedIps,
    pub admission_source: AdmissionSource,
    /// Refuse requests without a client address while `allowed_ips` is
    /// enabled. Off by default: such requests are admitted.
    pub require_client_address: bool,
    pub valid_regions: AllowedRegions,
    pub header_cleanup: HeaderCleanup,
    pub cleanup_scope: CleanupScope,
    pub user_agent: Option<String>,
    pub backend: BackendTemplate,
}

impl Default for RewriterOptions {
    fn default() -> Self {
        Self {
            allowed_ips: AllowedIps::default(),
            admission_source: AdmissionSource::default(),
            require_client_address: false,
            valid_regions: AllowedRegions::default(),
            header_cleanup: HeaderCleanup::default(),
            cleanup_scope: CleanupScope::default(),
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            backend: BackendTemplate::default(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("validRegions must list at least one region")]
    EmptyRegionList,
    #[error("'{0}' is not a region code")]
    InvalidRegion(String),
    #[error("allowedIps entry '{literal}' is not an IP address: {source}")]
    InvalidIpLiteral {
        literal: String,
        #[source]
        source: AddrParseError,
    },
    #[error("'{0}' is not a valid header name")]
    InvalidHeaderName(String),
    #[error("retain header cleanup must list at least one header")]
    EmptyRetainList,
    #[error("userAgent must not be empty")]
    EmptyUserAgent,
    #[error("backend hostTemplate '{0}' does not contain the {{region}} placeholder")]
    HostTemplateMissingRegion(String),
    #[error("backend port must be non-zero")]
    InvalidPort,
    #[error("backend {name} of {value}s is outside {min}..={max}s")]
    TimeoutOutOfRange {
        name: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("backend sslProtocols must not be empty for https")]
    MissingSslProtocols,
}

impl RewriterOptions {
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.valid_regions.is_empty() {
            return Err(ValidationError::EmptyRegionList);
        }
        if let Some(region) = self.valid_regions.iter().find(|r| !r.is_well_formed()) {
            return Err(ValidationError::InvalidRegion(region.to_string()));
        }

        self.allowed_ips
            .parse()
            .map_err(|(literal, source)| ValidationError::InvalidIpLiteral { literal, source })?;

        if let Some(name) = self
            .header_cleanup
            .names()
            .iter()
            .find(|name| !is_http_token(name))
        {
            return Err(ValidationError::InvalidHeaderName(name.clone()));
        }
        if matches!(&self.header_cleanup, HeaderCleanup::Retain(names) if names.is_empty()) {
            return Err(ValidationError::EmptyRetainList);
        }

        if matches!(self.user_agent.as_deref(), Some(value) if value.trim().is_empty()) {
            return Err(ValidationError::EmptyUserAgent);
        }

        self.validate_backend()
    }

    fn validate_backend(&self) -> Result<(), ValidationError> {
        let template = &self.backend;
        if !template.host_template.contains(backend::REGION_PLACEHOLDER) {
            return Err(ValidationError::HostTemplateMissingRegion(
                template.host_template.clone(),
            ));
        }
        if template.port == 0 {
            return Err(ValidationError::InvalidPort);
        }

        for (name, value) in [
            ("readTimeout", template.read_timeout),
            ("keepaliveTimeout", template.keepalive_timeout),
        ] {
            if !(backend::MIN_TIMEOUT_SECS..=backend::MAX_TIMEOUT_SECS).contains(&value) {
                return Err(ValidationError::TimeoutOutOfRange {
                    name,
                    value,
                    min: backend::MIN_TIMEOUT_SECS,
                    max: backend::MAX_TIMEOUT_SECS,
                });
            }
        }

        if template.protocol == OriginProtocol::Https && template.ssl_protocols.is_empty() {
            return Err(ValidationError::MissingSslProtocols);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
